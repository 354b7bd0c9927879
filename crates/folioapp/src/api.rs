//! # Session Facade
//!
//! [`Session`] is the single entry point a UI client drives. It borrows an
//! immutable [`Catalog`] and owns the only mutable state in the system:
//!
//! - the active [`Filter`] (default: all)
//! - the [`Selection`] (default: closed)
//! - the active [`Locale`] and the translated [`LinkLabels`] that go with it
//!
//! Each of those has exactly one writer: [`Session::set_filter`],
//! [`Session::select`] / [`Session::close`], and [`Session::set_locale`].
//!
//! ## Change Notification
//!
//! Clients register listeners with [`Session::subscribe`]. After every state
//! change the session builds a complete [`ViewSnapshot`] (list and detail,
//! both under the current locale) and only then hands it to each listener.
//! A listener therefore never sees a list in one language and a detail view
//! in another, or a filter change that is half applied.
//!
//! ## Unknown Ids
//!
//! [`Session::select`] checks the id against the catalog and returns
//! [`FolioError::EntryNotFound`] without touching the selection. The raw
//! [`SelectionController`] stays permissive; the catalog projects a dangling
//! selection as "no detail".
//!
//! ## Translations
//!
//! The session never looks up UI strings. Whoever calls
//! [`Session::set_locale`] passes the labels already translated for the new
//! locale.

use crate::catalog::Catalog;
use crate::error::{FolioError, Result};
use crate::filter::Filter;
use crate::model::Locale;
use crate::selection::{Selection, SelectionController, Transition};
use crate::view::{LinkLabels, ViewSnapshot};
use tracing::debug;

/// Handle returned by [`Session::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener<'c> = Box<dyn FnMut(&ViewSnapshot) + 'c>;

pub struct Session<'c> {
    catalog: &'c Catalog,
    filter: Filter,
    selection: SelectionController,
    locale: Locale,
    labels: LinkLabels,
    listeners: Vec<(SubscriptionId, Listener<'c>)>,
    next_subscription: u64,
}

impl<'c> Session<'c> {
    pub fn new(catalog: &'c Catalog, locale: Locale, labels: LinkLabels) -> Self {
        Self {
            catalog,
            filter: Filter::All,
            selection: SelectionController::new(),
            locale,
            labels,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    pub fn selection(&self) -> &Selection {
        self.selection.state()
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    pub fn labels(&self) -> &LinkLabels {
        &self.labels
    }

    /// Builds the current view.
    pub fn snapshot(&self) -> Result<ViewSnapshot> {
        let items = self.catalog.list_items(&self.filter, &self.locale)?;
        let detail = self
            .catalog
            .detail(self.selection.state(), &self.locale, &self.labels)?;
        Ok(ViewSnapshot {
            locale: self.locale.clone(),
            filter: self.filter.clone(),
            has_results: !items.is_empty(),
            items,
            detail,
        })
    }

    pub fn set_filter(&mut self, filter: Filter) -> Result<()> {
        debug!(%filter, "filter changed");
        self.filter = filter;
        self.publish()
    }

    /// Opens `id` in the detail view. Fails if the catalog has no such entry.
    pub fn select(&mut self, id: &str) -> Result<Transition> {
        if !self.catalog.contains(id) {
            debug!(id, "select ignored: no such entry");
            return Err(FolioError::EntryNotFound(id.to_string()));
        }
        let transition = self.selection.select(id);
        self.publish()?;
        Ok(transition)
    }

    pub fn close(&mut self) -> Result<Transition> {
        let transition = self.selection.close();
        if transition != Transition::Unchanged {
            self.publish()?;
        }
        Ok(transition)
    }

    /// Switches the active locale. `labels` must already be translated for it.
    pub fn set_locale(&mut self, locale: Locale, labels: LinkLabels) -> Result<()> {
        debug!(from = %self.locale, to = %locale, "locale changed");
        self.locale = locale;
        self.labels = labels;
        self.publish()
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&ViewSnapshot) + 'c) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    fn publish(&mut self) -> Result<()> {
        if self.listeners.is_empty() {
            return Ok(());
        }
        let snapshot = self.snapshot()?;
        for (_, listener) in &mut self.listeners {
            listener(&snapshot);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recorder<'c>(session: &mut Session<'c>) -> Rc<RefCell<Vec<ViewSnapshot>>> {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        session.subscribe(move |snapshot| sink.borrow_mut().push(snapshot.clone()));
        seen
    }

    fn item_ids(snapshot: &ViewSnapshot) -> Vec<&str> {
        snapshot.items.iter().map(|i| i.id.as_str()).collect()
    }

    #[test]
    fn test_initial_snapshot() {
        let catalog = Catalog::sample().unwrap();
        let session = Session::new(&catalog, Locale::en(), LinkLabels::default());
        let snapshot = session.snapshot().unwrap();
        assert_eq!(snapshot.filter, Filter::All);
        assert_eq!(snapshot.items.len(), 4);
        assert!(snapshot.has_results);
        assert!(snapshot.detail.is_none());
    }

    #[test]
    fn test_filter_change_publishes_once() {
        let catalog = Catalog::sample().unwrap();
        let mut session = Session::new(&catalog, Locale::en(), LinkLabels::default());
        let seen = recorder(&mut session);

        session.set_filter(Filter::tag("open-source")).unwrap();

        let seen = seen.borrow();
        assert_eq!(seen.len(), 1);
        assert_eq!(item_ids(&seen[0]), vec!["ink-ui", "portfolio-generator"]);
    }

    #[test]
    fn test_empty_filter_result_is_not_an_error() {
        let catalog = Catalog::sample().unwrap();
        let mut session = Session::new(&catalog, Locale::en(), LinkLabels::default());
        session.set_filter(Filter::tag("nonexistent-tag")).unwrap();
        let snapshot = session.snapshot().unwrap();
        assert!(snapshot.items.is_empty());
        assert!(!snapshot.has_results);
    }

    #[test]
    fn test_select_then_close() {
        let catalog = Catalog::sample().unwrap();
        let mut session = Session::new(&catalog, Locale::en(), LinkLabels::default());

        assert_eq!(session.select("ink-ui").unwrap(), Transition::Opened);
        assert_eq!(session.select("task-tracker").unwrap(), Transition::Switched);
        assert_eq!(session.selection(), &Selection::Open("task-tracker".into()));
        assert_eq!(
            session.snapshot().unwrap().detail.unwrap().title,
            "Task Tracker App"
        );

        assert_eq!(session.close().unwrap(), Transition::Closed);
        assert_eq!(session.selection(), &Selection::Closed);
        assert!(session.snapshot().unwrap().detail.is_none());
    }

    #[test]
    fn test_select_unknown_id_leaves_state_alone() {
        let catalog = Catalog::sample().unwrap();
        let mut session = Session::new(&catalog, Locale::en(), LinkLabels::default());
        let seen = recorder(&mut session);
        session.select("ink-ui").unwrap();

        let err = session.select("ghost").unwrap_err();

        assert!(matches!(err, FolioError::EntryNotFound(ref id) if id == "ghost"));
        assert_eq!(session.selection(), &Selection::Open("ink-ui".into()));
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn test_reselect_is_reported() {
        let catalog = Catalog::sample().unwrap();
        let mut session = Session::new(&catalog, Locale::en(), LinkLabels::default());
        session.select("ink-ui").unwrap();
        assert_eq!(session.select("ink-ui").unwrap(), Transition::Reselected);
    }

    #[test]
    fn test_close_when_closed_is_silent() {
        let catalog = Catalog::sample().unwrap();
        let mut session = Session::new(&catalog, Locale::en(), LinkLabels::default());
        let seen = recorder(&mut session);
        assert_eq!(session.close().unwrap(), Transition::Unchanged);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_locale_change_updates_list_and_detail_together() {
        let catalog = Catalog::sample().unwrap();
        let mut session = Session::new(&catalog, Locale::en(), LinkLabels::default());
        session.select("task-tracker").unwrap();
        let seen = recorder(&mut session);

        session
            .set_locale(Locale::jp(), LinkLabels::new("ライブデモ", "ソースコード"))
            .unwrap();

        let seen = seen.borrow();
        assert_eq!(seen.len(), 1);
        let snapshot = &seen[0];
        assert_eq!(snapshot.locale, Locale::jp());
        assert_eq!(snapshot.items[0].title, "インク UI — コンポーネントライブラリ");
        let detail = snapshot.detail.as_ref().unwrap();
        assert_eq!(detail.title, "タスクトラッカーアプリ");
        assert_eq!(detail.live_links[0].label, "ライブデモ");
        assert_eq!(detail.source_links[0].label, "ソースコード");
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let catalog = Catalog::sample().unwrap();
        let mut session = Session::new(&catalog, Locale::en(), LinkLabels::default());
        let seen = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&seen);
        let id = session.subscribe(move |_| *sink.borrow_mut() += 1);

        session.set_filter(Filter::tag("web")).unwrap();
        assert!(session.unsubscribe(id));
        assert!(!session.unsubscribe(id));
        session.set_filter(Filter::All).unwrap();

        assert_eq!(*seen.borrow(), 1);
    }

    #[test]
    fn test_every_listener_gets_the_same_snapshot() {
        let catalog = Catalog::sample().unwrap();
        let mut session = Session::new(&catalog, Locale::en(), LinkLabels::default());
        let first = recorder(&mut session);
        let second = recorder(&mut session);

        session.set_filter(Filter::tag("ui")).unwrap();

        assert_eq!(*first.borrow(), *second.borrow());
    }
}
