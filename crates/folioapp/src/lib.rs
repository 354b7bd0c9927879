//! # Folio Architecture
//!
//! Folio is a **UI-agnostic catalog library** for a bilingual portfolio of
//! creative work. It answers four questions for whatever UI sits on top:
//! which entries are visible under a tag filter, which entry is open, what its
//! text says in the active language, and where its links point.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  UI client (the `folio` CLI, or anything else)              │
//! │  - Translates UI strings, renders, handles input            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Session (api.rs)                                           │
//! │  - Filter, selection and locale state                       │
//! │  - Publishes whole ViewSnapshots to subscribers             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Catalog (catalog.rs)                                       │
//! │  - Immutable, validated entry list                          │
//! │  - List and detail projections                              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  filter.rs · selection.rs · locale.rs · links.rs            │
//! │  - Pure functions and plain values                          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! Apart from reading a catalog file in [`catalog::Catalog::load`] and a
//! config file in [`config::FolioConfig::load`], the library:
//! - Takes regular Rust values and returns regular Rust types
//! - **Never** writes to stdout/stderr
//! - **Never** looks up translated UI strings; callers pass them in
//!
//! ## Module Overview
//!
//! - [`api`]: The session facade, entry point for UI clients
//! - [`catalog`]: Loading, validation and projections
//! - [`filter`]: Tag filter and filter tabs
//! - [`selection`]: Detail-view state machine
//! - [`locale`]: Locale resolution with fallback
//! - [`links`]: Link normalization
//! - [`model`]: Core data types (`Entry`, `LocalizedText`, `LinkSource`)
//! - [`view`]: Projections handed to UIs
//! - [`tags`]: Tag naming rules
//! - [`config`]: Configuration
//! - [`error`]: Error types

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod filter;
pub mod links;
pub mod locale;
pub mod model;
pub mod selection;
pub mod tags;
pub mod view;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
