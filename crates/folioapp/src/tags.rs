//! Tag name rules for catalog entries.
//!
//! Tags are free-form strings matched by exact membership, so `3d`, `UI/UX`
//! and `machine learning` are all fine. Two names are refused:
//! - the empty string, which no filter can select
//! - `all`, which names the show-everything filter

use crate::filter::ALL;
use thiserror::Error;

/// Validates a tag name.
///
/// # Examples
/// ```
/// use folioapp::tags::validate_tag_name;
///
/// assert!(validate_tag_name("web").is_ok());
/// assert!(validate_tag_name("3d").is_ok());
/// assert!(validate_tag_name("c++").is_ok());
///
/// assert!(validate_tag_name("").is_err());
/// assert!(validate_tag_name("all").is_err());
/// ```
pub fn validate_tag_name(name: &str) -> Result<(), TagValidationError> {
    if name.is_empty() {
        return Err(TagValidationError::Empty);
    }
    if name == ALL {
        return Err(TagValidationError::Reserved);
    }
    Ok(())
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TagValidationError {
    #[error("tag name cannot be empty")]
    Empty,
    #[error("'all' is reserved for the show-everything filter")]
    Reserved,
}
