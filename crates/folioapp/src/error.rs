use thiserror::Error;

#[derive(Error, Debug)]
pub enum FolioError {
    /// The catalog data breaks an invariant the resolver relies on.
    #[error("Entry '{entry}' has no '{locale}' value for field '{field}'")]
    Configuration {
        entry: String,
        field: &'static str,
        locale: String,
    },

    #[error("Duplicate entry id: {0}")]
    DuplicateEntry(String),

    #[error("Entry '{entry}' has invalid tag '{tag}': {reason}")]
    InvalidTag {
        entry: String,
        tag: String,
        reason: String,
    },

    #[error("Entry not found: {0}")]
    EntryNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(#[from] confique::Error),
}

pub type Result<T> = std::result::Result<T, FolioError>;
