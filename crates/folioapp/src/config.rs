//! # Configuration
//!
//! Folio configuration is managed by [`confique`], layering a TOML file,
//! environment variables, and compiled defaults.
//!
//! ## Resolution Order
//!
//! 1. **Environment variables**: `FOLIO_LOCALE`, `FOLIO_DEFAULT_LOCALE`, ...
//! 2. **Config file**: `folio.toml`, either passed explicitly or found in the
//!    OS-appropriate config directory (via the `directories` crate).
//! 3. **Compiled defaults**: `#[config(default = ...)]`.
//!
//! UI clients apply their own overrides (command-line flags) on top.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `locale` | `en` | Locale the session starts in |
//! | `default_locale` | `en` | Fallback locale; every entry must have it |
//! | `catalog` | none | JSON catalog to load instead of the bundled sample |
//! | `tech_preview` | `3` | Tech badges shown per list row |

use crate::error::Result;
use crate::model::Locale;
use confique::Config;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

pub const CONFIG_FILE: &str = "folio.toml";

#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FolioConfig {
    /// Locale the session starts in.
    #[config(default = "en", env = "FOLIO_LOCALE")]
    pub locale: String,

    /// Fallback locale for entries without a translation.
    #[config(default = "en", env = "FOLIO_DEFAULT_LOCALE")]
    pub default_locale: String,

    /// Path to a JSON catalog. The bundled sample is used when absent.
    #[config(env = "FOLIO_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Number of tech badges shown on each list row.
    #[config(default = 3, env = "FOLIO_TECH_PREVIEW")]
    pub tech_preview: usize,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            locale: "en".to_string(),
            default_locale: "en".to_string(),
            catalog: None,
            tech_preview: crate::catalog::DEFAULT_TECH_PREVIEW,
        }
    }
}

impl FolioConfig {
    /// Loads configuration from the environment and `path`, or from the
    /// user's config directory when no path is given. A missing file is fine.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = path.map(Path::to_path_buf).or_else(default_config_path);
        let mut builder = Self::builder().env();
        if let Some(file) = &file {
            debug!(path = %file.display(), "config file");
            builder = builder.file(file);
        }
        Ok(builder.load()?)
    }

    pub fn locale(&self) -> Locale {
        Locale::new(self.locale.as_str())
    }

    pub fn default_locale(&self) -> Locale {
        Locale::new(self.default_locale.as_str())
    }
}

/// `folio.toml` inside the platform config directory.
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "folio").map(|dirs| dirs.config_dir().join(CONFIG_FILE))
}
