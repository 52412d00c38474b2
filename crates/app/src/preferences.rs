//! Preferences
//!
//! Small user settings that survive between runs. The cart is not one of them.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use freshline::i18n::Language;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PreferencesError {
    #[error("failed to read preferences from {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write preferences to {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid preferences in {}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Persisted user preferences.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Preferences {
    /// Display language
    pub language: Language,

    /// Skip the sign-in step on start
    pub auth_bypass: bool,
}

impl Preferences {
    /// Load preferences, falling back to defaults when the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, PreferencesError> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(error) if error.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(PreferencesError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        serde_json::from_str(&contents).map_err(|source| PreferencesError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Write preferences as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), PreferencesError> {
        let contents = serde_json::to_string_pretty(self).map_err(|source| PreferencesError::Json {
            path: path.to_path_buf(),
            source,
        })?;

        fs::write(path, contents).map_err(|source| PreferencesError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}
