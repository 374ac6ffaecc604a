//! Session persistence: the ordered list of expression strings as a JSON file.
//!
//! File layout: `{ "list_of_function": ["sin(x)", "", "x**2"] }`. A missing key
//! (or `null`) loads as an empty list.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Extension given to saved sessions when the chosen path has none.
pub const SESSION_EXTENSION: &str = "json";

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("cannot access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed session file: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub list_of_function: Vec<String>,
}

fn null_as_empty<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<String>, D::Error> {
    Ok(Option::<Vec<String>>::deserialize(d)?.unwrap_or_default())
}

impl Session {
    pub fn new(list_of_function: Vec<String>) -> Self {
        Self { list_of_function }
    }

    pub fn reset(&mut self) {
        self.list_of_function.clear();
    }

    pub fn push(&mut self, expression: impl Into<String>) {
        self.list_of_function.push(expression.into());
    }

    pub fn len(&self) -> usize {
        self.list_of_function.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list_of_function.is_empty()
    }

    pub fn to_json(&self) -> Result<String, SessionError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(txt: &str) -> Result<Self, SessionError> {
        Ok(serde_json::from_str(txt)?)
    }

    pub fn save_to_path(&self, path: &Path) -> Result<(), SessionError> {
        let txt = self.to_json()?;
        std::fs::write(path, txt).map_err(|source| SessionError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load_from_path(path: &Path) -> Result<Self, SessionError> {
        let txt = std::fs::read_to_string(path).map_err(|source| SessionError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&txt)
    }
}

/// Append the session extension to paths chosen without one.
pub fn with_default_extension(path: PathBuf) -> PathBuf {
    if path.extension().is_some() {
        path
    } else {
        path.with_extension(SESSION_EXTENSION)
    }
}

/// Timestamped file name offered in the save dialog.
pub fn default_file_name() -> String {
    format!(
        "functions_{}.{}",
        chrono::Local::now().format("%Y%m%d_%H%M%S"),
        SESSION_EXTENSION
    )
}
