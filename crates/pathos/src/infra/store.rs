//! File and environment backed [`PathStore`] implementations.

use std::borrow::Cow;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::app::store::PathStore;
use crate::domain::errors::StoreError;

/// Reads entries from a `:`-separated environment variable. Cannot persist.
#[derive(Debug, Clone)]
pub struct EnvStore {
    variable: String,
}

impl EnvStore {
    pub fn new(variable: impl Into<String>) -> Self {
        Self {
            variable: variable.into(),
        }
    }
}

impl PathStore for EnvStore {
    fn load(&self) -> Result<Vec<String>, StoreError> {
        let Some(value) = env::var_os(&self.variable) else {
            return Ok(Vec::new());
        };
        let decoded = value.to_string_lossy();
        if let Cow::Owned(_) = decoded {
            warn!(
                variable = %self.variable,
                "variable is not valid UTF-8; undecodable bytes were replaced"
            );
        }
        Ok(split_path_value(&decoded))
    }

    fn save(&self, _entries: &[String]) -> Result<(), StoreError> {
        Err(StoreError::ReadOnly(self.describe()))
    }

    fn describe(&self) -> String {
        format!("${}", self.variable)
    }
}

/// Split a `PATH`-style value, keeping order and duplicates. An empty value has no entries.
pub fn split_path_value(value: &str) -> Vec<String> {
    if value.is_empty() {
        return Vec::new();
    }
    value.split(':').map(str::to_owned).collect()
}

/// On-disk document shape shared by the YAML and JSON encodings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreDocument {
    #[serde(default)]
    pub paths: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Encoding {
    Yaml,
    Json,
}

/// Persists entries to a `paths:` document, YAML unless the file ends in `.json`.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the file, first creating it from `fallback` when it does not exist yet.
    pub fn load_or_init(&self, fallback: &dyn PathStore) -> Result<Vec<String>, StoreError> {
        if !self.path.exists() {
            let seed = fallback.load()?;
            info!(
                path = %self.path.display(),
                source = %fallback.describe(),
                entries = seed.len(),
                "initialising path store"
            );
            self.save(&seed)?;
            return Ok(seed);
        }
        self.load()
    }

    fn encoding(&self) -> Encoding {
        match self.path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Encoding::Json,
            _ => Encoding::Yaml,
        }
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl PathStore for FileStore {
    fn load(&self) -> Result<Vec<String>, StoreError> {
        let data = fs::read_to_string(&self.path).map_err(|err| self.io_error(err))?;
        if data.trim().is_empty() {
            return Ok(Vec::new());
        }

        let document: StoreDocument = match self.encoding() {
            Encoding::Json => serde_json::from_str(&data).map_err(|err| StoreError::Parse {
                path: self.path.clone(),
                message: err.to_string(),
            })?,
            Encoding::Yaml => serde_yaml::from_str(&data).map_err(|err| StoreError::Parse {
                path: self.path.clone(),
                message: err.to_string(),
            })?,
        };
        debug!(path = %self.path.display(), entries = document.paths.len(), "loaded path store");
        Ok(document.paths)
    }

    fn save(&self, entries: &[String]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|err| self.io_error(err))?;
        }

        let document = StoreDocument {
            paths: entries.to_vec(),
        };
        let data = match self.encoding() {
            Encoding::Json => serde_json::to_string_pretty(&document)
                .map_err(|err| StoreError::Encode(err.to_string()))?,
            Encoding::Yaml => serde_yaml::to_string(&document)
                .map_err(|err| StoreError::Encode(err.to_string()))?,
        };
        fs::write(&self.path, data).map_err(|err| self.io_error(err))?;
        debug!(path = %self.path.display(), entries = entries.len(), "saved path store");
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
