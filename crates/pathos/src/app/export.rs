//! Shell export of the current path list.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::PathBuf;

use tracing::info;

use crate::domain::errors::ExportError;
use crate::infra::config::Config;

/// Conventional export file name, relative to the working directory.
pub const DEFAULT_EXPORT_FILE: &str = "pathos.sh";

/// Build the assignment line without a trailing newline.
///
/// Empty entries are dropped so the result never contains `::` or a dangling separator.
pub fn render_line<S: AsRef<str>>(variable: &str, entries: &[S]) -> String {
    let joined = entries
        .iter()
        .map(AsRef::as_ref)
        .filter(|entry| !entry.is_empty())
        .collect::<Vec<_>>()
        .join(":");
    format!("export {variable}={joined}")
}

/// Runtime options controlling where and how the export is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    pub path: PathBuf,
    pub variable: String,
}

impl ExportOptions {
    /// Build options from configuration defaults.
    pub fn from_config(config: &Config) -> Self {
        Self {
            path: PathBuf::from(config.export.file()),
            variable: config.export.variable(),
        }
    }
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_EXPORT_FILE),
            variable: "PATH".into(),
        }
    }
}

/// Result of a successful export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportResult {
    pub rendered: String,
    pub path: PathBuf,
    pub bytes_written: usize,
}

/// Writes the export line to its configured file, truncating prior content.
#[derive(Debug, Clone, Default)]
pub struct Exporter {
    options: ExportOptions,
}

impl Exporter {
    pub fn new(options: ExportOptions) -> Self {
        Self { options }
    }

    /// Render only, without touching any sink.
    pub fn render<S: AsRef<str>>(&self, entries: &[S]) -> String {
        render_line(&self.options.variable, entries)
    }

    /// Write the line plus a newline to an arbitrary byte sink, returning the byte count.
    pub fn write_to<S: AsRef<str>, W: Write>(&self, entries: &[S], sink: &mut W) -> io::Result<usize> {
        let mut line = self.render(entries);
        line.push('\n');
        sink.write_all(line.as_bytes())?;
        sink.flush()?;
        Ok(line.len())
    }

    /// Render and write to the configured file. Not retried on failure.
    pub fn export<S: AsRef<str>>(&self, entries: &[S]) -> Result<ExportResult, ExportError> {
        let path = &self.options.path;
        let io_err = |source| ExportError::Io {
            path: path.clone(),
            source,
        };

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(io_err)?;
        }

        let mut file = File::create(path).map_err(io_err)?;
        let bytes_written = self.write_to(entries, &mut file).map_err(io_err)?;
        info!(path = %path.display(), bytes_written, "exported path list");

        Ok(ExportResult {
            rendered: self.render(entries),
            path: path.clone(),
            bytes_written,
        })
    }
}
