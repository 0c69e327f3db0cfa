//! File-backed tracing setup.
//!
//! The terminal belongs to the UI, so log output always goes to a file:
//! `--log-file` when given, otherwise `<data_local_dir>/pathos/pathos.log`.
//! `PATHOS_LOG` takes priority over `RUST_LOG`; the default level is `info`.

use std::env;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

use dirs_next::data_local_dir;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

const DEFAULT_DIRECTIVE: &str = "info";

/// Install the global subscriber, writing through a background worker so the UI thread never
/// blocks on disk.
///
/// The returned guard must be held until exit; dropping it flushes pending lines. `None` means
/// logging is disabled because the file could not be opened or a subscriber was already installed.
pub fn init(explicit: Option<&Path>) -> Option<WorkerGuard> {
    let path = resolve_log_path(explicit);

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).ok()?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .ok()?;

    let (writer, guard) = tracing_appender::non_blocking(file);
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(
            env::var("PATHOS_LOG").ok().or_else(|| env::var("RUST_LOG").ok()),
        ))
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .ok()?;

    Some(guard)
}

/// Pick the log file location.
pub fn resolve_log_path(explicit: Option<&Path>) -> PathBuf {
    match explicit {
        Some(path) => path.to_path_buf(),
        None => data_local_dir()
            .map(|dir| dir.join("pathos").join("pathos.log"))
            .unwrap_or_else(|| PathBuf::from("pathos.log")),
    }
}

fn env_filter(directive: Option<String>) -> EnvFilter {
    directive
        .and_then(|value| EnvFilter::try_new(value).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_path_wins() {
        let path = Path::new("/tmp/custom/pathos.log");
        assert_eq!(resolve_log_path(Some(path)), path);
    }

    #[test]
    fn default_path_ends_with_log_name() {
        assert!(resolve_log_path(None).ends_with("pathos.log"));
    }

    #[test]
    fn events_reach_the_file_once_the_guard_drops() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("pathos.log");

        let guard = init(Some(&path)).expect("first subscriber in this test binary");
        tracing::warn!("background writer check");
        drop(guard);

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("background writer check"));
        assert!(init(Some(&path)).is_none());
    }

    #[test]
    fn invalid_directive_falls_back_to_default() {
        let filter = env_filter(Some("pathos=loudest".into()));
        assert_eq!(filter.to_string(), DEFAULT_DIRECTIVE);
        assert_eq!(env_filter(None).to_string(), DEFAULT_DIRECTIVE);
        assert_eq!(env_filter(Some("debug".into())).to_string(), "debug");
    }
}
