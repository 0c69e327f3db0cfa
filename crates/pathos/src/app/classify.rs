//! Existence and duplicate classification for path entries.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use crate::domain::model::Classification;

/// Whether a filesystem object is reachable at `entry`.
///
/// Every failure (missing, permission denied, broken symlink) collapses to `false`.
pub fn exists(entry: &str) -> bool {
    if entry.is_empty() {
        return false;
    }
    Path::new(entry).try_exists().unwrap_or(false)
}

/// Distinct values occurring more than once in `entries`.
pub fn duplicates<S: AsRef<str>>(entries: &[S]) -> HashSet<String> {
    let mut counts: HashMap<&str, usize> = HashMap::with_capacity(entries.len());
    for entry in entries {
        *counts.entry(entry.as_ref()).or_default() += 1;
    }
    counts
        .into_iter()
        .filter(|(_, count)| *count >= 2)
        .map(|(value, _)| value.to_owned())
        .collect()
}

/// Exact, case-sensitive, position-independent duplicate check.
pub fn is_duplicate<S: AsRef<str>>(entry: &str, entries: &[S]) -> bool {
    entries
        .iter()
        .filter(|candidate| candidate.as_ref() == entry)
        .take(2)
        .count()
        >= 2
}

/// Classify a single entry against the full list, hitting the filesystem.
pub fn classify<S: AsRef<str>>(entry: &str, entries: &[S]) -> Classification {
    Classification::from_flags(exists(entry), is_duplicate(entry, entries))
}

/// Per-entry existence results, rebuilt only when the list changes.
#[derive(Debug, Default, Clone)]
pub struct ExistenceCache {
    known: HashMap<String, bool>,
}

impl ExistenceCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every cached result and stat each distinct entry once.
    pub fn rebuild<S: AsRef<str>>(&mut self, entries: &[S]) {
        self.known.clear();
        for entry in entries {
            let entry = entry.as_ref();
            if !self.known.contains_key(entry) {
                self.known.insert(entry.to_owned(), exists(entry));
            }
        }
    }

    /// Cached existence for `entry`. Entries never seen by [`Self::rebuild`] report `false`.
    pub fn exists(&self, entry: &str) -> bool {
        self.known.get(entry).copied().unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.known.len()
    }

    pub fn is_empty(&self) -> bool {
        self.known.is_empty()
    }
}
