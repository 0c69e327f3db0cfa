//! Persistence collaborator used to seed and save the path list.

use crate::domain::errors::StoreError;

/// Narrow load/save interface. The editor does not care which backend sits behind it.
pub trait PathStore {
    /// Ordered entries as last persisted.
    fn load(&self) -> Result<Vec<String>, StoreError>;

    /// Replace the persisted entries with `entries`.
    fn save(&self, entries: &[String]) -> Result<(), StoreError>;

    /// Human readable name for status messages and logs.
    fn describe(&self) -> String;
}

/// In-memory store, mostly useful for tests and dry runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: std::cell::RefCell<Vec<String>>,
}

impl MemoryStore {
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: std::cell::RefCell::new(entries.into_iter().map(Into::into).collect()),
        }
    }

    pub fn snapshot(&self) -> Vec<String> {
        self.entries.borrow().clone()
    }
}

impl PathStore for MemoryStore {
    fn load(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.snapshot())
    }

    fn save(&self, entries: &[String]) -> Result<(), StoreError> {
        *self.entries.borrow_mut() = entries.to_vec();
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".into()
    }
}
