//! Action dispatch over the path list, edit session, export sink, and store.

use tracing::{debug, info, warn};

use crate::app::classify::{ExistenceCache, duplicates};
use crate::app::export::{ExportResult, Exporter};
use crate::app::path_list::{Direction, PathList};
use crate::app::session::{EditSession, Mode};
use crate::app::store::PathStore;
use crate::domain::errors::{EditorError, StoreError};
use crate::domain::model::{Classification, EntryRow, ListSummary};

/// Already-resolved user intent. Key mapping happens elsewhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    StartNewEntry,
    CommitEntry(String),
    CancelEntry,
    DeleteSelected,
    SelectEntry,
    RequestExport,
    Save,
    ToggleHelp,
    Quit,
    Navigate(Direction),
}

/// What a dispatched action did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Entry inserted at `index`; the cursor now points at it.
    Inserted { index: usize, entry: String },
    /// Commit of blank text; still entering.
    Rejected,
    Removed { index: usize, entry: String },
    Selected(String),
    Exported(ExportResult),
    Saved { target: String, entries: usize },
    ModeChanged(Mode),
    Moved { cursor: usize },
    HelpToggled { visible: bool },
    Quit,
    /// Action not meaningful in the current mode or state.
    Ignored,
}

/// Tunables supplied by the caller, typically from configuration.
#[derive(Debug, Clone)]
pub struct EditorOptions {
    pub exporter: Exporter,
    pub page_size: usize,
    pub autosave: bool,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            exporter: Exporter::default(),
            page_size: 14,
            autosave: false,
        }
    }
}

/// Owns every piece of session state; all of it lives on the event-handling thread.
pub struct Editor {
    list: PathList,
    session: EditSession,
    existence: ExistenceCache,
    store: Box<dyn PathStore>,
    options: EditorOptions,
    choice: Option<String>,
    help_visible: bool,
    finished: bool,
}

impl Editor {
    /// Start a session over `entries` in [`Mode::Browsing`].
    pub fn new<I, S>(entries: I, store: Box<dyn PathStore>, options: EditorOptions) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let list = PathList::seed(entries);
        let mut existence = ExistenceCache::new();
        existence.rebuild(list.entries());
        info!(entries = list.len(), store = %store.describe(), "editor session started");
        Self {
            list,
            session: EditSession::new(),
            existence,
            store,
            options,
            choice: None,
            help_visible: false,
            finished: false,
        }
    }

    /// Seed from the store's current contents.
    pub fn from_store(store: Box<dyn PathStore>, options: EditorOptions) -> Result<Self, StoreError> {
        let entries = store.load()?;
        Ok(Self::new(entries, store, options))
    }

    /// Dispatch one action. The mode is inspected once, here.
    pub fn apply(&mut self, action: Action) -> Result<Outcome, EditorError> {
        if self.finished {
            return Ok(Outcome::Ignored);
        }
        debug!(?action, mode = ?self.session.mode(), "dispatching action");
        match self.session.mode() {
            Mode::Browsing => self.apply_browsing(action),
            Mode::Entering { insert_at } => self.apply_entering(action, insert_at),
        }
    }

    fn apply_browsing(&mut self, action: Action) -> Result<Outcome, EditorError> {
        match action {
            Action::StartNewEntry => {
                self.session.begin_entry(self.list.cursor());
                Ok(Outcome::ModeChanged(self.session.mode()))
            }
            Action::DeleteSelected => {
                let index = self.list.cursor();
                match self.list.remove_at(index) {
                    Some(entry) => {
                        info!(index, entry = %entry, "removed entry");
                        self.after_mutation()?;
                        Ok(Outcome::Removed { index, entry })
                    }
                    None => Ok(Outcome::Ignored),
                }
            }
            Action::SelectEntry => match self.list.selected() {
                Some(entry) => {
                    let entry = entry.to_owned();
                    self.choice = Some(entry.clone());
                    Ok(Outcome::Selected(entry))
                }
                None => Ok(Outcome::Ignored),
            },
            Action::Navigate(direction) => {
                if self.list.navigate(direction, self.options.page_size) {
                    Ok(Outcome::Moved {
                        cursor: self.list.cursor(),
                    })
                } else {
                    Ok(Outcome::Ignored)
                }
            }
            Action::Save => self.save().map_err(EditorError::from),
            Action::ToggleHelp => {
                self.help_visible = !self.help_visible;
                Ok(Outcome::HelpToggled {
                    visible: self.help_visible,
                })
            }
            Action::RequestExport => self.export(),
            Action::Quit => Ok(self.quit()),
            Action::CommitEntry(_) | Action::CancelEntry => Ok(Outcome::Ignored),
        }
    }

    fn apply_entering(&mut self, action: Action, insert_at: usize) -> Result<Outcome, EditorError> {
        match action {
            Action::CommitEntry(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    return Ok(Outcome::Rejected);
                }
                let Some(index) = self.list.insert_at(insert_at, trimmed) else {
                    return Ok(Outcome::Rejected);
                };
                let entry = trimmed.to_owned();
                self.session.end_entry();
                info!(index, entry = %entry, "inserted entry");
                self.after_mutation()?;
                Ok(Outcome::Inserted { index, entry })
            }
            Action::CancelEntry => {
                self.session.end_entry();
                Ok(Outcome::ModeChanged(self.session.mode()))
            }
            Action::RequestExport => self.export(),
            Action::Quit => Ok(self.quit()),
            Action::StartNewEntry
            | Action::DeleteSelected
            | Action::SelectEntry
            | Action::Save
            | Action::ToggleHelp
            | Action::Navigate(_) => Ok(Outcome::Ignored),
        }
    }

    fn after_mutation(&mut self) -> Result<(), StoreError> {
        self.existence.rebuild(self.list.entries());
        if self.options.autosave {
            self.save()?;
        }
        Ok(())
    }

    fn export(&self) -> Result<Outcome, EditorError> {
        match self.options.exporter.export(self.list.entries()) {
            Ok(result) => Ok(Outcome::Exported(result)),
            Err(err) => {
                warn!(error = %err, "export failed");
                Err(err.into())
            }
        }
    }

    fn save(&self) -> Result<Outcome, StoreError> {
        let entries = self.list.entries();
        self.store.save(entries).inspect_err(|err| {
            warn!(error = %err, "saving path list failed");
        })?;
        let target = self.store.describe();
        info!(target = %target, entries = entries.len(), "saved path list");
        Ok(Outcome::Saved {
            target,
            entries: entries.len(),
        })
    }

    fn quit(&mut self) -> Outcome {
        self.finished = true;
        Outcome::Quit
    }

    /// `(text, classification, is_selected)` for each entry in list order.
    ///
    /// Duplicates are derived fresh on every call; existence comes from the cache.
    pub fn rows(&self) -> Vec<EntryRow> {
        let entries = self.list.entries();
        let dupes = duplicates(entries);
        let cursor = self.list.cursor();
        entries
            .iter()
            .enumerate()
            .map(|(index, text)| EntryRow {
                text: text.clone(),
                classification: Classification::from_flags(
                    self.existence.exists(text),
                    dupes.contains(text),
                ),
                is_selected: index == cursor,
            })
            .collect()
    }

    pub fn summary(&self) -> ListSummary {
        ListSummary::from_rows(&self.rows())
    }

    pub fn list(&self) -> &PathList {
        &self.list
    }

    /// Read-only snapshot of the entries.
    pub fn current_entries(&self) -> &[String] {
        self.list.entries()
    }

    pub fn mode(&self) -> Mode {
        self.session.mode()
    }

    pub fn session(&self) -> &EditSession {
        &self.session
    }

    /// Text-input collaborator hook. Only the committed string reaches the list.
    pub fn session_mut(&mut self) -> &mut EditSession {
        &mut self.session
    }

    /// Last entry chosen with [`Action::SelectEntry`].
    pub fn choice(&self) -> Option<&str> {
        self.choice.as_deref()
    }

    pub fn help_visible(&self) -> bool {
        self.help_visible
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn store_name(&self) -> String {
        self.store.describe()
    }
}
