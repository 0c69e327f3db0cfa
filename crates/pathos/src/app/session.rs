//! Two-mode edit session: browsing the list or entering a new path.

use crate::app::draft::EntryDraft;

/// Which input target is active. Exactly one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Browsing,
    /// Typing a new entry that will be inserted before `insert_at`.
    Entering { insert_at: usize },
}

/// Mode plus the in-progress entry text.
#[derive(Debug, Clone, Default)]
pub struct EditSession {
    mode: Mode,
    draft: EntryDraft,
}

impl EditSession {
    /// Fresh session in [`Mode::Browsing`].
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_entering(&self) -> bool {
        matches!(self.mode, Mode::Entering { .. })
    }

    /// Switch to entering with an empty draft, remembering the insertion point.
    pub fn begin_entry(&mut self, insert_at: usize) {
        self.draft.clear();
        self.mode = Mode::Entering { insert_at };
    }

    /// Return to browsing and discard whatever was typed.
    pub fn end_entry(&mut self) {
        self.draft.clear();
        self.mode = Mode::Browsing;
    }

    pub fn draft(&self) -> &EntryDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut EntryDraft {
        &mut self.draft
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_entry_clears_previous_draft() {
        let mut session = EditSession::new();
        session.begin_entry(2);
        session.draft_mut().insert_str("/tmp");
        session.end_entry();
        assert_eq!(session.mode(), Mode::Browsing);

        session.begin_entry(0);
        assert!(session.draft().is_empty());
        assert_eq!(session.mode(), Mode::Entering { insert_at: 0 });
        assert!(session.is_entering());
    }
}
