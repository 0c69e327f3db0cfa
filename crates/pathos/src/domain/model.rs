//! Domain models for path entries and their presentation state.

/// Presentation category derived from existence and duplicate status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    Normal,
    Missing,
    Duplicate,
    MissingAndDuplicate,
}

impl Classification {
    /// Combine the two independent flags. Both conditions together always win.
    pub fn from_flags(exists: bool, duplicate: bool) -> Self {
        match (exists, duplicate) {
            (true, false) => Classification::Normal,
            (false, false) => Classification::Missing,
            (true, true) => Classification::Duplicate,
            (false, true) => Classification::MissingAndDuplicate,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(
            self,
            Classification::Missing | Classification::MissingAndDuplicate
        )
    }

    pub fn is_duplicate(&self) -> bool {
        matches!(
            self,
            Classification::Duplicate | Classification::MissingAndDuplicate
        )
    }

    /// Short tag used by the line-oriented `list` command. Empty for [`Classification::Normal`].
    pub fn tag(&self) -> &'static str {
        match self {
            Classification::Normal => "",
            Classification::Missing => "[missing]",
            Classification::Duplicate => "[duplicate]",
            Classification::MissingAndDuplicate => "[missing, duplicate]",
        }
    }
}

/// One renderable row: the entry text, its classification, and whether the cursor is on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryRow {
    pub text: String,
    pub classification: Classification,
    pub is_selected: bool,
}

/// Counts shown next to the legend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListSummary {
    pub total: usize,
    pub missing: usize,
    pub duplicates: usize,
}

impl ListSummary {
    pub fn from_rows(rows: &[EntryRow]) -> Self {
        rows.iter().fold(
            Self {
                total: rows.len(),
                ..Self::default()
            },
            |mut summary, row| {
                if row.classification.is_missing() {
                    summary.missing += 1;
                }
                if row.classification.is_duplicate() {
                    summary.duplicates += 1;
                }
                summary
            },
        )
    }
}
