//! Ordered path entries with a clamped cursor.

/// Cursor movement requested by list navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    PageUp,
    PageDown,
    Top,
    Bottom,
}

/// The single source of truth for entries. Order is `PATH` precedence and is preserved exactly;
/// duplicates are kept.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PathList {
    entries: Vec<String>,
    cursor: usize,
}

impl PathList {
    /// Build a list from seed values in their original order. No filtering happens here.
    pub fn seed<I, S>(initial: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: initial.into_iter().map(Into::into).collect(),
            cursor: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Read-only snapshot used for export and classification.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Entry under the cursor, if the list is non-empty.
    pub fn selected(&self) -> Option<&str> {
        self.entries.get(self.cursor).map(String::as_str)
    }

    /// Insert `entry` before `index` (clamped to `0..=len`) and move the cursor onto it.
    ///
    /// Blank entries are rejected and `None` is returned; otherwise the final position.
    pub fn insert_at(&mut self, index: usize, entry: impl Into<String>) -> Option<usize> {
        let entry = entry.into();
        if entry.trim().is_empty() {
            return None;
        }
        let index = index.min(self.entries.len());
        self.entries.insert(index, entry);
        self.cursor = index;
        Some(index)
    }

    /// Remove the entry at `index`, returning it. Out-of-range indices are a no-op.
    pub fn remove_at(&mut self, index: usize) -> Option<String> {
        if index >= self.entries.len() {
            return None;
        }
        let removed = self.entries.remove(index);
        self.cursor = index.min(self.entries.len().saturating_sub(1));
        Some(removed)
    }

    /// Move the cursor, clamped to the list. Returns whether it changed.
    pub fn navigate(&mut self, direction: Direction, page_size: usize) -> bool {
        if self.entries.is_empty() {
            return false;
        }
        let last = self.entries.len() - 1;
        let page = page_size.max(1);
        let previous = self.cursor;
        self.cursor = match direction {
            Direction::Up => self.cursor.saturating_sub(1),
            Direction::Down => (self.cursor + 1).min(last),
            Direction::PageUp => self.cursor.saturating_sub(page),
            Direction::PageDown => self.cursor.saturating_add(page).min(last),
            Direction::Top => 0,
            Direction::Bottom => last,
        };
        self.cursor != previous
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(values: &[&str]) -> PathList {
        PathList::seed(values.iter().copied())
    }

    #[test]
    fn seed_preserves_order_and_duplicates() {
        let list = list(&["/usr/bin", "", "/bin", "/usr/bin"]);
        assert_eq!(list.entries(), ["/usr/bin", "", "/bin", "/usr/bin"]);
        assert_eq!(list.cursor(), 0);
    }

    #[test]
    fn insert_places_entry_before_index() {
        let mut list = list(&["/a", "/c"]);
        assert_eq!(list.insert_at(1, "/b"), Some(1));
        assert_eq!(list.entries(), ["/a", "/b", "/c"]);
        assert_eq!(list.selected(), Some("/b"));
    }

    #[test]
    fn insert_clamps_index_to_end() {
        let mut list = list(&["/a"]);
        assert_eq!(list.insert_at(99, "/z"), Some(1));
        assert_eq!(list.entries(), ["/a", "/z"]);
    }

    #[test]
    fn insert_into_empty_list() {
        let mut list = PathList::default();
        assert_eq!(list.insert_at(0, "/only"), Some(0));
        assert_eq!(list.entries(), ["/only"]);
    }

    #[test]
    fn blank_insert_is_rejected() {
        let mut list = list(&["/a"]);
        assert_eq!(list.insert_at(0, ""), None);
        assert_eq!(list.insert_at(0, "  \t "), None);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn remove_clamps_cursor() {
        let mut list = list(&["/a", "/b", "/c"]);
        list.navigate(Direction::Bottom, 1);
        assert_eq!(list.remove_at(2).as_deref(), Some("/c"));
        assert_eq!(list.cursor(), 1);
        assert_eq!(list.remove_at(0).as_deref(), Some("/a"));
        assert_eq!(list.cursor(), 0);
        assert_eq!(list.entries(), ["/b"]);
    }

    #[test]
    fn removing_only_entry_leaves_cursor_at_zero() {
        let mut list = list(&["/a"]);
        assert_eq!(list.remove_at(0).as_deref(), Some("/a"));
        assert!(list.is_empty());
        assert_eq!(list.cursor(), 0);
        assert_eq!(list.selected(), None);
    }

    #[test]
    fn remove_out_of_range_is_noop() {
        let mut list = list(&["/a"]);
        assert_eq!(list.remove_at(1), None);
        assert_eq!(PathList::default().remove_at(0), None);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn operations_match_reference_vec() {
        let mut list = list(&["/a", "/b"]);
        let mut reference: Vec<String> = vec!["/a".into(), "/b".into()];

        let ops: &[(bool, usize, &str)] = &[
            (true, 0, "/x"),
            (true, 3, "/y"),
            (false, 1, ""),
            (true, 2, "/a"),
            (false, 0, ""),
            (false, 7, ""),
            (true, 10, "/z"),
        ];
        for (insert, index, value) in ops {
            if *insert {
                list.insert_at(*index, *value);
                let at = (*index).min(reference.len());
                reference.insert(at, value.to_string());
            } else {
                list.remove_at(*index);
                if *index < reference.len() {
                    reference.remove(*index);
                }
            }
            assert_eq!(list.entries(), reference.as_slice());
            assert!(list.cursor() < list.len().max(1));
        }
    }

    #[test]
    fn navigation_is_clamped() {
        let mut list = list(&["/a", "/b", "/c", "/d", "/e"]);
        assert!(!list.navigate(Direction::Up, 2));
        assert!(list.navigate(Direction::PageDown, 2));
        assert_eq!(list.cursor(), 2);
        list.navigate(Direction::PageDown, 10);
        assert_eq!(list.cursor(), 4);
        assert!(!list.navigate(Direction::Down, 2));
        list.navigate(Direction::PageUp, 3);
        assert_eq!(list.cursor(), 1);
        list.navigate(Direction::Top, 3);
        assert_eq!(list.cursor(), 0);
        assert!(!PathList::default().navigate(Direction::Bottom, 1));
    }
}
