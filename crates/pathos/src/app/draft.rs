//! Character-level editing buffer for a new entry.

/// Maximum number of characters accepted for a single entry.
pub const DEFAULT_CHAR_LIMIT: usize = 156;

/// In-progress entry text with a cursor measured in characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryDraft {
    text: String,
    cursor: usize,
    limit: usize,
}

impl Default for EntryDraft {
    fn default() -> Self {
        Self::with_limit(DEFAULT_CHAR_LIMIT)
    }
}

impl EntryDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(limit: usize) -> Self {
        Self {
            text: String::new(),
            cursor: 0,
            limit,
        }
    }

    /// Current buffer contents.
    pub fn value(&self) -> &str {
        &self.text
    }

    /// Cursor position in characters.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Empty the buffer and reset the cursor.
    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Insert at the cursor. Returns `false` once the character limit is reached.
    pub fn insert_char(&mut self, ch: char) -> bool {
        if self.char_len() >= self.limit {
            return false;
        }
        let at = self.byte_index(self.cursor);
        self.text.insert(at, ch);
        self.cursor += 1;
        true
    }

    /// Insert a pasted string, stopping at the limit. Line breaks are dropped.
    pub fn insert_str(&mut self, value: &str) {
        for ch in value.chars().filter(|ch| *ch != '\n' && *ch != '\r') {
            if !self.insert_char(ch) {
                break;
            }
        }
    }

    /// Delete the character before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.byte_index(self.cursor);
        self.text.remove(at);
    }

    /// Delete the character under the cursor.
    pub fn delete(&mut self) {
        if self.cursor < self.char_len() {
            let at = self.byte_index(self.cursor);
            self.text.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.char_len());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_len();
    }

    fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map(|(idx, _)| idx)
            .unwrap_or(self.text.len())
    }
}
