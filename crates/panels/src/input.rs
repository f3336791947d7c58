//! Single-line text input with cursor management.
//!
//! Tracks the cursor in characters rather than bytes so multi-byte
//! input (emoji, accents) edits cleanly.

#[derive(Debug, Clone, Default)]
pub struct TextInput {
    input: String,
    cursor_pos: usize, // in characters, not bytes
}

impl TextInput {
    pub fn new() -> Self {
        Self {
            input: String::new(),
            cursor_pos: 0,
        }
    }

    /// Current input text.
    pub fn text(&self) -> &str {
        &self.input
    }

    /// Cursor position in characters.
    pub fn cursor_pos(&self) -> usize {
        self.cursor_pos
    }

    /// Clear all input.
    pub fn clear(&mut self) {
        self.input.clear();
        self.cursor_pos = 0;
    }

    /// Take the current text, leaving the input empty.
    pub fn take(&mut self) -> String {
        self.cursor_pos = 0;
        std::mem::take(&mut self.input)
    }

    /// Convert cursor position (in characters) to byte index.
    fn byte_index(&self) -> usize {
        self.input
            .char_indices()
            .nth(self.cursor_pos)
            .map(|(idx, _)| idx)
            .unwrap_or(self.input.len())
    }

    /// Insert a character at the cursor position.
    pub fn insert(&mut self, c: char) {
        let byte_idx = self.byte_index();
        self.input.insert(byte_idx, c);
        self.cursor_pos += 1;
    }

    /// Delete the character before the cursor (backspace).
    pub fn backspace(&mut self) -> bool {
        if self.cursor_pos > 0 {
            self.cursor_pos -= 1;
            let byte_idx = self.byte_index();
            self.input.remove(byte_idx);
            true
        } else {
            false
        }
    }

    /// Delete the character at the cursor (delete key).
    pub fn delete(&mut self) -> bool {
        let char_count = self.input.chars().count();
        if self.cursor_pos < char_count {
            let byte_idx = self.byte_index();
            self.input.remove(byte_idx);
            true
        } else {
            false
        }
    }

    pub fn move_left(&mut self) -> bool {
        if self.cursor_pos > 0 {
            self.cursor_pos -= 1;
            true
        } else {
            false
        }
    }

    pub fn move_right(&mut self) -> bool {
        let char_count = self.input.chars().count();
        if self.cursor_pos < char_count {
            self.cursor_pos += 1;
            true
        } else {
            false
        }
    }

    pub fn move_home(&mut self) {
        self.cursor_pos = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor_pos = self.input.chars().count();
    }

    pub fn is_empty(&self) -> bool {
        self.input.is_empty()
    }

    /// Text before the cursor (for rendering).
    pub fn text_before_cursor(&self) -> &str {
        &self.input[..self.byte_index()]
    }

    /// Text after the cursor (for rendering).
    pub fn text_after_cursor(&self) -> &str {
        &self.input[self.byte_index()..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_text() {
        let mut input = TextInput::new();
        input.insert('h');
        input.insert('i');
        assert_eq!(input.text(), "hi");
        assert_eq!(input.cursor_pos(), 2);
    }

    #[test]
    fn test_unicode_cursor_tracks_characters() {
        let mut input = TextInput::new();
        input.insert('п');
        input.insert('🦊');
        input.insert('!');
        assert_eq!(input.text(), "п🦊!");
        assert_eq!(input.cursor_pos(), 3);

        assert!(input.backspace());
        assert_eq!(input.text(), "п🦊");
    }

    #[test]
    fn test_backspace_and_delete() {
        let mut input = TextInput::new();
        for c in "abc".chars() {
            input.insert(c);
        }
        assert!(input.backspace());
        assert_eq!(input.text(), "ab");

        input.move_home();
        assert!(input.delete());
        assert_eq!(input.text(), "b");
        assert!(!input.backspace());
    }

    #[test]
    fn test_navigation_bounds() {
        let mut input = TextInput::new();
        input.insert('x');
        assert!(!input.move_right());
        assert!(input.move_left());
        assert!(!input.move_left());
        input.move_end();
        assert_eq!(input.cursor_pos(), 1);
    }

    #[test]
    fn test_mid_cursor_insert_and_split() {
        let mut input = TextInput::new();
        for c in "ace".chars() {
            input.insert(c);
        }
        input.move_left();
        input.move_left();
        input.insert('b');
        assert_eq!(input.text(), "abce");
        assert_eq!(input.text_before_cursor(), "ab");
        assert_eq!(input.text_after_cursor(), "ce");
    }

    #[test]
    fn test_take_clears() {
        let mut input = TextInput::new();
        input.insert('a');
        assert_eq!(input.take(), "a");
        assert!(input.is_empty());
        assert_eq!(input.cursor_pos(), 0);
    }
}
