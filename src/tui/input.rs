//! Input field handling for the terminal user interface.

use unicode_width::UnicodeWidthStr;

/// A single-line text input with a cursor.
///
/// The cursor counts characters, not bytes, so multi-byte input edits cleanly.
#[derive(Clone, Debug, Default)]
pub struct InputField {
    pub value: String,
    pub cursor: usize,
}

impl InputField {
    /// Create an input field with initial text, cursor at the end.
    pub fn with_value(value: &str) -> Self {
        Self {
            value: value.to_string(),
            cursor: value.chars().count(),
        }
    }

    fn byte_index(&self, char_idx: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_idx)
            .map_or(self.value.len(), |(i, _)| i)
    }

    /// Terminal columns occupied by the text before the cursor.
    pub fn cursor_column(&self) -> usize {
        self.value[..self.byte_index(self.cursor)].width()
    }

    fn char_len(&self) -> usize {
        self.value.chars().count()
    }

    /// Insert a character at the current cursor position.
    pub fn handle_char(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.value.insert(at, c);
        self.cursor += 1;
    }

    /// Delete the character before the cursor.
    pub fn handle_backspace(&mut self) {
        if self.cursor > 0 {
            let at = self.byte_index(self.cursor - 1);
            self.value.remove(at);
            self.cursor -= 1;
        }
    }

    /// Delete the character at the cursor position.
    pub fn handle_delete(&mut self) {
        if self.cursor < self.char_len() {
            let at = self.byte_index(self.cursor);
            self.value.remove(at);
        }
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor < self.char_len() {
            self.cursor += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typing_and_editing() {
        let mut field = InputField::default();
        for c in "milk".chars() {
            field.handle_char(c);
        }
        field.move_home();
        for c in "Buy ".chars() {
            field.handle_char(c);
        }
        assert_eq!(field.value, "Buy milk");
        field.move_end();
        field.handle_backspace();
        assert_eq!(field.value, "Buy mil");
        field.move_home();
        field.handle_delete();
        assert_eq!(field.value, "uy mil");
    }

    #[test]
    fn multibyte_characters() {
        let mut field = InputField::with_value("café");
        assert_eq!(field.cursor, 4);
        field.handle_backspace();
        assert_eq!(field.value, "caf");
        field.handle_char('é');
        field.move_cursor_left();
        field.handle_char('x');
        assert_eq!(field.value, "cafxé");
    }

    #[test]
    fn cursor_column_counts_display_width() {
        let mut field = InputField::with_value("日本a");
        assert_eq!(field.cursor, 3);
        assert_eq!(field.cursor_column(), 5);
        field.move_cursor_left();
        assert_eq!(field.cursor_column(), 4);
        field.move_home();
        assert_eq!(field.cursor_column(), 0);
    }

    #[test]
    fn cursor_stays_in_bounds() {
        let mut field = InputField::with_value("ab");
        field.move_cursor_right();
        assert_eq!(field.cursor, 2);
        field.move_home();
        field.move_cursor_left();
        field.handle_backspace();
        assert_eq!(field.cursor, 0);
        assert_eq!(field.value, "ab");
    }
}
