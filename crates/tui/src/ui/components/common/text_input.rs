//! Cursor-addressed text buffer for single-line editing.
//!
//! The filter box and the dialog amount fields share these primitives; the
//! widgets themselves only add key handling and rendering on top.

use unicode_width::UnicodeWidthChar;

#[derive(Clone, Debug, Default)]
pub struct TextInputState {
    /// Edited text
    input: String,
    /// Byte offset of the cursor, kept on a char boundary
    cursor: usize,
}

impl TextInputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// True when the buffer holds nothing but whitespace.
    pub fn is_empty(&self) -> bool {
        self.input.trim().is_empty()
    }

    /// Display columns occupied by the text before the cursor.
    pub fn cursor_columns(&self) -> u16 {
        self.input[..self.cursor]
            .chars()
            .map(|c| c.width().unwrap_or(0) as u16)
            .sum()
    }

    pub fn set_cursor(&mut self, cursor: usize) {
        self.cursor = cursor.min(self.input.len());
    }

    /// Move the cursor to the char whose cell span contains `column`.
    pub fn set_cursor_from_column(&mut self, column: u16) {
        let mut width: u16 = 0;
        for (index, c) in self.input.char_indices() {
            let char_width = c.width().unwrap_or(0) as u16;
            if width + char_width > column {
                self.set_cursor(index);
                return;
            }
            width += char_width;
        }
        self.set_cursor(self.input.len());
    }

    /// Clear the buffer and reset the cursor.
    pub fn clear(&mut self) {
        self.input.clear();
        self.cursor = 0;
    }

    /// Byte length of the char just before the cursor, if any.
    fn prev_char_len(&self) -> Option<usize> {
        self.input[..self.cursor].chars().next_back().map(char::len_utf8)
    }

    pub fn move_left(&mut self) {
        if let Some(len) = self.prev_char_len() {
            self.cursor -= len;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(c) = self.input[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
    }

    pub fn move_home(&mut self) {
        self.set_cursor(0);
    }

    pub fn move_end(&mut self) {
        self.set_cursor(self.input.len());
    }

    /// Insert a char at the cursor and advance past it.
    pub fn insert_char(&mut self, c: char) {
        self.input.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Delete the char immediately before the cursor.
    pub fn backspace(&mut self) {
        if let Some(len) = self.prev_char_len() {
            let start = self.cursor - len;
            self.input.drain(start..self.cursor);
            self.cursor = start;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn editing_respects_char_boundaries() {
        let mut st = TextInputState::new();
        for c in "naïve".chars() {
            st.insert_char(c);
        }
        assert_eq!(st.cursor(), "naïve".len()); // ï is 2 bytes
        st.move_left();
        st.move_left();
        st.backspace(); // removes the 2-byte ï in one step
        assert_eq!(st.input(), "nave");
        st.move_right();
        st.insert_char('!');
        assert_eq!(st.input(), "nav!e");

        st.move_home();
        st.backspace(); // no-op at the start of the buffer
        st.move_left(); // also a no-op
        assert_eq!(st.input(), "nav!e");
        assert_eq!(st.cursor(), 0);
    }

    #[test]
    fn cursor_columns_counts_wide_chars() {
        let mut st = TextInputState::new();
        for c in "a日b".chars() {
            st.insert_char(c);
        }
        st.move_end();
        assert_eq!(st.cursor_columns(), 4); // 1 + 2 + 1 cells

        st.set_cursor_from_column(1); // inside the wide char's first cell
        assert_eq!(st.cursor(), 1);
        st.set_cursor_from_column(3);
        assert_eq!(st.cursor(), 4); // byte index after the 3-byte wide char
    }

    #[test]
    fn clear_and_home_end() {
        let mut st = TextInputState::new();
        for c in "wallet".chars() {
            st.insert_char(c);
        }
        st.move_home();
        assert_eq!(st.cursor(), 0);
        st.move_end();
        assert_eq!(st.cursor(), 6);
        st.clear();
        assert!(st.is_empty());
        assert_eq!(st.cursor(), 0);
    }
}
