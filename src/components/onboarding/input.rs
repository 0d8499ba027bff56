// ABOUTME: Cursor-aware text editing for wizard input fields
// Cursor positions are counted in chars so multi-byte input never splits a code point

/// Cursor into a single-line text buffer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextCursor {
    position: usize,
}

fn byte_offset(text: &str, char_idx: usize) -> usize {
    text.char_indices()
        .nth(char_idx)
        .map_or(text.len(), |(offset, _)| offset)
}

impl TextCursor {
    /// Cursor placed after the last character
    pub fn at_end(text: &str) -> Self {
        Self {
            position: text.chars().count(),
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn insert_char(&mut self, text: &mut String, c: char) {
        let offset = byte_offset(text, self.position);
        text.insert(offset, c);
        self.position += 1;
    }

    pub fn insert_str(&mut self, text: &mut String, s: &str) {
        // Single-line fields: drop line breaks from pasted text
        let cleaned: String = s.chars().filter(|c| *c != '\n' && *c != '\r').collect();
        let offset = byte_offset(text, self.position);
        text.insert_str(offset, &cleaned);
        self.position += cleaned.chars().count();
    }

    pub fn backspace(&mut self, text: &mut String) {
        if self.position > 0 {
            self.position -= 1;
            let offset = byte_offset(text, self.position);
            text.remove(offset);
        }
    }

    pub fn delete(&mut self, text: &mut String) {
        if self.position < text.chars().count() {
            let offset = byte_offset(text, self.position);
            text.remove(offset);
        }
    }

    pub fn left(&mut self) {
        self.position = self.position.saturating_sub(1);
    }

    pub fn right(&mut self, text: &str) {
        if self.position < text.chars().count() {
            self.position += 1;
        }
    }

    pub fn home(&mut self) {
        self.position = 0;
    }

    pub fn end(&mut self, text: &str) {
        self.position = text.chars().count();
    }

    /// Split display text around the cursor
    pub fn split<'a>(&self, text: &'a str) -> (&'a str, &'a str) {
        text.split_at(byte_offset(text, self.position))
    }
}
