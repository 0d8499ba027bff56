// ABOUTME: vt100 screen capture for asserting on what the wizard drew in a PTY

use vt100::{Parser, Screen};

pub struct ScreenCapture {
    parser: Parser,
}

impl ScreenCapture {
    pub fn new(rows: u16, cols: u16) -> Self {
        Self {
            parser: Parser::new(rows, cols, 0),
        }
    }

    pub fn process_output(&mut self, output: &[u8]) {
        self.parser.process(output);
    }

    pub fn screen(&self) -> &Screen {
        self.parser.screen()
    }

    pub fn contents(&self) -> String {
        self.screen().contents()
    }

    pub fn has_text(&self, text: &str) -> bool {
        self.contents().contains(text)
    }

    /// First row whose text contains `needle`
    pub fn row_containing(&self, needle: &str) -> Option<u16> {
        let rows = self.screen().size().0;
        (0..rows).find(|row| self.row_text(*row).contains(needle))
    }

    pub fn assert_text_at(&self, row: u16, expected: &str) {
        let actual = self.row_text(row);
        assert!(
            actual.contains(expected),
            "Expected '{}' at row {}, but got: '{}'",
            expected, row, actual
        );
    }

    fn row_text(&self, row: u16) -> String {
        let cols = self.screen().size().1;
        self.screen().contents_between(row, 0, row, cols)
    }
}
