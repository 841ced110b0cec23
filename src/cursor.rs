use crate::buffer::Buffer;

/// Zero-based cursor position (line, column in chars).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    pub line: usize,
    pub col: usize,
}

impl Cursor {
    pub fn new() -> Self {
        Self { line: 0, col: 0 }
    }

    /// Position as shown in the status bar: 1-based line, 0-based column.
    pub fn display_position(&self) -> (usize, usize) {
        (self.line + 1, self.col)
    }

    /// Move to `(line, col)`, clamped to the buffer contents.
    pub fn set_clamped(&mut self, buffer: &Buffer, line: usize, col: usize) {
        self.line = line.min(buffer.line_count().saturating_sub(1));
        self.col = col.min(buffer.line_len(self.line));
    }
}
