use crate::line_ending::LineEnding;
use ropey::Rope;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BufferError {
    #[error("Rope error: {0}")]
    Rope(#[from] ropey::Error),
    #[error("Line {line} is past the end of the buffer ({line_count} lines)")]
    LineOutOfBounds { line: usize, line_count: usize },
}

pub struct Buffer {
    pub rope: Rope,
    pub file_name: Option<String>,
    pub modified: bool,
}

impl Buffer {
    pub fn new() -> Self {
        Self {
            rope: Rope::from(""),
            file_name: None,
            modified: false,
        }
    }
}

impl Default for Buffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Buffer {
    pub fn insert_text(&mut self, char_idx: usize, text: &str) -> Result<(), BufferError> {
        self.rope.try_insert(char_idx, text)?;
        self.touch();
        Ok(())
    }

    /// Remove the character just before `char_idx` and return how many chars went.
    ///
    /// A `\r\n` pair is one line break and is removed as a whole. Returns 0 at
    /// the start of the buffer.
    pub fn delete_char_before(&mut self, char_idx: usize) -> Result<usize, BufferError> {
        if char_idx == 0 {
            return Ok(0);
        }
        let crlf = char_idx >= 2
            && self.rope.get_char(char_idx - 1) == Some('\n')
            && self.rope.get_char(char_idx - 2) == Some('\r');
        let start = if crlf { char_idx - 2 } else { char_idx - 1 };
        self.rope.try_remove(start..char_idx)?;
        self.touch();
        Ok(char_idx - start)
    }

    /// Replace the whole content, e.g. after loading a file.
    pub fn set_text(&mut self, text: &str) {
        self.rope = Rope::from_str(text);
        self.touch();
    }

    pub fn clear(&mut self) {
        self.rope = Rope::new();
        self.file_name = None;
        self.modified = false;
    }

    fn touch(&mut self) {
        self.modified = true;
    }

    pub fn len_bytes(&self) -> usize {
        self.rope.len_bytes()
    }

    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Length of a line in chars, not counting its line ending.
    pub fn line_len(&self, line_idx: usize) -> usize {
        if line_idx >= self.rope.len_lines() {
            return 0;
        }
        let line = self.rope.line(line_idx);
        let mut len = line.len_chars();
        if len > 0 && line.char(len - 1) == '\n' {
            len -= 1;
        }
        if len > 0 && line.char(len - 1) == '\r' {
            len -= 1;
        }
        len
    }

    pub fn line_to_char(&self, line_idx: usize) -> Result<usize, BufferError> {
        if line_idx >= self.rope.len_lines() {
            return Err(BufferError::LineOutOfBounds {
                line: line_idx,
                line_count: self.rope.len_lines(),
            });
        }
        Ok(self.rope.line_to_char(line_idx))
    }

    /// `(line, col)` of a char index, clamped to the end of the buffer.
    pub fn char_to_line_col(&self, char_idx: usize) -> (usize, usize) {
        let char_idx = char_idx.min(self.rope.len_chars());
        let line = self.rope.char_to_line(char_idx);
        (line, char_idx - self.rope.line_to_char(line))
    }

    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// The content with every line break rewritten to `line_ending`.
    pub fn text_with_line_ending(&self, line_ending: LineEnding) -> String {
        let text = self.rope.to_string().replace("\r\n", "\n");
        text.split(['\r', '\n'])
            .collect::<Vec<_>>()
            .join(line_ending.as_str())
    }
}
