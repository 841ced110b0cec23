// status.rs - Status bar contents

use crate::theme::Ruler;
use serde::Serialize;
use std::fmt;

/// Snapshot of everything the status bar shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusReport {
    /// 1-based line.
    pub line: usize,
    /// 0-based column.
    pub column: usize,
    pub size: String,
    pub language: String,
    pub theme: String,
    pub ruler: Ruler,
    pub file_name: Option<String>,
    pub modified: bool,
}

impl fmt::Display for StatusReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            " {} | Ln {}, Col {} | {} | {} | {} (ruler {} @ {})",
            self.file_name.as_deref().unwrap_or("[untitled]"),
            self.line,
            self.column,
            self.size,
            self.language,
            self.theme,
            self.ruler.color,
            self.ruler.column,
        )?;
        if self.modified {
            f.write_str(" | Modified")?;
        }
        Ok(())
    }
}
