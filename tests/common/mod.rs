// Common test utilities for session and file round-trip testing

use edoc::config::EdocConfig;
use edoc::session::EditorSession;
use std::fs;
use std::path::{Path, PathBuf};
use tokio::runtime::Handle;

/// Create a session with default configuration on the current runtime
#[allow(dead_code)]
pub fn default_session() -> EditorSession {
    session_with(EdocConfig::default())
}

#[allow(dead_code)]
pub fn session_with(config: EdocConfig) -> EditorSession {
    EditorSession::new(config, Handle::current()).expect("default config is valid")
}

/// Write `content` to `dir/name` and return the path
#[allow(dead_code)]
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

/// Assert the cursor points inside the document
#[allow(dead_code)]
pub fn assert_cursor_valid(session: &EditorSession) {
    let text = session.text();
    let lines: Vec<&str> = text.split('\n').collect();
    let cursor = session.cursor();
    assert!(
        cursor.line < lines.len(),
        "Cursor line {} out of bounds (line_count: {})",
        cursor.line,
        lines.len()
    );
    let line_len = lines[cursor.line].trim_end_matches('\r').chars().count();
    assert!(
        cursor.col <= line_len,
        "Cursor col {} out of bounds for line {} (line_len: {})",
        cursor.col,
        cursor.line,
        line_len
    );
}
