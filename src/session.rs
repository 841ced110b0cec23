// session.rs - One editing session: buffer, cursor, mode, theme and status bar state

use crate::buffer::{Buffer, BufferError};
use crate::color::ColorError;
use crate::config::EdocConfig;
use crate::cursor::Cursor;
use crate::debounce::DebounceScheduler;
use crate::language::{self, LanguageMode, ModeOption, PLAIN_TEXT};
use crate::line_ending::LineEnding;
use crate::size::format_size;
use crate::status::StatusReport;
use crate::theme::{Ruler, Theme, ThemeRegistry};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use thiserror::Error;
use tokio::runtime::Handle;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Unknown theme: {0}")]
    UnknownTheme(String),
    #[error("Unknown language mode: {0}")]
    UnknownLanguage(String),
    #[error("Cannot derive ruler color: {0}")]
    Color(#[from] ColorError),
    #[error("Buffer error: {0}")]
    Buffer(#[from] BufferError),
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Result of a successful save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedFile {
    pub path: PathBuf,
    pub content_type: String,
    pub bytes_written: usize,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Shared handle to the status bar size label.
///
/// Clones observe the same label, including updates made after the session
/// that produced it is gone.
#[derive(Debug, Clone)]
pub struct SizeLabel(Arc<Mutex<String>>);

impl SizeLabel {
    fn new(bytes: u64) -> Self {
        Self(Arc::new(Mutex::new(format_size(bytes))))
    }

    pub fn get(&self) -> String {
        lock(&self.0).clone()
    }

    fn set(&self, bytes: u64) {
        *lock(&self.0) = format_size(bytes);
    }
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

/// Editor state for a single open document.
///
/// Edits schedule a debounced recomputation of the size label on the tokio
/// runtime passed to [`EditorSession::new`]. Dropping the session (or calling
/// [`close`](Self::close)) cancels any update still waiting.
pub struct EditorSession {
    config: EdocConfig,
    themes: ThemeRegistry,
    buffer: Arc<Mutex<Buffer>>,
    cursor: Cursor,
    default_language: &'static LanguageMode,
    language: &'static LanguageMode,
    mode_option: ModeOption,
    theme: Theme,
    ruler: Ruler,
    size_label: SizeLabel,
    size_updates: DebounceScheduler,
}

impl EditorSession {
    pub fn new(config: EdocConfig, runtime: Handle) -> Result<Self, SessionError> {
        let themes = ThemeRegistry::new(&config.themes);
        let theme = themes
            .get(&config.theme)
            .cloned()
            .ok_or_else(|| SessionError::UnknownTheme(config.theme.clone()))?;
        let ruler = Ruler::for_background(&theme.background, config.ruler_column)?;
        let default_language = language::find_by_mode(&config.language)
            .ok_or_else(|| SessionError::UnknownLanguage(config.language.clone()))?;

        Ok(Self {
            config,
            themes,
            buffer: Arc::new(Mutex::new(Buffer::new())),
            cursor: Cursor::new(),
            default_language,
            language: default_language,
            mode_option: ModeOption::for_mode(default_language),
            theme,
            ruler,
            size_label: SizeLabel::new(0),
            size_updates: DebounceScheduler::new(runtime),
        })
    }

    /// Switch theme and recompute the ruler against its background.
    ///
    /// Nothing changes if the ruler color cannot be derived.
    pub fn set_theme(&mut self, name: &str) -> Result<&Ruler, SessionError> {
        let theme = self
            .themes
            .get(name)
            .ok_or_else(|| SessionError::UnknownTheme(name.to_string()))?;
        let ruler = Ruler::for_background(&theme.background, self.config.ruler_column)?;
        log::debug!(
            "theme {} (background {}) -> ruler {}",
            theme.name,
            theme.background,
            ruler.color
        );

        self.theme = theme.clone();
        self.ruler = ruler;
        Ok(&self.ruler)
    }

    pub fn set_language(&mut self, mode: &str) -> Result<ModeOption, SessionError> {
        let language = language::find_by_mode(mode)
            .ok_or_else(|| SessionError::UnknownLanguage(mode.to_string()))?;
        self.apply_language(language);
        Ok(self.mode_option)
    }

    fn apply_language(&mut self, language: &'static LanguageMode) {
        log::debug!("language mode -> {}", language.mode);
        self.language = language;
        self.mode_option = ModeOption::for_mode(language);
    }

    fn set_size_now(&mut self, bytes: u64) {
        self.size_updates.cancel_pending();
        self.size_label.set(bytes);
    }

    /// Start over with an empty, untitled document in the default mode.
    pub fn new_document(&mut self) {
        lock(&self.buffer).clear();
        self.cursor = Cursor::new();
        self.apply_language(self.default_language);
        self.set_size_now(0);
    }

    /// Load a file, picking the language mode from its name.
    pub async fn open_file(&mut self, path: &Path) -> Result<(), SessionError> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|source| SessionError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        // Undecodable bytes become U+FFFD; the label still reports the file size.
        let content = String::from_utf8_lossy(&bytes);
        let file_name = file_name_of(path);

        {
            let mut buffer = lock(&self.buffer);
            buffer.set_text(&content);
            buffer.file_name = Some(file_name.clone());
            buffer.modified = false;
        }

        let language = language::find_by_file_name(&file_name)
            .or_else(|| language::find_by_mode(PLAIN_TEXT))
            .unwrap_or(self.default_language);
        self.apply_language(language);
        self.cursor = Cursor::new();
        self.set_size_now(bytes.len() as u64);
        log::info!("opened {} ({} bytes)", path.display(), bytes.len());
        Ok(())
    }

    /// Write the document to `path`, rewriting line breaks to `line_ending`.
    pub async fn save_as(
        &mut self,
        path: &Path,
        line_ending: LineEnding,
    ) -> Result<SavedFile, SessionError> {
        let content = lock(&self.buffer).text_with_line_ending(line_ending);
        tokio::fs::write(path, &content)
            .await
            .map_err(|source| SessionError::Io {
                path: path.to_path_buf(),
                source,
            })?;

        {
            let mut buffer = lock(&self.buffer);
            buffer.file_name = Some(file_name_of(path));
            buffer.modified = false;
        }

        log::info!(
            "saved {} ({} bytes, {})",
            path.display(),
            content.len(),
            line_ending
        );
        Ok(SavedFile {
            path: path.to_path_buf(),
            content_type: self.language.content_type(),
            bytes_written: content.len(),
        })
    }

    /// Save using the configured line ending.
    pub async fn save(&mut self, path: &Path) -> Result<SavedFile, SessionError> {
        let line_ending = self.config.line_ending;
        self.save_as(path, line_ending).await
    }

    fn cursor_char_idx(&self, buffer: &Buffer) -> Result<usize, SessionError> {
        Ok(buffer.line_to_char(self.cursor.line)? + self.cursor.col)
    }

    /// Insert `text` at the cursor and move the cursor past it.
    pub fn insert_text(&mut self, text: &str) -> Result<(), SessionError> {
        {
            let mut buffer = lock(&self.buffer);
            let idx = self.cursor_char_idx(&buffer)?;
            buffer.insert_text(idx, text)?;
            let (line, col) = buffer.char_to_line_col(idx + text.chars().count());
            self.cursor = Cursor { line, col };
        }
        self.notify_change();
        Ok(())
    }

    /// Tab inserts `indent_unit` spaces.
    pub fn insert_tab(&mut self) -> Result<(), SessionError> {
        let spaces = " ".repeat(self.config.indent_unit);
        self.insert_text(&spaces)
    }

    /// Backspace. Returns `false` at the start of the document.
    pub fn delete_backward(&mut self) -> Result<bool, SessionError> {
        let deleted = {
            let mut buffer = lock(&self.buffer);
            let idx = self.cursor_char_idx(&buffer)?;
            let removed = buffer.delete_char_before(idx)?;
            if removed > 0 {
                let (line, col) = buffer.char_to_line_col(idx - removed);
                self.cursor = Cursor { line, col };
            }
            removed > 0
        };
        if deleted {
            self.notify_change();
        }
        Ok(deleted)
    }

    /// Replace the whole document.
    pub fn set_text(&mut self, text: &str) {
        {
            let mut buffer = lock(&self.buffer);
            buffer.set_text(text);
            self.cursor.set_clamped(&buffer, 0, 0);
        }
        self.notify_change();
    }

    /// Schedule a size label refresh once edits pause.
    ///
    /// The label is computed from the buffer as it is when the timer fires.
    pub fn notify_change(&mut self) {
        let buffer = Arc::clone(&self.buffer);
        let label = self.size_label.clone();
        let delay = self.config.size_update_delay();
        log::debug!("content changed, size update in {:?}", delay);

        self.size_updates.schedule(delay, move || {
            let bytes = lock(&buffer).len_bytes() as u64;
            label.set(bytes);
        });
    }

    pub fn set_cursor(&mut self, line: usize, col: usize) {
        let buffer = lock(&self.buffer);
        self.cursor.set_clamped(&buffer, line, col);
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn text(&self) -> String {
        lock(&self.buffer).text()
    }

    pub fn file_name(&self) -> Option<String> {
        lock(&self.buffer).file_name.clone()
    }

    pub fn is_modified(&self) -> bool {
        lock(&self.buffer).modified
    }

    pub fn size_label(&self) -> String {
        self.size_label.get()
    }

    /// A handle that keeps reading the label after the session is closed.
    pub fn size_label_handle(&self) -> SizeLabel {
        self.size_label.clone()
    }

    pub fn has_pending_size_update(&self) -> bool {
        self.size_updates.is_pending()
    }

    pub fn language(&self) -> &'static LanguageMode {
        self.language
    }

    pub fn mode_option(&self) -> ModeOption {
        self.mode_option
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn ruler(&self) -> &Ruler {
        &self.ruler
    }

    pub fn themes(&self) -> &ThemeRegistry {
        &self.themes
    }

    pub fn status(&self) -> StatusReport {
        let (line, column) = self.cursor.display_position();
        let buffer = lock(&self.buffer);
        StatusReport {
            line,
            column,
            size: self.size_label(),
            language: self.language.name.to_string(),
            theme: self.theme.name.clone(),
            ruler: self.ruler.clone(),
            file_name: buffer.file_name.clone(),
            modified: buffer.modified,
        }
    }

    /// End the session, dropping any size update that has not fired yet.
    pub fn close(mut self) {
        if self.size_updates.cancel_pending() {
            log::debug!("session closed with a pending size update");
        }
    }
}
