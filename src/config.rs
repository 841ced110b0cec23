use crate::debounce::DEFAULT_DEBOUNCE_DELAY;
use crate::language::PLAIN_TEXT;
use crate::line_ending::LineEnding;
use crate::theme::{DEFAULT_RULER_COLUMN, DEFAULT_THEME, Theme};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid config format: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EdocConfig {
    pub theme: String,
    pub language: String,
    pub size_update_delay_ms: u64,
    pub indent_unit: usize,
    pub ruler_column: usize,
    pub line_ending: LineEnding,
    pub themes: Vec<Theme>,
}

impl Default for EdocConfig {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME.to_string(),
            language: PLAIN_TEXT.to_string(),
            size_update_delay_ms: DEFAULT_DEBOUNCE_DELAY.as_millis() as u64,
            indent_unit: 2,
            ruler_column: DEFAULT_RULER_COLUMN,
            line_ending: LineEnding::default(),
            themes: Vec::new(),
        }
    }
}

impl EdocConfig {
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// `$XDG_CONFIG_HOME/edoc/config.toml` or the platform equivalent.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("edoc").join("config.toml"))
    }

    /// Load `explicit` if given, otherwise the default config file if it exists.
    ///
    /// A missing explicit file is an error; a missing default file is not.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => {
                log::debug!("loading config from {}", path.display());
                Self::from_file(&path)
            }
            _ => {
                log::debug!("no config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn size_update_delay(&self) -> Duration {
        Duration::from_millis(self.size_update_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = EdocConfig::default();
        assert_eq!(config.theme, "eclipse");
        assert_eq!(config.language, "null");
        assert_eq!(config.size_update_delay(), Duration::from_millis(300));
        assert_eq!(config.indent_unit, 2);
        assert_eq!(config.ruler_column, 80);
        assert_eq!(config.line_ending, LineEnding::Crlf);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = EdocConfig::from_toml("theme = \"monokai\"\nline_ending = \"lf\"\n").unwrap();
        assert_eq!(config.theme, "monokai");
        assert_eq!(config.line_ending, LineEnding::Lf);
        assert_eq!(config.indent_unit, 2);
    }

    #[test]
    fn test_extra_themes() {
        let config = EdocConfig::from_toml(
            r##"
size_update_delay_ms = 50

[[themes]]
name = "paper"
background = "rgb(250, 250, 250)"
"##,
        )
        .unwrap();
        assert_eq!(config.size_update_delay(), Duration::from_millis(50));
        assert_eq!(config.themes, vec![Theme::new("paper", "rgb(250, 250, 250)")]);
    }

    #[test]
    fn test_invalid_config() {
        assert!(matches!(
            EdocConfig::from_toml("indent_unit = \"two\""),
            Err(ConfigError::Parse(_))
        ));
        assert!(EdocConfig::from_toml("line_ending = \"nel\"").is_err());
    }

    #[test]
    fn test_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "ruler_column = 120\n").unwrap();

        let config = EdocConfig::load(Some(&path)).unwrap();
        assert_eq!(config.ruler_column, 120);
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let result = EdocConfig::load(Some(&dir.path().join("missing.toml")));
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }
}
