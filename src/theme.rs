// theme.rs - Editor themes and the contrasting column ruler

use crate::color::{self, ColorError, HexColor};
use serde::{Deserialize, Serialize};

pub const DEFAULT_THEME: &str = "eclipse";
pub const DEFAULT_RULER_COLUMN: usize = 80;

/// A theme as far as the shell cares: its name and the editor background.
///
/// `background` is whatever the styling layer reports, either `#rrggbb` or
/// the computed `rgb(r, g, b)` form.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Theme {
    pub name: String,
    pub background: String,
}

impl Theme {
    pub fn new(name: impl Into<String>, background: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            background: background.into(),
        }
    }
}

const BUILTIN_THEMES: &[(&str, &str)] = &[
    ("3024-night", "rgb(9, 3, 0)"),
    ("ambiance", "rgb(32, 32, 32)"),
    ("blackboard", "rgb(12, 16, 33)"),
    ("cobalt", "rgb(0, 34, 64)"),
    ("default", "rgb(255, 255, 255)"),
    ("dracula", "#282a36"),
    ("eclipse", "rgb(255, 255, 255)"),
    ("material", "#263238"),
    ("monokai", "#272822"),
    ("neat", "rgb(255, 255, 255)"),
    ("solarized", "#fdf6e3"),
    ("twilight", "#141414"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineStyle {
    Dashed,
}

/// Vertical guide line drawn at a fixed column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ruler {
    pub color: HexColor,
    pub column: usize,
    pub line_style: LineStyle,
}

impl Ruler {
    /// Ruler whose color is the inverse of `background`, so it stays visible
    /// whatever the theme.
    pub fn for_background(background: &str, column: usize) -> Result<Self, ColorError> {
        let color = color::normalize(background)?.invert()?;
        Ok(Self {
            color,
            column,
            line_style: LineStyle::Dashed,
        })
    }
}

pub struct ThemeRegistry {
    themes: Vec<Theme>,
}

impl ThemeRegistry {
    /// Built-in themes, with `extra` added on top. An extra theme replaces a
    /// built-in one of the same name.
    pub fn new(extra: &[Theme]) -> Self {
        let mut themes: Vec<Theme> = BUILTIN_THEMES
            .iter()
            .map(|(name, bg)| Theme::new(*name, *bg))
            .collect();

        for theme in extra {
            match themes.iter_mut().find(|t| t.name == theme.name) {
                Some(existing) => *existing = theme.clone(),
                None => themes.push(theme.clone()),
            }
        }

        themes.sort_by(|a, b| a.name.cmp(&b.name));
        Self { themes }
    }

    pub fn get(&self, name: &str) -> Option<&Theme> {
        self.themes.iter().find(|t| t.name == name)
    }

    pub fn theme_exists(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn themes(&self) -> &[Theme] {
        &self.themes
    }
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::new(&[])
    }
}
