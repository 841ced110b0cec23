// language.rs - Language modes offered by the mode selector

use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;

/// Mode id meaning "no language", i.e. plain text.
pub const PLAIN_TEXT: &str = "null";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageMode {
    pub name: &'static str,
    pub mode: &'static str,
    pub mime: &'static str,
    pub extensions: &'static [&'static str],
    pub file_names: &'static [&'static str],
}

impl LanguageMode {
    /// Content type used when saving a document in this mode.
    pub fn content_type(&self) -> String {
        format!("{}; charset=utf-8", self.mime)
    }
}

macro_rules! modes {
    ($( $name:literal, $mode:literal, $mime:literal, [$($ext:literal),*], [$($file:literal),*]; )*) => {
        &[$(LanguageMode {
            name: $name,
            mode: $mode,
            mime: $mime,
            extensions: &[$($ext),*],
            file_names: &[$($file),*],
        }),*]
    };
}

static LANGUAGE_MODES: &[LanguageMode] = modes! {
    "Plain Text", "null", "text/plain", ["txt", "text", "conf", "def", "list", "log"], [];
    "C", "clike", "text/x-csrc", ["c", "h", "ino"], [];
    "C++", "text/x-c++src", "text/x-c++src", ["cpp", "c++", "cc", "cxx", "hpp", "h++", "hh", "hxx"], [];
    "C#", "text/x-csharp", "text/x-csharp", ["cs"], [];
    "CSS", "css", "text/css", ["css"], [];
    "Dockerfile", "dockerfile", "text/x-dockerfile", [], ["Dockerfile"];
    "Go", "go", "text/x-go", ["go"], [];
    "HTML", "htmlmixed", "text/html", ["html", "htm", "handlebars", "hbs"], [];
    "Java", "text/x-java", "text/x-java", ["java"], [];
    "JavaScript", "javascript", "text/javascript", ["js", "mjs", "cjs"], [];
    "JSON", "application/json", "application/json", ["json", "map"], [];
    "Markdown", "markdown", "text/x-markdown", ["markdown", "md", "mkd"], [];
    "Python", "python", "text/x-python", ["py", "pyw", "pyi"], ["BUCK", "BUILD"];
    "Rust", "rust", "text/x-rustsrc", ["rs"], [];
    "Shell", "shell", "text/x-sh", ["sh", "ksh", "bash"], ["PKGBUILD"];
    "SQL", "sql", "text/x-sql", ["sql"], [];
    "TOML", "toml", "text/x-toml", ["toml"], [];
    "VBScript", "vbscript", "text/vbscript", ["vbs"], [];
    "XML", "xml", "application/xml", ["xml", "xsl", "xsd", "svg"], [];
    "YAML", "yaml", "text/x-yaml", ["yaml", "yml"], [];
};

pub fn language_modes() -> &'static [LanguageMode] {
    LANGUAGE_MODES
}

pub fn find_by_mode(mode: &str) -> Option<&'static LanguageMode> {
    LANGUAGE_MODES.iter().find(|m| m.mode == mode)
}

/// Guess the mode for a file name, first by exact name then by extension.
pub fn find_by_file_name(file_name: &str) -> Option<&'static LanguageMode> {
    let path = Path::new(file_name);
    let base = path.file_name().and_then(|s| s.to_str()).unwrap_or(file_name);

    if let Some(mode) = LANGUAGE_MODES.iter().find(|m| m.file_names.contains(&base)) {
        return Some(mode);
    }

    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    LANGUAGE_MODES
        .iter()
        .find(|m| m.extensions.contains(&ext.as_str()))
}

/// Embedded `<script type=...>` handling for the mixed HTML mode.
#[derive(Debug)]
pub struct ScriptType {
    pub matches: Regex,
    /// `None` leaves the block to the surrounding HTML mode.
    pub mode: Option<&'static str>,
}

#[derive(Debug)]
pub struct MixedMode {
    pub name: &'static str,
    pub script_types: Vec<ScriptType>,
}

impl MixedMode {
    fn html() -> Self {
        Self {
            name: "htmlmixed",
            script_types: vec![
                ScriptType {
                    matches: Regex::new(r"(?i)/x-handlebars-template|/x-mustache")
                        .expect("template pattern is valid"),
                    mode: None,
                },
                ScriptType {
                    matches: Regex::new(r"(?i)(text|application)/(x-)?vb(a|script)")
                        .expect("vbscript pattern is valid"),
                    mode: Some("vbscript"),
                },
            ],
        }
    }

    /// Mode for a script block of the given MIME type.
    ///
    /// Returns `None` when no rule matches, `Some(None)` when a rule keeps the
    /// block in HTML mode, and `Some(Some(mode))` otherwise.
    pub fn mode_for_script_type(&self, mime: &str) -> Option<Option<&'static str>> {
        self.script_types
            .iter()
            .find(|t| t.matches.is_match(mime))
            .map(|t| t.mode)
    }
}

fn html_mixed() -> &'static MixedMode {
    static HTML_MIXED: OnceLock<MixedMode> = OnceLock::new();
    HTML_MIXED.get_or_init(MixedMode::html)
}

/// Mode configuration handed to the editing widget.
#[derive(Debug, Clone, Copy)]
pub enum ModeOption {
    Named(&'static str),
    Mixed(&'static MixedMode),
}

impl ModeOption {
    pub fn for_mode(mode: &'static LanguageMode) -> Self {
        if mode.mode == "htmlmixed" {
            ModeOption::Mixed(html_mixed())
        } else {
            ModeOption::Named(mode.mode)
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ModeOption::Named(name) => name,
            ModeOption::Mixed(mixed) => mixed.name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_by_mode() {
        assert_eq!(find_by_mode("rust").unwrap().name, "Rust");
        assert_eq!(find_by_mode(PLAIN_TEXT).unwrap().mime, "text/plain");
        assert!(find_by_mode("cobol").is_none());
    }

    #[test]
    fn test_find_by_file_name() {
        assert_eq!(find_by_file_name("main.rs").unwrap().mode, "rust");
        assert_eq!(find_by_file_name("INDEX.HTML").unwrap().mode, "htmlmixed");
        assert_eq!(find_by_file_name("/srv/app/Dockerfile").unwrap().mode, "dockerfile");
        assert!(find_by_file_name("notes").is_none());
        assert!(find_by_file_name("archive.xyz").is_none());
    }

    #[test]
    fn test_mode_ids_are_unique() {
        let modes = language_modes();
        for (i, a) in modes.iter().enumerate() {
            assert!(modes[i + 1..].iter().all(|b| b.mode != a.mode), "{}", a.mode);
        }
    }

    #[test]
    fn test_content_type() {
        assert_eq!(
            find_by_mode("javascript").unwrap().content_type(),
            "text/javascript; charset=utf-8"
        );
    }

    #[test]
    fn test_html_uses_mixed_mode() {
        let option = ModeOption::for_mode(find_by_mode("htmlmixed").unwrap());
        let ModeOption::Mixed(mixed) = option else {
            panic!("expected mixed mode, got {:?}", option);
        };
        assert_eq!(mixed.mode_for_script_type("text/x-handlebars-template"), Some(None));
        assert_eq!(mixed.mode_for_script_type("text/X-Mustache"), Some(None));
        assert_eq!(mixed.mode_for_script_type("text/vbscript"), Some(Some("vbscript")));
        assert_eq!(mixed.mode_for_script_type("application/x-vba"), Some(Some("vbscript")));
        assert_eq!(mixed.mode_for_script_type("text/javascript"), None);
    }

    #[test]
    fn test_other_modes_are_named() {
        let option = ModeOption::for_mode(find_by_mode("python").unwrap());
        assert!(matches!(option, ModeOption::Named("python")));
        assert_eq!(option.name(), "python");
    }
}
