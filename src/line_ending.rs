// line_ending.rs - Line separators offered when saving

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum LineEnding {
    /// U+000D -- CarriageReturn
    Cr,
    /// U+000A -- LineFeed
    Lf,
    /// CarriageReturn followed by LineFeed.
    #[default]
    Crlf,
}

impl LineEnding {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Cr => "\r",
            Self::Lf => "\n",
            Self::Crlf => "\r\n",
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Self::Cr => "CR",
            Self::Lf => "LF",
            Self::Crlf => "CRLF",
        }
    }
}

impl fmt::Display for LineEnding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LineEnding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "CR" => Ok(Self::Cr),
            "LF" => Ok(Self::Lf),
            "CRLF" => Ok(Self::Crlf),
            other => Err(format!("unknown line ending '{}' (expected CR, LF or CRLF)", other)),
        }
    }
}

impl TryFrom<String> for LineEnding {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
