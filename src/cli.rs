use crate::line_ending::LineEnding;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "edoc")]
#[command(version = "0.1.0")]
#[command(about = "A plain-text/code editor shell: rulers, size labels and line endings")]
pub struct CliArgs {
    /// Config file (defaults to $XDG_CONFIG_HOME/edoc/config.toml)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the contrasting ruler color for a background color
    Ruler {
        /// `#rgb`, `#rrggbb` or `rgb(r, g, b)`
        color: String,
    },
    /// Print the status bar label for a byte count
    Size { bytes: u64 },
    /// Open a file and print its status line
    Status {
        file: PathBuf,
        /// Theme to apply before reporting
        #[arg(long, short = 'T')]
        theme: Option<String>,
        /// Language mode, overriding detection by file name
        #[arg(long, short = 'l')]
        language: Option<String>,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Re-save a file with a different line ending
    Convert {
        file: PathBuf,
        #[arg(long, short = 'o')]
        output: PathBuf,
        /// CR, LF or CRLF (defaults to the configured line ending)
        #[arg(long, short = 'e')]
        line_ending: Option<LineEnding>,
    },
    /// List available themes and their ruler colors
    Themes,
    /// List available language modes
    Languages,
}

pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}
