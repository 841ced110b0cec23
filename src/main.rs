use anyhow::{Context, Result};
use edoc::cli::{self, CliCommand};
use edoc::config::EdocConfig;
use edoc::language;
use edoc::session::EditorSession;
use edoc::size::format_size;
use edoc::theme::{Ruler, ThemeRegistry};
use tokio::runtime::Handle;

/// Application entry point: parse command-line arguments, initialize logging, load the
/// configuration and run the requested subcommand.
///
/// Errors are reported on stderr and the process exits with status 1.
#[tokio::main]
async fn main() {
    let args = cli::parse_args();

    // Initialize logger (set RUST_LOG env var to control verbosity)
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    if let Err(e) = run(args).await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run(args: cli::CliArgs) -> Result<()> {
    let config = EdocConfig::load(args.config.as_deref()).context("loading configuration")?;

    match args.command {
        CliCommand::Ruler { color } => {
            let background = edoc::color::normalize(&color)?;
            let ruler = Ruler::for_background(background.as_str(), config.ruler_column)?;
            println!("background {}", background);
            println!("ruler      {}", ruler.color);
        }
        CliCommand::Size { bytes } => {
            println!("{}", format_size(bytes));
        }
        CliCommand::Status {
            file,
            theme,
            language,
            json,
        } => {
            let mut session = EditorSession::new(config, Handle::current())?;
            session
                .open_file(&file)
                .await
                .with_context(|| format!("opening {}", file.display()))?;
            if let Some(theme) = theme {
                session.set_theme(&theme)?;
            }
            if let Some(mode) = language {
                session.set_language(&mode)?;
            }

            let status = session.status();
            if json {
                println!("{}", serde_json::to_string_pretty(&status)?);
            } else {
                println!("{}", status);
            }
            session.close();
        }
        CliCommand::Convert {
            file,
            output,
            line_ending,
        } => {
            let line_ending = line_ending.unwrap_or(config.line_ending);
            let mut session = EditorSession::new(config, Handle::current())?;
            session
                .open_file(&file)
                .await
                .with_context(|| format!("opening {}", file.display()))?;
            let saved = session
                .save_as(&output, line_ending)
                .await
                .with_context(|| format!("saving {}", output.display()))?;
            println!(
                "wrote {} ({}, {}, {})",
                saved.path.display(),
                format_size(saved.bytes_written as u64),
                line_ending,
                saved.content_type
            );
            session.close();
        }
        CliCommand::Themes => {
            let registry = ThemeRegistry::new(&config.themes);
            println!("Available themes:");
            for theme in registry.themes() {
                match Ruler::for_background(&theme.background, config.ruler_column) {
                    Ok(ruler) => println!("  {:<12} ruler {}", theme.name, ruler.color),
                    Err(e) => {
                        log::warn!("theme {}: {}", theme.name, e);
                        println!("  {:<12} (invalid background {})", theme.name, theme.background);
                    }
                }
            }
        }
        CliCommand::Languages => {
            println!("Available language modes:");
            for mode in language::language_modes() {
                println!("  {:<18} {:<16} {}", mode.mode, mode.name, mode.mime);
            }
        }
    }

    Ok(())
}
