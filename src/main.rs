//! slidedeck - A keyboard-driven slide presenter for the terminal.
//!
//! Usage:
//!   deck [FILE]              Present a deck (bundled sample when omitted)
//!   deck outline [FILE]      List slides with their progress
//!   deck check FILE          Validate a deck file
//!   deck export [FILE]       Export a deck to JSON
//!   deck --help              Show help

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{Context, Result, bail};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use slidedeck_core::Deck;
use slidedeck_tui::{ThemeVariant, TuiConfig};

const LOG_FILE: &str = "slidedeck.log";
const DEFAULT_LOG_FILTER: &str = "slidedeck=info,warn";

#[derive(Parser)]
#[command(
    name = "deck",
    version,
    about = "A keyboard-driven slide presenter for the terminal",
    long_about = "slidedeck presents TOML or JSON slide decks in the terminal.\n\n\
                  Launch a presentation by running `deck [FILE]`, or use \
                  subcommands to inspect and convert decks."
)]
struct Cli {
    /// Deck file to present (defaults to the bundled sample deck)
    file: Option<PathBuf>,

    /// Slide to open on: a 1-based number or a slide id
    #[arg(short, long)]
    start: Option<String>,

    /// Chrome theme (overrides the saved setting)
    #[arg(short, long)]
    theme: Option<ThemeVariant>,

    /// Hide the slide picker strip
    #[arg(long)]
    no_picker: bool,

    /// Do not capture the mouse
    #[arg(long)]
    no_mouse: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// List slides with positions and progress
    Outline {
        /// Deck file (defaults to the bundled sample deck)
        file: Option<PathBuf>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Validate a deck file
    Check {
        /// Deck file to validate
        file: PathBuf,
    },

    /// Export a deck to JSON
    Export {
        /// Deck file (defaults to the bundled sample deck)
        file: Option<PathBuf>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let _guard = init_logging()?;

    let cli = Cli::parse();

    match cli.command {
        Some(Command::Outline { file, format }) => {
            run_outline(file.as_deref(), format)?;
        }
        Some(Command::Check { file }) => {
            run_check(&file)?;
        }
        Some(Command::Export { file, output }) => {
            run_export(file.as_deref(), output)?;
        }
        None => {
            let deck = load_deck(cli.file.as_deref())?;
            let start = resolve_start(&deck, cli.start.as_deref())?;

            let mut config = TuiConfig::default().with_start(start);
            if let Some(theme) = cli.theme {
                config = config.with_theme(theme);
            }
            if cli.no_picker {
                config = config.with_picker(false);
            }
            if cli.no_mouse {
                config = config.with_mouse(false);
            }
            slidedeck_tui::run(deck, config)?;
        }
    }

    Ok(())
}

/// Log to a file; the terminal belongs to the presentation.
fn init_logging() -> Result<WorkerGuard> {
    let log_dir = std::env::var_os("SLIDEDECK_LOG_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(std::env::temp_dir);

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(LOG_FILE)
        .build(&log_dir)
        .wrap_err_with(|| format!("Cannot open log file in {}", log_dir.display()))?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_env("SLIDEDECK_LOG")
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .try_init()
        .context("Failed to install log subscriber")?;

    Ok(guard)
}

fn load_deck(file: Option<&Path>) -> Result<Deck> {
    match file {
        Some(path) => {
            Deck::load(path).wrap_err_with(|| format!("Failed to load {}", path.display()))
        }
        None => Deck::sample().context("Bundled sample deck is invalid"),
    }
}

/// Zero-based start position for `--start`, given as a 1-based number or
/// a slide id. Numbers out of range are clamped by the navigator.
fn resolve_start(deck: &Deck, start: Option<&str>) -> Result<i64> {
    let Some(start) = start else {
        return Ok(0);
    };

    if let Ok(number) = start.parse::<i64>() {
        return Ok(number.saturating_sub(1));
    }

    match deck.position_of(start) {
        Some(position) => Ok(i64::try_from(position).unwrap_or(i64::MAX)),
        None => bail!("No slide with id `{start}`"),
    }
}

/// Print every slide with the progress shown when it is displayed.
fn run_outline(file: Option<&Path>, format: OutputFormat) -> Result<()> {
    let deck = load_deck(file)?;
    let mut navigator = deck.navigator();

    let rows: Vec<_> = deck
        .slides()
        .iter()
        .enumerate()
        .map(|(position, slide)| {
            navigator.go_to_slide(i64::try_from(position).unwrap_or(i64::MAX));
            (navigator.current().ordinal(), slide, navigator.progress())
        })
        .collect();

    match format {
        OutputFormat::Text => {
            println!("{}", deck.meta().heading());
            println!("{}", "─".repeat(60));

            let id_width = rows
                .iter()
                .map(|(_, slide, _)| slide.id.as_str().len())
                .max()
                .unwrap_or(0);
            for (ordinal, slide, progress) in &rows {
                println!(
                    " {ordinal:>3}  {:<id_width$}  {progress:>3}%  {}",
                    slide.id.as_str(),
                    slide.title
                );
            }
        }
        OutputFormat::Json => {
            let entries: Vec<_> = rows
                .iter()
                .map(|(ordinal, slide, progress)| {
                    serde_json::json!({
                        "position": ordinal,
                        "id": slide.id,
                        "title": slide.title,
                        "progress": progress,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
    }

    Ok(())
}

fn run_check(file: &Path) -> Result<()> {
    let deck = load_deck(Some(file))?;
    println!("{}: ok, {} slides", file.display(), deck.total());
    Ok(())
}

fn run_export(file: Option<&Path>, output: Option<PathBuf>) -> Result<()> {
    let deck = load_deck(file)?;
    let json = deck.to_json()?;

    match output {
        Some(output_path) => {
            std::fs::write(&output_path, json)
                .wrap_err_with(|| format!("Failed to write {}", output_path.display()))?;
            eprintln!("Exported to {}", output_path.display());
        }
        None => {
            println!("{}", json);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_start() {
        let deck = Deck::sample().unwrap();
        assert_eq!(resolve_start(&deck, None).unwrap(), 0);
        assert_eq!(resolve_start(&deck, Some("3")).unwrap(), 2);
        assert_eq!(resolve_start(&deck, Some("0")).unwrap(), -1);
        assert_eq!(resolve_start(&deck, Some("roadmap")).unwrap(), 3);
        assert!(resolve_start(&deck, Some("missing")).is_err());
    }

    #[test]
    fn test_cli_parses() {
        let cli = Cli::try_parse_from(["deck", "talk.toml", "--start", "roadmap", "-t", "light"])
            .unwrap();
        assert_eq!(cli.file, Some(PathBuf::from("talk.toml")));
        assert_eq!(cli.theme, Some(ThemeVariant::Light));
        assert!(cli.command.is_none());

        let cli = Cli::try_parse_from(["deck", "outline", "--format", "json"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Command::Outline {
                file: None,
                format: OutputFormat::Json
            })
        ));
    }
}
