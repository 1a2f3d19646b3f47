//! Application entry point shared by the binary and the integration tests.

use std::io::{self, Write};
use std::path::PathBuf;

use crate::cli::{CliArgs, OutputFormat};
use crate::config::Config;
use crate::error::AutocompleteError;
use crate::filter::{MatchMode, filter};
use crate::suggestions;
use crate::tui;

pub type Result<T> = std::result::Result<T, AutocompleteError>;

/// How a run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Exit {
    /// A value was picked in the interactive picker
    Selected(String),
    /// Matches for a query were printed
    Listed(usize),
    /// The picker was left without picking anything
    Cancelled,
}

/// Main entry point for the application.
///
/// Resolves configuration and suggestions, then either prints the matches
/// for a query or starts the interactive picker.
pub fn run(args: CliArgs) -> Result<Exit> {
    let config = resolve_config(&args)?;
    let suggestions = match args.suggestions() {
        Some(path) => suggestions::load(path)?,
        None => suggestions::cities(),
    };

    let interactive = tui::is_interactive(args.non_interactive()) && args.query().is_none();

    if !interactive {
        let query = args.query().unwrap_or_default();
        let matches: Vec<String> = filter(query, &suggestions, &config.filter.options())
            .into_iter()
            .map(|m| m.text)
            .collect();
        tracing::debug!("Query {query:?} matched {} suggestions", matches.len());
        write_matches(&mut io::stdout().lock(), &matches, args.format())?;
        return Ok(Exit::Listed(matches.len()));
    }

    let app = tui::App::new(&config, suggestions);
    match tui::run(app)? {
        Some(value) => {
            write_selection(&mut io::stdout().lock(), &value, args.format())?;
            Ok(Exit::Selected(value))
        }
        None => {
            tracing::debug!("Picker cancelled");
            Ok(Exit::Cancelled)
        }
    }
}

/// Load the config file and apply command line overrides on top.
pub fn resolve_config(args: &CliArgs) -> Result<Config> {
    let mut config = Config::load_from(args.config().map(PathBuf::as_path))?;
    if let Some(limit) = args.limit() {
        config.filter.limit = limit;
    }
    if args.prefix() {
        config.filter.mode = MatchMode::Prefix;
    }
    Ok(config)
}

pub fn write_matches<W: Write>(out: &mut W, matches: &[String], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Plain => {
            for item in matches {
                writeln!(out, "{item}")?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, matches)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

pub fn write_selection<W: Write>(out: &mut W, value: &str, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Plain => writeln!(out, "{value}")?,
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(value)?)?,
    }
    Ok(())
}
