use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(author, version = CliArgs::unstable_version(), about, long_about = None)]
#[command(name = "autocomplete")]
#[command(next_line_help = true)]
/// Pick a value from a list of suggestions as you type
pub struct CliArgs {
    /// File with one suggestion per line, `-` reads stdin.
    /// Defaults to a built-in list of cities.
    #[arg(long, short)]
    suggestions: Option<PathBuf>,
    /// Path to a config file, instead of the usual lookup.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Maximum number of suggestions shown at once.
    #[arg(long)]
    limit: Option<usize>,
    /// Only match suggestions that start with the query.
    #[arg(long, default_value_t = false)]
    prefix: bool,
    /// Print the suggestions matching this query and exit.
    #[arg(long, short)]
    query: Option<String>,
    /// Output format for the result.
    #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
    format: OutputFormat,
    /// Never start the interactive picker.
    #[arg(long, default_value_t = false)]
    non_interactive: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// One value per line
    #[default]
    Plain,
    Json,
}

impl CliArgs {
    /// Surface current version together with the current git revision and date, if available
    fn unstable_version() -> &'static str {
        const VERSION: &str = env!("CARGO_PKG_VERSION");
        let date = option_env!("GIT_DATE").unwrap_or("no_date");
        let rev = option_env!("GIT_REV").unwrap_or("no_rev");
        // This is a memory leak, only use sparingly.
        Box::leak(format!("{VERSION} - {date} - {rev}").into_boxed_str())
    }

    pub fn suggestions(&self) -> Option<&PathBuf> {
        self.suggestions.as_ref()
    }

    pub fn config(&self) -> Option<&PathBuf> {
        self.config.as_ref()
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    pub fn prefix(&self) -> bool {
        self.prefix
    }

    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn non_interactive(&self) -> bool {
        self.non_interactive
    }
}
