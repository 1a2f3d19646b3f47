//! Suggestion sources.
//!
//! The widget only ever sees a `Vec<String>`; this module produces one from
//! the built-in demo list, a file, or standard input.

use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Demo suggestions used when no other source is given.
pub const CITIES: &[&str] = &[
    "New York",
    "Newark",
    "New Orleans",
    "Los Angeles",
    "San Francisco",
    "San Jose",
    "San Diego",
    "Seattle",
    "Bengaluru",
    "Mumbai",
    "Delhi",
    "Chennai",
    "Kolkata",
    "Pune",
    "Hyderabad",
    "Ahmedabad",
    "London",
    "Paris",
    "Berlin",
    "Tokyo",
];

/// Path that selects standard input instead of a file.
pub const STDIN_PATH: &str = "-";

#[derive(Debug, thiserror::Error)]
pub enum SuggestionsError {
    #[error("Failed to read suggestions from '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// The demo city list as owned strings.
pub fn cities() -> Vec<String> {
    CITIES.iter().map(|s| s.to_string()).collect()
}

/// Read one suggestion per line. Surrounding whitespace is trimmed and blank
/// lines are skipped; order is preserved.
pub fn from_reader<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut suggestions = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            suggestions.push(trimmed.to_string());
        }
    }
    Ok(suggestions)
}

/// Load suggestions from `path`, or from stdin when `path` is `-`.
pub fn load(path: &Path) -> Result<Vec<String>, SuggestionsError> {
    let to_error = |source| SuggestionsError::Io {
        path: path.to_path_buf(),
        source,
    };

    let suggestions = if path.as_os_str() == STDIN_PATH {
        from_reader(io::stdin().lock()).map_err(to_error)?
    } else {
        let file = std::fs::File::open(path).map_err(to_error)?;
        from_reader(BufReader::new(file)).map_err(to_error)?
    };

    tracing::debug!(
        "Loaded {} suggestions from {}",
        suggestions.len(),
        path.display()
    );
    Ok(suggestions)
}
