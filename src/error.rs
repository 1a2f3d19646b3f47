use thiserror::Error;

use crate::config::ConfigError;
use crate::suggestions::SuggestionsError;

#[derive(Debug, Error)]
pub enum AutocompleteError {
    /// Io Error
    #[error("IoError: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Suggestions(#[from] SuggestionsError),
    #[error("Failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),
}
