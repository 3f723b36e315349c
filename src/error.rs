use thiserror::Error;

/// Errors that can occur while browsing recipes
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to reach the recipe API
    #[error("Network request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// Recipe API answered with a non-success status
    #[error("Recipe API returned status {0}")]
    Api(reqwest::StatusCode),

    /// Malformed API payload
    #[error("Failed to parse API payload: {0}")]
    Parse(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Local storage read or write failed
    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// A command needed a loaded recipe and none was loaded
    #[error("No recipe loaded")]
    NoRecipeLoaded,

    /// A command needed search results and none were present
    #[error("No search results")]
    NoSearchResults,
}
