//! Error types for benchbot-core (WASM-compatible)

use thiserror::Error;

/// Result type alias for benchbot-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that work in both native and WASM environments
#[derive(Error, Debug)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid benchmark date: {0}")]
    InvalidDate(String),

    #[error("Comparison has no entries for {side}")]
    EmptyComparison { side: &'static str },

    #[error("No benchmarked revisions are available")]
    NoRevisions,
}
