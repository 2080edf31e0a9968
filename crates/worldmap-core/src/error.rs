// crates/worldmap-core/src/error.rs

//! # Error Taxonomy
//!
//! One error enum for the whole pipeline. Startup errors (geometry,
//! metrics, join) are fatal: a dashboard with partial data is worse than a
//! dashboard that refuses to start. `UnknownStyle` is the only recoverable
//! variant; the caller keeps the previously rendered figure.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, MapError>;

#[derive(Debug, Error)]
pub enum MapError {
    /// Input geometry whose shape we cannot interpret: an unknown geometry
    /// tag, a coordinate array of the wrong nesting depth, or an empty ring.
    #[error("malformed geometry for '{name}': {reason}")]
    MalformedGeometry { name: String, reason: String },

    /// The metric table has no rows for the configured year.
    #[error("no metric rows for year {0}")]
    MissingYear(i32),

    /// The inner join of geometry countries against (aliased) metric
    /// countries produced nothing.
    #[error("no countries matched between geometry and metric sources")]
    NoMatchingCountries,

    /// Style-switch input that is not in the configured style table.
    #[error("unknown style key: '{0}'")]
    UnknownStyle(String),

    /// A dataset file is missing or unreadable.
    #[error("not found: {0}")]
    NotFound(String),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("geometry parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("metric parse error: {0}")]
    Csv(#[from] csv::Error),
}

impl MapError {
    /// True for the single recoverable variant: the style switch rejects
    /// the change and the previous figure stays on screen.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, MapError::UnknownStyle(_))
    }
}
