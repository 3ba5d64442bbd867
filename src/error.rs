//! Error types for the fallible edges of the engine
//!
//! The layout and interaction core never fails; these errors only come from
//! ingesting items, parsing dates and loading settings.

use crate::types::ItemId;
use chrono::NaiveDate;
use thiserror::Error;

/// Errors that can occur while bringing data into the engine
#[derive(Error, Debug)]
pub enum TimelineError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error from serde_json
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A date string that is not `YYYY-MM-DD`
    #[error("Invalid date '{input}': expected YYYY-MM-DD")]
    InvalidDate { input: String },

    /// An item whose start lies after its end
    #[error("Item {id} starts on {start} but ends on {end}")]
    InvertedRange {
        id: ItemId,
        start: NaiveDate,
        end: NaiveDate,
    },

    /// Two items share an id
    #[error("Duplicate item id {0}")]
    DuplicateId(ItemId),

    /// Settings that would break the layout
    #[error("Invalid settings: {0}")]
    InvalidSettings(String),
}

/// Result type alias for engine operations that can fail
pub type TimelineResult<T> = Result<T, TimelineError>;
