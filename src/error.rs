//! Unified error handling for the engine boundary.
//!
//! The core derivations are total functions over well-formed input and never
//! fail; errors exist only where [`TripEngine`](crate::engine::TripEngine)
//! validates caller input or is asked for something it does not hold.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors produced at the engine boundary.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ScheduleError {
    /// A date range ends before it starts.
    #[error("invalid date range: {start} is after {end}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    /// The operation needs an itinerary but none has been set.
    #[error("no itinerary set")]
    MissingItinerary,

    /// A lookup referenced a stop id that is not in the store.
    #[error("unknown stop: {stop_id}")]
    UnknownStop { stop_id: String },
}

/// Convenience result alias for engine operations.
pub type Result<T> = std::result::Result<T, ScheduleError>;

/// Extension trait for converting `Option` lookups into engine errors.
pub trait OptionExt<T> {
    /// Convert `None` into [`ScheduleError::UnknownStop`].
    fn ok_or_unknown_stop(self, stop_id: &str) -> Result<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_unknown_stop(self, stop_id: &str) -> Result<T> {
        self.ok_or_else(|| ScheduleError::UnknownStop {
            stop_id: stop_id.to_string(),
        })
    }
}
