//! Schedule projections over grouped trip data.
//!
//! Three read-only views share the same inputs (stops, per-stop groups,
//! conflict set): a single-day schedule, a 7-day grid, and a full-trip
//! overview. Each is an independent pure derivation; selecting one is a
//! caller choice, not a state the engine transitions between.

pub mod daily;
pub mod overview;
pub mod weekly;

pub use daily::{day_view, DayView};
pub use overview::{overview, OverviewTimeline, StopSummary};
pub use weekly::{week_view, DayCell, WeekGrid, WEEK_LENGTH};

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::{Activity, Itinerary, Stop};

/// A scheduled activity paired with the stop it belongs to, ready for
/// display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub activity: Activity,
    pub stop: Stop,
    /// Whether the activity is a member of any conflict pair
    pub conflicted: bool,
}

/// Caller-selected projection over the same trip data.
///
/// Carries the date-stepping rules for calendar navigation; the currently
/// selected mode itself is caller-side state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    Daily,
    Weekly,
    Overview,
}

impl ViewMode {
    /// Step the reference date backward: one day in daily mode, one week in
    /// weekly mode. The overview does not navigate and returns `None`.
    pub fn step_back(self, date: NaiveDate) -> Option<NaiveDate> {
        match self {
            ViewMode::Daily => Some(date - Duration::days(1)),
            ViewMode::Weekly => Some(date - Duration::days(7)),
            ViewMode::Overview => None,
        }
    }

    /// Step the reference date forward; see [`ViewMode::step_back`].
    pub fn step_forward(self, date: NaiveDate) -> Option<NaiveDate> {
        match self {
            ViewMode::Daily => Some(date + Duration::days(1)),
            ViewMode::Weekly => Some(date + Duration::days(7)),
            ViewMode::Overview => None,
        }
    }

    /// Whether stepping backward from `date` stays within the itinerary.
    pub fn can_step_back(self, date: NaiveDate, itinerary: &Itinerary) -> bool {
        match self {
            ViewMode::Daily => date > itinerary.start_date,
            ViewMode::Weekly => date - Duration::days(7) >= itinerary.start_date,
            ViewMode::Overview => false,
        }
    }

    /// Whether stepping forward from `date` stays within the itinerary.
    ///
    /// Weekly mode checks the start of the next week against the trip end,
    /// so the last partial week is still reachable.
    pub fn can_step_forward(self, date: NaiveDate, itinerary: &Itinerary) -> bool {
        match self {
            ViewMode::Daily => date < itinerary.end_date,
            ViewMode::Weekly => date + Duration::days(7) <= itinerary.end_date,
            ViewMode::Overview => false,
        }
    }
}
