//! # Tripline
//!
//! Itinerary scheduling engine for travel-planning applications.
//!
//! This library provides:
//! - Per-stop activity grouping with chronological ordering
//! - Scheduling-conflict detection between time-boxed activities
//! - Daily, weekly, and full-trip overview schedule projections
//! - A stateful trip engine that caches derivations between input changes
//!
//! The core is a pure function pipeline: group activities by stop, scan each
//! group for overlapping pairs, then project the result into whichever view
//! the caller asked for. Nothing here performs I/O or mutates its inputs, so
//! every derivation is safe to run concurrently from multiple rendering
//! contexts without synchronization.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use tripline::{day_view, detect_conflicts, group_by_stop, Activity, Stop};
//!
//! let arrival = NaiveDate::from_ymd_opt(2024, 6, 2).unwrap();
//! let departure = NaiveDate::from_ymd_opt(2024, 6, 5).unwrap();
//! let stop = Stop::new("stop-1", "trip-1", "Paris", arrival, departure, 0);
//!
//! let museum = Activity::new("act-1", "stop-1", "Louvre", "sightseeing").with_times(
//!     arrival.and_hms_opt(10, 0, 0).unwrap(),
//!     arrival.and_hms_opt(12, 0, 0).unwrap(),
//! );
//! let lunch = Activity::new("act-2", "stop-1", "Bistro Chez Paul", "food").with_times(
//!     arrival.and_hms_opt(11, 0, 0).unwrap(),
//!     arrival.and_hms_opt(13, 0, 0).unwrap(),
//! );
//!
//! let groups = group_by_stop(&[museum, lunch]);
//! let conflicts = detect_conflicts(&groups);
//! assert_eq!(conflicts.len(), 1); // museum and lunch overlap 11:00-12:00
//!
//! let day = day_view(arrival, &[stop], &groups, &conflicts);
//! assert_eq!(day.entries.len(), 2);
//! assert!(day.entries.iter().all(|e| e.conflicted));
//! ```

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

// Unified error handling
pub mod error;
pub use error::{OptionExt, Result, ScheduleError};

// Activity grouping by stop
pub mod grouping;
pub use grouping::{group_by_stop, StopGroups};

// Scheduling-conflict detection
pub mod conflict;
pub use conflict::{detect_conflicts, has_conflict, ConflictPair};

// Schedule projections (daily / weekly / overview) and navigation
pub mod views;
pub use views::{
    day_view, overview, week_view, DayCell, DayView, OverviewTimeline, ScheduleEntry, StopSummary,
    ViewMode, WeekGrid, WEEK_LENGTH,
};

// Stateful engine facade with cached derivations
pub mod engine;
pub use engine::{ActivityStore, ScheduleCache, StopStore, TripEngine};

// Synthetic trip generation for tests and benchmarks
pub mod synthetic;

// ============================================================================
// Core Types
// ============================================================================

/// A trip's top-level identity and inclusive date range.
///
/// The range bounds all of the trip's stops; it is owned and validated
/// upstream and treated as immutable input here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Itinerary {
    /// Unique identifier for the itinerary
    pub id: String,
    /// Display title
    pub title: String,
    /// First day of the trip (inclusive)
    pub start_date: NaiveDate,
    /// Last day of the trip (inclusive)
    pub end_date: NaiveDate,
}

impl Itinerary {
    /// Create a new itinerary.
    pub fn new(id: &str, title: &str, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            start_date,
            end_date,
        }
    }

    /// Total trip length in days.
    pub fn duration_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days().abs()
    }

    /// Check whether a date falls within the trip range (inclusive).
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}

/// A destination visited during a trip, with its own arrival/departure range.
///
/// Arrival and departure are day-granularity calendar dates; time of day is
/// irrelevant for stop containment. `order_index` is the persisted display
/// order, which is not necessarily chronological - the overview re-sorts by
/// arrival date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stop {
    /// Unique identifier for the stop
    pub id: String,
    /// Owning itinerary
    pub itinerary_id: String,
    /// Destination name for display
    pub destination_name: String,
    /// First day at the destination (inclusive)
    pub arrival_date: NaiveDate,
    /// Last day at the destination (inclusive)
    pub departure_date: NaiveDate,
    /// Persisted display order, independent of chronology
    pub order_index: u32,
}

impl Stop {
    /// Create a new stop.
    pub fn new(
        id: &str,
        itinerary_id: &str,
        destination_name: &str,
        arrival_date: NaiveDate,
        departure_date: NaiveDate,
        order_index: u32,
    ) -> Self {
        Self {
            id: id.to_string(),
            itinerary_id: itinerary_id.to_string(),
            destination_name: destination_name.to_string(),
            arrival_date,
            departure_date,
            order_index,
        }
    }

    /// Check whether the traveler is at this stop on `date`.
    ///
    /// Containment is inclusive at both ends and compares pure calendar
    /// dates, so no time-of-day or DST artifacts can leak in.
    pub fn is_active_on(&self, date: NaiveDate) -> bool {
        self.arrival_date <= date && date <= self.departure_date
    }
}

/// A scheduled or unscheduled event tied to one stop.
///
/// The time box is optional: an activity missing either timestamp is
/// untimed and can never participate in a conflict. Absent timestamps are
/// represented as `None`, never as sentinel values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    /// Unique identifier for the activity
    pub id: String,
    /// Owning stop
    pub stop_id: String,
    /// Display name
    pub name: String,
    /// Category label (e.g. "sightseeing", "food")
    pub category: String,
    /// Scheduled start, if timed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<NaiveDateTime>,
    /// Scheduled end, if timed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<NaiveDateTime>,
    /// Estimated cost in `currency` units
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_cost: Option<f64>,
    /// ISO currency code for the estimated cost
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

impl Activity {
    /// Create a new untimed activity.
    pub fn new(id: &str, stop_id: &str, name: &str, category: &str) -> Self {
        Self {
            id: id.to_string(),
            stop_id: stop_id.to_string(),
            name: name.to_string(),
            category: category.to_string(),
            start_time: None,
            end_time: None,
            estimated_cost: None,
            currency: None,
        }
    }

    /// Attach a time box.
    pub fn with_times(mut self, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        self.start_time = Some(start);
        self.end_time = Some(end);
        self
    }

    /// Attach a start time only, leaving the activity open-ended.
    pub fn with_start(mut self, start: NaiveDateTime) -> Self {
        self.start_time = Some(start);
        self
    }

    /// Attach an estimated cost.
    pub fn with_cost(mut self, estimated_cost: f64, currency: &str) -> Self {
        self.estimated_cost = Some(estimated_cost);
        self.currency = Some(currency.to_string());
        self
    }

    /// The complete time box, present only when both timestamps are set.
    pub fn time_box(&self) -> Option<(NaiveDateTime, NaiveDateTime)> {
        match (self.start_time, self.end_time) {
            (Some(start), Some(end)) => Some((start, end)),
            _ => None,
        }
    }

    /// Check whether the activity starts on the given calendar day.
    ///
    /// Untimed activities start on no day.
    pub fn starts_on(&self, date: NaiveDate) -> bool {
        self.start_time.is_some_and(|start| start.date() == date)
    }
}
