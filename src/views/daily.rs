//! Single-day schedule derivation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::conflict::{has_conflict, ConflictPair};
use crate::grouping::{compare_starts, StopGroups};
use crate::views::ScheduleEntry;
use crate::Stop;

/// One day's schedule: the stops active on the date and the activities
/// starting on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayView {
    pub date: NaiveDate,
    /// Stops whose arrival..departure range contains the date
    pub active_stops: Vec<Stop>,
    /// Activities starting on the date, sorted ascending by start time
    pub entries: Vec<ScheduleEntry>,
}

impl DayView {
    /// True when no stop is active on this date.
    ///
    /// Distinct from a day with active stops but nothing scheduled, where
    /// `no_stops()` is false and `entries` is empty.
    pub fn no_stops(&self) -> bool {
        self.active_stops.is_empty()
    }
}

/// Derive the schedule for a single date.
///
/// A stop is active when `arrival_date <= date <= departure_date`, compared
/// as pure calendar dates. Activities are drawn from each active stop's
/// group and kept when their start time falls on `date` (calendar-day
/// equality, not a time-range check). The merged result is re-sorted by
/// start time; ties keep group order (stable sort).
pub fn day_view(
    date: NaiveDate,
    stops: &[Stop],
    groups: &StopGroups,
    conflicts: &[ConflictPair],
) -> DayView {
    let active_stops: Vec<Stop> = stops
        .iter()
        .filter(|stop| stop.is_active_on(date))
        .cloned()
        .collect();

    let mut entries = Vec::new();
    for stop in &active_stops {
        let Some(group) = groups.get(&stop.id) else {
            continue;
        };
        for activity in group {
            if activity.starts_on(date) {
                entries.push(ScheduleEntry {
                    conflicted: has_conflict(conflicts, &activity.id),
                    activity: activity.clone(),
                    stop: stop.clone(),
                });
            }
        }
    }

    // Groups are each sorted, but the merge across stops is not.
    entries.sort_by(|a, b| compare_starts(&a.activity, &b.activity));

    DayView {
        date,
        active_stops,
        entries,
    }
}
