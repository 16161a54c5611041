//! Full-trip overview timeline.

use serde::{Deserialize, Serialize};

use crate::conflict::{has_conflict, ConflictPair};
use crate::grouping::StopGroups;
use crate::{Activity, Itinerary, Stop};

/// Per-stop summary for the overview timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StopSummary {
    pub stop: Stop,
    /// The stop's activities in chronological order
    pub activities: Vec<Activity>,
    pub activity_count: usize,
    /// How many of the stop's activities appear in a conflict pair
    pub conflicted_count: usize,
}

/// Trip-level rollup with stops ordered chronologically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverviewTimeline {
    /// Total trip length in days
    pub duration_days: i64,
    /// Number of stops on the trip
    pub destination_count: usize,
    /// Total number of activities across all stops
    pub activity_count: usize,
    /// Stops in ascending arrival-date order (not stored display order)
    pub stops: Vec<StopSummary>,
}

/// Derive the full-trip overview.
///
/// Stops are re-ordered by ascending arrival date; the persisted
/// `order_index` is a display concern elsewhere and is ignored here. The
/// per-stop activity lists are complete - truncating long lists for display
/// is the presentation layer's call, not part of the derivation.
pub fn overview(
    itinerary: &Itinerary,
    stops: &[Stop],
    groups: &StopGroups,
    conflicts: &[ConflictPair],
) -> OverviewTimeline {
    let mut ordered: Vec<Stop> = stops.to_vec();
    ordered.sort_by_key(|stop| stop.arrival_date);

    let summaries: Vec<StopSummary> = ordered
        .into_iter()
        .map(|stop| {
            let activities = groups.get(&stop.id).cloned().unwrap_or_default();
            let conflicted_count = activities
                .iter()
                .filter(|activity| has_conflict(conflicts, &activity.id))
                .count();
            StopSummary {
                activity_count: activities.len(),
                conflicted_count,
                activities,
                stop,
            }
        })
        .collect();

    OverviewTimeline {
        duration_days: itinerary.duration_days(),
        destination_count: summaries.len(),
        activity_count: summaries.iter().map(|s| s.activity_count).sum(),
        stops: summaries,
    }
}
