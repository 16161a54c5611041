//! Scheduling-conflict detection.
//!
//! Finds pairs of activities within the same stop whose time boxes overlap.
//! Cross-stop pairs are never compared: a traveler cannot occupy two
//! destinations' activity slots at once, so conflicts are scoped to a shared
//! location.

use serde::{Deserialize, Serialize};

use crate::grouping::StopGroups;
use crate::Activity;

/// An unordered pair of overlapping activities within one stop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictPair {
    /// Stop both activities belong to
    pub stop_id: String,
    /// First member of the pair (group order)
    pub first: String,
    /// Second member of the pair
    pub second: String,
}

impl ConflictPair {
    /// Check whether an activity is a member of this pair.
    pub fn involves(&self, activity_id: &str) -> bool {
        self.first == activity_id || self.second == activity_id
    }
}

/// Check whether two activities overlap in time.
///
/// An activity missing either timestamp never overlaps anything. Intervals
/// that merely touch at an endpoint do not overlap: the comparison is
/// strict, `start1 < end2 && start2 < end1`.
pub fn overlaps(a: &Activity, b: &Activity) -> bool {
    match (a.time_box(), b.time_box()) {
        (Some((start_a, end_a)), Some((start_b, end_b))) => start_a < end_b && start_b < end_a,
        _ => false,
    }
}

/// Scan every stop's group for overlapping activity pairs.
///
/// Each unordered pair within a stop is examined exactly once. The scan is
/// O(n²) per stop, which is fine for per-stop activity counts in the tens;
/// very large inputs are already chunked by the grouping stage. Output order
/// is unspecified; callers needing display order sort independently.
pub fn detect_conflicts(groups: &StopGroups) -> Vec<ConflictPair> {
    let mut pairs = Vec::new();

    for (stop_id, activities) in groups {
        for i in 0..activities.len() {
            for j in (i + 1)..activities.len() {
                if overlaps(&activities[i], &activities[j]) {
                    pairs.push(ConflictPair {
                        stop_id: stop_id.clone(),
                        first: activities[i].id.clone(),
                        second: activities[j].id.clone(),
                    });
                }
            }
        }
    }

    pairs
}

/// Check whether an activity appears as either member of any conflict pair.
pub fn has_conflict(conflicts: &[ConflictPair], activity_id: &str) -> bool {
    conflicts.iter().any(|pair| pair.involves(activity_id))
}
