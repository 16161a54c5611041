//! Activity grouping by stop.
//!
//! Partitions a flat activity list into per-stop groups, each sorted
//! chronologically. Grouping is the shared first stage for conflict
//! detection and every schedule view.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::Activity;

/// Mapping from stop id to that stop's chronologically sorted activities.
pub type StopGroups = HashMap<String, Vec<Activity>>;

/// Partition activities by their owning stop, sorting each group by start.
///
/// The partition is lossless: every input activity lands in exactly one
/// group (its own stop's), and nothing is duplicated. A stop with no
/// activities simply has no entry; callers should treat a missing key as an
/// empty group.
///
/// The per-group sort is stable: activities with equal start times, and
/// activities without a start time, keep their relative input order.
pub fn group_by_stop(activities: &[Activity]) -> StopGroups {
    let mut groups: StopGroups = HashMap::new();

    for activity in activities {
        groups
            .entry(activity.stop_id.clone())
            .or_default()
            .push(activity.clone());
    }

    for group in groups.values_mut() {
        sort_by_start(group);
    }

    groups
}

/// Stable chronological sort over activities.
///
/// An activity without a start time compares equal to everything, so the
/// stable sort leaves it where the input put it rather than inventing a
/// synthetic position.
pub fn sort_by_start(activities: &mut [Activity]) {
    activities.sort_by(|a, b| compare_starts(a, b));
}

/// Ordering on start times where a missing timestamp is a no-op comparison.
pub(crate) fn compare_starts(a: &Activity, b: &Activity) -> Ordering {
    match (a.start_time, b.start_time) {
        (Some(start_a), Some(start_b)) => start_a.cmp(&start_b),
        _ => Ordering::Equal,
    }
}
