//! Cached grouping and conflict derivation.
//!
//! Tracks a dirty flag alongside the derived `(groups, conflicts)` pair so
//! the O(n²) conflict scan runs once per input change rather than once per
//! view render.

use log::warn;

use crate::conflict::{detect_conflicts, ConflictPair};
use crate::grouping::{group_by_stop, StopGroups};

use super::activity_store::ActivityStore;
use super::stop_store::StopStore;

/// Lazily recomputed per-stop groups and conflict set.
#[derive(Debug, Default)]
pub struct ScheduleCache {
    groups: StopGroups,
    conflicts: Vec<ConflictPair>,
    dirty: bool,
}

impl ScheduleCache {
    /// Create a new empty cache.
    pub fn new() -> Self {
        Self {
            groups: StopGroups::new(),
            conflicts: Vec::new(),
            dirty: false,
        }
    }

    /// Mark the derivation as needing recomputation.
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Check if the derivation needs recomputation.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Drop all derived data.
    pub fn clear(&mut self) {
        self.groups.clear();
        self.conflicts.clear();
        self.dirty = false;
    }

    /// Recompute groups and conflicts if any input changed since last call.
    ///
    /// Activities whose `stop_id` matches no stored stop are tolerated by
    /// omission: they are dropped from the snapshot (with a warning) and so
    /// never appear in any group, conflict pair, or view.
    pub fn ensure_computed(&mut self, stops: &StopStore, activities: &ActivityStore) {
        if !self.dirty {
            return;
        }

        // all() is id-ordered, so tie-breaking in the stable sort is
        // deterministic across recomputes
        let snapshot: Vec<_> = activities
            .all()
            .into_iter()
            .filter(|activity| {
                let known = stops.contains(&activity.stop_id);
                if !known {
                    warn!(
                        "activity {} references unknown stop {}; omitting from schedule",
                        activity.id, activity.stop_id
                    );
                }
                known
            })
            .collect();

        self.groups = group_by_stop(&snapshot);
        self.conflicts = detect_conflicts(&self.groups);
        self.dirty = false;
    }

    /// The cached per-stop groups.
    pub fn groups(&self) -> &StopGroups {
        &self.groups
    }

    /// The cached conflict pairs.
    pub fn conflicts(&self) -> &[ConflictPair] {
        &self.conflicts
    }
}
