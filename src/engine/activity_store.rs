//! Activity storage.
//!
//! CRUD for a trip's activities, keyed by activity id, with per-stop
//! listing for callers that only care about one destination.

use std::collections::HashMap;

use crate::Activity;

/// Storage for a trip's activities.
#[derive(Debug, Default)]
pub struct ActivityStore {
    activities: HashMap<String, Activity>,
}

impl ActivityStore {
    /// Create a new empty activity store.
    pub fn new() -> Self {
        Self {
            activities: HashMap::new(),
        }
    }

    /// Insert or replace an activity. Returns the previous entry if one
    /// existed.
    pub fn add(&mut self, activity: Activity) -> Option<Activity> {
        self.activities.insert(activity.id.clone(), activity)
    }

    /// Remove an activity by id.
    pub fn remove(&mut self, id: &str) -> Option<Activity> {
        self.activities.remove(id)
    }

    /// Remove multiple activities.
    ///
    /// Returns the ids of activities that were actually removed.
    pub fn remove_many(&mut self, ids: &[String]) -> Vec<String> {
        let mut removed = Vec::new();
        for id in ids {
            if self.activities.remove(id).is_some() {
                removed.push(id.clone());
            }
        }
        removed
    }

    /// Clear all activities.
    pub fn clear(&mut self) {
        self.activities.clear();
    }

    /// Get an activity by id.
    pub fn get(&self, id: &str) -> Option<&Activity> {
        self.activities.get(id)
    }

    /// Check if an activity exists.
    pub fn contains(&self, id: &str) -> bool {
        self.activities.contains_key(id)
    }

    /// Get all activity ids.
    pub fn ids(&self) -> impl Iterator<Item = &String> {
        self.activities.keys()
    }

    /// Get all activities.
    pub fn iter(&self) -> impl Iterator<Item = &Activity> {
        self.activities.values()
    }

    /// Get the number of activities.
    pub fn len(&self) -> usize {
        self.activities.len()
    }

    /// Check if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    /// All activities owned by one stop, in id order.
    pub fn for_stop(&self, stop_id: &str) -> Vec<Activity> {
        let mut activities: Vec<Activity> = self
            .activities
            .values()
            .filter(|activity| activity.stop_id == stop_id)
            .cloned()
            .collect();
        activities.sort_by(|a, b| a.id.cmp(&b.id));
        activities
    }

    /// Flat snapshot of every activity, in id order.
    ///
    /// Id order keeps derivations deterministic: the stable grouping sort
    /// breaks ties by input order, and map iteration order would make that
    /// order vary run to run.
    pub fn all(&self) -> Vec<Activity> {
        let mut activities: Vec<Activity> = self.activities.values().cloned().collect();
        activities.sort_by(|a, b| a.id.cmp(&b.id));
        activities
    }
}
