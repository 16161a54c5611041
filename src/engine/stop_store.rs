//! Stop storage.
//!
//! CRUD for the destinations of a trip, keyed by stop id.

use std::collections::HashMap;

use crate::Stop;

/// Storage for a trip's stops.
#[derive(Debug, Default)]
pub struct StopStore {
    stops: HashMap<String, Stop>,
}

impl StopStore {
    /// Create a new empty stop store.
    pub fn new() -> Self {
        Self {
            stops: HashMap::new(),
        }
    }

    /// Insert or replace a stop. Returns the previous entry if one existed.
    pub fn add(&mut self, stop: Stop) -> Option<Stop> {
        self.stops.insert(stop.id.clone(), stop)
    }

    /// Remove a stop by id.
    pub fn remove(&mut self, id: &str) -> Option<Stop> {
        self.stops.remove(id)
    }

    /// Clear all stops.
    pub fn clear(&mut self) {
        self.stops.clear();
    }

    /// Get a stop by id.
    pub fn get(&self, id: &str) -> Option<&Stop> {
        self.stops.get(id)
    }

    /// Check if a stop exists.
    pub fn contains(&self, id: &str) -> bool {
        self.stops.contains_key(id)
    }

    /// Get all stop ids.
    pub fn ids(&self) -> impl Iterator<Item = &String> {
        self.stops.keys()
    }

    /// Get all stops.
    pub fn iter(&self) -> impl Iterator<Item = &Stop> {
        self.stops.values()
    }

    /// Get the number of stops.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Check if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Stops as a vector in ascending `order_index` order.
    ///
    /// This is the persisted display order; views that need chronology
    /// (the overview) re-sort by arrival date themselves.
    pub fn in_display_order(&self) -> Vec<Stop> {
        let mut stops: Vec<Stop> = self.stops.values().cloned().collect();
        stops.sort_by_key(|stop| stop.order_index);
        stops
    }
}
