//! # Trip Engine
//!
//! Stateful facade over the pure scheduling pipeline, composed of focused
//! subcomponents:
//! - `StopStore` - stop CRUD operations
//! - `ActivityStore` - activity CRUD operations
//! - `ScheduleCache` - grouping/conflict derivation with dirty tracking
//!
//! Inputs are mutated through the engine so the cache knows when the
//! grouping and conflict scan must rerun; views always see current data but
//! never trigger redundant recomputation.

pub mod activity_store;
pub mod schedule_cache;
pub mod stop_store;

pub use activity_store::ActivityStore;
pub use schedule_cache::ScheduleCache;
pub use stop_store::StopStore;

use chrono::NaiveDate;

use crate::conflict::ConflictPair;
use crate::error::{OptionExt, Result, ScheduleError};
use crate::grouping::StopGroups;
use crate::views::daily::{day_view, DayView};
use crate::views::overview::{overview, OverviewTimeline};
use crate::views::weekly::{week_view, WeekGrid};
use crate::{Activity, Itinerary, Stop};

/// Trip engine combining the stores with cached derivations.
#[derive(Debug, Default)]
pub struct TripEngine {
    stops: StopStore,
    activities: ActivityStore,
    cache: ScheduleCache,
    itinerary: Option<Itinerary>,
}

impl TripEngine {
    /// Create a new empty engine.
    pub fn new() -> Self {
        Self {
            stops: StopStore::new(),
            activities: ActivityStore::new(),
            cache: ScheduleCache::new(),
            itinerary: None,
        }
    }

    // ========================================================================
    // Input Management
    // ========================================================================

    /// Set the itinerary bounding this trip.
    ///
    /// Rejects ranges that end before they start.
    pub fn set_itinerary(&mut self, itinerary: Itinerary) -> Result<()> {
        if itinerary.end_date < itinerary.start_date {
            return Err(ScheduleError::InvalidDateRange {
                start: itinerary.start_date,
                end: itinerary.end_date,
            });
        }
        self.itinerary = Some(itinerary);
        Ok(())
    }

    /// The current itinerary, if one has been set.
    pub fn itinerary(&self) -> Option<&Itinerary> {
        self.itinerary.as_ref()
    }

    /// Add or replace a stop.
    ///
    /// Rejects stops whose departure precedes their arrival.
    pub fn add_stop(&mut self, stop: Stop) -> Result<()> {
        if stop.departure_date < stop.arrival_date {
            return Err(ScheduleError::InvalidDateRange {
                start: stop.arrival_date,
                end: stop.departure_date,
            });
        }
        self.stops.add(stop);
        self.cache.mark_dirty();
        Ok(())
    }

    /// Remove a stop by id.
    ///
    /// Its activities stay in the store but drop out of every derivation
    /// until the stop returns (tolerated by omission).
    pub fn remove_stop(&mut self, id: &str) -> Option<Stop> {
        let removed = self.stops.remove(id);
        if removed.is_some() {
            self.cache.mark_dirty();
        }
        removed
    }

    /// Add or replace an activity.
    pub fn add_activity(&mut self, activity: Activity) {
        self.activities.add(activity);
        self.cache.mark_dirty();
    }

    /// Remove an activity by id.
    pub fn remove_activity(&mut self, id: &str) -> Option<Activity> {
        let removed = self.activities.remove(id);
        if removed.is_some() {
            self.cache.mark_dirty();
        }
        removed
    }

    /// Clear all stops, activities, and derived data.
    pub fn clear(&mut self) {
        self.stops.clear();
        self.activities.clear();
        self.cache.clear();
        self.itinerary = None;
    }

    /// Read access to the stop store.
    pub fn stops(&self) -> &StopStore {
        &self.stops
    }

    /// Read access to the activity store.
    pub fn activities(&self) -> &ActivityStore {
        &self.activities
    }

    // ========================================================================
    // Derivations (delegate to the pure pipeline)
    // ========================================================================

    /// Per-stop activity groups, recomputing if inputs changed.
    pub fn groups(&mut self) -> &StopGroups {
        self.ensure_computed();
        self.cache.groups()
    }

    /// Conflict pairs, recomputing if inputs changed.
    pub fn conflicts(&mut self) -> &[ConflictPair] {
        self.ensure_computed();
        self.cache.conflicts()
    }

    /// A known stop's chronologically sorted activities.
    ///
    /// Errors when the stop id is not in the store; a known stop with no
    /// activities yields an empty list.
    pub fn stop_schedule(&mut self, stop_id: &str) -> Result<Vec<Activity>> {
        self.ensure_computed();
        self.stops.get(stop_id).ok_or_unknown_stop(stop_id)?;
        Ok(self.cache.groups().get(stop_id).cloned().unwrap_or_default())
    }

    /// Derive the daily view for `date`.
    pub fn day_view(&mut self, date: NaiveDate) -> DayView {
        self.ensure_computed();
        let stops = self.stops.in_display_order();
        day_view(date, &stops, self.cache.groups(), self.cache.conflicts())
    }

    /// Derive the weekly grid starting at `start`.
    ///
    /// `today` drives the per-cell highlight flag; passing it in keeps the
    /// engine clock-free.
    pub fn week_view(&mut self, start: NaiveDate, today: NaiveDate) -> WeekGrid {
        self.ensure_computed();
        let stops = self.stops.in_display_order();
        week_view(
            start,
            today,
            &stops,
            self.cache.groups(),
            self.cache.conflicts(),
        )
    }

    /// Derive the full-trip overview. Requires an itinerary to be set.
    pub fn overview(&mut self) -> Result<OverviewTimeline> {
        self.ensure_computed();
        let itinerary = self
            .itinerary
            .as_ref()
            .ok_or(ScheduleError::MissingItinerary)?;
        let stops = self.stops.in_display_order();
        Ok(overview(
            itinerary,
            &stops,
            self.cache.groups(),
            self.cache.conflicts(),
        ))
    }

    fn ensure_computed(&mut self) {
        self.cache.ensure_computed(&self.stops, &self.activities);
    }
}
