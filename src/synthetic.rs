//! Synthetic trip generation for tests and benchmarks.
//!
//! Produces deterministic itineraries with a configurable number of stops,
//! activities per stop, and overlap density, so benchmarks can exercise the
//! conflict scan at any size without fixture files.

use chrono::{Duration, NaiveDate};

use crate::{Activity, Itinerary, Stop};

/// Configuration for synthetic trip generation.
#[derive(Debug, Clone)]
pub struct SyntheticTripConfig {
    /// Number of stops on the trip
    pub stop_count: usize,
    /// Days spent at each stop (stops are back to back)
    pub days_per_stop: i64,
    /// Activities scheduled at each stop
    pub activities_per_stop: usize,
    /// Every n-th activity is shifted back an hour so it overlaps its
    /// predecessor's slot. 0 disables overlaps entirely.
    pub overlap_every: usize,
}

impl Default for SyntheticTripConfig {
    fn default() -> Self {
        Self {
            stop_count: 3,
            days_per_stop: 3,
            activities_per_stop: 4,
            overlap_every: 0,
        }
    }
}

/// Generate a deterministic trip starting on `start`.
///
/// Stops run back to back from the itinerary start, `days_per_stop` days
/// each. Activities cycle through a stop's days and occupy 90-minute slots
/// two hours apart from 09:00, so without overlap injection no pair
/// conflicts.
pub fn generate_trip(
    start: NaiveDate,
    config: &SyntheticTripConfig,
) -> (Itinerary, Vec<Stop>, Vec<Activity>) {
    let days_per_stop = config.days_per_stop.max(1);
    let total_days = days_per_stop * config.stop_count.max(1) as i64;

    let itinerary = Itinerary::new(
        "trip-synthetic",
        "Synthetic Trip",
        start,
        start + Duration::days(total_days - 1),
    );

    let mut stops = Vec::with_capacity(config.stop_count);
    let mut activities = Vec::new();

    for stop_idx in 0..config.stop_count {
        let arrival = start + Duration::days(stop_idx as i64 * days_per_stop);
        let departure = arrival + Duration::days(days_per_stop - 1);
        let stop_id = format!("stop-{stop_idx}");

        stops.push(Stop::new(
            &stop_id,
            &itinerary.id,
            &format!("Destination {stop_idx}"),
            arrival,
            departure,
            stop_idx as u32,
        ));

        for activity_idx in 0..config.activities_per_stop {
            let day = arrival + Duration::days(activity_idx as i64 % days_per_stop);
            let slot = activity_idx / days_per_stop as usize;
            // Slots at 09:00, 11:00, ... wrap before reaching midnight
            let hour = 9 + (2 * slot as u32) % 14;

            let mut start_time = day
                .and_hms_opt(hour, 0, 0)
                .expect("slot hour is always below 24");
            if config.overlap_every > 0 && (activity_idx + 1) % config.overlap_every == 0 {
                start_time = start_time - Duration::hours(1);
            }
            let end_time = start_time + Duration::minutes(90);

            activities.push(
                Activity::new(
                    &format!("act-{stop_idx}-{activity_idx}"),
                    &stop_id,
                    &format!("Activity {activity_idx} at stop {stop_idx}"),
                    "synthetic",
                )
                .with_times(start_time, end_time),
            );
        }
    }

    (itinerary, stops, activities)
}
