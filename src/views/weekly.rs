//! Seven-day schedule grid.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::conflict::ConflictPair;
use crate::grouping::StopGroups;
use crate::views::daily::{day_view, DayView};
use crate::Stop;

/// Number of day cells in a week grid.
pub const WEEK_LENGTH: usize = 7;

/// One cell of the weekly grid: a daily schedule plus the highlight flag
/// that depends on the caller's clock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayCell {
    pub day: DayView,
    /// Whether this cell's date equals the caller-supplied "today"
    pub is_today: bool,
}

/// Seven consecutive day cells beginning at `start`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekGrid {
    pub start: NaiveDate,
    pub days: Vec<DayCell>,
}

/// Derive a 7-day grid starting at `start`.
///
/// Each cell is computed independently with exactly the rules of
/// [`day_view`]; there is no cross-day aggregation beyond placing the cells
/// in sequence. `today` is the rendering date used for the highlight flag -
/// it is a parameter so the core stays clock-free.
pub fn week_view(
    start: NaiveDate,
    today: NaiveDate,
    stops: &[Stop],
    groups: &StopGroups,
    conflicts: &[ConflictPair],
) -> WeekGrid {
    let days = (0..WEEK_LENGTH as i64)
        .map(|offset| {
            let date = start + Duration::days(offset);
            DayCell {
                day: day_view(date, stops, groups, conflicts),
                is_today: date == today,
            }
        })
        .collect();

    WeekGrid { start, days }
}
