//! Tests for views module (daily, weekly, overview, navigation)

use chrono::{Duration, NaiveDate};
use tripline::{
    day_view, detect_conflicts, group_by_stop, overview, week_view, Activity, Itinerary, Stop,
    ViewMode, WEEK_LENGTH,
};

fn date(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, d).unwrap()
}

fn timed(id: &str, stop_id: &str, day: u32, start_h: u32, end_h: u32) -> Activity {
    Activity::new(id, stop_id, id, "test").with_times(
        date(day).and_hms_opt(start_h, 0, 0).unwrap(),
        date(day).and_hms_opt(end_h, 0, 0).unwrap(),
    )
}

/// Itinerary 2024-06-01..10 with Paris (06-02..05) and Rome (06-06..09).
/// Rome has the lower order index even though it comes later.
fn sample_trip() -> (Itinerary, Vec<Stop>, Vec<Activity>) {
    let itinerary = Itinerary::new("t-1", "Summer", date(1), date(10));
    let stops = vec![
        Stop::new("rome", "t-1", "Rome", date(6), date(9), 0),
        Stop::new("paris", "t-1", "Paris", date(2), date(5), 1),
    ];
    let activities = vec![
        timed("louvre", "paris", 3, 10, 12),
        timed("bistro", "paris", 3, 11, 13), // conflicts with louvre
        timed("orsay", "paris", 4, 9, 11),
        timed("forum", "rome", 6, 9, 12),
        Activity::new("wander", "rome", "wander", "leisure"),
    ];
    (itinerary, stops, activities)
}

// ============================================================================
// Daily
// ============================================================================

#[test]
fn test_daily_empty_state_before_any_stop() {
    let (_, stops, activities) = sample_trip();
    let groups = group_by_stop(&activities);
    let conflicts = detect_conflicts(&groups);

    let day = day_view(date(1), &stops, &groups, &conflicts);
    assert!(day.no_stops());
    assert!(day.entries.is_empty());
}

#[test]
fn test_daily_active_stop_with_activities() {
    let (_, stops, activities) = sample_trip();
    let groups = group_by_stop(&activities);
    let conflicts = detect_conflicts(&groups);

    let day = day_view(date(3), &stops, &groups, &conflicts);
    assert!(!day.no_stops());
    assert_eq!(day.active_stops.len(), 1);
    assert_eq!(day.active_stops[0].destination_name, "Paris");

    let ids: Vec<&str> = day.entries.iter().map(|e| e.activity.id.as_str()).collect();
    assert_eq!(ids, ["louvre", "bistro"]); // sorted by start time
    assert!(day.entries.iter().all(|e| e.conflicted));
}

#[test]
fn test_daily_stops_but_no_activities_is_not_empty_state() {
    let (_, stops, activities) = sample_trip();
    let groups = group_by_stop(&activities);
    let conflicts = detect_conflicts(&groups);

    // Paris is active on 06-05 but nothing starts that day
    let day = day_view(date(5), &stops, &groups, &conflicts);
    assert!(!day.no_stops());
    assert!(day.entries.is_empty());
}

#[test]
fn test_daily_untimed_activities_excluded() {
    let (_, stops, activities) = sample_trip();
    let groups = group_by_stop(&activities);
    let conflicts = detect_conflicts(&groups);

    // "wander" is untimed, so it starts on no day
    let day = day_view(date(6), &stops, &groups, &conflicts);
    let ids: Vec<&str> = day.entries.iter().map(|e| e.activity.id.as_str()).collect();
    assert_eq!(ids, ["forum"]);
}

#[test]
fn test_daily_entries_carry_owning_stop() {
    let (_, stops, activities) = sample_trip();
    let groups = group_by_stop(&activities);
    let conflicts = detect_conflicts(&groups);

    let day = day_view(date(3), &stops, &groups, &conflicts);
    assert!(day.entries.iter().all(|e| e.stop.id == "paris"));
}

#[test]
fn test_daily_merge_across_stops_sorted() {
    // Two stops active on the same day, later stop listed first
    let stops = vec![
        Stop::new("s-b", "t-1", "B", date(3), date(3), 0),
        Stop::new("s-a", "t-1", "A", date(3), date(3), 1),
    ];
    let activities = vec![
        timed("afternoon", "s-b", 3, 15, 16),
        timed("morning", "s-a", 3, 9, 10),
    ];
    let groups = group_by_stop(&activities);
    let conflicts = detect_conflicts(&groups);

    let day = day_view(date(3), &stops, &groups, &conflicts);
    let ids: Vec<&str> = day.entries.iter().map(|e| e.activity.id.as_str()).collect();
    assert_eq!(ids, ["morning", "afternoon"]);
}

// ============================================================================
// Weekly
// ============================================================================

#[test]
fn test_weekly_produces_seven_cells() {
    let (_, stops, activities) = sample_trip();
    let groups = group_by_stop(&activities);
    let conflicts = detect_conflicts(&groups);

    let week = week_view(date(1), date(3), &stops, &groups, &conflicts);
    assert_eq!(week.days.len(), WEEK_LENGTH);
    assert_eq!(week.start, date(1));
}

#[test]
fn test_weekly_cells_match_independent_daily_derivations() {
    let (_, stops, activities) = sample_trip();
    let groups = group_by_stop(&activities);
    let conflicts = detect_conflicts(&groups);

    let week = week_view(date(1), date(3), &stops, &groups, &conflicts);
    for (offset, cell) in week.days.iter().enumerate() {
        let expected = day_view(
            date(1) + Duration::days(offset as i64),
            &stops,
            &groups,
            &conflicts,
        );
        assert_eq!(cell.day, expected);
    }
}

#[test]
fn test_weekly_today_flag() {
    let (_, stops, activities) = sample_trip();
    let groups = group_by_stop(&activities);
    let conflicts = detect_conflicts(&groups);

    let week = week_view(date(1), date(4), &stops, &groups, &conflicts);
    let flagged: Vec<NaiveDate> = week
        .days
        .iter()
        .filter(|cell| cell.is_today)
        .map(|cell| cell.day.date)
        .collect();
    assert_eq!(flagged, [date(4)]);

    // "Today" outside the week flags nothing
    let week = week_view(date(1), date(20), &stops, &groups, &conflicts);
    assert!(week.days.iter().all(|cell| !cell.is_today));
}

// ============================================================================
// Overview
// ============================================================================

#[test]
fn test_overview_orders_stops_by_arrival_not_order_index() {
    let (itinerary, stops, activities) = sample_trip();
    let groups = group_by_stop(&activities);
    let conflicts = detect_conflicts(&groups);

    // Rome has order_index 0 but arrives after Paris
    let timeline = overview(&itinerary, &stops, &groups, &conflicts);
    let names: Vec<&str> = timeline
        .stops
        .iter()
        .map(|s| s.stop.destination_name.as_str())
        .collect();
    assert_eq!(names, ["Paris", "Rome"]);
}

#[test]
fn test_overview_aggregates() {
    let (itinerary, stops, activities) = sample_trip();
    let groups = group_by_stop(&activities);
    let conflicts = detect_conflicts(&groups);

    let timeline = overview(&itinerary, &stops, &groups, &conflicts);
    assert_eq!(timeline.duration_days, 9);
    assert_eq!(timeline.destination_count, 2);
    assert_eq!(timeline.activity_count, 5);
}

#[test]
fn test_overview_per_stop_conflict_counts() {
    let (itinerary, stops, activities) = sample_trip();
    let groups = group_by_stop(&activities);
    let conflicts = detect_conflicts(&groups);

    let timeline = overview(&itinerary, &stops, &groups, &conflicts);
    let paris = &timeline.stops[0];
    assert_eq!(paris.activity_count, 3);
    assert_eq!(paris.conflicted_count, 2); // louvre and bistro

    let rome = &timeline.stops[1];
    assert_eq!(rome.activity_count, 2);
    assert_eq!(rome.conflicted_count, 0);
}

#[test]
fn test_overview_stop_without_group_gets_empty_list() {
    let itinerary = Itinerary::new("t-1", "Empty", date(1), date(4));
    let stops = vec![Stop::new("s-1", "t-1", "Nowhere", date(1), date(4), 0)];
    let groups = group_by_stop(&[]);

    let timeline = overview(&itinerary, &stops, &groups, &[]);
    assert_eq!(timeline.stops[0].activity_count, 0);
    assert!(timeline.stops[0].activities.is_empty());
}

// ============================================================================
// Navigation
// ============================================================================

#[test]
fn test_daily_navigation_clamps_to_trip_range() {
    let trip = Itinerary::new("t-1", "Summer", date(1), date(10));

    assert!(!ViewMode::Daily.can_step_back(date(1), &trip));
    assert!(ViewMode::Daily.can_step_back(date(2), &trip));
    assert!(ViewMode::Daily.can_step_forward(date(9), &trip));
    assert!(!ViewMode::Daily.can_step_forward(date(10), &trip));
}

#[test]
fn test_weekly_navigation_clamps_to_trip_range() {
    let trip = Itinerary::new("t-1", "Month", date(1), date(30));

    assert!(!ViewMode::Weekly.can_step_back(date(7), &trip));
    assert!(ViewMode::Weekly.can_step_back(date(8), &trip));
    assert!(ViewMode::Weekly.can_step_forward(date(23), &trip));
    assert!(!ViewMode::Weekly.can_step_forward(date(24), &trip));
}

#[test]
fn test_overview_does_not_navigate() {
    let trip = Itinerary::new("t-1", "Summer", date(1), date(10));

    assert!(!ViewMode::Overview.can_step_back(date(5), &trip));
    assert!(!ViewMode::Overview.can_step_forward(date(5), &trip));
    assert_eq!(ViewMode::Overview.step_back(date(5)), None);
    assert_eq!(ViewMode::Overview.step_forward(date(5)), None);
}

#[test]
fn test_step_sizes() {
    assert_eq!(ViewMode::Daily.step_forward(date(5)), Some(date(6)));
    assert_eq!(ViewMode::Daily.step_back(date(5)), Some(date(4)));
    assert_eq!(ViewMode::Weekly.step_forward(date(5)), Some(date(12)));
    assert_eq!(ViewMode::Weekly.step_back(date(12)), Some(date(5)));
}
