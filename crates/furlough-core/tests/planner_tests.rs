mod common;

use common::{create_test_planner, open_planner};
use furlough_core::{
    params::{Day, UpdateConfig},
    DayKind, GestureHandler, IgnoreReason, ToggleOutcome, WeekType,
};
use jiff::civil::{date, Weekday};

#[test]
fn test_booking_and_blocking_workflow() {
    let (_temp_dir, mut planner) = create_test_planner();
    let day = date(2024, 3, 15);

    assert_eq!(
        planner.toggle_holiday(day).expect("Failed to book"),
        ToggleOutcome::Booked
    );
    let summary = planner.summary();
    assert_eq!(summary.days_taken, 1);
    assert_eq!(summary.days_remaining, 24.0);

    assert_eq!(
        planner.toggle_blocked(day).expect("Failed to block"),
        ToggleOutcome::Blocked {
            replaced_holiday: true
        }
    );
    assert!(planner.holidays().is_empty());
    assert!(planner.blocked_dates().contains(&day));
    assert_eq!(planner.summary().days_remaining, 25.0);

    assert_eq!(
        planner.toggle_holiday(day).expect("Failed to toggle"),
        ToggleOutcome::Ignored(IgnoreReason::BlockedDay)
    );
    assert!(planner.holidays().is_empty());
    assert_eq!(planner.blocked_dates().len(), 1);
}

#[test]
fn test_plan_survives_reopen() {
    let (temp_dir, mut planner) = create_test_planner();
    planner
        .update_config(&UpdateConfig {
            holiday_allowance: Some("20".to_string()),
            reduced_hours_day: Some("3".to_string()),
            ..Default::default()
        })
        .expect("Failed to update configuration");
    planner
        .toggle_holiday_param(&Day {
            date: "2024-03-15".to_string(),
        })
        .expect("Failed to book");
    planner
        .toggle_blocked(date(2024, 3, 18))
        .expect("Failed to block");
    let saved_state = planner.state().clone();
    drop(planner);

    let reopened = open_planner(&temp_dir);
    assert_eq!(reopened.state(), &saved_state);
    assert_eq!(reopened.config().holiday_allowance, 20.0);
    assert_eq!(reopened.config().reduced_hours_day, Some(Weekday::Wednesday));
    assert_eq!(reopened.summary().days_remaining, 19.0);
    assert!(reopened.last_saved().expect("Failed to read").is_some());
}

#[test]
fn test_reduced_hours_rule_alternates() {
    let (_temp_dir, mut planner) = create_test_planner();
    planner
        .set_reduced_hours_day(Some(Weekday::Wednesday))
        .expect("Failed to set reduced-hours day");

    assert_eq!(planner.classify(date(2024, 1, 3)), DayKind::ReducedHours);
    assert_eq!(planner.classify(date(2024, 1, 10)), DayKind::Plain);
    assert_eq!(planner.classify(date(2024, 1, 17)), DayKind::ReducedHours);

    // Reduced-hours days take no bookings of either kind
    assert_eq!(
        planner.on_primary_gesture(date(2024, 1, 3)).unwrap(),
        ToggleOutcome::Ignored(IgnoreReason::ReducedHours)
    );
    assert_eq!(
        planner.on_secondary_gesture(date(2024, 1, 3)).unwrap(),
        ToggleOutcome::Ignored(IgnoreReason::ReducedHours)
    );

    planner
        .set_week_type(WeekType::Even)
        .expect("Failed to set week type");
    assert_eq!(planner.classify(date(2024, 1, 3)), DayKind::Plain);
    assert_eq!(planner.classify(date(2024, 1, 10)), DayKind::ReducedHours);
}

#[test]
fn test_existing_booking_survives_rule_change() {
    let (_temp_dir, mut planner) = create_test_planner();
    planner.toggle_holiday(date(2024, 1, 3)).unwrap();

    planner
        .set_reduced_hours_day(Some(Weekday::Wednesday))
        .unwrap();

    // Still stored and counted, but the cell no longer shows or accepts it
    assert!(planner.holidays().contains(&date(2024, 1, 3)));
    assert_eq!(planner.summary().days_taken, 1);
    assert_eq!(planner.classify(date(2024, 1, 3)), DayKind::ReducedHours);
    let window = planner.calendar().unwrap();
    let cell = window.cell(date(2024, 1, 3)).expect("Date is in window");
    assert!(!cell.holiday);
    assert!(cell.reduced_hours);
}

#[test]
fn test_calendar_window_follows_reset_date() {
    let (_temp_dir, mut planner) = create_test_planner();
    planner.set_reset_date(date(2024, 4, 1)).unwrap();

    let window = planner.calendar().expect("Failed to build calendar");
    assert_eq!(window.months.len(), 12);
    assert_eq!((window.months[0].year, window.months[0].month), (2024, 4));
    assert_eq!((window.months[11].year, window.months[11].month), (2025, 3));
    assert!(window.cell(date(2025, 3, 31)).is_some());
    assert!(window.cell(date(2025, 4, 1)).is_none());
}

#[test]
fn test_export_then_import_into_fresh_database() {
    let (_source_dir, mut source) = create_test_planner();
    source.toggle_holiday(date(2024, 7, 1)).unwrap();
    source.toggle_holiday(date(2024, 7, 2)).unwrap();
    source.set_allowance(18.5).unwrap();
    let exported = source.export_snapshot().expect("Failed to export");

    let (target_dir, mut target) = create_test_planner();
    target.import_snapshot(&exported).expect("Failed to import");
    drop(target);

    let reopened = open_planner(&target_dir);
    assert_eq!(reopened.state(), source.state());
    assert_eq!(reopened.summary().days_remaining, 16.5);
}
