use jiff::civil::{date, Date, Weekday};
use serde_json::Value;

use super::{GestureHandler, Planner, PlannerBuilder};
use crate::{
    classify::DayKind,
    db::{MemoryStorage, Storage},
    error::{PlannerError, Result},
    models::{IgnoreReason, ToggleOutcome, WeekType, SNAPSHOT_KEY},
    params::{Day, UpdateConfig},
};

const TODAY: Date = date(2024, 2, 1);

fn create_test_planner() -> Planner {
    PlannerBuilder::new()
        .with_storage(MemoryStorage::new())
        .with_today(TODAY)
        .build()
        .expect("Failed to build planner")
}

fn stored_json(planner: &Planner) -> Value {
    let text = planner
        .storage
        .load(SNAPSHOT_KEY)
        .expect("Failed to load")
        .expect("Nothing stored");
    serde_json::from_str(&text).expect("Stored snapshot is not JSON")
}

/// Storage whose writes always fail.
struct ReadOnlyStorage;

impl Storage for ReadOnlyStorage {
    fn load(&self, _key: &str) -> Result<Option<String>> {
        Ok(None)
    }

    fn save(&mut self, _key: &str, _value: &str) -> Result<()> {
        Err(PlannerError::FileSystem {
            path: "furlough.db".into(),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        })
    }
}

#[test]
fn test_defaults_without_snapshot() {
    let planner = create_test_planner();
    let config = planner.config();
    assert_eq!(config.year_reset_date, date(2024, 1, 1));
    assert_eq!(config.holiday_allowance, 25.0);
    assert_eq!(config.reduced_hours_day, None);
    assert_eq!(config.week_type, WeekType::Odd);
    assert!(planner.holidays().is_empty());
    assert!(planner.blocked_dates().is_empty());
}

#[test]
fn test_loads_existing_snapshot() {
    let storage = MemoryStorage::with_entry(
        SNAPSHOT_KEY,
        r#"{"yearResetDate":"2024-04-01","holidays":["2024-05-02"],"weekType":"even"}"#,
    );
    let planner = PlannerBuilder::new()
        .with_storage(storage)
        .with_today(TODAY)
        .build()
        .unwrap();

    assert_eq!(planner.config().year_reset_date, date(2024, 4, 1));
    assert_eq!(planner.config().week_type, WeekType::Even);
    assert_eq!(planner.config().holiday_allowance, 25.0);
    assert!(planner.holidays().contains(&date(2024, 5, 2)));
}

#[test]
fn test_corrupt_snapshot_keeps_session_usable() {
    let storage = MemoryStorage::with_entry(SNAPSHOT_KEY, "{{ definitely not json");
    let mut planner = PlannerBuilder::new()
        .with_storage(storage)
        .with_today(TODAY)
        .build()
        .unwrap();

    assert_eq!(planner.config().year_reset_date, date(2024, 1, 1));
    assert_eq!(
        planner.toggle_holiday(date(2024, 3, 15)).unwrap(),
        ToggleOutcome::Booked
    );
}

#[test]
fn test_every_mutation_persists_full_snapshot() {
    let mut planner = create_test_planner();

    planner.toggle_holiday(date(2024, 3, 15)).unwrap();
    assert_eq!(
        stored_json(&planner)["holidays"],
        serde_json::json!(["2024-03-15"])
    );

    planner.toggle_blocked(date(2024, 3, 15)).unwrap();
    let json = stored_json(&planner);
    assert_eq!(json["holidays"], serde_json::json!([]));
    assert_eq!(json["blockedDates"], serde_json::json!(["2024-03-15"]));

    planner.set_allowance(30.0).unwrap();
    let json = stored_json(&planner);
    assert_eq!(json["holidayAllowance"], 30.0);
    assert_eq!(json["blockedDates"], serde_json::json!(["2024-03-15"]));
}

#[test]
fn test_ignored_toggle_does_not_write() {
    let mut planner = create_test_planner();
    assert_eq!(
        planner.toggle_holiday(date(2024, 3, 16)).unwrap(),
        ToggleOutcome::Ignored(IgnoreReason::Weekend)
    );
    assert!(planner.storage.load(SNAPSHOT_KEY).unwrap().is_none());
}

#[test]
fn test_gestures_route_to_toggles() {
    let mut planner = create_test_planner();
    let day = date(2024, 3, 15);

    assert_eq!(planner.on_primary_gesture(day).unwrap(), ToggleOutcome::Booked);
    assert_eq!(planner.classify(day), DayKind::Holiday);
    assert_eq!(
        planner.on_secondary_gesture(day).unwrap(),
        ToggleOutcome::Blocked {
            replaced_holiday: true
        }
    );
    assert_eq!(
        planner.on_primary_gesture(day).unwrap(),
        ToggleOutcome::Ignored(IgnoreReason::BlockedDay)
    );
    assert_eq!(planner.summary().days_remaining, 25.0);
}

#[test]
fn test_toggle_param_rejects_bad_date() {
    let mut planner = create_test_planner();
    let err = planner
        .toggle_holiday_param(&Day {
            date: "15/03/2024".to_string(),
        })
        .unwrap_err();
    assert!(matches!(err, PlannerError::InvalidInput { .. }));
    assert!(planner.holidays().is_empty());

    planner
        .toggle_blocked_param(&Day {
            date: " 2024-03-15 ".to_string(),
        })
        .unwrap();
    assert!(planner.blocked_dates().contains(&date(2024, 3, 15)));
}

#[test]
fn test_failed_write_rolls_back() {
    let mut planner = PlannerBuilder::new()
        .with_storage(ReadOnlyStorage)
        .with_today(TODAY)
        .build()
        .unwrap();

    assert!(planner.toggle_holiday(date(2024, 3, 15)).is_err());
    assert!(planner.holidays().is_empty());

    assert!(planner.toggle_blocked(date(2024, 3, 15)).is_err());
    assert!(planner.blocked_dates().is_empty());

    // Ignored gestures never reach storage
    assert_eq!(
        planner.toggle_holiday(date(2024, 3, 16)).unwrap(),
        ToggleOutcome::Ignored(IgnoreReason::Weekend)
    );

    assert!(planner.set_allowance(10.0).is_err());
    assert_eq!(planner.config().holiday_allowance, 25.0);
}

#[test]
fn test_reduced_hours_settings() {
    let mut planner = create_test_planner();

    assert_eq!(
        planner.set_reduced_hours_input("3").unwrap(),
        Some(Weekday::Wednesday)
    );
    assert_eq!(planner.classify(date(2024, 1, 3)), DayKind::ReducedHours);
    assert_eq!(planner.classify(date(2024, 1, 10)), DayKind::Plain);

    planner.set_week_type(WeekType::Even).unwrap();
    assert_eq!(planner.classify(date(2024, 1, 3)), DayKind::Plain);
    assert_eq!(planner.classify(date(2024, 1, 10)), DayKind::ReducedHours);

    assert_eq!(planner.set_reduced_hours_input("").unwrap(), None);
    assert_eq!(planner.classify(date(2024, 1, 10)), DayKind::Plain);

    assert!(matches!(
        planner.set_reduced_hours_input("7"),
        Err(PlannerError::InvalidInput { .. })
    ));
    assert!(planner.set_reduced_hours_input("wed").is_err());
}

#[test]
fn test_allowance_input_coerces() {
    let mut planner = create_test_planner();
    assert_eq!(planner.set_allowance_input("22.5").unwrap(), 22.5);
    assert_eq!(planner.summary().allowance, 22.5);
    assert_eq!(planner.set_allowance_input("lots").unwrap(), 0.0);
    assert_eq!(planner.summary().days_remaining, 0.0);
    planner.set_allowance(-4.0).unwrap();
    assert_eq!(planner.config().holiday_allowance, 0.0);
}

#[test]
fn test_reset_date_moves_window_and_parity() {
    let mut planner = create_test_planner();
    planner.set_reduced_hours_day(Some(Weekday::Wednesday)).unwrap();
    assert_eq!(planner.week_number(date(2024, 1, 10)), 2);

    planner.set_reset_date(date(2024, 1, 8)).unwrap();
    assert_eq!(planner.week_number(date(2024, 1, 10)), 1);
    assert_eq!(planner.classify(date(2024, 1, 10)), DayKind::ReducedHours);
    assert_eq!(planner.week_number(date(2024, 1, 3)), 0);

    let window = planner.calendar().unwrap();
    assert_eq!(window.months[0].month, 1);
    assert_eq!(window.months[11].month, 12);
}

#[test]
fn test_update_config_applies_all_fields() {
    let mut planner = create_test_planner();
    let changes = planner
        .update_config(&UpdateConfig {
            year_reset_date: Some("2024-04-01".to_string()),
            holiday_allowance: Some("28".to_string()),
            reduced_hours_day: Some("5".to_string()),
            week_type: Some("even".to_string()),
        })
        .unwrap();

    assert_eq!(changes.len(), 4);
    let config = planner.config();
    assert_eq!(config.year_reset_date, date(2024, 4, 1));
    assert_eq!(config.holiday_allowance, 28.0);
    assert_eq!(config.reduced_hours_day, Some(Weekday::Friday));
    assert_eq!(config.week_type, WeekType::Even);
    assert_eq!(stored_json(&planner)["reducedHoursDay"], 5);
}

#[test]
fn test_update_config_validates_before_applying() {
    let mut planner = create_test_planner();
    let result = planner.update_config(&UpdateConfig {
        holiday_allowance: Some("10".to_string()),
        week_type: Some("fortnightly".to_string()),
        ..Default::default()
    });

    assert!(matches!(result, Err(PlannerError::InvalidInput { .. })));
    assert_eq!(planner.config().holiday_allowance, 25.0);
    assert!(planner.update_config(&UpdateConfig::default()).unwrap().is_empty());
}

#[test]
fn test_export_import_round_trip() {
    let mut source = create_test_planner();
    source.set_allowance(20.0).unwrap();
    source.toggle_holiday(date(2024, 6, 3)).unwrap();
    source.toggle_blocked(date(2024, 6, 4)).unwrap();
    let exported = source.export_snapshot().unwrap();

    let mut target = create_test_planner();
    target.toggle_holiday(date(2024, 9, 2)).unwrap();
    target.import_snapshot(&exported).unwrap();

    assert_eq!(target.state(), source.state());
    assert_eq!(
        stored_json(&target)["holidays"],
        serde_json::json!(["2024-06-03"])
    );
}

#[test]
fn test_import_skips_weekend_dates() {
    let mut planner = create_test_planner();
    planner
        .import_snapshot(r#"{"holidays":["2024-03-16","2024-03-18"]}"#)
        .unwrap();

    assert_eq!(planner.summary().days_taken, 1);
    assert_eq!(
        stored_json(&planner)["holidays"],
        serde_json::json!(["2024-03-18"])
    );
}

#[test]
fn test_import_rejects_non_object() {
    let mut planner = create_test_planner();
    planner.toggle_holiday(date(2024, 6, 3)).unwrap();

    assert!(matches!(
        planner.import_snapshot("not json"),
        Err(PlannerError::Serialization { .. })
    ));
    assert!(matches!(
        planner.import_snapshot("[]"),
        Err(PlannerError::InvalidInput { .. })
    ));
    assert_eq!(planner.holidays().len(), 1);
}

#[test]
fn test_memory_storage_has_no_timestamp() {
    let planner = create_test_planner();
    assert!(planner.last_saved().unwrap().is_none());
}
