use furlough_core::{Planner, PlannerBuilder};
use jiff::civil::{date, Date};
use tempfile::TempDir;

pub const TODAY: Date = date(2024, 2, 1);

/// Helper function to create a test planner backed by a database file
pub fn create_test_planner() -> (TempDir, Planner) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let planner = open_planner(&temp_dir);
    (temp_dir, planner)
}

/// Opens (or reopens) the planner stored in `temp_dir`
pub fn open_planner(temp_dir: &TempDir) -> Planner {
    PlannerBuilder::new()
        .with_database_path(Some(temp_dir.path().join("test.db")))
        .with_today(TODAY)
        .build()
        .expect("Failed to create planner")
}
