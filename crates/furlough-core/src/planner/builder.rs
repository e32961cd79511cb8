//! Builder for creating and configuring Planner instances.

use std::path::{Path, PathBuf};

use jiff::civil::Date;
use log::info;

use super::Planner;
use crate::{
    date,
    db::{Database, Storage},
    error::{PlannerError, Result},
    models::{Configuration, PlanState, Snapshot, SNAPSHOT_KEY},
};

/// Builder for creating and configuring Planner instances.
#[derive(Default)]
pub struct PlannerBuilder {
    database_path: Option<PathBuf>,
    storage: Option<Box<dyn Storage + Send>>,
    today: Option<Date>,
}

impl PlannerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/furlough/furlough.db` or
    /// `~/.local/share/furlough/furlough.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Uses the given storage instead of a database file.
    pub fn with_storage(mut self, storage: impl Storage + Send + 'static) -> Self {
        self.storage = Some(Box::new(storage));
        self
    }

    /// Fixes the date treated as today. Defaults to the system date.
    pub fn with_today(mut self, today: Date) -> Self {
        self.today = Some(today);
        self
    }

    /// Builds the planner and loads the saved plan.
    ///
    /// A missing snapshot starts from defaults; a corrupt one falls back to
    /// defaults field by field.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::FileSystem` if the database directory cannot be created
    /// Returns `PlannerError::Database` if the database cannot be opened or read
    pub fn build(self) -> Result<Planner> {
        let today = self.today.unwrap_or_else(date::today);

        let storage: Box<dyn Storage + Send> = match self.storage {
            Some(storage) => storage,
            None => Box::new(Self::open_database(self.database_path)?),
        };

        let defaults = Configuration::defaults_for(today);
        let state = match storage.load(SNAPSHOT_KEY)? {
            Some(text) => Snapshot::restore(&text, defaults),
            None => {
                info!("No saved plan found, starting from defaults");
                PlanState::new(defaults)
            }
        };

        Ok(Planner::new(state, storage, today))
    }

    fn open_database(path: Option<PathBuf>) -> Result<Database> {
        let db_path = match path {
            Some(path) => path,
            None => Self::default_database_path()?,
        };

        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| PlannerError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        info!("Opening plan database at {}", db_path.display());
        Database::new(&db_path)
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("furlough")
            .place_data_file("furlough.db")
            .map_err(|e| PlannerError::XdgDirectory(e.to_string()))
    }
}
