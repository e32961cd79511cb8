//! Persistence, import and export for the Planner.

use jiff::Timestamp;
use log::{debug, info};
use serde_json::Value;

use super::Planner;
use crate::{
    error::{PlannerError, Result},
    models::{Configuration, Snapshot, SNAPSHOT_KEY},
};

impl Planner {
    /// Writes the full snapshot to storage.
    pub(crate) fn persist(&mut self) -> Result<()> {
        let json = Snapshot::from(&self.state).to_json()?;
        self.storage.save(SNAPSHOT_KEY, &json)?;
        debug!("Persisted plan snapshot");
        Ok(())
    }

    /// Current snapshot as indented JSON.
    pub fn export_snapshot(&self) -> Result<String> {
        Snapshot::from(&self.state).to_json_pretty()
    }

    /// Replaces the whole plan with an imported snapshot and persists it.
    ///
    /// Fields missing from the snapshot take their defaults, not the
    /// current values.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::Serialization` for text that is not JSON and
    /// `PlannerError::InvalidInput` when the JSON is not an object.
    pub fn import_snapshot(&mut self, text: &str) -> Result<()> {
        if !matches!(serde_json::from_str::<Value>(text)?, Value::Object(_)) {
            return Err(PlannerError::invalid_input("snapshot")
                .with_reason("expected a JSON object"));
        }

        let imported = Snapshot::restore(text, Configuration::defaults_for(self.today));
        info!(
            "Importing snapshot with {} holidays and {} blocked dates",
            imported.holidays().len(),
            imported.blocked_dates().len()
        );
        self.commit(|state| *state = imported)
    }

    /// When the plan was last saved, if the storage records it.
    pub fn last_saved(&self) -> Result<Option<Timestamp>> {
        self.storage.updated_at(SNAPSHOT_KEY)
    }
}
