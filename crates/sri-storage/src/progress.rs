//! Resume support: a single snapshot of an interrupted assessment.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use sri_core::models::{AssessmentKind, Demographics, Response};

use crate::error::StorageError;
use crate::sessions::SessionStore;

const PROGRESS_FILE: &str = "progress.json";

/// In-progress state saved as the respondent answers, so a closed tab can
/// be resumed. No schema migration: an unreadable snapshot is discarded by
/// the caller via `clear_progress`.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProgressSnapshot {
    pub kind: AssessmentKind,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub demographics: Option<Demographics>,
    pub responses: Vec<Response>,
    pub saved_at: jiff::Timestamp,
}

impl SessionStore {
    pub fn save_progress(&self, snapshot: &ProgressSnapshot) -> Result<(), StorageError> {
        std::fs::create_dir_all(self.root())?;

        let path = self.root().join(PROGRESS_FILE);
        let json = serde_json::to_string_pretty(snapshot)?;

        let tmp_path = self.root().join(format!("{PROGRESS_FILE}.tmp"));
        std::fs::write(&tmp_path, json.as_bytes())?;
        std::fs::rename(&tmp_path, &path)?;

        tracing::info!(responses = snapshot.responses.len(), "progress saved");
        Ok(())
    }

    /// `Ok(None)` when no snapshot exists.
    pub fn load_progress(&self) -> Result<Option<ProgressSnapshot>, StorageError> {
        let path = self.root().join(PROGRESS_FILE);
        let contents = match std::fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };

        Ok(Some(serde_json::from_str(&contents)?))
    }

    pub fn clear_progress(&self) -> Result<(), StorageError> {
        let path = self.root().join(PROGRESS_FILE);
        match std::fs::remove_file(&path) {
            Ok(()) => {
                tracing::info!("progress cleared");
                Ok(())
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}
