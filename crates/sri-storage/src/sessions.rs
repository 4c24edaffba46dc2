use std::path::{Path, PathBuf};

use uuid::Uuid;

use sri_core::models::AssessmentSession;

use crate::error::StorageError;

/// Directory-backed session store: one `<uuid>.json` blob per session.
#[derive(Debug, Clone)]
pub struct SessionStore {
    root: PathBuf,
}

impl SessionStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn session_path(&self, id: Uuid) -> PathBuf {
        self.root.join(format!("{id}.json"))
    }

    /// Persist a session, overwriting any earlier blob for the same id.
    /// Writes to a temp file then renames for atomicity.
    pub fn save(&self, session: &AssessmentSession) -> Result<(), StorageError> {
        std::fs::create_dir_all(&self.root)?;

        let path = self.session_path(session.id);
        let json = serde_json::to_string_pretty(session)?;

        let tmp_path = self.root.join(format!("{}.json.tmp", session.id));
        std::fs::write(&tmp_path, json.as_bytes())?;
        std::fs::rename(&tmp_path, &path)?;

        tracing::info!(session_id = %session.id, path = %path.display(), "session saved");
        Ok(())
    }

    pub fn load(&self, id: Uuid) -> Result<AssessmentSession, StorageError> {
        let path = self.session_path(id);
        let contents = match std::fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Err(StorageError::NotFound { id: id.to_string() });
            }
            Err(err) => return Err(err.into()),
        };

        Ok(serde_json::from_str(&contents)?)
    }

    /// Look up a session by the string id a caller received from a URL or
    /// share link.
    pub fn load_by_str(&self, id: &str) -> Result<AssessmentSession, StorageError> {
        let id = id
            .parse::<Uuid>()
            .map_err(|_| StorageError::InvalidSessionId(id.to_string()))?;
        self.load(id)
    }

    /// All stored sessions, newest first by start time. Files that are not
    /// `<uuid>.json` blobs are skipped.
    pub fn list(&self) -> Result<Vec<AssessmentSession>, StorageError> {
        let entries = match std::fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };

        let mut sessions = Vec::new();
        for entry in entries {
            let entry = entry?;
            let path = entry.path();

            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let Ok(id) = stem.parse::<Uuid>() else {
                continue;
            };

            sessions.push(self.load(id)?);
        }

        sessions.sort_by(|a, b| b.start_time.cmp(&a.start_time));
        Ok(sessions)
    }

    pub fn delete(&self, id: Uuid) -> Result<(), StorageError> {
        let path = self.session_path(id);
        match std::fs::remove_file(&path) {
            Ok(()) => {
                tracing::info!(session_id = %id, "session deleted");
                Ok(())
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                Err(StorageError::NotFound { id: id.to_string() })
            }
            Err(err) => Err(err.into()),
        }
    }
}
