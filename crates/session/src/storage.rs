// crates/session/src/storage.rs
//! Storage backends for the session record
//!
//! File writes go through a temporary file and an atomic rename so the
//! session file is never left half-written.

use crate::error::{SessionError, SessionResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;
use tempfile::NamedTempFile;

/// The persisted session fields
///
/// A default record (zero id, logged-out) is the single "no session"
/// state; absence of the file collapses into it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    #[serde(default)]
    pub user_id: i64,
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub user_email: String,
    #[serde(default)]
    pub is_logged_in: bool,
}

/// A place the session record can be kept
///
/// Implementations are shared behind the store, so they synchronize their
/// own state; both provided backends are safe for concurrent use.
pub trait SessionStorage: Send + Sync {
    /// Loads the current record; a missing store yields the default
    fn load(&self) -> SessionResult<SessionRecord>;

    /// Replaces the stored record
    fn save(&self, record: &SessionRecord) -> SessionResult<()>;

    /// Removes everything, returning the store to its fresh state
    fn clear(&self) -> SessionResult<()>;
}

/// File-backed session storage
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Creates storage at an explicit file path
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Creates storage at the platform data directory (`auth.toml`)
    pub fn default_location() -> SessionResult<Self> {
        let dirs = directories::ProjectDirs::from("io", "readstack", "readstack").ok_or_else(
            || SessionError::PathResolutionError {
                reason: "no valid home directory".to_string(),
            },
        )?;
        Ok(Self::new(dirs.data_dir().join("auth.toml")))
    }

    fn write_atomic(&self, contents: &str) -> SessionResult<()> {
        let dir = self
            .path
            .parent()
            .ok_or_else(|| SessionError::PathResolutionError {
                reason: "session path has no parent directory".to_string(),
            })?;

        if !dir.exists() {
            fs::create_dir_all(dir)?;
            log::debug!("created session directory: {}", dir.display());
        }

        let mut temp_file = NamedTempFile::new_in(dir)?;
        temp_file.write_all(contents.as_bytes())?;
        temp_file.flush()?;
        temp_file
            .persist(&self.path)
            .map_err(|e| SessionError::WriteError {
                path: self.path.clone(),
                source: e.error,
            })?;

        Ok(())
    }
}

impl SessionStorage for FileStorage {
    fn load(&self) -> SessionResult<SessionRecord> {
        if !self.path.exists() {
            return Ok(SessionRecord::default());
        }

        let contents = fs::read_to_string(&self.path).map_err(|e| SessionError::ReadError {
            path: self.path.clone(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| SessionError::ParseError {
            path: self.path.clone(),
            source: e,
        })
    }

    fn save(&self, record: &SessionRecord) -> SessionResult<()> {
        let contents = toml::to_string_pretty(record)?;
        self.write_atomic(&contents)
    }

    fn clear(&self) -> SessionResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SessionError::WriteError {
                path: self.path.clone(),
                source: e,
            }),
        }
    }
}

/// In-memory session storage for tests
#[derive(Default)]
pub struct MemoryStorage {
    record: Mutex<SessionRecord>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&self) -> std::sync::MutexGuard<'_, SessionRecord> {
        // A poisoned lock means a panic mid-write; the record itself is
        // still a plain value, so keep serving it.
        match self.record.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl SessionStorage for MemoryStorage {
    fn load(&self) -> SessionResult<SessionRecord> {
        Ok(self.record().clone())
    }

    fn save(&self, record: &SessionRecord) -> SessionResult<()> {
        *self.record() = record.clone();
        Ok(())
    }

    fn clear(&self) -> SessionResult<()> {
        *self.record() = SessionRecord::default();
        Ok(())
    }
}
