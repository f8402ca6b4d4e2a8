use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use jobby_logging::{jobby_info, jobby_warn};
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use thiserror::Error;

pub const SESSION_FILENAME: &str = "session.json";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("data directory missing or not writable: {0}")]
    DataDir(String),
    #[error("stored session is unreadable: {0}")]
    Corrupt(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Persists the bearer token between runs.
pub trait CredentialStore: Send + Sync {
    /// Returns the stored token unless it is missing or expired.
    fn load(&self) -> Result<Option<String>, StoreError>;
    fn save(&self, token: &str) -> Result<(), StoreError>;
    fn clear(&self) -> Result<(), StoreError>;
}

#[derive(Debug, Serialize, Deserialize)]
struct StoredCredential {
    token: String,
    expires_at: DateTime<Utc>,
}

type Clock = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

/// Stores the token as JSON in `{dir}/session.json`, written atomically.
pub struct FileCredentialStore {
    dir: PathBuf,
    ttl: Duration,
    clock: Clock,
}

impl FileCredentialStore {
    pub fn new(dir: PathBuf, ttl: Duration) -> Self {
        Self {
            dir,
            ttl,
            clock: Arc::new(Utc::now),
        }
    }

    pub fn with_clock(mut self, clock: impl Fn() -> DateTime<Utc> + Send + Sync + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(SESSION_FILENAME)
    }
}

impl CredentialStore for FileCredentialStore {
    fn load(&self) -> Result<Option<String>, StoreError> {
        let path = self.path();
        let content = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        let stored: StoredCredential =
            serde_json::from_str(&content).map_err(|err| StoreError::Corrupt(err.to_string()))?;

        if stored.expires_at <= (self.clock)() {
            jobby_info!("Stored session expired at {}", stored.expires_at);
            self.clear()?;
            return Ok(None);
        }
        Ok(Some(stored.token))
    }

    fn save(&self, token: &str) -> Result<(), StoreError> {
        let stored = StoredCredential {
            token: token.to_string(),
            expires_at: (self.clock)() + self.ttl,
        };
        let content =
            serde_json::to_string(&stored).map_err(|err| StoreError::Corrupt(err.to_string()))?;
        write_atomically(&self.dir, SESSION_FILENAME, &content)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        match fs::remove_file(self.path()) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => {
                jobby_warn!("Failed to remove {:?}: {}", self.path(), err);
                Err(err.into())
            }
        }
    }
}

/// Ensure the data directory exists; create if missing.
pub fn ensure_data_dir(dir: &Path) -> Result<(), StoreError> {
    if dir.exists() {
        let meta = fs::metadata(dir).map_err(|e| StoreError::DataDir(e.to_string()))?;
        if !meta.is_dir() {
            return Err(StoreError::DataDir("path is not a directory".into()));
        }
    } else {
        fs::create_dir_all(dir).map_err(|e| StoreError::DataDir(e.to_string()))?;
    }
    Ok(())
}

/// Writes a temp file next to the target, then renames it over the target.
fn write_atomically(dir: &Path, filename: &str, content: &str) -> Result<PathBuf, StoreError> {
    ensure_data_dir(dir)?;

    let target = dir.join(filename);
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content.as_bytes())?;
    tmp.flush()?;
    tmp.as_file_mut().sync_all()?;
    tmp.persist(&target).map_err(|e| StoreError::Io(e.error))?;
    Ok(target)
}
