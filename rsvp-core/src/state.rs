//! File-backed attempt bookkeeping.
//!
//! The last permitted submission attempt is persisted as a millisecond
//! epoch timestamp in a single well-known state file, overwritten on
//! every allowed attempt and never deleted.

use std::path::PathBuf;

use chrono::{DateTime, TimeZone, Utc};

use crate::config::AppConfig;
use crate::error::RsvpResult;
use crate::gate::AttemptStore;

const LAST_ATTEMPT_FILE: &str = "last_attempt";

/// Attempt store persisted under the application state directory.
pub struct FileAttemptStore {
    path: PathBuf,
}

impl FileAttemptStore {
    /// Store at the well-known location in the user config directory.
    pub fn open_default() -> RsvpResult<Self> {
        Ok(FileAttemptStore {
            path: AppConfig::state_dir()?.join(LAST_ATTEMPT_FILE),
        })
    }

    /// Store backed by an explicit file path.
    pub fn at(path: PathBuf) -> Self {
        FileAttemptStore { path }
    }
}

impl AttemptStore for FileAttemptStore {
    // A missing or unreadable file means "no prior attempt": denying a
    // guest over corrupt bookkeeping would be worse than letting one
    // extra attempt through.
    fn last_attempt(&self) -> RsvpResult<Option<DateTime<Utc>>> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(_) => return Ok(None),
        };

        let millis = match content.trim().parse::<i64>() {
            Ok(millis) => millis,
            Err(_) => return Ok(None),
        };

        Ok(Utc.timestamp_millis_opt(millis).single())
    }

    fn record_attempt(&mut self, at: DateTime<Utc>) -> RsvpResult<()> {
        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir)?;
        }

        let temp = self.path.with_extension("tmp");
        std::fs::write(&temp, at.timestamp_millis().to_string())?;
        std::fs::rename(&temp, &self.path)?;
        Ok(())
    }
}
