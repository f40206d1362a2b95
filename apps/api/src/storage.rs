//! Durable local storage — a string key-value store backed by JSON files
//! under the configured data directory.
//!
//! Reads that fail for any reason (missing file, I/O error, bad UTF-8) fall
//! back silently to `None`; writes are fire-and-forget and never propagate
//! errors to callers. Validation is the callers' job, not the store's.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

/// Storage key for the persisted user profile.
pub const PROFILE_KEY: &str = "careerbridge_user_profile";

/// Storage key for the saved CV-analysis snapshot.
pub const SAVED_ANALYSIS_KEY: &str = "careerbridge_saved_analysis";

/// File-backed key-value store. Key `k` lives at `<root>/<k>.json`,
/// written wholesale on every update.
#[derive(Debug, Clone)]
pub struct Storage {
    root: PathBuf,
}

impl Storage {
    /// Opens (and creates if needed) the store rooted at `root`.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)
            .with_context(|| format!("Failed to create data directory {}", root.display()))?;
        Ok(Self { root })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }

    /// Reads the raw string value for `key`, or `None` on any failure.
    pub fn read(&self, key: &str) -> Option<String> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Some(value),
            Err(e) => {
                debug!("No readable value for storage key '{key}': {e}");
                None
            }
        }
    }

    /// Overwrites the value for `key`. Failures are logged, not returned.
    pub fn write(&self, key: &str, value: &str) {
        let path = self.path_for(key);
        if let Err(e) = fs::write(&path, value) {
            warn!("Failed to write storage key '{key}' to {}: {e}", path.display());
        }
    }

    /// Reads and deserializes the value for `key`; decode failures fall back
    /// to `None` like missing data.
    pub fn read_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.read(key)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                debug!("Discarding unparseable value for storage key '{key}': {e}");
                None
            }
        }
    }

    /// Serializes and writes `value` under `key`.
    pub fn write_json<T: Serialize>(&self, key: &str, value: &T) {
        match serde_json::to_string_pretty(value) {
            Ok(raw) => self.write(key, &raw),
            Err(e) => warn!("Failed to serialize value for storage key '{key}': {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::profile::UserProfile;

    fn temp_storage() -> (tempfile::TempDir, Storage) {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::open(dir.path()).unwrap();
        (dir, storage)
    }

    #[test]
    fn test_missing_key_reads_none() {
        let (_dir, storage) = temp_storage();
        assert_eq!(storage.read("nope"), None);
    }

    #[test]
    fn test_write_then_read_round_trip() {
        let (_dir, storage) = temp_storage();
        storage.write("greeting", "bonjour");
        assert_eq!(storage.read("greeting").as_deref(), Some("bonjour"));
    }

    #[test]
    fn test_write_overwrites_prior_value() {
        let (_dir, storage) = temp_storage();
        storage.write("k", "one");
        storage.write("k", "two");
        assert_eq!(storage.read("k").as_deref(), Some("two"));
    }

    #[test]
    fn test_json_round_trip() {
        let (_dir, storage) = temp_storage();
        let profile = UserProfile {
            name: "Sarah Chen".to_string(),
            skills: vec!["React".to_string()],
            ..Default::default()
        };
        storage.write_json(PROFILE_KEY, &profile);
        let recovered: UserProfile = storage.read_json(PROFILE_KEY).unwrap();
        assert_eq!(recovered, profile);
    }

    #[test]
    fn test_corrupted_json_reads_none() {
        let (_dir, storage) = temp_storage();
        storage.write(PROFILE_KEY, "{not valid json");
        assert_eq!(storage.read_json::<UserProfile>(PROFILE_KEY), None);
    }
}
