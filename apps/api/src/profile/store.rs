//! Typed profile persistence over the key-value store.
//!
//! No validation happens here — the navigation gate and the profile form
//! decide what a profile is good for. Unreadable or corrupt persisted data
//! falls back silently to the empty default.

use tracing::info;

use crate::models::profile::UserProfile;
use crate::storage::{Storage, PROFILE_KEY};

#[derive(Debug, Clone)]
pub struct ProfileStore {
    storage: Storage,
}

impl ProfileStore {
    pub fn new(storage: Storage) -> Self {
        Self { storage }
    }

    /// The persisted profile, or the empty-field default. Never errors.
    pub fn load(&self) -> UserProfile {
        self.storage
            .read_json::<UserProfile>(PROFILE_KEY)
            .unwrap_or_default()
    }

    /// Wholesale overwrite, called on every profile mutation. Idempotent.
    pub fn save(&self, profile: &UserProfile) {
        self.storage.write_json(PROFILE_KEY, profile);
        info!("Profile saved for '{}'", profile.name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> (tempfile::TempDir, ProfileStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = ProfileStore::new(Storage::open(dir.path()).unwrap());
        (dir, store)
    }

    #[test]
    fn test_load_without_saved_profile_returns_default() {
        let (_dir, store) = temp_store();
        assert_eq!(store.load(), UserProfile::default());
    }

    #[test]
    fn test_save_load_round_trip() {
        let (_dir, store) = temp_store();
        let profile = UserProfile {
            name: "Sarah Chen".to_string(),
            field: "Software Engineering".to_string(),
            skills: vec!["React".to_string(), "TypeScript".to_string()],
            visa_type: "VLS-TS Student".to_string(),
            language_level: "B2".to_string(),
            preferences: "Seeking 6-month internship in Paris.".to_string(),
        };
        store.save(&profile);
        assert_eq!(store.load(), profile);
    }

    #[test]
    fn test_save_is_idempotent() {
        let (_dir, store) = temp_store();
        let profile = UserProfile {
            name: "Amira".to_string(),
            ..Default::default()
        };
        store.save(&profile);
        store.save(&profile);
        assert_eq!(store.load(), profile);
    }

    #[test]
    fn test_corrupt_persisted_profile_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::open(dir.path()).unwrap();
        storage.write(PROFILE_KEY, "][ definitely not json");
        let store = ProfileStore::new(storage);
        assert_eq!(store.load(), UserProfile::default());
    }
}
