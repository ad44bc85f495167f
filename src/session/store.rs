//! Profile persistence behind a small key-value trait.
//!
//! The session writes one [`ProfileSnapshot`] per save slot after every state
//! change and reads it back at construction. Missing fields fall back to a
//! fresh profile (grade 3, difficulty 1, the `"default"` avatar).

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use serde::{Deserialize, Deserializer, Serialize};
use tracing::{debug, warn};

use crate::error::{EngineError, EngineResult};
use crate::quiz_engine::models::{Difficulty, Grade};

pub const DEFAULT_AVATAR: &str = "default";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileSnapshot {
    pub user: String,
    pub score: u32,
    pub coins: u32,
    pub unlocked_avatars: Vec<String>,
    #[serde(deserialize_with = "grade_or_default")]
    pub grade: Grade,
    pub difficulty: Difficulty,
}

impl Default for ProfileSnapshot {
    fn default() -> Self {
        ProfileSnapshot {
            user: String::new(),
            score: 0,
            coins: 0,
            unlocked_avatars: vec![DEFAULT_AVATAR.to_string()],
            grade: Grade::default(),
            difficulty: Difficulty::default(),
        }
    }
}

/// A stored grade outside 1-12 restores as the default grade.
fn grade_or_default<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Grade, D::Error> {
    let stored = Option::<i64>::deserialize(deserializer)?;
    let grade = stored
        .and_then(|v| u8::try_from(v).ok())
        .and_then(|v| Grade::new(v).ok());
    Ok(grade.unwrap_or_else(|| {
        warn!(?stored, "stored grade out of range, using default");
        Grade::default()
    }))
}

pub trait ProfileStore {
    fn load(&self, slot: &str) -> EngineResult<Option<ProfileSnapshot>>;
    fn save(&mut self, slot: &str, snapshot: &ProfileSnapshot) -> EngineResult<()>;
}

/// Keeps serialized snapshots in memory. Used by tests and demos.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    slots: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw JSON stored under `slot`, if any.
    pub fn raw(&self, slot: &str) -> Option<&str> {
        self.slots.get(slot).map(String::as_str)
    }

    /// Seed a slot with raw JSON, as if written by an earlier session.
    pub fn insert_raw(&mut self, slot: &str, json: impl Into<String>) {
        self.slots.insert(slot.to_string(), json.into());
    }
}

impl ProfileStore for MemoryStore {
    fn load(&self, slot: &str) -> EngineResult<Option<ProfileSnapshot>> {
        self.slots
            .get(slot)
            .map(|raw| serde_json::from_str(raw).map_err(EngineError::from))
            .transpose()
    }

    fn save(&mut self, slot: &str, snapshot: &ProfileSnapshot) -> EngineResult<()> {
        self.slots.insert(slot.to_string(), serde_json::to_string(snapshot)?);
        Ok(())
    }
}

/// One `<slot>.json` file per slot inside `dir`.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        JsonFileStore { dir: dir.into() }
    }

    fn path_for(&self, slot: &str) -> EngineResult<PathBuf> {
        if slot.is_empty() || slot.contains(['/', '\\']) || slot.starts_with('.') {
            return Err(EngineError::Storage(format!("invalid save slot name: {slot:?}")));
        }
        Ok(self.dir.join(format!("{slot}.json")))
    }
}

impl ProfileStore for JsonFileStore {
    fn load(&self, slot: &str) -> EngineResult<Option<ProfileSnapshot>> {
        let path = self.path_for(slot)?;
        match fs::read_to_string(&path) {
            Ok(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&mut self, slot: &str, snapshot: &ProfileSnapshot) -> EngineResult<()> {
        let path = self.path_for(slot)?;
        fs::create_dir_all(&self.dir)?;
        // Write then rename so a crash never leaves a half-written profile.
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_vec_pretty(snapshot)?)?;
        fs::rename(&tmp, &path)?;
        debug!(path = %path.display(), "profile saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ProfileSnapshot {
        ProfileSnapshot {
            user: "Ada".into(),
            score: 420,
            coins: 35,
            unlocked_avatars: vec!["default".into(), "robot".into()],
            grade: Grade::new(5).unwrap(),
            difficulty: Difficulty::new(4),
        }
    }

    #[test]
    fn snapshot_uses_camel_case_keys() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["unlockedAvatars"][1], "robot");
        assert_eq!(json["grade"], 5);
        assert_eq!(json["difficulty"], 4);
    }

    #[test]
    fn missing_fields_fall_back_to_a_fresh_profile() {
        let snap: ProfileSnapshot = serde_json::from_str(r#"{"user":"Bo","coins":12}"#).unwrap();
        assert_eq!(snap.user, "Bo");
        assert_eq!(snap.coins, 12);
        assert_eq!(snap.grade.value(), 3);
        assert_eq!(snap.difficulty.level(), 1);
        assert_eq!(snap.unlocked_avatars, vec!["default".to_string()]);
    }

    #[test]
    fn out_of_range_difficulty_is_clamped_on_load() {
        let snap: ProfileSnapshot = serde_json::from_str(r#"{"difficulty":42}"#).unwrap();
        assert_eq!(snap.difficulty.level(), 10);
    }

    #[test]
    fn out_of_range_grade_falls_back_to_default() {
        for raw in [r#"{"grade":0}"#, r#"{"grade":13}"#, r#"{"grade":-2}"#, r#"{"grade":null}"#] {
            let snap: ProfileSnapshot = serde_json::from_str(raw).unwrap();
            assert_eq!(snap.grade.value(), 3, "{raw}");
        }
    }

    #[test]
    fn memory_store_keeps_slots_apart() {
        let mut store = MemoryStore::new();
        assert_eq!(store.load("a").unwrap(), None);
        store.save("a", &sample()).unwrap();
        assert_eq!(store.load("a").unwrap(), Some(sample()));
        assert_eq!(store.load("b").unwrap(), None);
    }

    #[test]
    fn file_store_writes_one_file_per_slot() {
        let dir = std::env::temp_dir().join(format!("math_drill_gen_store_{}", std::process::id()));
        let mut store = JsonFileStore::new(&dir);
        assert_eq!(store.load("slot_one").unwrap(), None);
        store.save("slot_one", &sample()).unwrap();
        assert!(dir.join("slot_one.json").exists());
        assert_eq!(store.load("slot_one").unwrap(), Some(sample()));
        assert!(matches!(store.save("../escape", &sample()), Err(EngineError::Storage(_))));
        fs::remove_dir_all(&dir).unwrap();
    }
}
