//! Per-day progress persistence.
//!
//! Values are keyed by a schema version plus the daily seed, so every
//! calendar day owns an independent record and a format change can bump
//! the version instead of misreading old data. Older days' records are
//! never read back and are left to accumulate.
//!
//! Reads are forgiving: missing or malformed data is treated as "no
//! save" and the day starts fresh. Writes are last-write-wins and
//! failures are logged, never surfaced — losing a save costs one day of
//! resume, not the game.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use crate::game_engine::models::SavedProgress;

/// Bump when the serialized [`SavedProgress`] shape changes.
pub const SCHEMA_VERSION: u32 = 4;

/// Storage key for a daily seed, e.g. `trivia_v4_20240315`.
pub fn storage_key(seed: u32) -> String {
    format!("trivia_v{SCHEMA_VERSION}_{seed}")
}

/// Key-value persistence for daily progress.
pub trait ProgressStore {
    /// Load the saved progress for a seed, or `None` if there is no
    /// usable save (missing, unreadable, or malformed).
    fn load(&self, seed: u32) -> Option<SavedProgress>;

    /// Persist progress for a seed, replacing any previous value.
    fn save(&mut self, seed: u32, progress: &SavedProgress);

    /// Drop all persisted progress (the reset/debug action).
    fn clear(&mut self);
}

// ---------------------------------------------------------------------------
// In-memory store
// ---------------------------------------------------------------------------

/// String-to-string map store, mirroring a browser's localStorage.
/// Primarily a test double; also useful for ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a raw value under a seed's key, bypassing serialization.
    /// Lets tests stage malformed data.
    pub fn insert_raw(&mut self, seed: u32, value: impl Into<String>) {
        self.entries.insert(storage_key(seed), value.into());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ProgressStore for MemoryStore {
    fn load(&self, seed: u32) -> Option<SavedProgress> {
        let raw = self.entries.get(&storage_key(seed))?;
        match serde_json::from_str(raw) {
            Ok(progress) => Some(progress),
            Err(err) => {
                log::debug!("discarding malformed save for seed {seed}: {err}");
                None
            }
        }
    }

    fn save(&mut self, seed: u32, progress: &SavedProgress) {
        match serde_json::to_string(progress) {
            Ok(json) => {
                self.entries.insert(storage_key(seed), json);
            }
            Err(err) => log::warn!("failed to serialize progress for seed {seed}: {err}"),
        }
    }

    fn clear(&mut self) {
        self.entries.clear();
    }
}

// ---------------------------------------------------------------------------
// On-disk store
// ---------------------------------------------------------------------------

/// One JSON file per storage key under a directory.
#[derive(Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Use `dir` for save files, creating it lazily on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, seed: u32) -> PathBuf {
        self.dir.join(format!("{}.json", storage_key(seed)))
    }
}

impl ProgressStore for FileStore {
    fn load(&self, seed: u32) -> Option<SavedProgress> {
        let raw = fs::read_to_string(self.path_for(seed)).ok()?;
        match serde_json::from_str(&raw) {
            Ok(progress) => Some(progress),
            Err(err) => {
                log::debug!("discarding malformed save for seed {seed}: {err}");
                None
            }
        }
    }

    fn save(&mut self, seed: u32, progress: &SavedProgress) {
        if let Err(err) = fs::create_dir_all(&self.dir) {
            log::warn!("cannot create save directory {:?}: {err}", self.dir);
            return;
        }
        let json = match serde_json::to_string(progress) {
            Ok(json) => json,
            Err(err) => {
                log::warn!("failed to serialize progress for seed {seed}: {err}");
                return;
            }
        };
        if let Err(err) = fs::write(self.path_for(seed), json) {
            log::warn!("failed to write save for seed {seed}: {err}");
        }
    }

    fn clear(&mut self) {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(_) => return, // nothing saved yet
        };
        for entry in entries.flatten() {
            let name = entry.file_name();
            let name = name.to_string_lossy();
            if name.starts_with("trivia_v") && name.ends_with(".json") {
                if let Err(err) = fs::remove_file(entry.path()) {
                    log::warn!("failed to remove save file {name}: {err}");
                }
            }
        }
    }
}
