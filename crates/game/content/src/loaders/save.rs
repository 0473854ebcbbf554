//! Player save files (JSON).

use std::fs;
use std::path::{Path, PathBuf};

use game_core::{Inventory, Party};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Persisted player progress: the party and the bag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SaveData {
    pub party: Party,
    pub inventory: Inventory,
}

/// File-based save storage, one `save_{session}.json` per session.
///
/// Writes go to a temp file first and are renamed into place.
pub struct SaveLoader {
    base_dir: PathBuf,
}

impl SaveLoader {
    pub fn new(base_dir: impl AsRef<Path>) -> LoadResult<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir).map_err(|e| {
            anyhow::anyhow!("Failed to create save dir {}: {}", base_dir.display(), e)
        })?;
        Ok(Self { base_dir })
    }

    pub fn save_path(&self, session_id: &str) -> PathBuf {
        self.base_dir.join(format!("save_{}.json", session_id))
    }

    pub fn save(&self, session_id: &str, data: &SaveData) -> LoadResult<()> {
        let path = self.save_path(session_id);
        let temp_path = path.with_extension("json.tmp");

        let json = serde_json::to_string_pretty(data)
            .map_err(|e| anyhow::anyhow!("Failed to serialize save: {}", e))?;
        fs::write(&temp_path, json)
            .map_err(|e| anyhow::anyhow!("Failed to write {}: {}", temp_path.display(), e))?;

        fs::rename(&temp_path, &path)
            .map_err(|e| anyhow::anyhow!("Failed to replace {}: {}", path.display(), e))?;

        tracing::debug!("Saved game: {}", path.display());
        Ok(())
    }

    /// Returns `None` when the session has never been saved.
    pub fn load(&self, session_id: &str) -> LoadResult<Option<SaveData>> {
        let path = self.save_path(session_id);
        if !path.exists() {
            return Ok(None);
        }

        let json = read_file(&path)?;
        let data: SaveData = serde_json::from_str(&json)
            .map_err(|e| anyhow::anyhow!("Failed to parse save {}: {}", path.display(), e))?;

        tracing::info!(
            "Loaded save '{}': {} creatures, {} item stacks",
            session_id,
            data.party.len(),
            data.inventory.items().len()
        );
        Ok(Some(data))
    }

    pub fn delete(&self, session_id: &str) -> LoadResult<()> {
        let path = self.save_path(session_id);
        if path.exists() {
            fs::remove_file(&path)
                .map_err(|e| anyhow::anyhow!("Failed to delete {}: {}", path.display(), e))?;
            tracing::info!("Deleted save: {}", path.display());
        }
        Ok(())
    }

    /// Session ids with a save file, sorted.
    pub fn list_sessions(&self) -> LoadResult<Vec<String>> {
        let mut sessions = Vec::new();
        let entries = fs::read_dir(&self.base_dir).map_err(|e| {
            anyhow::anyhow!("Failed to list {}: {}", self.base_dir.display(), e)
        })?;

        for entry in entries {
            let path = entry?.path();
            if let Some(session_id) = path
                .file_name()
                .and_then(|name| name.to_str())
                .and_then(|name| name.strip_prefix("save_"))
                .and_then(|name| name.strip_suffix(".json"))
            {
                sessions.push(session_id.to_string());
            }
        }

        sessions.sort();
        Ok(sessions)
    }
}
