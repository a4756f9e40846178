//! Best score persistence
//!
//! A single integer under a fixed key. A missing or unreadable value means
//! the best score starts at 0. Write failures are reported to the caller,
//! which logs them and carries on; they never reach the simulation.

use thiserror::Error;

use crate::consts::BEST_SCORE_KEY;

/// Storage failures
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("stored scores are malformed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("storage unavailable")]
    Unavailable,
}

/// Where the best score lives
pub trait ScoreStore {
    /// Stored best score, `None` if nothing was saved yet
    fn load_best(&mut self) -> Result<Option<u32>, StoreError>;
    fn save_best(&mut self, best: u32) -> Result<(), StoreError>;
}

/// Load the best score, treating absence and failures as 0
pub fn load_best_or_zero(store: &mut impl ScoreStore) -> u32 {
    match store.load_best() {
        Ok(Some(best)) => {
            log::info!("Loaded best score {}", best);
            best
        }
        Ok(None) => {
            log::info!("No best score found, starting fresh");
            0
        }
        Err(e) => {
            log::warn!("Could not load best score: {}", e);
            0
        }
    }
}

/// In-memory store; records every write
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pub best: Option<u32>,
    pub writes: Vec<u32>,
}

impl MemoryStore {
    pub fn with_best(best: u32) -> Self {
        Self {
            best: Some(best),
            writes: Vec::new(),
        }
    }
}

impl ScoreStore for MemoryStore {
    fn load_best(&mut self) -> Result<Option<u32>, StoreError> {
        Ok(self.best)
    }

    fn save_best(&mut self, best: u32) -> Result<(), StoreError> {
        self.best = Some(best);
        self.writes.push(best);
        Ok(())
    }
}

/// JSON file holding `{ "flappy-best-score": N }`
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct FileStore {
    path: std::path::PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileStore {
    pub fn new(path: impl Into<std::path::PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_map(&self) -> Result<serde_json::Map<String, serde_json::Value>, StoreError> {
        match std::fs::read_to_string(&self.path) {
            Ok(json) => Ok(serde_json::from_str(&json)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(serde_json::Map::new()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl ScoreStore for FileStore {
    fn load_best(&mut self) -> Result<Option<u32>, StoreError> {
        let map = self.read_map()?;
        Ok(map
            .get(BEST_SCORE_KEY)
            .and_then(|v| v.as_u64())
            .and_then(|v| u32::try_from(v).ok()))
    }

    fn save_best(&mut self, best: u32) -> Result<(), StoreError> {
        // Keep unrelated keys; start over if the file is corrupt
        let mut map = self.read_map().unwrap_or_default();
        map.insert(BEST_SCORE_KEY.to_string(), best.into());
        let json = serde_json::to_string_pretty(&map)?;
        std::fs::write(&self.path, json)?;
        log::info!("Best score saved ({})", best);
        Ok(())
    }
}

/// Browser LocalStorage, value stored as a decimal string
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default)]
pub struct LocalStorageStore;

#[cfg(target_arch = "wasm32")]
impl LocalStorageStore {
    fn storage() -> Result<web_sys::Storage, StoreError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or(StoreError::Unavailable)
    }
}

#[cfg(target_arch = "wasm32")]
impl ScoreStore for LocalStorageStore {
    fn load_best(&mut self) -> Result<Option<u32>, StoreError> {
        let storage = Self::storage()?;
        let value = storage
            .get_item(BEST_SCORE_KEY)
            .map_err(|_| StoreError::Unavailable)?;
        Ok(value.and_then(|v| v.trim().parse().ok()))
    }

    fn save_best(&mut self, best: u32) -> Result<(), StoreError> {
        let storage = Self::storage()?;
        storage
            .set_item(BEST_SCORE_KEY, &best.to_string())
            .map_err(|_| StoreError::Unavailable)?;
        log::info!("Best score saved ({})", best);
        Ok(())
    }
}
