use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::{
    collections::BTreeMap,
    env,
    path::{Path, PathBuf},
};
use tokio::fs;
use tracing::error;

/// Injectable key-value persistence. Counter logic only ever talks to this
/// trait, so it can be exercised against an in-memory map instead of a real
/// data file.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<&str>;
    fn set(&mut self, key: &str, value: String);
}

/// In-memory store; also the unit that gets serialized to the data file.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MemoryStore {
    values: BTreeMap<String, String>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    fn set(&mut self, key: &str, value: String) {
        self.values.insert(key.to_string(), value);
    }
}

pub fn resolve_data_path() -> PathBuf {
    match env::var("TASBEEH_DATA_PATH") {
        Ok(path) => PathBuf::from(path),
        Err(_) => PathBuf::from("data/state.json"),
    }
}

/// Reads the data file, falling back to an empty store when the file is
/// missing or unreadable. Parse failures are logged and swallowed.
pub async fn load_store(path: &Path) -> MemoryStore {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(store) => store,
            Err(err) => {
                error!("failed to parse data file: {err}");
                MemoryStore::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => MemoryStore::default(),
        Err(err) => {
            error!("failed to read data file: {err}");
            MemoryStore::default()
        }
    }
}

pub async fn persist_store(path: &Path, store: &MemoryStore) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(store).map_err(AppError::internal)?;
    fs::write(path, payload).await.map_err(AppError::internal)?;
    Ok(())
}
