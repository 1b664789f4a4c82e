use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::models::event::Event;

const EVENTS_FILE: &str = "events.json";

// Returns the directory where the event collection lives.
// Defaults to a relative "./data" directory.
pub fn get_db_location() -> String {
    env::var("DB_LOCATION").unwrap_or("./data".to_string())
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to create data directory {path}: {source}")]
    CreateDir {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to serialize events: {0}")]
    Serialize(#[from] serde_json::Error),
}

fn events_path(dir: &str) -> PathBuf {
    Path::new(dir).join(EVENTS_FILE)
}

/// Loads the whole event collection. A missing or unreadable file and a
/// corrupt payload both read as an empty collection.
pub fn load_events(dir: &str) -> Vec<Event> {
    let Ok(raw) = fs::read_to_string(events_path(dir)) else {
        return Vec::new();
    };
    serde_json::from_str(&raw).unwrap_or_default()
}

/// Replaces the whole collection on disk, preserving order.
pub fn save_events(dir: &str, events: &[Event]) -> Result<(), StoreError> {
    fs::create_dir_all(dir).map_err(|source| StoreError::CreateDir {
        path: dir.to_string(),
        source,
    })?;
    let path = events_path(dir);
    let payload = serde_json::to_string_pretty(events)?;
    fs::write(&path, payload).map_err(|source| StoreError::Write {
        path: path.display().to_string(),
        source,
    })
}
