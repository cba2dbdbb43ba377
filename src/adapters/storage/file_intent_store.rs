//! File Intent Store Adapter - JSON-file implementation of IntentStore.
//!
//! Keeps every operator-added intent in a single JSON array on disk.
//! The file is small (tens of records, not thousands), so saves rewrite
//! it whole rather than appending.

use async_trait::async_trait;
use std::path::PathBuf;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::domain::intent::Intent;
use crate::ports::{IntentStore, IntentStoreError};

/// JSON-file storage for operator-added intents.
///
/// # File Layout
///
/// One file holding a JSON array of intent records:
///
/// ```text
/// [
///   { "name": "business_hours", "patterns": [...], "responses": [...] }
/// ]
/// ```
///
/// # Atomic Writes
///
/// Uses a write-to-temp-then-rename pattern so a crash mid-save never
/// leaves a truncated file:
/// 1. Write the full array to `{path}.tmp`
/// 2. Sync to disk
/// 3. Rename over `{path}`
///
/// # Missing and Corrupt Files
///
/// A missing file loads as an empty list; that is the normal first-run
/// state. A file that exists but does not parse is an error, on load and
/// on save alike, so a bad byte can never silently wipe saved intents.
#[derive(Debug, Clone)]
pub struct FileIntentStore {
    /// Path of the JSON file holding the intent array.
    path: PathBuf,
}

impl FileIntentStore {
    /// Creates a store backed by the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut path = self.path.clone().into_os_string();
        path.push(".tmp");
        PathBuf::from(path)
    }

    async fn write_all(&self, intents: &[Intent]) -> Result<(), IntentStoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }

        let json = serde_json::to_string_pretty(intents)
            .map_err(|e| IntentStoreError::serialization(e.to_string()))?;

        let temp_path = self.temp_path();
        let mut file = fs::File::create(&temp_path).await?;
        file.write_all(json.as_bytes()).await?;
        file.sync_all().await?;
        fs::rename(&temp_path, &self.path).await?;

        Ok(())
    }
}

#[async_trait]
impl IntentStore for FileIntentStore {
    async fn load_all(&self) -> Result<Vec<Intent>, IntentStoreError> {
        let raw = match fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        serde_json::from_str(&raw).map_err(|e| IntentStoreError::deserialization(e.to_string()))
    }

    async fn save(&self, intent: &Intent) -> Result<(), IntentStoreError> {
        // Read-modify-write; a corrupt existing file fails the save rather
        // than getting overwritten.
        let mut intents = self.load_all().await?;

        match intents.iter().position(|i| i.name == intent.name) {
            Some(index) => intents[index] = intent.clone(),
            None => intents.push(intent.clone()),
        }

        self.write_all(&intents).await
    }
}
