//! Reading and writing the JSON file of scraped records.
//!
//! The file holds a single JSON array. A missing or blank file counts as an
//! empty array; anything else that fails to parse is an error.

use std::io::ErrorKind;
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};
use tokio::fs;

use crate::Result;

/// Loads the stored list, preserving its order.
pub async fn load_records<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<Vec<T>> {
    let data = match fs::read_to_string(path.as_ref()).await {
        Ok(data) => data,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };
    if data.trim().is_empty() {
        return Ok(Vec::new());
    }
    Ok(serde_json::from_str(&data)?)
}

/// Overwrites `path` with the whole list, creating parent directories as needed.
pub async fn save_records<T: Serialize>(records: &[T], path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).await?;
    }
    let json = serde_json::to_vec(records)?;
    fs::write(path, json).await?;
    Ok(())
}
