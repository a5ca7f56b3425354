use std::{fs, path::Path};

use serde::{de::DeserializeOwned, Serialize};

use crate::errors::CoreError;

/// Writes the provided value to disk atomically by staging to a temporary file.
pub fn save_json_to_path<T: Serialize>(value: &T, path: &Path) -> Result<(), CoreError> {
    let tmp = path.with_extension("tmp");
    let json = serde_json::to_string_pretty(value)?;
    fs::write(&tmp, json)?;
    fs::rename(tmp, path)?;
    Ok(())
}

/// Loads a JSON snapshot from disk, returning structured errors on failure.
pub fn load_json_from_path<T: DeserializeOwned>(path: &Path) -> Result<T, CoreError> {
    let data = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}
