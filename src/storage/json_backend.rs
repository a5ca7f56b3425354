use std::{fs, path::PathBuf};

use serde_json::Value;

use crate::utils::{app_data_dir, ensure_dir, persistence, store_dir_in};

use super::{PersistencePort, Result};

const STORE_EXTENSION: &str = "json";

/// File-per-key JSON store rooted in the app data directory.
#[derive(Debug, Clone)]
pub struct JsonStore {
    store_dir: PathBuf,
}

impl JsonStore {
    pub fn new(root: Option<PathBuf>) -> Result<Self> {
        let base = root.unwrap_or_else(app_data_dir);
        ensure_dir(&base)?;
        let store_dir = store_dir_in(&base);
        ensure_dir(&store_dir)?;
        Ok(Self { store_dir })
    }

    pub fn new_default() -> Result<Self> {
        Self::new(None)
    }

    pub fn key_path(&self, key: &str) -> PathBuf {
        self.store_dir
            .join(format!("{}.{}", canonical_key(key), STORE_EXTENSION))
    }
}

impl PersistencePort for JsonStore {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(persistence::load_json_from_path(&path)?))
    }

    fn set(&self, key: &str, value: Value) -> Result<()> {
        persistence::save_json_to_path(&value, &self.key_path(key))
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.key_path(key);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>> {
        let mut keys = Vec::new();
        for entry in fs::read_dir(&self.store_dir)? {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(STORE_EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                keys.push(stem.to_string());
            }
        }
        keys.sort();
        Ok(keys)
    }
}

/// Keeps store file names predictable regardless of key casing or spaces.
fn canonical_key(key: &str) -> String {
    key.trim()
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_key_slugs_punctuation() {
        assert_eq!(canonical_key("Team Codes!"), "team_codes_");
        assert_eq!(canonical_key("user_info"), "user_info");
    }
}
