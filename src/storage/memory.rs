use std::{collections::HashMap, sync::RwLock};

use serde_json::Value;

use super::{PersistencePort, Result};

/// HashMap-backed store for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PersistencePort for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: Value) -> Result<()> {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        entries.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        entries.remove(key);
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>> {
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        let mut keys: Vec<String> = entries.keys().cloned().collect();
        keys.sort();
        Ok(keys)
    }
}

/// Session-scoped stash holding a single pending team name.
///
/// Mirrors the transient storage consumed once on return from login: the
/// stashed value is handed out exactly once.
#[derive(Debug, Default)]
pub struct SessionStash {
    pending: RwLock<Option<String>>,
}

impl SessionStash {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stash(&self, team_name: impl Into<String>) {
        let mut pending = self.pending.write().unwrap_or_else(|e| e.into_inner());
        *pending = Some(team_name.into());
    }

    /// Consumes the pending name, leaving the stash empty.
    pub fn take(&self) -> Option<String> {
        let mut pending = self.pending.write().unwrap_or_else(|e| e.into_inner());
        pending.take()
    }

    pub fn peek(&self) -> Option<String> {
        let pending = self.pending.read().unwrap_or_else(|e| e.into_inner());
        pending.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trips_values() {
        let store = MemoryStore::new();
        store
            .set("user_info", serde_json::json!({"display_name": "Jane"}))
            .unwrap();
        let value = store.get("user_info").unwrap().unwrap();
        assert_eq!(value["display_name"], "Jane");
        store.remove("user_info").unwrap();
        assert!(store.get("user_info").unwrap().is_none());
    }

    #[test]
    fn stash_is_consumed_once() {
        let stash = SessionStash::new();
        stash.stash("Blitz Brigade");
        assert_eq!(stash.take().as_deref(), Some("Blitz Brigade"));
        assert!(stash.take().is_none());
    }
}
