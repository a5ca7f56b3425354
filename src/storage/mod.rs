pub mod json_backend;
pub mod memory;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::errors::CoreError;

pub type Result<T> = std::result::Result<T, CoreError>;

pub const STORE_SCHEMA_VERSION: u32 = 1;

/// Well-known store keys.
pub const USER_INFO_KEY: &str = "user_info";
pub const USER_PREFERENCES_KEY: &str = "user_preferences";
pub const TEAM_CODES_KEY: &str = "team_codes";
pub const LOGOS_KEY: &str = "logos";

/// Abstraction over key-value persistence backends.
///
/// The application root receives one of these; everything above it stays
/// oblivious to whether values land on disk or in memory.
pub trait PersistencePort: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<Value>>;
    fn set(&self, key: &str, value: Value) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
    fn keys(&self) -> Result<Vec<String>>;
}

/// Versioned JSON envelope wrapped around every persisted record.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Versioned<T> {
    pub schema_version: u32,
    pub data: T,
}

/// Loads and unwraps a versioned record, rejecting schema mismatches.
pub fn load_versioned<T: DeserializeOwned>(
    port: &dyn PersistencePort,
    key: &str,
) -> Result<Option<T>> {
    let Some(raw) = port.get(key)? else {
        return Ok(None);
    };
    let envelope: Versioned<T> = serde_json::from_value(raw)?;
    if envelope.schema_version != STORE_SCHEMA_VERSION {
        return Err(CoreError::SchemaVersion {
            expected: STORE_SCHEMA_VERSION,
            found: envelope.schema_version,
        });
    }
    Ok(Some(envelope.data))
}

/// Wraps the record in the current envelope and stores it.
pub fn save_versioned<T: Serialize>(
    port: &dyn PersistencePort,
    key: &str,
    data: &T,
) -> Result<()> {
    let envelope = Versioned {
        schema_version: STORE_SCHEMA_VERSION,
        data,
    };
    port.set(key, serde_json::to_value(&envelope)?)
}

pub use json_backend::JsonStore;
pub use memory::{MemoryStore, SessionStash};
