use thiserror::Error;

/// Error type that captures common persistence and serialization failures.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Unsupported schema version {found} (expected {expected})")]
    SchemaVersion { expected: u32, found: u32 },
}
