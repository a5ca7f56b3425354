pub mod persistence;

use dirs::home_dir;
use std::{env, path::PathBuf, sync::Once};

const DEFAULT_DIR_NAME: &str = ".gotoguys";
const STORE_DIR: &str = "store";
const CONFIG_BACKUP_DIR: &str = "config_backups";

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber with sensible defaults.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("gotoguys_core=info".parse().unwrap());

        fmt().with_env_filter(filter).init();
    });
}

/// Returns the application-specific data directory, defaulting to `~/.gotoguys`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("GOTOGUYS_HOME") {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Directory holding the JSON key-value store files.
pub fn store_dir_in(base: &std::path::Path) -> PathBuf {
    base.join(STORE_DIR)
}

/// Returns the directory containing configuration backups.
pub fn config_backups_dir_in(base: &std::path::Path) -> PathBuf {
    base.join(CONFIG_BACKUP_DIR)
}

/// Creates the directory (and parents) when missing.
pub fn ensure_dir(path: &std::path::Path) -> Result<(), std::io::Error> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}
