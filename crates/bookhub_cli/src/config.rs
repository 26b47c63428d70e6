//! Environment-driven runtime configuration.
//!
//! # Responsibility
//! - Resolve store path and logging settings from the process environment.
//! - Keep resolution deterministic and free of side effects.

use bookhub_core::default_log_level;
use std::path::PathBuf;

const DB_FILE_ENV: &str = "BOOKHUB_DB_FILE";
const LOG_DIR_ENV: &str = "BOOKHUB_LOG_DIR";
const LOG_LEVEL_ENV: &str = "BOOKHUB_LOG_LEVEL";
const DEFAULT_DB_FILE_NAME: &str = "bookhub.sqlite3";

/// Resolved runtime settings for one shell session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// SQLite store file backing the catalog snapshot.
    pub db_path: PathBuf,
    /// Rolling-log directory; logging stays off when unset.
    pub log_dir: Option<String>,
    pub log_level: String,
}

impl RuntimeConfig {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let db_path = non_blank(lookup(DB_FILE_ENV))
            .map(PathBuf::from)
            .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_DB_FILE_NAME));
        let log_dir = non_blank(lookup(LOG_DIR_ENV));
        let log_level =
            non_blank(lookup(LOG_LEVEL_ENV)).unwrap_or_else(|| default_log_level().to_string());

        Self {
            db_path,
            log_dir,
            log_level,
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_string())
        .filter(|raw| !raw.is_empty())
}
