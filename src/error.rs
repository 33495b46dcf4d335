use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors from resolving an app alias against the config file. These are
/// fatal: the user asked for a spec we cannot produce.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("config file {} is not valid JSON: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("no window spec named '{alias}' in {}", .path.display())]
    NotFound { alias: String, path: PathBuf },

    #[error(
        "config file {} defines '{alias}' more than once (aliases are case-insensitive)",
        .path.display()
    )]
    Duplicate { alias: String, path: PathBuf },
}

/// Errors from persisting the MRU snapshot.
///
/// There is no read-side counterpart: a missing or corrupt snapshot is
/// recovered as an empty list and never surfaced to the caller.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to serialize MRU snapshot: {source}")]
    Serialize {
        #[from]
        source: serde_json::Error,
    },

    #[error("failed to write MRU snapshot {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
