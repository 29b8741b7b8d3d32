use std::path::PathBuf;
use thiserror::Error;

/// Reasons a discovered config file could not be turned into a
/// [`GraphQLConfig`](crate::config::GraphQLConfig).
///
/// These never escape [`ConfigResolver::resolve()`](crate::config::ConfigResolver::resolve);
/// they're logged and the config is treated as absent.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config file {path:?} does not declare a schema")]
    MissingSchema {
        path: PathBuf,
    },

    #[error("Failed to parse config file {path:?}: {message}")]
    Parse {
        message: String,
        path: PathBuf,
    },

    #[error("Failed to read config file {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(
        "Config file {path:?} can only be evaluated by a JavaScript runtime"
    )]
    UnsupportedFormat {
        path: PathBuf,
    },
}
