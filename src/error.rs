//! Errors that can stop the service from starting.
//!
//! Probe-time failures are not represented here: they always end up as a
//! [`CheckResult`](crate::http_probe::result::CheckResult).

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config YAML: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("environment variable {name} has an invalid value {value:?}")]
    InvalidEnv { name: &'static str, value: String },

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("failed to read directory file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid directory YAML: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("duplicate service id {0:?}")]
    DuplicateId(String),

    #[error("service {id:?} has an unusable url {url:?}")]
    InvalidUrl { id: String, url: String },
}
