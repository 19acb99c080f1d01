use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while talking to the translation backend.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Backend responded with status {0}")]
    Status(u16),

    #[error("Could not decode backend response: {0}")]
    Decode(String),
}

/// Errors raised while saving a downloaded archive.
#[derive(Error, Debug)]
pub enum DownloadError {
    #[error("Download directory does not exist: {0}")]
    MissingDirectory(PathBuf),

    #[error("Could not write {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Everything that can stop a form submission.
#[derive(Error, Debug)]
pub enum FormError {
    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Save(#[from] DownloadError),

    #[error("Background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not read config file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {message}")]
    Parse { path: PathBuf, message: String },
}

pub type TransportResult<T> = std::result::Result<T, TransportError>;
pub type DownloadResult<T> = std::result::Result<T, DownloadError>;
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
