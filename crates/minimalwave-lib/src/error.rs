use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MinimalWaveError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid identifier {identifier:?}: expected {expected} characters, got {actual}")]
    InvalidIdentifier {
        identifier: String,
        expected: usize,
        actual: usize,
    },

    #[error("Identifier registry is empty")]
    EmptyRegistry,

    #[error("Invalid download URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Download ({url}) failed with status: {status}")]
    UnexpectedStatus { url: String, status: u16 },

    #[error("No suitable player found (tried: {candidates})")]
    NoPlayerFound { candidates: String },

    #[error("Failed to start player {player}: {reason}")]
    PlayerStart { player: String, reason: String },

    #[error("Player {player} exited with {status}")]
    PlayerExit { player: String, status: String },

    #[error("Failed to create temporary file in {path}: {reason}")]
    TemporaryFile { path: PathBuf, reason: String },

    #[error("Failed to save to cache {path}: {reason}")]
    DownloadWrite { path: PathBuf, reason: String },

    #[error("Failed to cache file at {path}: {reason}")]
    CacheWrite { path: PathBuf, reason: String },

    #[error("Cache directory unavailable at {path}: {reason}")]
    CacheDirectory { path: PathBuf, reason: String },

    #[error("Invalid arguments: {details}")]
    CliArgumentValidation { details: String },

    #[error("Unexpected error: {0}")]
    Unexpected(#[from] eyre::Report),
}
