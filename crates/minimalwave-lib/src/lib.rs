pub mod cache;
pub mod cli;
pub mod config;
pub mod dirs;
pub mod download;
pub mod error;
pub mod identifier;
pub mod player;
pub mod progress;

pub use config::Config;
pub use error::MinimalWaveError;
