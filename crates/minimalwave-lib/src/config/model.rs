use crate::player::PlayerCandidate;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://archive.org/download";
pub const DEFAULT_USER_AGENT: &str = "minimalwave (https://github.com/miku/minimalwave)";

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields, default)]
pub struct Config {
    /// Defaults to `<user-cache-dir>/minimalwave`.
    pub cache_dir: Option<PathBuf>,
    pub source: SourceConfig,
    pub playback: PlaybackConfig,
    pub progress: ProgressConfig,
    /// Replaces the built-in registry when non-empty.
    pub identifiers: Vec<String>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields, default)]
pub struct SourceConfig {
    pub base_url: String,
    pub user_agent: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields, default)]
pub struct PlaybackConfig {
    /// Pause between starting the player and writing the first bytes.
    pub start_delay_ms: u64,
    /// Ordered by priority; the first one found on `PATH` wins.
    pub players: Vec<PlayerCandidate>,
}

impl PlaybackConfig {
    pub fn start_delay(&self) -> Duration {
        Duration::from_millis(self.start_delay_ms)
    }
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            start_delay_ms: 100,
            players: PlayerCandidate::defaults(),
        }
    }
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields, default)]
pub struct ProgressConfig {
    pub blocks: usize,
    pub animation_interval_ms: u64,
}

impl ProgressConfig {
    pub fn animation_interval(&self) -> Duration {
        Duration::from_millis(self.animation_interval_ms)
    }
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            blocks: 64,
            animation_interval_ms: 100,
        }
    }
}
