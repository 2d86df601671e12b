mod loader;
mod model;

pub use loader::load_config;
pub use model::{
    Config, DEFAULT_BASE_URL, DEFAULT_USER_AGENT, PlaybackConfig, ProgressConfig, SourceConfig,
};
