use super::Config;
use crate::dirs::default_config_file;
use crate::error::MinimalWaveError;
use config::Config as ConfigBuilder;

/// Loads `config_path` if given, otherwise the per-user config file when it
/// exists. Missing values fall back to the defaults.
pub fn load_config(config_path: Option<&str>) -> Result<Config, MinimalWaveError> {
    let mut builder = ConfigBuilder::builder();

    match config_path {
        Some(path) => {
            builder = builder.add_source(config::File::with_name(path));
        }
        None => {
            if let Some(default_path) = default_config_file() {
                tracing::debug!("Looking for configuration at {}", default_path.display());
                builder = builder.add_source(config::File::from(default_path).required(false));
            }
        }
    }

    builder.build()?.try_deserialize().map_err(Into::into)
}
