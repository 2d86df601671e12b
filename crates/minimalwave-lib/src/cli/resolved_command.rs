use crate::cache::CacheStore;
use crate::cli::args::Command;
use crate::cli::params::{CleanParams, ListParams, PlayParams};
use crate::config::{Config, load_config};
use crate::dirs::default_cache_dir;
use crate::download::PlayOptions;
use crate::error::MinimalWaveError;
use crate::identifier::{Identifier, Registry};
use std::path::PathBuf;
use url::Url;

#[derive(Debug, Clone)]
pub enum ResolvedCommand {
    Play(PlayParams),
    List(ListParams),
    Clean(CleanParams),
}

fn open_cache(
    app_config: &Config,
    cache_dir: Option<String>,
) -> Result<CacheStore, MinimalWaveError> {
    let dir = cache_dir
        .map(PathBuf::from)
        .or_else(|| app_config.cache_dir.clone())
        .or_else(default_cache_dir)
        .ok_or_else(|| MinimalWaveError::CliArgumentValidation {
            details: "Could not determine a cache directory. Configure cache_dir or pass --cache-dir."
                .to_string(),
        })?;

    tracing::debug!("Using cache directory {}", dir.display());
    CacheStore::open(dir)
}

fn load_registry(app_config: &Config) -> Result<Registry, MinimalWaveError> {
    if app_config.identifiers.is_empty() {
        Registry::builtin()
    } else {
        Registry::from_raw(&app_config.identifiers)
    }
}

pub fn resolve_command(command: Command) -> Result<ResolvedCommand, MinimalWaveError> {
    match command {
        Command::Play {
            config_path,
            cache_dir,
            identifier,
        } => {
            let app_config = load_config(config_path.as_deref())?;

            // Validate before touching the filesystem or the network.
            let identifier = match identifier {
                Some(raw) => Identifier::parse(&raw)?,
                None => load_registry(&app_config)?
                    .choose(&mut rand::thread_rng())
                    .clone(),
            };

            let base_url = Url::parse(&app_config.source.base_url).map_err(|e| {
                MinimalWaveError::InvalidUrl {
                    url: app_config.source.base_url.clone(),
                    reason: e.to_string(),
                }
            })?;

            if app_config.progress.blocks == 0 {
                return Err(MinimalWaveError::CliArgumentValidation {
                    details: "progress.blocks must be greater than 0.".to_string(),
                });
            }

            let cache = open_cache(&app_config, cache_dir)?;

            Ok(ResolvedCommand::Play(PlayParams {
                cache,
                identifier,
                base_url,
                user_agent: app_config.source.user_agent.clone(),
                players: app_config.playback.players.clone(),
                options: PlayOptions {
                    player_start_delay: app_config.playback.start_delay(),
                    animation_interval: app_config.progress.animation_interval(),
                    progress_blocks: app_config.progress.blocks,
                },
            }))
        }
        Command::List {
            config_path,
            cache_dir,
        } => {
            let app_config = load_config(config_path.as_deref())?;
            let registry = load_registry(&app_config)?;
            let cache = open_cache(&app_config, cache_dir)?;

            Ok(ResolvedCommand::List(ListParams { cache, registry }))
        }
        Command::Clean {
            config_path,
            cache_dir,
            all,
        } => {
            let app_config = load_config(config_path.as_deref())?;
            let cache = open_cache(&app_config, cache_dir)?;

            Ok(ResolvedCommand::Clean(CleanParams { cache, all }))
        }
    }
}
