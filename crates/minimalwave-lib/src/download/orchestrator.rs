use super::fetch::Fetch;
use super::types::{PlayOptions, RemoteBody};
use crate::cache::CacheStore;
use crate::error::MinimalWaveError;
use crate::identifier::Identifier;
use crate::player::{Launch, Playback, PlaybackOutcome};
use crate::progress::{BlockProgress, ConnectingAnimation, Terminal};
use futures::StreamExt;
use std::path::Path;
use tokio::io::AsyncWriteExt;

/// Plays a recording from the cache, or streams it into a temporary file that
/// a player is already reading and caches it once the transfer completes.
///
/// The player and the download share the temporary file without any locking:
/// this relies on the filesystem allowing a reader and a writer on the same
/// file at once, and on the player tolerating a file that is still growing.
#[derive(Debug)]
pub struct Orchestrator<F, L> {
    cache: CacheStore,
    fetcher: F,
    launcher: L,
    terminal: Terminal,
    options: PlayOptions,
}

impl<F: Fetch, L: Launch> Orchestrator<F, L> {
    pub fn new(
        cache: CacheStore,
        fetcher: F,
        launcher: L,
        terminal: Terminal,
        options: PlayOptions,
    ) -> Self {
        Self {
            cache,
            fetcher,
            launcher,
            terminal,
            options,
        }
    }

    pub fn cache(&self) -> &CacheStore {
        &self.cache
    }

    pub async fn play(&self, identifier: &Identifier) -> Result<PlaybackOutcome, MinimalWaveError> {
        let cache_path = self.cache.path_for(identifier);

        if self.cache.exists(&cache_path) {
            tracing::info!(identifier = %identifier, path = %cache_path.display(), "Playing from cache");
            return self.launcher.launch(&cache_path)?.wait().await;
        }

        tracing::info!(identifier = %identifier, "Not cached, downloading");
        self.download_and_play(identifier, &cache_path).await
    }

    async fn download_and_play(
        &self,
        identifier: &Identifier,
        cache_path: &Path,
    ) -> Result<PlaybackOutcome, MinimalWaveError> {
        let animation =
            ConnectingAnimation::start(self.terminal.clone(), self.options.animation_interval);
        let response = self.fetcher.fetch(identifier).await;
        animation.stop();
        let body = response?;

        // The temporary file is deleted when `temp_path` drops, on every path out.
        let (file, temp_path) = self.cache.create_temp_file()?.into_parts();
        tracing::debug!(path = %temp_path.display(), "Created temporary file");

        let mut player = self.launcher.launch(&temp_path)?;

        // Not a synchronization: only gives the player a head start on opening
        // the file before data arrives.
        tokio::time::sleep(self.options.player_start_delay).await;

        let written = match self
            .write_body(tokio::fs::File::from_std(file), &temp_path, body)
            .await
        {
            Ok(written) => written,
            Err(err) => {
                if let Err(kill_err) = player.kill() {
                    tracing::warn!("failed to stop player: {}", kill_err);
                }
                return Err(err);
            }
        };
        tracing::debug!(identifier = %identifier, bytes = written, "Download complete");

        // The player keeps reading the temporary file meanwhile.
        let cache = self.cache.clone();
        let source = temp_path.to_path_buf();
        let target = cache_path.to_path_buf();
        match tokio::task::spawn_blocking(move || cache.finalize(&source, &target)).await {
            Ok(Ok(_)) => {}
            Ok(Err(err)) => tracing::warn!("warning: {}", err),
            Err(err) => tracing::warn!("warning: failed to cache file: {}", err),
        }

        let outcome = player.wait().await;
        drop(temp_path);
        outcome
    }

    async fn write_body(
        &self,
        mut file: tokio::fs::File,
        path: &Path,
        body: RemoteBody,
    ) -> Result<u64, MinimalWaveError> {
        let RemoteBody {
            content_length,
            mut chunks,
        } = body;
        let write_error = |e: std::io::Error| MinimalWaveError::DownloadWrite {
            path: path.to_path_buf(),
            reason: e.to_string(),
        };

        let mut progress = BlockProgress::new(self.terminal.clone(), self.options.progress_blocks);
        let result = async {
            let mut written: u64 = 0;
            while let Some(chunk) = chunks.next().await {
                let chunk = chunk?;
                file.write_all(&chunk).await.map_err(write_error)?;
                written += chunk.len() as u64;
                progress.update(written, content_length);
            }
            file.flush().await.map_err(write_error)?;
            Ok::<u64, MinimalWaveError>(written)
        }
        .await;
        progress.clear();
        result
    }
}
