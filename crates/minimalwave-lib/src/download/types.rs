use crate::error::MinimalWaveError;
use bytes::Bytes;
use futures::stream::BoxStream;
use std::time::Duration;

/// A successful response, not yet read.
pub struct RemoteBody {
    /// `None` when the server did not announce a length.
    pub content_length: Option<u64>,
    pub chunks: BoxStream<'static, Result<Bytes, MinimalWaveError>>,
}

impl std::fmt::Debug for RemoteBody {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteBody")
            .field("content_length", &self.content_length)
            .finish_non_exhaustive()
    }
}

#[derive(Clone, Copy, Debug)]
pub struct PlayOptions {
    /// Pause between starting the player and writing into its file.
    pub player_start_delay: Duration,
    pub animation_interval: Duration,
    pub progress_blocks: usize,
}

impl Default for PlayOptions {
    fn default() -> Self {
        Self {
            player_start_delay: Duration::from_millis(100),
            animation_interval: Duration::from_millis(100),
            progress_blocks: crate::progress::DEFAULT_BLOCKS,
        }
    }
}
