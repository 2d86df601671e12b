use crate::cli::PlayParams;
use crate::download::{HttpFetcher, Orchestrator};
use crate::error::MinimalWaveError;
use crate::player::{PlaybackOutcome, PlayerLocator, SystemLauncher};
use crate::progress::Terminal;

pub async fn run_play(params: PlayParams) -> Result<PlaybackOutcome, MinimalWaveError> {
    run_play_with_terminal(params, Terminal::stdout()).await
}

pub async fn run_play_with_terminal(
    params: PlayParams,
    terminal: Terminal,
) -> Result<PlaybackOutcome, MinimalWaveError> {
    let PlayParams {
        cache,
        identifier,
        base_url,
        user_agent,
        players,
        options,
    } = params;

    match cache.purge_orphans() {
        Ok(report) if report.removed > 0 => {
            tracing::info!("Removed {} orphaned temporary files", report.removed);
        }
        Ok(_) => {}
        Err(err) => tracing::warn!("warning: failed to clean up temp files: {:#}", err),
    }

    let fetcher = HttpFetcher::new(base_url, &user_agent)?;
    let launcher = SystemLauncher::new(PlayerLocator::new(players));
    let orchestrator = Orchestrator::new(cache, fetcher, launcher, terminal, options);

    tracing::info!("Playing {}", identifier);
    let outcome = orchestrator.play(&identifier).await?;
    if outcome == PlaybackOutcome::Interrupted {
        tracing::info!("Playback interrupted");
    }
    Ok(outcome)
}
