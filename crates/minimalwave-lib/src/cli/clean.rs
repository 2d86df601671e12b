use crate::cli::CleanParams;
use crate::error::MinimalWaveError;

pub fn run_clean(params: CleanParams) -> Result<(), MinimalWaveError> {
    let CleanParams { cache, all } = params;

    tracing::info!("Cleaning {}", cache.dir().display());
    let report = cache.purge_orphans()?;
    println!("Removed {} temporary files", report.removed);
    if report.failed > 0 {
        tracing::warn!("{} temporary files could not be removed", report.failed);
    }

    if all {
        let removed = cache.clear_entries()?;
        println!("Removed {removed} cached recordings");
    }
    Ok(())
}
