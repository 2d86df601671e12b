use crate::cli::ListParams;
use crate::error::MinimalWaveError;
use std::io::Write;

pub fn run_list(params: ListParams) -> Result<(), MinimalWaveError> {
    let ListParams { cache, registry } = params;
    write_listing(&mut std::io::stdout().lock(), &cache, &registry)
}

fn write_listing(
    out: &mut impl Write,
    cache: &crate::cache::CacheStore,
    registry: &crate::identifier::Registry,
) -> Result<(), MinimalWaveError> {
    let mut cached = 0;
    for identifier in registry.iter() {
        let path = cache.path_for(identifier);
        if cache.exists(&path) {
            cached += 1;
            writeln!(out, "* {identifier}")?;
        } else {
            writeln!(out, "  {identifier}")?;
        }
    }
    tracing::info!("{} of {} recordings cached", cached, registry.len());
    Ok(())
}
