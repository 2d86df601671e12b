use minimalwave_lib::cli::{
    ResolvedCommand, parse_args, resolve_command, run_clean, run_list, run_play,
};

#[tokio::main(flavor = "multi_thread")]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = parse_args();
    let command = resolve_command(args.command)?;

    match command {
        ResolvedCommand::Play(params) => {
            // An interrupted player is a normal way to stop listening.
            run_play(params).await?;
        }
        ResolvedCommand::List(params) => run_list(params)?,
        ResolvedCommand::Clean(params) => run_clean(params)?,
    }

    Ok(())
}
