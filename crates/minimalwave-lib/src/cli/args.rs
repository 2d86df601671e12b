use clap::{ArgAction, Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Play {
        config_path: Option<String>,
        cache_dir: Option<String>,
        identifier: Option<String>,
    },
    List {
        config_path: Option<String>,
        cache_dir: Option<String>,
    },
    Clean {
        config_path: Option<String>,
        cache_dir: Option<String>,
        all: bool,
    },
}

pub struct Args {
    pub command: Command,
    pub log_level: Level,
}

#[derive(Debug, Parser)]
#[command(
    name = "minimalwave",
    version,
    about = "Play a random internet radio archive recording, caching it while it plays"
)]
struct Cli {
    #[arg(
        short = 'v',
        long = "verbose",
        help = "Sets the level of verbosity",
        action = ArgAction::Count,
        global = true
    )]
    verbose: u8,

    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Sets a custom config file",
        global = true
    )]
    config: Option<String>,

    #[arg(
        long = "cache-dir",
        value_name = "DIR",
        help = "Overrides the cache directory",
        global = true
    )]
    cache_dir: Option<String>,

    #[command(subcommand)]
    command: Option<CliCommand>,
}

#[derive(Debug, Subcommand)]
enum CliCommand {
    /// Play a recording, downloading it into the cache if needed (default)
    Play {
        #[arg(
            short = 'i',
            long = "identifier",
            value_name = "ID",
            help = "Plays this identifier instead of a random one"
        )]
        identifier: Option<String>,
    },

    /// List known identifiers and whether they are cached
    List,

    /// Remove temporary files left behind by interrupted downloads
    Clean {
        #[arg(long = "all", help = "Also removes cached recordings")]
        all: bool,
    },
}

fn log_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

fn into_command(cli: Cli) -> Command {
    let Cli {
        config,
        cache_dir,
        command,
        ..
    } = cli;

    match command.unwrap_or(CliCommand::Play { identifier: None }) {
        CliCommand::Play { identifier } => Command::Play {
            config_path: config,
            cache_dir,
            identifier,
        },
        CliCommand::List => Command::List {
            config_path: config,
            cache_dir,
        },
        CliCommand::Clean { all } => Command::Clean {
            config_path: config,
            cache_dir,
            all,
        },
    }
}

pub fn parse_args() -> Args {
    let cli = Cli::parse();
    let log_level = log_level(cli.verbose);

    // Logs go to stderr; stdout belongs to the progress display.
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(log_level.into())
                .from_env_lossy(),
        )
        .init();

    Args {
        command: into_command(cli),
        log_level,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Command {
        into_command(Cli::try_parse_from(args).unwrap())
    }

    #[test]
    fn test_no_subcommand_defaults_to_play() {
        assert_eq!(
            parse(&["minimalwave"]),
            Command::Play {
                config_path: None,
                cache_dir: None,
                identifier: None,
            }
        );
    }

    #[test]
    fn test_play_with_identifier_and_global_flags() {
        assert_eq!(
            parse(&[
                "minimalwave",
                "play",
                "-i",
                "evr_1280-23176-20101128",
                "--cache-dir",
                "/tmp/mw",
                "-c",
                "mw.toml",
            ]),
            Command::Play {
                config_path: Some("mw.toml".to_string()),
                cache_dir: Some("/tmp/mw".to_string()),
                identifier: Some("evr_1280-23176-20101128".to_string()),
            }
        );
    }

    #[test]
    fn test_clean_all() {
        assert_eq!(
            parse(&["minimalwave", "clean", "--all"]),
            Command::Clean {
                config_path: None,
                cache_dir: None,
                all: true,
            }
        );
    }

    #[test]
    fn test_list() {
        assert!(matches!(
            parse(&["minimalwave", "-v", "list"]),
            Command::List { .. }
        ));
    }

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(log_level(0), Level::WARN);
        assert_eq!(log_level(1), Level::INFO);
        assert_eq!(log_level(2), Level::DEBUG);
        assert_eq!(log_level(5), Level::TRACE);
    }

    #[test]
    fn test_unknown_subcommand_is_rejected() {
        assert!(Cli::try_parse_from(["minimalwave", "shuffle"]).is_err());
    }
}
