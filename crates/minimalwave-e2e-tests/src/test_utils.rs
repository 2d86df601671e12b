use eyre::Result;
use minimalwave_lib::cache::CacheStore;
use minimalwave_lib::cli::{Command, PlayParams, ResolvedCommand, resolve_command};
use minimalwave_lib::identifier::Identifier;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const TEST_IDENTIFIER: &str = "evr_1280-23176-20101128";
pub const TEST_DOWNLOAD_PATH: &str = "/evr_1280-23176-20101128/1280-23176-20101128.mp3";

/// A stand-in player: `sh -c <script> sh <file>`, so the script sees the file as `$1`.
pub fn sh_player(script: &str) -> String {
    format!(
        "[[playback.players]]\nname = \"sh\"\nargs = [\"-c\", {:?}, \"sh\", \"{{path}}\"]\n",
        script
    )
}

pub fn write_test_config(dir: &Path, base_url: &str, players: &str) -> Result<PathBuf> {
    let config_path = dir.join("config.toml");
    let body = format!(
        "[source]\nbase_url = {base_url:?}\n\n[playback]\nstart_delay_ms = 10\n\n{players}"
    );
    std::fs::write(&config_path, body)?;
    Ok(config_path)
}

pub struct TestEnvironment {
    pub temp_dir: TempDir,
    pub config_path: PathBuf,
    pub cache_dir: PathBuf,
}

impl TestEnvironment {
    pub fn cache(&self) -> CacheStore {
        CacheStore::new(&self.cache_dir)
    }

    pub fn cache_path(&self) -> PathBuf {
        let identifier = Identifier::parse(TEST_IDENTIFIER).expect("test identifier is valid");
        self.cache().path_for(&identifier)
    }

    pub fn temporary_files(&self) -> Vec<PathBuf> {
        std::fs::read_dir(&self.cache_dir)
            .map(|entries| {
                entries
                    .filter_map(|e| e.ok())
                    .map(|e| e.path())
                    .filter(|p| CacheStore::is_temporary(p))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn play_params(&self) -> Result<PlayParams> {
        let command = Command::Play {
            config_path: Some(self.config_path.to_string_lossy().into_owned()),
            cache_dir: Some(self.cache_dir.to_string_lossy().into_owned()),
            identifier: Some(TEST_IDENTIFIER.to_string()),
        };
        match resolve_command(command)? {
            ResolvedCommand::Play(params) => Ok(params),
            other => Err(eyre::eyre!("expected play command, got {other:?}")),
        }
    }
}

pub fn setup_test_environment(base_url: &str, players: &str) -> Result<TestEnvironment> {
    let temp_dir = tempfile::tempdir()?;
    let config_path = write_test_config(temp_dir.path(), base_url, players)?;
    let cache_dir = temp_dir.path().join("cache");
    tracing::debug!("Test environment at {}", temp_dir.path().display());

    Ok(TestEnvironment {
        temp_dir,
        config_path,
        cache_dir,
    })
}

/// Deterministic payload large enough to span many chunks.
pub fn test_audio(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i % 251) as u8).collect()
}

pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter("minimalwave_lib=debug,minimalwave_e2e_tests=debug")
        .with_test_writer()
        .try_init()
        .ok();
}
