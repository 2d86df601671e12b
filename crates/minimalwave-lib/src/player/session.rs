use super::{PlayerInvocation, PlayerLocator};
use crate::error::MinimalWaveError;
use std::future::Future;
use std::path::Path;
use std::process::{ExitStatus, Stdio};
use tokio::process::{Child, Command};

/// Exit status shells report for a process ended by SIGINT (128 + 2).
pub const INTERRUPTED_EXIT_CODE: i32 = 130;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackOutcome {
    Finished,
    /// The user interrupted the player; counts as success.
    Interrupted,
}

/// A running player bound to one file.
pub trait Playback: Send {
    /// Forcibly terminates the player without waiting for it.
    fn kill(&mut self) -> Result<(), MinimalWaveError>;

    fn wait(self) -> impl Future<Output = Result<PlaybackOutcome, MinimalWaveError>> + Send;
}

/// Starts a player against a file path.
pub trait Launch {
    type Session: Playback;

    fn launch(&self, path: &Path) -> Result<Self::Session, MinimalWaveError>;
}

pub fn classify_exit(player: &str, status: ExitStatus) -> Result<PlaybackOutcome, MinimalWaveError> {
    if status.success() {
        return Ok(PlaybackOutcome::Finished);
    }
    if status.code() == Some(INTERRUPTED_EXIT_CODE) {
        return Ok(PlaybackOutcome::Interrupted);
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if status.signal() == Some(2) {
            return Ok(PlaybackOutcome::Interrupted);
        }
    }
    Err(MinimalWaveError::PlayerExit {
        player: player.to_string(),
        status: status.to_string(),
    })
}

/// A player child process. Its output streams are discarded; stdin is
/// inherited so a keystroke in the terminal reaches the player.
#[derive(Debug)]
pub struct PlayerProcess {
    name: String,
    child: Child,
}

impl PlayerProcess {
    pub fn spawn(invocation: PlayerInvocation) -> Result<Self, MinimalWaveError> {
        let PlayerInvocation {
            name,
            program,
            args,
        } = invocation;

        let child = Command::new(&program)
            .args(&args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| MinimalWaveError::PlayerStart {
                player: name.clone(),
                reason: e.to_string(),
            })?;

        tracing::debug!(player = %name, pid = ?child.id(), "Started player");
        Ok(Self { name, child })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Playback for PlayerProcess {
    fn kill(&mut self) -> Result<(), MinimalWaveError> {
        tracing::debug!(player = %self.name, "Killing player");
        self.child.start_kill().map_err(Into::into)
    }

    async fn wait(mut self) -> Result<PlaybackOutcome, MinimalWaveError> {
        let status = self.child.wait().await?;
        tracing::debug!(player = %self.name, %status, "Player exited");
        classify_exit(&self.name, status)
    }
}

/// Locates a player on `PATH` and spawns it.
#[derive(Clone, Debug, Default)]
pub struct SystemLauncher {
    locator: PlayerLocator,
}

impl SystemLauncher {
    pub fn new(locator: PlayerLocator) -> Self {
        Self { locator }
    }
}

impl Launch for SystemLauncher {
    type Session = PlayerProcess;

    fn launch(&self, path: &Path) -> Result<PlayerProcess, MinimalWaveError> {
        let invocation = self.locator.locate(path)?;
        PlayerProcess::spawn(invocation)
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::player::{PATH_PLACEHOLDER, PlayerCandidate};
    use std::os::unix::process::ExitStatusExt;

    fn sh_launcher(script: &str) -> SystemLauncher {
        SystemLauncher::new(PlayerLocator::new(vec![PlayerCandidate::new(
            "sh",
            ["-c", script, "sh", PATH_PLACEHOLDER],
        )]))
    }

    #[test]
    fn test_classify_exit_codes() {
        assert_eq!(
            classify_exit("p", ExitStatus::from_raw(0)).unwrap(),
            PlaybackOutcome::Finished
        );
        assert_eq!(
            classify_exit("p", ExitStatus::from_raw(130 << 8)).unwrap(),
            PlaybackOutcome::Interrupted
        );
        assert_eq!(
            classify_exit("p", ExitStatus::from_raw(2)).unwrap(),
            PlaybackOutcome::Interrupted
        );
        assert!(matches!(
            classify_exit("p", ExitStatus::from_raw(1 << 8)),
            Err(MinimalWaveError::PlayerExit { .. })
        ));
        assert!(matches!(
            classify_exit("p", ExitStatus::from_raw(9)),
            Err(MinimalWaveError::PlayerExit { .. })
        ));
    }

    #[tokio::test]
    async fn test_player_exit_130_is_interrupted() {
        let session = sh_launcher("exit 130").launch(Path::new("a.mp3")).unwrap();
        assert_eq!(session.wait().await.unwrap(), PlaybackOutcome::Interrupted);
    }

    #[tokio::test]
    async fn test_player_exit_1_is_error() {
        let session = sh_launcher("exit 1").launch(Path::new("a.mp3")).unwrap();
        assert!(matches!(
            session.wait().await,
            Err(MinimalWaveError::PlayerExit { .. })
        ));
    }

    #[tokio::test]
    async fn test_player_receives_path_argument() {
        let temp_dir = tempfile::tempdir().unwrap();
        let target = temp_dir.path().join("track.mp3");
        std::fs::write(&target, b"audio").unwrap();

        let session = sh_launcher("test -f \"$1\"").launch(&target).unwrap();
        assert_eq!(session.wait().await.unwrap(), PlaybackOutcome::Finished);
    }

    #[tokio::test]
    async fn test_killed_player_is_error() {
        let mut session = sh_launcher("sleep 30").launch(Path::new("a.mp3")).unwrap();
        session.kill().unwrap();
        assert!(matches!(
            session.wait().await,
            Err(MinimalWaveError::PlayerExit { .. })
        ));
    }

    #[test]
    fn test_spawn_missing_program_is_player_start_error() {
        let invocation = PlayerInvocation {
            name: "ghost".to_string(),
            program: "/nonexistent/ghost-player".into(),
            args: vec![],
        };
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        let _guard = runtime.enter();
        assert!(matches!(
            PlayerProcess::spawn(invocation),
            Err(MinimalWaveError::PlayerStart { .. })
        ));
    }
}
