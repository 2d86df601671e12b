use crate::error::MinimalWaveError;
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Replaced by the file to play in a candidate's argument template.
pub const PATH_PLACEHOLDER: &str = "{path}";

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct PlayerCandidate {
    pub name: String,
    pub args: Vec<String>,
}

impl PlayerCandidate {
    pub fn new<I, S>(name: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Built-in priority list.
    pub fn defaults() -> Vec<Self> {
        vec![
            Self::new("afplay", [PATH_PLACEHOLDER]), // macos
            Self::new("cvlc", ["-q", PATH_PLACEHOLDER]),
            Self::new("vlc", ["-q", "--intf", "dummy", PATH_PLACEHOLDER]),
            Self::new("mpg123", [PATH_PLACEHOLDER]),
            Self::new("ffplay", ["-autoexit", PATH_PLACEHOLDER]),
            Self::new("mplayer", [PATH_PLACEHOLDER]),
            Self::new("omxplayer", [PATH_PLACEHOLDER]),
        ]
    }

    fn render_args(&self, path: &Path) -> Vec<OsString> {
        self.args
            .iter()
            .map(|arg| {
                if arg == PATH_PLACEHOLDER {
                    path.as_os_str().to_os_string()
                } else {
                    OsString::from(arg)
                }
            })
            .collect()
    }
}

/// A resolved executable and its argument vector for one file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerInvocation {
    pub name: String,
    pub program: PathBuf,
    pub args: Vec<OsString>,
}

#[derive(Clone, Debug)]
pub struct PlayerLocator {
    candidates: Vec<PlayerCandidate>,
}

impl Default for PlayerLocator {
    fn default() -> Self {
        Self::new(PlayerCandidate::defaults())
    }
}

impl PlayerLocator {
    pub fn new(candidates: Vec<PlayerCandidate>) -> Self {
        Self { candidates }
    }

    pub fn candidates(&self) -> &[PlayerCandidate] {
        &self.candidates
    }

    /// Returns the first candidate resolvable on the executable search path.
    pub fn locate(&self, path: &Path) -> Result<PlayerInvocation, MinimalWaveError> {
        self.locate_with(path, |name| which::which(name).ok())
    }

    fn locate_with<F>(&self, path: &Path, resolve: F) -> Result<PlayerInvocation, MinimalWaveError>
    where
        F: Fn(&str) -> Option<PathBuf>,
    {
        for candidate in &self.candidates {
            if let Some(program) = resolve(&candidate.name) {
                tracing::debug!(player = %candidate.name, program = %program.display(), "Found player");
                return Ok(PlayerInvocation {
                    name: candidate.name.clone(),
                    program,
                    args: candidate.render_args(path),
                });
            }
            tracing::trace!(player = %candidate.name, "Player not found on PATH");
        }

        Err(MinimalWaveError::NoPlayerFound {
            candidates: self
                .candidates
                .iter()
                .map(|c| c.name.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        })
    }
}
