mod locator;
mod session;

pub use locator::{PATH_PLACEHOLDER, PlayerCandidate, PlayerInvocation, PlayerLocator};
pub use session::{
    INTERRUPTED_EXIT_CODE, Launch, Playback, PlaybackOutcome, PlayerProcess, SystemLauncher,
    classify_exit,
};
