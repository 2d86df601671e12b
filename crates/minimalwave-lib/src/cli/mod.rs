mod args;
mod clean;
mod list;
mod params;
mod play;
mod resolved_command;

pub use args::{Args, Command, parse_args};
pub use clean::run_clean;
pub use list::run_list;
pub use params::{CleanParams, ListParams, PlayParams};
pub use play::{run_play, run_play_with_terminal};
pub use resolved_command::{ResolvedCommand, resolve_command};
