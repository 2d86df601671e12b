//! Terminal progress indicators: an indeterminate "connecting" animation and
//! an append-only block bar driven by byte counts.

mod animation;
mod bar;
mod terminal;

pub use animation::ConnectingAnimation;
pub use bar::{BlockProgress, DEFAULT_BLOCKS};
pub use terminal::{CLEAR_LINE, CURSOR_LEFT, PALETTE, Terminal, write_block};
