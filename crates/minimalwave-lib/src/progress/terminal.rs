use console::{Style, Term};
use rand::Rng;
use rand::seq::SliceRandom;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

/// Carriage return followed by erase-to-end-of-line.
pub const CLEAR_LINE: &str = "\r\x1b[K";
/// Moves the cursor one column to the left.
pub const CURSOR_LEFT: &str = "\x1b[1D";

/// ANSI 256-color palette used for blocks.
pub const PALETTE: &[u8] = &[
    196, 202, 208, 214, 220, 226, // reds to yellows
    46, 47, 48, 49, 50, 51, // greens
    39, 45, 81, 87, 123, // cyans to blues
    129, 135, 141, 177, 183, // purples
    201, 207, 213, 219, 225, // pinks to light colors
];

type Sink = Arc<Mutex<Box<dyn Write + Send>>>;

/// Shared handle to the output the progress indicators draw on. Every draw
/// holds the lock for its whole escape sequence, so concurrent renderers never
/// interleave partial sequences.
#[derive(Clone, Default)]
pub struct Terminal {
    sink: Option<Sink>,
}

impl std::fmt::Debug for Terminal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Terminal")
            .field("enabled", &self.is_enabled())
            .finish()
    }
}

impl Terminal {
    pub fn new(writer: impl Write + Send + 'static) -> Self {
        Self {
            sink: Some(Arc::new(Mutex::new(Box::new(writer)))),
        }
    }

    /// Draws nothing.
    pub fn disabled() -> Self {
        Self { sink: None }
    }

    /// Stdout when it is an interactive terminal, otherwise disabled.
    pub fn stdout() -> Self {
        if Term::stdout().is_term() {
            Self::new(io::stdout())
        } else {
            Self::disabled()
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.sink.is_some()
    }

    /// Runs `draw` with exclusive access to the output and flushes it.
    /// Rendering errors are not fatal and are only traced.
    pub fn draw<F>(&self, draw: F)
    where
        F: FnOnce(&mut dyn Write) -> io::Result<()>,
    {
        let Some(sink) = &self.sink else {
            return;
        };
        let Ok(mut writer) = sink.lock() else {
            return;
        };
        if let Err(err) = draw(&mut **writer).and_then(|()| writer.flush()) {
            tracing::trace!("Terminal draw failed: {}", err);
        }
    }

    pub fn clear_line(&self) {
        self.draw(|w| w.write_all(CLEAR_LINE.as_bytes()));
    }
}

/// One space with a random background color from [`PALETTE`].
pub fn write_block<R: Rng + ?Sized>(w: &mut dyn Write, rng: &mut R) -> io::Result<()> {
    let color = PALETTE.choose(rng).copied().unwrap_or(PALETTE[0]);
    let block = Style::new().on_color256(color).force_styling(true).apply_to(' ');
    write!(w, "{block}")
}

#[cfg(test)]
pub(crate) mod testing {
    use std::io::{self, Write};
    use std::sync::{Arc, Mutex};

    /// Cloneable in-memory writer for inspecting what was drawn.
    #[derive(Clone, Default)]
    pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl SharedBuffer {
        pub fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }

        /// Number of colored blocks drawn so far.
        pub fn blocks(&self) -> usize {
            self.contents().matches("48;5;").count()
        }
    }

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::SharedBuffer;
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_write_block_uses_palette_background() {
        let mut out = Vec::new();
        let mut rng = StdRng::seed_from_u64(3);
        write_block(&mut out, &mut rng).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("48;5;"));
        assert!(text.contains(' '));
        let code: u8 = text
            .split("48;5;")
            .nth(1)
            .and_then(|rest| rest.split('m').next())
            .and_then(|n| n.parse().ok())
            .unwrap();
        assert!(PALETTE.contains(&code));
    }

    #[test]
    fn test_disabled_terminal_draws_nothing() {
        let terminal = Terminal::disabled();
        let mut called = false;
        terminal.draw(|_| {
            called = true;
            Ok(())
        });
        assert!(!called);
        assert!(!terminal.is_enabled());
    }

    #[test]
    fn test_clear_line() {
        let buffer = SharedBuffer::default();
        let terminal = Terminal::new(buffer.clone());
        terminal.clear_line();
        assert_eq!(buffer.contents(), CLEAR_LINE);
    }
}
