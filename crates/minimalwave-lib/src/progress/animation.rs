use super::terminal::{CURSOR_LEFT, Terminal, write_block};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::Write;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tokio::sync::oneshot;

/// Single block cycling through random colors while a connection is pending.
///
/// Stopping is fire-and-forget: the task is signalled and never joined. A draw
/// that has already taken the terminal lock finishes before [`stop`] clears the
/// line, and every draw after that sees the stop flag and writes nothing.
///
/// [`stop`]: ConnectingAnimation::stop
#[derive(Debug)]
pub struct ConnectingAnimation {
    terminal: Terminal,
    stopped: Arc<AtomicBool>,
    stop_tx: Option<oneshot::Sender<()>>,
}

impl ConnectingAnimation {
    /// Must be called from within a tokio runtime.
    pub fn start(terminal: Terminal, interval: Duration) -> Self {
        let stopped = Arc::new(AtomicBool::new(false));
        let (stop_tx, mut stop_rx) = oneshot::channel::<()>();

        if terminal.is_enabled() {
            let terminal = terminal.clone();
            let stopped = stopped.clone();
            tokio::spawn(async move {
                let mut rng = StdRng::from_entropy();
                let mut ticker = tokio::time::interval(interval);
                loop {
                    tokio::select! {
                        _ = &mut stop_rx => return,
                        _ = ticker.tick() => {
                            terminal.draw(|w| {
                                if stopped.load(Ordering::SeqCst) {
                                    return Ok(());
                                }
                                w.write_all(CURSOR_LEFT.as_bytes())?;
                                write_block(w, &mut rng)?;
                                w.write_all(CURSOR_LEFT.as_bytes())
                            });
                        }
                    }
                }
            });
        }

        Self {
            terminal,
            stopped,
            stop_tx: Some(stop_tx),
        }
    }

    /// Signals the task and clears the drawn block.
    pub fn stop(mut self) {
        self.signal();
        self.terminal.clear_line();
    }

    fn signal(&mut self) {
        self.stopped.store(true, Ordering::SeqCst);
        if let Some(tx) = self.stop_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for ConnectingAnimation {
    fn drop(&mut self) {
        self.signal();
    }
}
