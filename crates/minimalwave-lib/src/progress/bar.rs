use super::terminal::{Terminal, write_block};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::Range;

pub const DEFAULT_BLOCKS: usize = 64;

/// Append-only bar of colored blocks. Blocks already on screen are never
/// redrawn; each call only appends the blocks its progress newly covers.
#[derive(Debug)]
pub struct BlockProgress<R = StdRng> {
    terminal: Terminal,
    blocks: usize,
    drawn: usize,
    rng: R,
}

impl BlockProgress<StdRng> {
    pub fn new(terminal: Terminal, blocks: usize) -> Self {
        Self::with_rng(terminal, blocks, StdRng::from_entropy())
    }
}

impl<R: Rng> BlockProgress<R> {
    pub fn with_rng(terminal: Terminal, blocks: usize, rng: R) -> Self {
        Self {
            terminal,
            blocks,
            drawn: 0,
            rng,
        }
    }

    pub fn drawn(&self) -> usize {
        self.drawn
    }

    /// Number of blocks covered by `current` out of `total`, `None` when the
    /// total is unknown.
    pub fn filled(&self, current: u64, total: Option<u64>) -> Option<usize> {
        let total = total.filter(|t| *t > 0)?;
        let ratio = current.min(total) as f64 / total as f64;
        Some((ratio * self.blocks as f64).floor() as usize)
    }

    /// Draws the blocks between the previous and the new fill level and
    /// returns their indices.
    pub fn update(&mut self, current: u64, total: Option<u64>) -> Range<usize> {
        let Some(filled) = self.filled(current, total) else {
            return self.drawn..self.drawn;
        };
        if filled <= self.drawn {
            return self.drawn..self.drawn;
        }

        let new_blocks = self.drawn..filled;
        let rng = &mut self.rng;
        self.terminal.draw(|w| {
            for _ in new_blocks.clone() {
                write_block(w, &mut *rng)?;
            }
            Ok(())
        });
        self.drawn = filled;
        new_blocks
    }

    pub fn clear(&self) {
        if self.drawn > 0 {
            self.terminal.clear_line();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::terminal::CLEAR_LINE;
    use super::super::terminal::testing::SharedBuffer;
    use super::*;

    fn bar(buffer: &SharedBuffer) -> BlockProgress<StdRng> {
        BlockProgress::with_rng(
            Terminal::new(buffer.clone()),
            DEFAULT_BLOCKS,
            StdRng::seed_from_u64(42),
        )
    }

    #[test]
    fn test_update_appends_only_new_blocks() {
        let buffer = SharedBuffer::default();
        let mut progress = bar(&buffer);

        assert_eq!(progress.update(10, Some(100)), 0..6);
        assert_eq!(buffer.blocks(), 6);

        assert_eq!(progress.update(50, Some(100)), 6..32);
        assert_eq!(buffer.blocks(), 32);
        assert_eq!(progress.drawn(), 32);
    }

    #[test]
    fn test_update_never_goes_backwards() {
        let buffer = SharedBuffer::default();
        let mut progress = bar(&buffer);

        progress.update(50, Some(100));
        assert_eq!(progress.update(10, Some(100)), 32..32);
        assert_eq!(progress.update(50, Some(100)), 32..32);
        assert_eq!(buffer.blocks(), 32);
    }

    #[test]
    fn test_update_reaches_full_bar() {
        let buffer = SharedBuffer::default();
        let mut progress = bar(&buffer);

        for current in (0..=1000).step_by(7) {
            progress.update(current, Some(1000));
        }
        progress.update(1000, Some(1000));
        assert_eq!(progress.drawn(), DEFAULT_BLOCKS);
        assert_eq!(buffer.blocks(), DEFAULT_BLOCKS);
    }

    #[test]
    fn test_overshoot_is_capped() {
        let buffer = SharedBuffer::default();
        let mut progress = bar(&buffer);
        assert_eq!(progress.update(500, Some(100)), 0..DEFAULT_BLOCKS);
    }

    #[test]
    fn test_unknown_or_zero_total_draws_nothing() {
        let buffer = SharedBuffer::default();
        let mut progress = bar(&buffer);

        assert_eq!(progress.update(50, None), 0..0);
        assert_eq!(progress.update(50, Some(0)), 0..0);
        assert!(buffer.contents().is_empty());
    }

    #[test]
    fn test_clear_only_after_drawing() {
        let buffer = SharedBuffer::default();
        let mut progress = bar(&buffer);
        progress.clear();
        assert!(buffer.contents().is_empty());

        progress.update(100, Some(100));
        progress.clear();
        assert!(buffer.contents().ends_with(CLEAR_LINE));
    }
}
