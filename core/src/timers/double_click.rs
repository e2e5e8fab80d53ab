//! Double-click detection for the wait control
//!
//! Clicks are collected into a batch that stays open until a quiet period
//! passes with no further click. Only a batch of exactly two clicks counts as
//! a double click; a single click or a burst of three or more is dropped
//! whole.
//!
//! The batcher owns no timer. Each click hands back a [`QuietToken`] and the
//! host arms its own timeout (tokio sleep, gloo timeout, ...) that reports
//! the token back through [`ClickBatcher::quiet_elapsed`]. Tokens from
//! superseded timeouts are ignored, which is what makes the window restart on
//! every click.

use crate::state::StopwatchSignal;

/// Number of clicks in a batch that forms a double click
pub const DOUBLE_CLICK_CLICKS: usize = 2;

/// Identifies the quiet-period timeout armed for one click
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QuietToken(u64);

#[derive(Debug, Default)]
pub struct ClickBatcher {
    pending: usize,
    generation: u64,
}

impl ClickBatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a click and return the token for the timeout the host must arm.
    pub fn click(&mut self) -> QuietToken {
        self.pending += 1;
        self.generation = self.generation.wrapping_add(1);
        QuietToken(self.generation)
    }

    /// Clicks collected in the open batch
    pub fn pending(&self) -> usize {
        self.pending
    }

    /// Close the batch if `token` belongs to the most recent click.
    ///
    /// Returns `Some(StopwatchSignal::Wait)` for a batch of exactly two
    /// clicks. The batch is emptied whenever the token is current.
    pub fn quiet_elapsed(&mut self, token: QuietToken) -> Option<StopwatchSignal> {
        if token.0 != self.generation || self.pending == 0 {
            return None;
        }

        let clicks = std::mem::take(&mut self.pending);
        if clicks == DOUBLE_CLICK_CLICKS {
            Some(StopwatchSignal::Wait)
        } else {
            tracing::debug!(clicks, "Discarding wait click batch");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn burst(batcher: &mut ClickBatcher, clicks: usize) -> QuietToken {
        let mut last = None;
        for _ in 0..clicks {
            last = Some(batcher.click());
        }
        last.expect("burst needs at least one click")
    }

    #[test]
    fn test_double_click_emits_wait() {
        let mut batcher = ClickBatcher::new();
        let token = burst(&mut batcher, 2);
        assert_eq!(batcher.quiet_elapsed(token), Some(StopwatchSignal::Wait));
        assert_eq!(batcher.pending(), 0);
    }

    #[test]
    fn test_single_and_triple_clicks_are_dropped() {
        let mut batcher = ClickBatcher::new();

        let token = burst(&mut batcher, 1);
        assert_eq!(batcher.quiet_elapsed(token), None);
        assert_eq!(batcher.pending(), 0);

        let token = burst(&mut batcher, 3);
        assert_eq!(batcher.quiet_elapsed(token), None);
        assert_eq!(batcher.pending(), 0);
    }

    #[test]
    fn test_superseded_timeout_is_ignored() {
        let mut batcher = ClickBatcher::new();
        let first = batcher.click();
        let second = batcher.click();

        // The first click's timeout fires late; the window was restarted
        assert_eq!(batcher.quiet_elapsed(first), None);
        assert_eq!(batcher.pending(), 2);

        assert_eq!(batcher.quiet_elapsed(second), Some(StopwatchSignal::Wait));
    }

    #[test]
    fn test_token_fires_once() {
        let mut batcher = ClickBatcher::new();
        let token = burst(&mut batcher, 2);
        assert!(batcher.quiet_elapsed(token).is_some());
        assert_eq!(batcher.quiet_elapsed(token), None);
    }

    #[test]
    fn test_batches_are_independent() {
        let mut batcher = ClickBatcher::new();

        let token = burst(&mut batcher, 3);
        assert_eq!(batcher.quiet_elapsed(token), None);

        // A later pair starts from an empty batch
        let token = burst(&mut batcher, 2);
        assert_eq!(batcher.quiet_elapsed(token), Some(StopwatchSignal::Wait));
    }
}
