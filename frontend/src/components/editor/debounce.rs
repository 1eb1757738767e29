//! Trailing-edge debounce for free-text edits.
//!
//! Every keystroke echoes into the local draft immediately, but the write
//! only leaves for the previews after a quiet window. The channel owns its
//! pending timer explicitly: arming cancels the previous timer and advances
//! a generation counter, and a commit is accepted only if its generation is
//! still the latest. A superseded commit can therefore never deliver a stale
//! value after a newer one, even if a timer callback slips through a cancel
//! race.

use gloo_timers::callback::Timeout;

/// Quiet window before a buffered text edit propagates.
pub const DEBOUNCE_MS: u32 = 300;

#[derive(Default)]
pub struct DebouncedChannel {
    generation: u64,
    pending: Option<Timeout>,
}

impl DebouncedChannel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Supersedes any pending commit: cancels the armed timer and returns
    /// the token the next commit must present.
    pub fn arm(&mut self) -> u64 {
        if let Some(timer) = self.pending.take() {
            timer.cancel();
        }
        self.generation += 1;
        self.generation
    }

    /// Hands ownership of the scheduled timer to the channel so the next
    /// `arm` can cancel it.
    pub fn schedule(&mut self, timer: Timeout) {
        self.pending = Some(timer);
    }

    /// True when `token` is still the latest arm. Accepting consumes the
    /// pending slot; a stale token leaves the channel untouched.
    pub fn accepts(&mut self, token: u64) -> bool {
        if token == self.generation {
            self.pending = None;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rapid_rearming_leaves_exactly_one_live_token() {
        let mut channel = DebouncedChannel::new();
        // Five keystrokes inside one quiet window: each re-arm invalidates
        // the previous token.
        let tokens: Vec<u64> = (0..5).map(|_| channel.arm()).collect();

        for stale in &tokens[..4] {
            assert!(!channel.accepts(*stale));
        }
        assert!(channel.accepts(tokens[4]));
    }

    #[test]
    fn spaced_commits_each_propagate() {
        let mut channel = DebouncedChannel::new();

        let first = channel.arm();
        assert!(channel.accepts(first));

        let second = channel.arm();
        assert!(channel.accepts(second));
    }

    #[test]
    fn a_token_is_spent_once_armed_again() {
        let mut channel = DebouncedChannel::new();
        let token = channel.arm();
        let newer = channel.arm();
        assert!(!channel.accepts(token));
        assert!(channel.accepts(newer));
    }
}
