//! Edge debouncing with a refractory window.
//!
//! An edge is accepted when more than `window_us` has passed since the last
//! *accepted* edge. Rejected edges do not extend the window. The clock starts
//! at boot and the window is armed from time zero, so edges in the first
//! `window_us` after reset are treated as power-up noise.

use crate::constants::timing;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Debouncer {
    window_us: u64,
    last_accepted_us: u64,
}

impl Debouncer {
    pub const fn new(window_us: u64) -> Self {
        Self {
            window_us,
            last_accepted_us: 0,
        }
    }

    /// Decide whether an edge seen at `now_us` counts, recording it if so
    pub fn accept(&mut self, now_us: u64) -> bool {
        if now_us.saturating_sub(self.last_accepted_us) <= self.window_us {
            return false;
        }
        self.last_accepted_us = now_us;
        true
    }

    pub const fn last_accepted_us(&self) -> u64 {
        self.last_accepted_us
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(timing::DEBOUNCE_WINDOW_US)
    }
}
