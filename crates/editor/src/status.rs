//! Transient status messages with time-based expiry.
//!
//! The message line shows one string at a time, stamped with its creation
//! time. Expiry is a pure function of elapsed time: the renderer asks for
//! the current message each frame and gets `None` once the display window
//! has passed. Nothing has to clear the message actively — the bounded
//! input tick guarantees frames keep being painted while idle.

use std::time::{Duration, Instant};

/// A status message and the moment it was set.
#[derive(Debug)]
pub struct StatusMessage {
    text: String,
    set_at: Instant,
    timeout: Duration,
}

impl StatusMessage {
    /// Creates an empty message holder with the given display duration.
    pub fn new(timeout: Duration) -> Self {
        Self {
            text: String::new(),
            set_at: Instant::now(),
            timeout,
        }
    }

    /// Replaces the message and restarts its display window.
    pub fn set(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.set_at = Instant::now();
    }

    /// Returns the message while it is still inside its display window.
    pub fn current(&self) -> Option<&str> {
        if self.text.is_empty() || self.set_at.elapsed() >= self.timeout {
            None
        } else {
            Some(&self.text)
        }
    }
}
