//! Debounced visibility state for one element.
//!
//! Observer entries are fed through [`InViewTracker::observe`]; a change only
//! becomes a [`Transition`] once it has held for the debounce window and
//! [`InViewTracker::poll`] is called at or after its due time. A change that
//! reverts inside the window is dropped.

#[cfg(test)]
#[path = "tracker_test.rs"]
mod tests;

use crate::options::RevealOptions;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Enter,
    Leave,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Pending {
    visible: bool,
    due_ms: f64,
}

#[derive(Debug, Clone)]
pub struct InViewTracker {
    threshold: f64,
    debounce_ms: f64,
    once: bool,
    visible: bool,
    latched: bool,
    pending: Option<Pending>,
}

impl InViewTracker {
    #[must_use]
    pub fn new(options: &RevealOptions) -> Self {
        Self {
            threshold: options.threshold,
            debounce_ms: f64::from(options.debounce_ms),
            once: options.once,
            visible: false,
            latched: false,
            pending: None,
        }
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Record an observer entry taken at `now_ms`.
    pub fn observe(&mut self, intersecting: bool, ratio: f64, now_ms: f64) {
        if self.latched {
            return;
        }
        let target = intersecting && ratio + f64::EPSILON >= self.threshold;
        if target == self.visible {
            self.pending = None;
            return;
        }
        match self.pending {
            Some(pending) if pending.visible == target => {}
            _ => self.pending = Some(Pending { visible: target, due_ms: now_ms + self.debounce_ms }),
        }
    }

    /// Apply a pending change whose debounce window has elapsed.
    pub fn poll(&mut self, now_ms: f64) -> Option<Transition> {
        let pending = self.pending?;
        if now_ms < pending.due_ms {
            return None;
        }
        self.pending = None;
        self.visible = pending.visible;
        if self.visible {
            if self.once {
                self.latched = true;
            }
            Some(Transition::Enter)
        } else {
            Some(Transition::Leave)
        }
    }

    /// When the next pending change becomes due.
    #[must_use]
    pub fn next_due_ms(&self) -> Option<f64> {
        self.pending.map(|p| p.due_ms)
    }
}
