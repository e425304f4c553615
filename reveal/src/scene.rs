//! A set of trackers, one per revealed element, publishing transitions.

#[cfg(test)]
#[path = "scene_test.rs"]
mod tests;

use crate::observable::{Observable, Subscription};
use crate::options::RevealOptions;
use crate::tracker::{InViewTracker, Transition};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealEvent {
    pub target: usize,
    pub transition: Transition,
}

#[derive(Default)]
pub struct RevealScene {
    trackers: Vec<InViewTracker>,
    events: Observable<RevealEvent>,
}

impl RevealScene {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Track a new element; returns its target index.
    pub fn register(&mut self, options: &RevealOptions) -> usize {
        self.trackers.push(InViewTracker::new(options));
        self.trackers.len() - 1
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.trackers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.trackers.is_empty()
    }

    /// Feed an observer entry. Unknown targets are ignored.
    pub fn observe(&mut self, target: usize, intersecting: bool, ratio: f64, now_ms: f64) {
        if let Some(tracker) = self.trackers.get_mut(target) {
            tracker.observe(intersecting, ratio, now_ms);
        }
    }

    /// Apply due changes and emit one event per transition. Returns the count.
    pub fn poll(&mut self, now_ms: f64) -> usize {
        let due: Vec<RevealEvent> = self
            .trackers
            .iter_mut()
            .enumerate()
            .filter_map(|(target, tracker)| tracker.poll(now_ms).map(|transition| RevealEvent { target, transition }))
            .collect();
        for event in &due {
            self.events.emit(event);
        }
        due.len()
    }

    /// Earliest due time across all trackers.
    #[must_use]
    pub fn next_due_ms(&self) -> Option<f64> {
        self.trackers
            .iter()
            .filter_map(InViewTracker::next_due_ms)
            .min_by(f64::total_cmp)
    }

    #[must_use]
    pub fn is_visible(&self, target: usize) -> bool {
        self.trackers.get(target).is_some_and(InViewTracker::is_visible)
    }

    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe(&self, callback: impl FnMut(&RevealEvent) + 'static) -> Subscription {
        self.events.subscribe(callback)
    }
}
