use std::collections::VecDeque;

use log::trace;

/// Effects keyed by a millisecond offset from `start`, released in deadline
/// order as a monotonic clock passes them. Equal deadlines keep insertion order.
#[derive(Debug, Clone)]
pub struct Timeline<E> {
    entries: VecDeque<(u64, E)>,
    origin: Option<u64>,
}

impl<E> Default for Timeline<E> {
    fn default() -> Self {
        Timeline {
            entries: VecDeque::new(),
            origin: None,
        }
    }
}

impl<E> Timeline<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn at(mut self, deadline_ms: u64, effect: E) -> Self {
        self.schedule(deadline_ms, effect);
        self
    }

    pub fn schedule(&mut self, deadline_ms: u64, effect: E) {
        let slot = self
            .entries
            .partition_point(|(deadline, _)| *deadline <= deadline_ms);
        self.entries.insert(slot, (deadline_ms, effect));
    }

    /// Anchors every deadline to `now_ms`. Restarting re-anchors what is left.
    pub fn start(&mut self, now_ms: u64) {
        self.origin = Some(now_ms);
    }

    pub fn is_started(&self) -> bool {
        self.origin.is_some()
    }

    pub fn pending(&self) -> usize {
        self.entries.len()
    }

    pub fn is_complete(&self) -> bool {
        self.is_started() && self.entries.is_empty()
    }

    /// Removes and returns every effect due at `now_ms`, earliest first.
    pub fn advance(&mut self, now_ms: u64) -> Vec<E> {
        let Some(origin) = self.origin else {
            return Vec::new();
        };
        let elapsed = now_ms.saturating_sub(origin);
        let mut due = Vec::new();
        while self
            .entries
            .front()
            .is_some_and(|(deadline, _)| *deadline <= elapsed)
        {
            if let Some((deadline, effect)) = self.entries.pop_front() {
                trace!("Cue at +{deadline}ms released at +{elapsed}ms");
                due.push(effect);
            }
        }
        due
    }
}
