//! Cursor-based replay over a recorded trace
//!
//! The controller owns the event log of one run and a cursor into it. All
//! navigation saturates at the ends rather than failing: stepping past the
//! last event or before the first is a no-op, so UI-driven navigation can
//! never break. A controller over zero events is a valid state in which
//! nothing is visible.

use crate::trace::TraceEvent;

/// Replay cursor over one run's event log
#[derive(Debug, Clone)]
pub struct ReplayController {
    events: Vec<TraceEvent>,
    index: usize,
}

impl ReplayController {
    /// Take ownership of a run's events, with the cursor on the first one
    pub fn new(events: Vec<TraceEvent>) -> Self {
        ReplayController { events, index: 0 }
    }

    /// Move the cursor back to the first event
    pub fn reset(&mut self) {
        self.index = 0;
    }

    /// Advance one event; no-op when already on the last event
    pub fn step_forward(&mut self) {
        if self.index + 1 < self.events.len() {
            self.index += 1;
        }
    }

    /// Go back one event; no-op when already on the first event
    pub fn step_backward(&mut self) {
        if self.index > 0 {
            self.index -= 1;
        }
    }

    /// Move the cursor onto the last event
    pub fn jump_to_end(&mut self) {
        self.index = self.events.len().saturating_sub(1);
    }

    /// The event under the cursor, or `None` for an empty trace
    pub fn current(&self) -> Option<&TraceEvent> {
        self.events.get(self.index)
    }

    /// All events issued up to and including the cursor
    pub fn visible_prefix(&self) -> &[TraceEvent] {
        if self.events.is_empty() {
            &[]
        } else {
            &self.events[..=self.index]
        }
    }

    /// The full run-ordered log, independent of the cursor
    pub fn events(&self) -> &[TraceEvent] {
        &self.events
    }

    pub fn position(&self) -> usize {
        self.index
    }

    pub fn count(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn at_start(&self) -> bool {
        self.index == 0
    }

    pub fn at_end(&self) -> bool {
        self.index + 1 >= self.events.len()
    }
}
