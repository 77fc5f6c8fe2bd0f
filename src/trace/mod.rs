// Trace recording for replayable recursion history

pub mod replay;
pub mod tree;

use crate::engine::memo::Signature;
use std::fmt;

pub use replay::ReplayController;
pub use tree::{grouped_by_depth, NodeStatus, TreeNode};

/// What a first-visit event records about its call site
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// About to explore the push branch (a+1, b)
    DescendPush,
    /// About to explore the pop branch (a, b+1)
    DescendPop,
    /// Both budgets exhausted, counts as one valid interleaving
    TerminalSuccess,
    /// Infeasible state
    ///
    /// Part of the event vocabulary, but the enumerator follows the
    /// reference behavior of returning from infeasible states without
    /// recording anything, so runs never contain this kind.
    TerminalFailure,
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EventKind::DescendPush => "push",
            EventKind::DescendPop => "pop",
            EventKind::TerminalSuccess => "success",
            EventKind::TerminalFailure => "fail",
        };
        write!(f, "{}", label)
    }
}

/// One first-visit occurrence in the recursion, immutable once recorded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceEvent {
    pub sig: Signature,
    /// Recursion depth of the call, 0 at the root
    pub depth: u32,
    pub kind: EventKind,
    /// Issuance order, assigned by the recorder; equals append position
    pub sequence: u64,
}

/// Append-only event log for one run
///
/// Sequence numbers are assigned at append time and are strictly increasing;
/// append is the only mutation.
#[derive(Debug, Clone, Default)]
pub struct TraceRecorder {
    events: Vec<TraceEvent>,
    next_sequence: u64,
}

impl TraceRecorder {
    pub fn new() -> Self {
        TraceRecorder {
            events: Vec::new(),
            next_sequence: 0,
        }
    }

    /// Record an event and return the sequence number it was assigned
    pub fn append(&mut self, sig: Signature, depth: u32, kind: EventKind) -> u64 {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.events.push(TraceEvent {
            sig,
            depth,
            kind,
            sequence,
        });
        sequence
    }

    pub fn events(&self) -> &[TraceEvent] {
        &self.events
    }

    pub fn count(&self) -> usize {
        self.events.len()
    }

    /// Consume the recorder, yielding the run-ordered log
    pub fn into_events(self) -> Vec<TraceEvent> {
        self.events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_assigns_sequential_numbers() {
        let mut recorder = TraceRecorder::new();
        let sig = Signature::new(0, 0);
        assert_eq!(recorder.append(sig, 0, EventKind::DescendPush), 0);
        assert_eq!(recorder.append(sig, 0, EventKind::DescendPop), 1);
        assert_eq!(recorder.count(), 2);
        assert_eq!(recorder.events()[1].sequence, 1);
    }
}
