//! Depth-grouped tree view derived from a completed trace
//!
//! The aggregator joins the event log against the final memo snapshot to
//! produce the distinct call nodes, grouped by recursion depth and ordered
//! by first occurrence within each depth. It never stores anything: a
//! renderer re-derives the view whenever the replay cursor moves.

use crate::engine::memo::{MemoStore, Signature};
use crate::trace::{EventKind, TraceEvent};
use rustc_hash::FxHashSet;
use std::collections::BTreeMap;

/// Resolved state of a call node after (or during) a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeStatus {
    /// No memo entry for this signature
    Pending,
    /// Resolved by the terminal success rule; the value is 1 by construction
    Success,
    /// Interior node resolved by summing its branches to a positive count
    Accumulated,
    /// Resolved to zero from an infeasible state
    Failed,
}

/// One distinct call node in the depth-grouped view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeNode {
    pub sig: Signature,
    pub depth: u32,
    pub status: NodeStatus,
    /// Whether any of this node's events fall at or before the cursor
    pub visited: bool,
}

impl TreeNode {
    /// The node's final count, when the memo has resolved it
    pub fn result(&self, memo: &MemoStore) -> Option<u64> {
        memo.get(self.sig)
    }
}

/// Group the distinct (signature, depth) nodes of a trace by depth.
///
/// Within a depth, nodes keep first-occurrence order (stable
/// de-duplication). `visible_up_to` is a replay cursor position: a node is
/// `visited` iff one of its events has sequence at or below it; `None`
/// marks every node visited, which is the fully-revealed view.
///
/// Status is joined against the memo: an absent signature is pending, a
/// node introduced by a terminal success event is a success, and otherwise
/// a positive count means the node accumulated its branches while a zero
/// count on an infeasible signature means the branch was exhausted. `n` is
/// the run's input, needed for the infeasibility test.
pub fn grouped_by_depth(
    events: &[TraceEvent],
    memo: &MemoStore,
    n: u32,
    visible_up_to: Option<usize>,
) -> BTreeMap<u32, Vec<TreeNode>> {
    let visible: FxHashSet<(Signature, u32)> = match visible_up_to {
        Some(cursor) => events
            .iter()
            .take_while(|e| e.sequence <= cursor as u64)
            .map(|e| (e.sig, e.depth))
            .collect(),
        None => events.iter().map(|e| (e.sig, e.depth)).collect(),
    };

    let mut seen: FxHashSet<(Signature, u32)> = FxHashSet::default();
    let mut grouped: BTreeMap<u32, Vec<TreeNode>> = BTreeMap::new();

    for event in events {
        if !seen.insert((event.sig, event.depth)) {
            continue;
        }

        grouped.entry(event.depth).or_default().push(TreeNode {
            sig: event.sig,
            depth: event.depth,
            status: node_status(event, memo, n),
            visited: visible.contains(&(event.sig, event.depth)),
        });
    }

    grouped
}

fn node_status(first_event: &TraceEvent, memo: &MemoStore, n: u32) -> NodeStatus {
    match memo.get(first_event.sig) {
        None => NodeStatus::Pending,
        Some(_) if first_event.kind == EventKind::TerminalSuccess => NodeStatus::Success,
        Some(value) if value > 0 => NodeStatus::Accumulated,
        Some(_) if !first_event.sig.is_feasible(n) => NodeStatus::Failed,
        Some(_) => NodeStatus::Pending,
    }
}
