//! # Introduction
//!
//! catatrace counts the valid interleavings of N push and N pop operations
//! (the N-th Catalan number) with a memoized top-down recursion, recording
//! every first-visit recursive call as a trace event. The trace is then
//! navigated forward and backward through a terminal UI built with
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! N → Enumerator → (count, trace, memo) → Replay / Tree view → TUI
//! ```
//!
//! 1. [`engine`] — the memoized enumerator; [`engine::run`] produces a
//!    [`engine::RunOutcome`] holding the count, the run-ordered trace, and
//!    the final memo snapshot.
//! 2. [`trace`] — the event log model, the [`trace::ReplayController`]
//!    cursor over it, and the depth-grouped tree view in [`trace::tree`].
//! 3. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! ## Recording semantics
//!
//! Only first visits are traced: memoized hits return silently, and
//! infeasible states (more pops than pushes, or an exceeded budget) return
//! zero without touching the trace or the memo. Interior calls emit their
//! push marker, then the complete push subtree, then their pop marker, then
//! the complete pop subtree, so the log is a deterministic pre-order,
//! push-first walk of the recursion.

pub mod engine;
pub mod trace;
pub mod ui;
