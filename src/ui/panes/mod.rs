//! TUI pane rendering modules
//!
//! Stateless render functions for the visible panes:
//!
//! - [`tree`]: the recursion tree grouped by depth, colored by node status
//! - [`log`]: the trace event log with the replay cursor
//! - [`status`]: status bar with keybindings and replay state

pub mod log;
pub mod status;
pub mod tree;

// Re-export render functions for convenience
pub use log::render_log_pane;
pub use status::render_status_bar;
pub use tree::render_tree_pane;
