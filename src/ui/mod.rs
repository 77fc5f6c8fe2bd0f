//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]** — application state, keyboard event loop, pane focus, re-running
//!   with a different N
//! - **[`panes`]** — stateless render functions for each visible pane (tree,
//!   trace log, status bar)
//! - **[`theme`]** — centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with a
//! [`RunOutcome`] and call [`App::run`] to start the event loop.
//!
//! [`RunOutcome`]: crate::engine::RunOutcome
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
