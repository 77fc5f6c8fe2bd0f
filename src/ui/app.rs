//! Main TUI application state and logic

use crate::engine::{self, MemoStore, RunOutcome, MAX_N};
use crate::trace::ReplayController;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Tree,
    Log,
}

impl FocusedPane {
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Tree => FocusedPane::Log,
            FocusedPane::Log => FocusedPane::Tree,
        }
    }
}

/// The main application state
pub struct App {
    /// The N the current trace was computed for
    pub n: u32,

    /// Final count for the current N
    pub result: u64,

    /// Memo snapshot of the current run
    pub memo: MemoStore,

    /// Replay cursor over the current run's trace
    pub replay: ReplayController,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Per-pane scroll offsets (`usize::MAX` = follow the cursor)
    pub tree_scroll: usize,
    pub log_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether auto-play mode is active
    pub is_playing: bool,

    /// Last time a step was taken in play mode
    pub last_play_time: Instant,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    /// Create a new app over a completed run
    pub fn new(outcome: RunOutcome) -> Self {
        App {
            n: outcome.n,
            result: outcome.result,
            memo: outcome.memo,
            replay: ReplayController::new(outcome.trace),
            focused_pane: FocusedPane::Tree,
            tree_scroll: 0,
            log_scroll: usize::MAX,
            should_quit: false,
            status_message: String::from("Ready!"),
            is_playing: false,
            last_play_time: Instant::now(),
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or_else(Instant::now),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Handle auto-play mode
            if self.is_playing {
                if self.last_play_time.elapsed() >= Duration::from_millis(400) {
                    if self.replay.at_end() {
                        self.is_playing = false;
                        self.status_message = "Playback complete".to_string();
                    } else {
                        self.replay.step_forward();
                        self.status_message = "Playing...".to_string();
                        self.log_scroll = usize::MAX;
                    }
                    self.last_play_time = Instant::now();
                }
            }

            // Use poll with timeout to allow auto-play to work
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Pane area on top, one-line status bar at the bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let pane_area = main_chunks[0];
        let status_area = main_chunks[1];

        // Tree (left) | Trace log (right)
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
            .split(pane_area);

        super::panes::render_tree_pane(
            frame,
            columns[0],
            self.replay.events(),
            &self.memo,
            self.n,
            self.result,
            self.replay.current(),
            self.replay.position(),
            self.focused_pane == FocusedPane::Tree,
            &mut self.tree_scroll,
        );

        super::panes::render_log_pane(
            frame,
            columns[1],
            self.replay.events(),
            self.replay.position(),
            self.focused_pane == FocusedPane::Log,
            &mut self.log_scroll,
        );

        super::panes::render_status_bar(
            frame,
            status_area,
            &self.status_message,
            self.replay.position(),
            self.replay.count(),
            self.replay.at_start(),
            self.replay.at_end(),
            self.is_playing,
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            // Number keys step forward N times directly
            KeyCode::Char(c @ '1'..='9') => {
                self.is_playing = false;
                let n = c.to_digit(10).unwrap() as usize;
                let mut stepped = 0;
                for _ in 0..n {
                    if self.replay.at_end() {
                        break;
                    }
                    self.replay.step_forward();
                    stepped += 1;
                }
                self.status_message = format!("Stepped forward {} step(s)", stepped);
                self.log_scroll = usize::MAX;
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::Left => {
                self.is_playing = false;
                self.step_backward();
            }
            KeyCode::Right => {
                self.is_playing = false;
                self.step_forward();
            }
            KeyCode::Up => match self.focused_pane {
                FocusedPane::Tree => {
                    self.tree_scroll = self.tree_scroll.saturating_sub(1);
                }
                FocusedPane::Log => {
                    if self.log_scroll == usize::MAX {
                        self.log_scroll = self.replay.position();
                    }
                    self.log_scroll = self.log_scroll.saturating_sub(1);
                }
            },
            KeyCode::Down => match self.focused_pane {
                FocusedPane::Tree => {
                    self.tree_scroll = self.tree_scroll.saturating_add(1);
                }
                FocusedPane::Log => {
                    if self.log_scroll == usize::MAX {
                        self.log_scroll = self.replay.position();
                    }
                    self.log_scroll = self.log_scroll.saturating_add(1);
                }
            },
            KeyCode::Char(' ') => {
                // Toggle auto-play mode (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.is_playing = !self.is_playing;
                    if self.is_playing {
                        self.last_play_time = Instant::now()
                            .checked_sub(Duration::from_secs(1))
                            .unwrap_or_else(Instant::now);
                        self.status_message = "Playing...".to_string();
                    } else {
                        self.status_message = "Paused".to_string();
                    }
                }
            }
            KeyCode::Enter => {
                self.is_playing = false;
                self.replay.jump_to_end();
                self.status_message = "Jumped to end".to_string();
                self.log_scroll = usize::MAX;
            }
            KeyCode::Backspace => {
                self.is_playing = false;
                self.replay.reset();
                self.status_message = "Jumped to start".to_string();
                self.log_scroll = usize::MAX;
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.is_playing = false;
                self.recalculate(self.n as i64 + 1);
            }
            KeyCode::Char('-') | KeyCode::Char('_') => {
                self.is_playing = false;
                self.recalculate(self.n as i64 - 1);
            }
            _ => {}
        }
    }

    /// Step forward in the trace
    fn step_forward(&mut self) {
        if self.replay.at_end() {
            self.status_message = "Already at the last event".to_string();
        } else {
            self.replay.step_forward();
            self.status_message = "Stepped forward".to_string();
            self.log_scroll = usize::MAX;
        }
    }

    /// Step backward in the trace
    fn step_backward(&mut self) {
        if self.replay.at_start() {
            self.status_message = "Already at the first event".to_string();
        } else {
            self.replay.step_backward();
            self.status_message = "Stepped backward".to_string();
            self.log_scroll = usize::MAX;
        }
    }

    /// Re-run the enumerator for a new N, replacing all replay state.
    ///
    /// A failed run keeps the previous state and reports in the status bar.
    fn recalculate(&mut self, n: i64) {
        if n < 0 {
            self.status_message = "N is already 0".to_string();
            return;
        }
        if n > MAX_N as i64 {
            self.status_message = format!("N is capped at {} (u64 counts)", MAX_N);
            return;
        }

        match engine::run(n) {
            Ok(outcome) => {
                self.n = outcome.n;
                self.result = outcome.result;
                self.memo = outcome.memo;
                self.replay = ReplayController::new(outcome.trace);
                self.tree_scroll = 0;
                self.log_scroll = usize::MAX;
                self.status_message = format!("Recomputed for N = {}", self.n);
            }
            Err(e) => {
                self.status_message = format!("Run failed: {}", e);
            }
        }
    }
}
