// catatrace: time-travel visualizer for the memoized Catalan push/pop recursion

use std::io;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use catatrace::engine::{self, MAX_N};
use catatrace::ui::App;

const DEFAULT_N: i64 = 3;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Vec<String> = std::env::args().collect();

    let n: i64 = match args.get(1) {
        None => DEFAULT_N,
        Some(raw) => match raw.parse() {
            Ok(n) => n,
            Err(_) => {
                let program_name = args.first().map(|s| s.as_str()).unwrap_or("catatrace");
                eprintln!("Error: '{}' is not an integer", raw);
                eprintln!();
                eprintln!("Usage: {} [N]", program_name);
                eprintln!();
                eprintln!(
                    "N is the number of push/pop pairs to enumerate (0..={}, default {}).",
                    MAX_N, DEFAULT_N
                );
                std::process::exit(1);
            }
        },
    };

    // Run the enumerator to build the trace
    eprintln!("Enumerating for N = {}...", n);
    let outcome = match engine::run(n) {
        Ok(outcome) => outcome,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    eprintln!(
        "Count: {} ({} trace events, {} memoized signatures)",
        outcome.result,
        outcome.trace.len(),
        outcome.memo.len()
    );

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(outcome);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
