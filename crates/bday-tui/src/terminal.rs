//! Terminal setup, teardown, and main event loop.

use std::io;
use std::time::{Duration, Instant};

use bday_core::Millis;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::prelude::*;
use tracing::info;

use crate::app::App;
use crate::views::draw;
use crate::worker::Worker;

/// Longest the loop sleeps waiting for a key, so finished requests and
/// timers show up promptly.
const MAX_POLL: Duration = Duration::from_millis(100);

/// Launch the TUI application.
pub fn run(mut app: App, worker: Worker) -> Result<(), String> {
    enable_raw_mode().map_err(|e| format!("terminal error: {e}"))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(|e| format!("terminal error: {e}"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(|e| format!("terminal error: {e}"))?;

    let result = run_loop(&mut terminal, &mut app, &worker);

    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    result
}

/// Main event loop.
fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    worker: &Worker,
) -> Result<(), String> {
    let origin = Instant::now();
    loop {
        app.exchange(worker);
        app.tick(since(origin).saturating_sub(app.engine.now()));

        terminal
            .draw(|frame| draw(frame, app))
            .map_err(|e| format!("draw error: {e}"))?;

        if app.should_quit {
            info!(stage = %app.stage(), "quitting");
            return Ok(());
        }

        if event::poll(poll_timeout(app)).map_err(|e| format!("event error: {e}"))? {
            match event::read().map_err(|e| format!("event error: {e}"))? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                _ => {}
            }
        }
    }
}

/// Wall-clock milliseconds since `origin`.
fn since(origin: Instant) -> Millis {
    Millis::try_from(origin.elapsed().as_millis()).unwrap_or(Millis::MAX)
}

/// How long to wait for input before the next timer is due.
fn poll_timeout(app: &App) -> Duration {
    app.engine
        .next_deadline()
        .map(|due| Duration::from_millis(due.saturating_sub(app.engine.now())))
        .map_or(MAX_POLL, |wait| wait.min(MAX_POLL))
}
