//! TUI application state and logic
//!
//! Watch mode runs the search with observation hooks that repaint the board
//! every Nth search event, then replays the found solution on a fresh board
//! with a per-move delay.

use crate::board::{Board, Move, ParseError};
use crate::solver::{self, SolveError};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};
use std::cell::RefCell;
use std::io;
use std::time::{Duration, Instant};

/// Default number of search events between redraws
pub const DEFAULT_FRAME_EVERY: u64 = 512;

/// Default pause between replayed moves
pub const DEFAULT_REPLAY_DELAY: Duration = Duration::from_millis(250);

/// Which stage of the session the TUI is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Searching,
    Replaying,
    Solved,
    Unsolvable,
}

/// Running totals shown next to the board
#[derive(Debug, Default, Clone, Copy)]
pub struct SearchStats {
    pub moves_tried: u64,
    pub backtracks: u64,
}

/// Snapshot handed to the renderer for one frame
pub struct FrameState<'a> {
    pub board: &'a Board,
    pub phase: Phase,
    pub stats: SearchStats,
    pub initial_pieces: usize,
    pub replayed: usize,
    pub solution_len: usize,
}

/// Application state
pub struct App {
    pub layout: Vec<String>,
    pub board: Board,
    pub phase: Phase,
    pub stats: SearchStats,
    pub solution: Vec<Move>,
    pub replayed: usize,
    pub frame_every: u64,
    pub replay_delay: Duration,
    pub initial_pieces: usize,
}

impl App {
    /// Build the watch-mode state for a layout
    ///
    /// # Errors
    /// Returns `ParseError` when the layout is malformed.
    pub fn new(layout: Vec<String>) -> Result<Self, ParseError> {
        let board = Board::parse(&layout)?;
        let initial_pieces = board.piece_count();

        Ok(Self {
            layout,
            board,
            phase: Phase::Searching,
            stats: SearchStats::default(),
            solution: Vec::new(),
            replayed: 0,
            frame_every: DEFAULT_FRAME_EVERY,
            replay_delay: DEFAULT_REPLAY_DELAY,
            initial_pieces,
        })
    }

    fn frame_state(&self) -> FrameState<'_> {
        FrameState {
            board: &self.board,
            phase: self.phase,
            stats: self.stats,
            initial_pieces: self.initial_pieces,
            replayed: self.replayed,
            solution_len: self.solution.len(),
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O
/// error during rendering or event handling.
pub fn run_tui(mut app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    draw(terminal, app)?;

    let frame_every = app.frame_every.max(1);
    let initial_pieces = app.initial_pieces;

    // The search borrows the board for its whole run, so both hooks share the
    // terminal through one RefCell and draw from the board they are handed.
    let (outcome, stats, draw_error) = {
        let view = RefCell::new(SearchView {
            terminal: &mut *terminal,
            stats: SearchStats::default(),
            draw_error: None,
        });
        let outcome = solver::solve_observed(
            &mut app.board,
            |board| {
                view.borrow_mut()
                    .observe(board, SearchEvent::Play, frame_every, initial_pieces);
            },
            |board| {
                view.borrow_mut()
                    .observe(board, SearchEvent::Undo, frame_every, initial_pieces);
            },
        );
        let view = view.into_inner();
        (outcome, view.stats, view.draw_error)
    };

    app.stats = stats;
    if let Some(error) = draw_error {
        return Err(error.into());
    }

    match outcome {
        Ok(moves) => app.solution = moves,
        Err(SolveError::Unsolvable) => {
            app.phase = Phase::Unsolvable;
            draw(terminal, app)?;
            wait_for_quit()?;
            return Ok(());
        }
        Err(error @ SolveError::Tile(_)) => return Err(anyhow::anyhow!(error)),
    }

    loop {
        if replay_solution(terminal, app)? {
            return Ok(());
        }

        app.phase = Phase::Solved;
        draw(terminal, app)?;

        loop {
            let key = read_key()?;
            if is_quit(&key) {
                return Ok(());
            }
            if key.code == KeyCode::Char('r') {
                break; // replay once more
            }
        }
    }
}

/// Walk the solution on a fresh board; true means the user quit mid-replay
fn replay_solution<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<bool> {
    app.board = Board::parse(&app.layout).map_err(|e| anyhow::anyhow!("Invalid layout: {e}"))?;
    app.replayed = 0;
    app.phase = Phase::Replaying;
    draw(terminal, app)?;

    while app.replayed < app.solution.len() {
        if pause_or_quit(app.replay_delay)? {
            return Ok(true);
        }
        let jump = app.solution[app.replayed];
        jump.replay(&mut app.board)
            .map_err(|e| anyhow::anyhow!("Replay failed: {e}"))?;
        app.replayed += 1;
        draw(terminal, app)?;
    }

    Ok(false)
}

fn draw<B: Backend>(terminal: &mut Terminal<B>, app: &App) -> Result<()> {
    let state = app.frame_state();
    terminal.draw(|f| super::rendering::ui(f, &state))?;
    Ok(())
}

enum SearchEvent {
    Play,
    Undo,
}

/// Terminal and counters shared by the two observation hooks
struct SearchView<'a, B: Backend> {
    terminal: &'a mut Terminal<B>,
    stats: SearchStats,
    draw_error: Option<io::Error>,
}

impl<B: Backend> SearchView<'_, B> {
    fn observe(
        &mut self,
        board: &Board,
        event: SearchEvent,
        frame_every: u64,
        initial_pieces: usize,
    ) {
        match event {
            SearchEvent::Play => self.stats.moves_tried += 1,
            SearchEvent::Undo => self.stats.backtracks += 1,
        }

        // After a draw failure, keep counting but stop painting
        if self.draw_error.is_some() {
            return;
        }
        let events = self.stats.moves_tried + self.stats.backtracks;
        if events % frame_every != 0 {
            return;
        }

        let state = FrameState {
            board,
            phase: Phase::Searching,
            stats: self.stats,
            initial_pieces,
            replayed: 0,
            solution_len: 0,
        };
        if let Err(error) = self.terminal.draw(|f| super::rendering::ui(f, &state)) {
            self.draw_error = Some(error);
        }
    }
}

/// Sleep for `delay` while watching for a quit key
fn pause_or_quit(delay: Duration) -> Result<bool> {
    let deadline = Instant::now() + delay;
    loop {
        let remaining = deadline.saturating_duration_since(Instant::now());
        if remaining.is_zero() {
            return Ok(false);
        }
        if event::poll(remaining)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && is_quit(&key) {
                    return Ok(true);
                }
            }
        }
    }
}

fn wait_for_quit() -> Result<()> {
    loop {
        if is_quit(&read_key()?) {
            return Ok(());
        }
    }
}

fn read_key() -> Result<KeyEvent> {
    loop {
        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind == KeyEventKind::Press {
                return Ok(key);
            }
        }
    }
}

fn is_quit(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_starts_in_searching_phase() {
        let layout = vec!["OOG".to_string()];
        let app = App::new(layout).unwrap();

        assert_eq!(app.phase, Phase::Searching);
        assert_eq!(app.initial_pieces, 2);
        assert!(app.solution.is_empty());
    }

    #[test]
    fn app_rejects_malformed_layout() {
        let layout = vec!["O?".to_string()];
        assert!(App::new(layout).is_err());
    }
}
