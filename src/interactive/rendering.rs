//! TUI rendering with ratatui
//!
//! Board and progress visualizations for the watch mode.

use super::app::{FrameState, Phase};
use crate::board::Board;
use crate::core::Position;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, state: &FrameState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(11),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, state, chunks[0]);

    // Main content area - board left, progress right
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_board(f, state, main_chunks[0]);
    render_progress(f, state, main_chunks[1]);

    render_status(f, state, chunks[2]);
}

const fn phase_color(phase: Phase) -> Color {
    match phase {
        Phase::Searching => Color::Cyan,
        Phase::Replaying => Color::Yellow,
        Phase::Solved => Color::Green,
        Phase::Unsolvable => Color::Red,
    }
}

fn render_header(f: &mut Frame, state: &FrameState, area: Rect) {
    let title = match state.phase {
        Phase::Searching => "PEG SOLITAIRE - searching",
        Phase::Replaying => "PEG SOLITAIRE - replaying solution",
        Phase::Solved => "PEG SOLITAIRE - solved",
        Phase::Unsolvable => "PEG SOLITAIRE - no solution",
    };

    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(phase_color(state.phase))
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(phase_color(state.phase))),
        );
    f.render_widget(header, area);
}

fn render_board(f: &mut Frame, state: &FrameState, area: Rect) {
    let board = Paragraph::new(board_lines(state.board))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Board ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(board, area);
}

/// One styled line per board row
///
/// Edges are dimmed, pegs bold, and free goal cells marked so the jump target
/// stays visible while pegs move around it.
fn board_lines(board: &Board) -> Vec<Line<'static>> {
    (0..board.height())
        .map(|row| {
            let spans: Vec<Span> = (0..board.width())
                .map(|column| {
                    let Some(tile) = board.get(Position::new(row, column)) else {
                        return Span::raw(" ");
                    };
                    if !tile.is_playable() {
                        Span::styled("░", Style::default().fg(Color::DarkGray))
                    } else if tile.is_occupied() {
                        let color = if tile.is_goal() {
                            Color::Green
                        } else {
                            Color::Yellow
                        };
                        Span::styled("o", Style::default().fg(color).add_modifier(Modifier::BOLD))
                    } else if tile.is_goal() {
                        Span::styled("·", Style::default().fg(Color::Cyan))
                    } else {
                        Span::raw(" ")
                    }
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}

fn render_progress(f: &mut Frame, state: &FrameState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(5)])
        .split(area);

    render_piece_gauge(f, state, chunks[0]);
    render_counters(f, state, chunks[1]);
}

fn render_piece_gauge(f: &mut Frame, state: &FrameState, area: Rect) {
    let pieces = state.board.piece_count();
    let ratio = if state.initial_pieces > 0 {
        (pieces as f64 / state.initial_pieces as f64).clamp(0.0, 1.0)
    } else {
        0.0
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Pegs ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Yellow))
        .ratio(ratio)
        .label(format!("{pieces} of {} remain", state.initial_pieces));
    f.render_widget(gauge, area);
}

fn render_counters(f: &mut Frame, state: &FrameState, area: Rect) {
    let mut lines = vec![
        Line::from(format!("Moves tried: {}", state.stats.moves_tried)),
        Line::from(format!("Backtracks:  {}", state.stats.backtracks)),
    ];

    match state.phase {
        Phase::Searching => {}
        Phase::Replaying => {
            lines.push(Line::from(""));
            lines.push(Line::from(format!(
                "Replaying move {} of {}",
                state.replayed, state.solution_len
            )));
        }
        Phase::Solved => {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                format!("Solved in {} moves", state.solution_len),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )));
        }
        Phase::Unsolvable => {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "Board can't be solved",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )));
        }
    }

    let counters = Paragraph::new(lines).block(
        Block::default()
            .title(" Search ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(counters, area);
}

fn render_status(f: &mut Frame, state: &FrameState, area: Rect) {
    let help = match state.phase {
        Phase::Searching => "Searching... the board repaints as jumps are tried",
        Phase::Replaying => "q: Quit",
        Phase::Solved => "r: Replay again | q: Quit",
        Phase::Unsolvable => "q: Quit",
    };

    let status = Paragraph::new(help)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(status, area);
}
