//! UI rendering for the TUI.

use std::time::Instant;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::session::{Phase, Transition};
use crate::storage::Storage;

use super::app::{ToastKind, TuiApp};

/// Main render function.
pub fn render<S: Storage>(frame: &mut Frame, app: &TuiApp<S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(9), // Input area
            Constraint::Min(5),    // Output area
            Constraint::Length(1), // Toast line
            Constraint::Length(1), // Key hints
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    render_input(frame, app, chunks[1]);
    render_output(frame, app, chunks[2]);
    render_toast(frame, app, chunks[3]);
    render_hints(frame, app, chunks[4]);
}

/// Render the title bar with the current phase.
fn render_header<S: Storage>(frame: &mut Frame, app: &TuiApp<S>, area: Rect) {
    let (label, color) = if app.session.is_clear_pending() {
        ("Clearing...", Color::Yellow)
    } else {
        match app.session.phase() {
            Phase::Editing => ("Editing", Color::Cyan),
            Phase::Showing => ("Decoded", Color::Green),
        }
    };

    let line = Line::from(vec![
        Span::styled(
            " Decode from Base64 ",
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("| "),
        Span::styled(label, Style::default().fg(color)),
    ]);

    let header = Paragraph::new(line).block(Block::default().borders(Borders::ALL).title(" debase "));
    frame.render_widget(header, area);
}

/// Render the input area; shows the cursor while editable.
fn render_input<S: Storage>(frame: &mut Frame, app: &TuiApp<S>, area: Rect) {
    let locked = app.session.is_locked();
    let title = if locked {
        " Input (locked) "
    } else {
        " Input (Base64) "
    };
    let style = if locked {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
    };

    let input = Paragraph::new(app.session.input())
        .style(style)
        .block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(input, area);

    if app.session.is_editable() {
        let (row, col) = cursor_grid(app.session.input(), app.session.cursor());
        let x = area.x + 1 + col.min(area.width.saturating_sub(3));
        let y = area.y + 1 + row.min(area.height.saturating_sub(3));
        frame.set_cursor_position((x, y));
    }
}

/// Render the output area, or a placeholder while there is none.
fn render_output<S: Storage>(frame: &mut Frame, app: &TuiApp<S>, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" Output ");

    if app.session.output().is_empty() {
        let placeholder = Paragraph::new("Decoded text will appear here")
            .style(Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC))
            .block(block);
        frame.render_widget(placeholder, area);
        return;
    }

    // Fade: dim while hiding, and through the first half of the reveal.
    let style = match app.animator.progress(Instant::now()) {
        Some((Transition::HideOutput, _)) => Style::default().add_modifier(Modifier::DIM),
        Some((Transition::RevealOutput, fraction)) if fraction < 0.5 => {
            Style::default().add_modifier(Modifier::DIM)
        }
        _ => Style::default(),
    };

    let output = Paragraph::new(app.session.output())
        .style(style)
        .wrap(Wrap { trim: false })
        .block(block);
    frame.render_widget(output, area);
}

/// Render the newest live toast, if any.
fn render_toast<S: Storage>(frame: &mut Frame, app: &TuiApp<S>, area: Rect) {
    let Some(toast) = app.notifier.toasts().last() else {
        return;
    };
    let color = match toast.kind {
        ToastKind::Success => Color::Green,
        ToastKind::Error => Color::Red,
    };
    let line = Line::from(Span::styled(
        format!(" {} ", toast.text),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(Paragraph::new(line), area);
}

/// Render the key hint bar for the current phase.
fn render_hints<S: Storage>(frame: &mut Frame, app: &TuiApp<S>, area: Rect) {
    let hints = match app.session.phase() {
        Phase::Editing => " Ctrl+D decode | Esc quit",
        Phase::Showing => " Ctrl+Y copy | Ctrl+R clear | Esc quit",
    };
    let bar = Paragraph::new(hints).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(bar, area);
}

/// Map a character cursor position to (row, col) in the unwrapped input.
fn cursor_grid(input: &str, cursor: usize) -> (u16, u16) {
    let mut row = 0u16;
    let mut col = 0u16;
    for c in input.chars().take(cursor) {
        if c == '\n' {
            row = row.saturating_add(1);
            col = 0;
        } else {
            col = col.saturating_add(1);
        }
    }
    (row, col)
}
