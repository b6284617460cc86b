//! Layout components (header, status bar)

use crate::app::App;
use crate::state::SubmitPhase;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Widest the form grows on large terminals
const MAX_CONTENT_WIDTH: u16 = 100;

/// Split the screen into header, form and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Form
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (
        centered(chunks[0]),
        centered(chunks[1]),
        chunks[2],
    )
}

/// Horizontally center an area, capped at the maximum content width
fn centered(area: Rect) -> Rect {
    let width = area.width.min(MAX_CONTENT_WIDTH);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}

/// Draw the title header
pub fn draw_header(frame: &mut Frame, area: Rect) {
    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            "AI Career Assistant",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Your personal content engine for job applications.",
            Style::default().fg(Color::Gray),
        )),
    ])
    .alignment(Alignment::Center);

    frame.render_widget(header, area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let endpoint = app.endpoint();
    let marker_color = if endpoint.is_emulator() {
        Color::Yellow
    } else {
        Color::Green
    };

    let mut spans = vec![
        Span::styled(" ● ", Style::default().fg(marker_color)),
        Span::styled(endpoint.label(), Style::default().fg(Color::White)),
    ];

    if app.state.phase() == SubmitPhase::Submitting {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            "Saving…",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ));
    }

    spans.push(Span::raw(" | "));
    spans.push(Span::styled(hints(app), Style::default().fg(Color::Gray)));

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);
}

/// Keyboard hints for the focused element
fn hints(app: &App) -> String {
    let save = crate::platform::SAVE_SHORTCUT;
    let quit = crate::platform::QUIT_SHORTCUT;
    let form = &app.state.form;

    if app.state.has_notice() {
        return "Enter/Esc:dismiss".to_string();
    }
    if form.is_submit_focused() {
        return format!("Enter:save  Tab:next  {quit}:quit");
    }
    match form.active_field() {
        Some(field) if field.is_tone() => format!("←/→:tone  Tab:next  {save}:save  {quit}:quit"),
        Some(field) if field.is_multiline() => {
            format!("Tab:next  Enter:newline  {save}:save  {quit}:quit")
        }
        _ => format!("Tab:next  {save}:save  {quit}:quit"),
    }
}
