//! Layout components (page frame, status bar)

use crate::app::App;
use crate::evaluation::VisibilityState;
use ratatui::{
    layout::{Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into the page frame and the status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Page
            Constraint::Length(1), // Status bar
        ])
        .split(area);
    (chunks[0], chunks[1])
}

/// Area available to page elements inside the frame border
pub fn page_inner(page_area: Rect) -> Rect {
    page_area.inner(Margin::new(1, 1))
}

/// Draw the status bar with key hints and the current total
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let key = Style::default().fg(Color::Cyan);
    let mut spans = vec![
        Span::raw(" "),
        Span::styled("Tab", key),
        Span::raw(": next  "),
        Span::styled("Enter", key),
        Span::raw(": press  "),
        Span::styled("Esc", key),
        Span::raw(": quit"),
    ];

    match (app.total_text(), &app.widget) {
        (Some(total), Some(widget)) => {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(
                format!("Total: {total}"),
                Style::default().fg(Color::Green),
            ));
            let details = match widget.visibility() {
                VisibilityState::Hidden => "details hidden",
                VisibilityState::Shown => "details shown",
            };
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(details, Style::default().fg(Color::Gray)));
        }
        _ => {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(
                "evaluation form not present",
                Style::default().fg(Color::Gray),
            ));
        }
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);
}
