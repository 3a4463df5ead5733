//! Layout components (header, status bar)

use crate::app::App;
use crate::state::{NoticeKind, View};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the terminal into header, body, and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Draw the title bar with the API reachability indicator
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let (dot, dot_color) = if app.state.api_connected {
        ("●", Color::Green)
    } else {
        ("○", Color::DarkGray)
    };

    let line = Line::from(vec![
        Span::styled(
            " QuoteDesk ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("Project Quote Request  "),
        Span::styled(dot, Style::default().fg(dot_color)),
        Span::styled(
            if app.state.api_connected {
                " online"
            } else {
                " offline"
            },
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Draw the status bar: transient notice, busy indicator, or key help
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    if app.state.submitting {
        let line = Line::from(Span::styled(
            " Sending your request…",
            Style::default().fg(Color::Yellow),
        ));
        frame.render_widget(Paragraph::new(line), area);
        return;
    }

    if let Some(notice) = &app.state.notice {
        let color = match notice.kind {
            NoticeKind::Info => Color::Cyan,
            NoticeKind::Success => Color::Green,
            NoticeKind::Error => Color::Red,
        };
        let line = Line::from(Span::styled(
            format!(" {}", notice.text),
            Style::default().fg(color),
        ));
        frame.render_widget(Paragraph::new(line), area);
        return;
    }

    let help = match app.state.current_view {
        View::Confirmation => " Enter: new request  q: quit",
        _ => " Tab: next field  Enter: continue  Esc: back  Ctrl+R: start over  Ctrl+C: quit",
    };
    let line = Line::from(Span::styled(help, Style::default().fg(Color::DarkGray)));
    frame.render_widget(Paragraph::new(line), area);
}
