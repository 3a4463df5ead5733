//! Confirmation screen shown after a quote request was accepted

use crate::app::App;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the confirmation view
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Thank you!",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Your quote request has been sent."),
        Line::from("Our team will reach out within one business day."),
    ];

    if let Some(reference) = &app.state.confirmation_ref {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::raw("Reference: "),
            Span::styled(reference.clone(), Style::default().fg(Color::Cyan)),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Enter: start a new request   q: quit",
        Style::default().fg(Color::DarkGray),
    )));

    // Roughly vertically centered
    let top_padding = inner.height.saturating_sub(lines.len() as u16) / 2;
    let content_area = Rect {
        x: inner.x,
        y: inner.y + top_padding,
        width: inner.width,
        height: inner.height.saturating_sub(top_padding),
    };

    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        content_area,
    );
}
