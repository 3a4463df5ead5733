//! Splash screen rendering with ASCII art logo

use crate::state::SplashState;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Build the QUOTEDESK wordmark with styling
fn build_logo_text() -> Vec<Line<'static>> {
    let style = Style::default().fg(Color::Cyan);
    let accent = Style::default().fg(Color::DarkGray);
    vec![
        Line::from(Span::styled(
            r"  ____              _       ____            _    ",
            style,
        )),
        Line::from(Span::styled(
            r" / __ \ _   _  ___ | |_ ___|  _ \  ___  ___| | __",
            style,
        )),
        Line::from(Span::styled(
            r"| |  | | | | |/ _ \| __/ _ \ | | |/ _ \/ __| |/ /",
            style,
        )),
        Line::from(Span::styled(
            r"| |__| | |_| | (_) | ||  __/ |_| |  __/\__ \   < ",
            style,
        )),
        Line::from(Span::styled(
            r" \___\_\\__,_|\___/ \__\___|____/ \___||___/_|\_\",
            style,
        )),
        Line::from(""),
        Line::from(Span::styled(
            "      construction & interiors, one quote away",
            accent,
        )),
    ]
}

/// Draw the splash screen
pub fn draw(frame: &mut Frame, area: Rect, splash_state: &SplashState) {
    let lines = build_logo_text();

    let logo_height = lines.len() as u16;
    let logo_width = 50u16;

    // Center position with scroll offset (can go above the screen)
    let base_y = i32::from(area.y) + i32::from(area.height.saturating_sub(logo_height)) / 2;
    let y_pos = base_y - splash_state.scroll_offset as i32;
    let x = area.x + (area.width.saturating_sub(logo_width)) / 2;

    // Lines that have already scrolled off the top
    let lines_off_top = if y_pos < 0 { (-y_pos) as usize } else { 0 };
    if lines_off_top >= lines.len() {
        return;
    }

    let visible_lines: Vec<Line> = lines.into_iter().skip(lines_off_top).collect();
    let visible_height = visible_lines.len() as u16;
    let render_y = if y_pos < 0 { area.y } else { y_pos as u16 };

    let logo_area = Rect {
        x,
        y: render_y,
        width: logo_width.min(area.width),
        height: visible_height.min(area.height),
    };
    frame.render_widget(Paragraph::new(visible_lines), logo_area);

    // Skip hint at the bottom, hidden once the scroll starts
    if splash_state.scroll_offset < 1.0 && area.height > 2 {
        let hint = "Press any key to skip";
        let hint_x = area.x + (area.width.saturating_sub(hint.len() as u16)) / 2;
        let hint_area = Rect {
            x: hint_x,
            y: area.y + area.height - 2,
            width: (hint.len() as u16).min(area.width),
            height: 1,
        };
        let hint_line = Line::from(Span::styled(hint, Style::default().fg(Color::DarkGray)));
        frame.render_widget(Paragraph::new(hint_line), hint_area);
    }
}
