//! Quote wizard rendering: step progress plus the current step's fields

use super::field_renderer::draw_field;
use crate::app::App;
use crate::state::steps::{STEPS, STEP_COUNT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the wizard view
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let wizard = &app.state.wizard;
    let step = wizard.step();

    let block = Block::default()
        .title(format!(" Get a Quote — {} ", step.title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Progress line, then one box per field (message gets the leftover room)
    let mut constraints = vec![Constraint::Length(2)];
    for field in step.fields {
        if field.is_multiline() {
            constraints.push(Constraint::Min(5));
        } else {
            constraints.push(Constraint::Length(3));
        }
    }
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .margin(1)
        .split(inner);

    draw_progress(frame, chunks[0], wizard.current_step());

    for (idx, field) in step.fields.iter().enumerate() {
        draw_field(frame, chunks[idx + 1], wizard, *field);
    }
}

/// Draw "Step N of 3" with one marker per step
fn draw_progress(frame: &mut Frame, area: Rect, current_step: usize) {
    let mut spans = vec![Span::styled(
        format!("Step {current_step} of {STEP_COUNT}  "),
        Style::default().add_modifier(Modifier::BOLD),
    )];

    for step in &STEPS {
        let style = if step.number == current_step {
            Style::default().fg(Color::Cyan)
        } else if step.number < current_step {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let marker = if step.number < current_step {
            "✓"
        } else {
            "●"
        };
        spans.push(Span::styled(format!("{marker} {}  ", step.title), style));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
