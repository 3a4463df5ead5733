//! UI module for rendering the TUI

mod confirmation;
mod field_renderer;
mod layout;
mod splash;
mod wizard;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Splash takes the whole terminal
    if let (View::Splash, Some(splash_state)) = (&app.state.current_view, &app.splash_state) {
        splash::draw(frame, area, splash_state);
        return;
    }

    let (header_area, body_area, status_area) = layout::create_layout(area);
    layout::draw_header(frame, header_area, app);
    layout::draw_status_bar(frame, status_area, app);

    match &app.state.current_view {
        View::Wizard => wizard::draw(frame, body_area, app),
        View::Confirmation => confirmation::draw(frame, body_area, app),
        View::Splash => {}
    }
}
