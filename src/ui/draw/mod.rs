//! Drawing functions for the TUI
//!
//! - `dashboard` - Header clock, greeting banner, calendar panel, sidebar
//! - `popup` - Day-detail popup

mod dashboard;
mod popup;

use ratatui::{style::Style, widgets::Block, Frame};

use crate::app::App;

use dashboard::draw_dashboard;
use popup::draw_day_popup;

/// Main draw function. Also records the clickable regions for this frame.
pub fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();
    app.set_width(area.width);
    app.hits_mut().clear();

    let bg_block = Block::default().style(Style::default().bg(app.theme().background));
    f.render_widget(bg_block, area);

    draw_dashboard(f, app, area);

    if let Some(detail) = app.popup().cloned() {
        draw_day_popup(f, &detail, app.theme(), area);
    }
}
