//! UI module for rendering the TUI

mod components;
mod layout;
mod page_layout;
mod page_view;

use crate::app::App;
use ratatui::{layout::Rect, Frame};

pub use page_layout::{hit_test, layout_page};

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (page_area, status_area) = layout::create_layout(frame.area());

    page_view::draw(frame, page_area, app);
    layout::draw_status_bar(frame, status_area, app);

    if let Some(message) = app.state.current_error() {
        components::render_error_dialog(frame, message);
    }
}

/// Area page elements are laid out in for a given terminal size
pub fn page_content_area(screen: Rect) -> Rect {
    let (page_area, _) = layout::create_layout(screen);
    layout::page_inner(page_area)
}
