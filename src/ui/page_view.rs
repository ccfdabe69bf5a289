//! Rendering of the hosted page

use super::components::{draw_field, render_button};
use super::page_layout::layout_page;
use crate::app::App;
use crate::page::{Display, ElementKind};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Draw the page inside a titled frame
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let title = if app.page.title.is_empty() {
        " Page ".to_string()
    } else {
        format!(" {} ", app.page.title)
    };
    let outer = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(outer, area);

    for placed in layout_page(&app.page, super::layout::page_inner(area)) {
        let Some(element) = app.page.get(placed.handle) else {
            continue;
        };
        let is_focused = app.state.is_focused(placed.handle);
        match &element.kind {
            ElementKind::Button(content) => {
                render_button(frame, placed.area, &content.display_text(), is_focused);
            }
            ElementKind::Input(input) => draw_field(
                frame,
                placed.area,
                input.display_label(),
                &input.value,
                is_focused,
                input.readonly,
            ),
            ElementKind::Container(Display::None) | ElementKind::Form => {}
            ElementKind::Container(_) => {
                let mut block = Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray));
                if let Some(id) = &element.id {
                    block = block.title(format!(" {id} "));
                }
                frame.render_widget(block, placed.area);
            }
        }
    }
}
