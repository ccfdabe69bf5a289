//! Layout pass for the hosted page
//!
//! Shared by drawing and mouse hit-testing so both always agree on where an
//! element sits.
//!
//! ```text
//! button / input   3 rows (border + content + border)
//! form             children stacked, no border
//! container block  children stacked inside a border
//! container grid   children in two columns inside a border
//! display none     nothing, children skipped
//! ```

use super::components::{BUTTON_HEIGHT, FIELD_HEIGHT};
use crate::page::{Display, ElementHandle, ElementKind, Page};
use ratatui::layout::{Margin, Rect};

/// Rows taken by a container's top and bottom border
const CONTAINER_BORDER: u16 = 2;

/// An element and the screen area it was assigned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placed {
    pub handle: ElementHandle,
    pub area: Rect,
}

/// Assign screen areas to all rendered elements in document order.
///
/// Elements that would extend past the bottom of `area` are left out along
/// with their children.
pub fn layout_page(page: &Page, area: Rect) -> Vec<Placed> {
    let mut placed = Vec::new();
    let mut y = area.y;
    for root in page.roots() {
        let height = element_height(page, *root);
        if height == 0 {
            continue;
        }
        let slot = Rect {
            x: area.x,
            y,
            width: area.width,
            height,
        };
        place(page, *root, slot, area, &mut placed);
        y = y.saturating_add(height);
    }
    placed
}

/// Element under a screen position that can take focus
pub fn hit_test(page: &Page, placed: &[Placed], col: u16, row: u16) -> Option<ElementHandle> {
    placed
        .iter()
        .rev()
        .find(|p| {
            col >= p.area.x
                && col < p.area.right()
                && row >= p.area.y
                && row < p.area.bottom()
                && page.get(p.handle).is_some_and(|el| el.is_focusable())
        })
        .map(|p| p.handle)
}

fn element_height(page: &Page, el: ElementHandle) -> u16 {
    let Some(element) = page.get(el) else {
        return 0;
    };
    match &element.kind {
        ElementKind::Button(_) => BUTTON_HEIGHT,
        ElementKind::Input(_) => FIELD_HEIGHT,
        ElementKind::Form => stacked_height(page, &element.children),
        ElementKind::Container(Display::None) => 0,
        ElementKind::Container(Display::Block) => {
            stacked_height(page, &element.children) + CONTAINER_BORDER
        }
        ElementKind::Container(Display::Grid) => {
            grid_height(page, &element.children) + CONTAINER_BORDER
        }
    }
}

fn stacked_height(page: &Page, children: &[ElementHandle]) -> u16 {
    children
        .iter()
        .map(|child| element_height(page, *child))
        .fold(0u16, u16::saturating_add)
}

fn grid_height(page: &Page, children: &[ElementHandle]) -> u16 {
    grid_rows(page, children)
        .iter()
        .map(|row| {
            row.iter()
                .map(|child| element_height(page, *child))
                .max()
                .unwrap_or(0)
        })
        .fold(0u16, u16::saturating_add)
}

/// Rendered children grouped two per row
fn grid_rows(page: &Page, children: &[ElementHandle]) -> Vec<Vec<ElementHandle>> {
    let rendered: Vec<ElementHandle> = children
        .iter()
        .copied()
        .filter(|child| element_height(page, *child) > 0)
        .collect();
    rendered.chunks(2).map(<[ElementHandle]>::to_vec).collect()
}

fn place(page: &Page, el: ElementHandle, slot: Rect, clip: Rect, out: &mut Vec<Placed>) {
    let Some(element) = page.get(el) else {
        return;
    };
    if slot.height == 0 || slot.bottom() > clip.bottom() {
        return;
    }
    out.push(Placed {
        handle: el,
        area: slot,
    });

    match &element.kind {
        ElementKind::Form => place_stacked(page, &element.children, slot, clip, out),
        ElementKind::Container(Display::Block) => {
            let inner = slot.inner(Margin::new(1, 1));
            place_stacked(page, &element.children, inner, clip, out);
        }
        ElementKind::Container(Display::Grid) => {
            let inner = slot.inner(Margin::new(1, 1));
            place_grid(page, &element.children, inner, clip, out);
        }
        _ => {}
    }
}

fn place_stacked(
    page: &Page,
    children: &[ElementHandle],
    area: Rect,
    clip: Rect,
    out: &mut Vec<Placed>,
) {
    let mut y = area.y;
    for child in children {
        let height = element_height(page, *child);
        if height == 0 {
            continue;
        }
        let slot = Rect {
            x: area.x,
            y,
            width: area.width,
            height,
        };
        place(page, *child, slot, clip, out);
        y = y.saturating_add(height);
    }
}

fn place_grid(
    page: &Page,
    children: &[ElementHandle],
    area: Rect,
    clip: Rect,
    out: &mut Vec<Placed>,
) {
    let left_width = area.width / 2;
    let right_width = area.width - left_width;
    let mut y = area.y;
    for row in grid_rows(page, children) {
        let mut row_height = 0;
        for (column, child) in row.iter().enumerate() {
            let height = element_height(page, *child);
            row_height = row_height.max(height);
            let (x, width) = if column == 0 {
                (area.x, left_width)
            } else {
                (area.x + left_width, right_width)
            };
            place(
                page,
                *child,
                Rect {
                    x,
                    y,
                    width,
                    height,
                },
                clip,
                out,
            );
        }
        y = y.saturating_add(row_height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::{
        evaluation_page, EvaluationFormWidget, DETAILS_CONTAINER_ID, TOGGLE_BUTTON_ID,
        TOTAL_SCORE_ID,
    };
    use crate::page::Document;

    const AREA: Rect = Rect {
        x: 0,
        y: 0,
        width: 80,
        height: 40,
    };

    fn area_of(placed: &[Placed], el: ElementHandle) -> Option<Rect> {
        placed.iter().find(|p| p.handle == el).map(|p| p.area)
    }

    #[test]
    fn test_hidden_details_take_no_space() {
        let mut page = evaluation_page();
        EvaluationFormWidget::attach(&mut page).unwrap();
        let placed = layout_page(&page, AREA);

        let details = page.element_by_id(DETAILS_CONTAINER_ID).unwrap();
        assert!(area_of(&placed, details).is_none());

        let total = page.element_by_id(TOTAL_SCORE_ID).unwrap();
        assert_eq!(area_of(&placed, total).unwrap().y, BUTTON_HEIGHT);
    }

    #[test]
    fn test_grid_places_fields_in_two_columns() {
        let page = evaluation_page();
        let placed = layout_page(&page, AREA);
        let details = page.element_by_id(DETAILS_CONTAINER_ID).unwrap();
        let fields = page.get(details).unwrap().children.clone();

        let first = area_of(&placed, fields[0]).unwrap();
        let second = area_of(&placed, fields[1]).unwrap();
        let third = area_of(&placed, fields[2]).unwrap();
        assert_eq!(first.y, second.y);
        assert!(second.x > first.x);
        assert_eq!(third.x, first.x);
        assert_eq!(third.y, first.y + FIELD_HEIGHT);

        // 3 rows of fields plus border
        let container = area_of(&placed, details).unwrap();
        assert_eq!(container.height, 3 * FIELD_HEIGHT + CONTAINER_BORDER);
    }

    #[test]
    fn test_elements_past_bottom_are_clipped() {
        let page = evaluation_page();
        let short = Rect {
            height: BUTTON_HEIGHT + 1,
            ..AREA
        };
        let placed = layout_page(&page, short);
        assert_eq!(placed.len(), 1);
    }

    #[test]
    fn test_hit_test_finds_button_and_skips_readonly() {
        let page = evaluation_page();
        let placed = layout_page(&page, AREA);
        let button = page.element_by_id(TOGGLE_BUTTON_ID).unwrap();
        assert_eq!(hit_test(&page, &placed, 5, 1), Some(button));

        let total = page.element_by_id(TOTAL_SCORE_ID).unwrap();
        let total_area = area_of(&placed, total).unwrap();
        assert_eq!(hit_test(&page, &placed, total_area.x + 1, total_area.y + 1), None);
    }
}
