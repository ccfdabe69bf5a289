//! Application state definitions

use crate::page::{ElementHandle, Page};
use std::collections::VecDeque;

/// Host-side state that lives next to the page
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Element receiving keyboard input
    pub focus: Option<ElementHandle>,
    /// Errors waiting to be shown, oldest first
    error_queue: VecDeque<String>,
}

impl AppState {
    pub fn push_error(&mut self, message: String) {
        self.error_queue.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.error_queue.is_empty()
    }

    /// Error currently displayed in the dialog
    pub fn current_error(&self) -> Option<&str> {
        self.error_queue.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.error_queue.pop_front();
    }

    /// Move focus to the next focusable element, wrapping around
    pub fn focus_next(&mut self, page: &Page) {
        let order = page.focus_order();
        if order.is_empty() {
            self.focus = None;
            return;
        }
        let next = match self.focus.and_then(|f| order.iter().position(|el| *el == f)) {
            Some(idx) => (idx + 1) % order.len(),
            None => 0,
        };
        self.focus = Some(order[next]);
    }

    /// Move focus to the previous focusable element, wrapping around
    pub fn focus_prev(&mut self, page: &Page) {
        let order = page.focus_order();
        if order.is_empty() {
            self.focus = None;
            return;
        }
        let prev = match self.focus.and_then(|f| order.iter().position(|el| *el == f)) {
            Some(0) | None => order.len() - 1,
            Some(idx) => idx - 1,
        };
        self.focus = Some(order[prev]);
    }

    /// Drop focus from an element that can no longer take it
    pub fn revalidate_focus(&mut self, page: &Page) {
        let order = page.focus_order();
        if !self.focus.is_some_and(|f| order.contains(&f)) {
            self.focus = order.first().copied();
        }
    }

    pub fn is_focused(&self, el: ElementHandle) -> bool {
        self.focus == Some(el)
    }
}
