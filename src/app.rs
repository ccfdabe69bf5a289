//! Application state and core logic

use crate::evaluation::{evaluation_page, EvaluationFormWidget};
use crate::page::{load_page, Document, ElementHandle, ElementKind, Page, PageEvent};
use crate::state::AppState;
use crate::ui;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use std::path::Path;

/// Main application struct
pub struct App {
    /// Page hosting the widget
    pub page: Page,
    /// Evaluation widget, absent when the page lacks its required elements
    pub widget: Option<EvaluationFormWidget>,
    /// Focus and error queue
    pub state: AppState,
    /// Terminal size for mouse hit-testing (width, height)
    pub terminal_size: Option<(u16, u16)>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Load the page (falling back to the built-in sheet) and attach the widget
    pub async fn new(page_path: Option<&Path>) -> Self {
        let Some(path) = page_path else {
            return Self::with_page(evaluation_page());
        };

        match load_page(path).await {
            Ok(page) => Self::with_page(page),
            Err(err) => {
                tracing::warn!("Falling back to built-in page: {err}");
                let mut app = Self::with_page(evaluation_page());
                app.push_error(format!(
                    "{err}\n\nShowing the built-in evaluation sheet instead."
                ));
                app
            }
        }
    }

    /// Host an already constructed page; the widget is attached exactly once here
    pub fn with_page(mut page: Page) -> Self {
        let widget = EvaluationFormWidget::attach(&mut page);
        match &widget {
            Some(widget) => tracing::debug!(
                "Evaluation widget attached: {} criteria, {} listeners",
                widget.tracked_fields().len(),
                page.listener_count()
            ),
            None => tracing::debug!("Page {:?} has no evaluation form", page.title),
        }
        let mut state = AppState::default();
        state.focus_next(&page);
        Self {
            page,
            widget,
            state,
            terminal_size: None,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Text currently held by the total field, when the widget is attached
    pub fn total_text(&self) -> Option<String> {
        self.widget
            .as_ref()
            .and_then(|widget| self.page.value(widget.total_score()))
    }

    fn focused_button(&self) -> Option<ElementHandle> {
        self.state.focus.filter(|el| {
            self.page
                .get(*el)
                .is_some_and(|element| matches!(element.kind, ElementKind::Button(_)))
        })
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Error dialog is modal
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return;
        }

        if let (KeyCode::Enter | KeyCode::Char(' '), Some(button)) =
            (key.code, self.focused_button())
        {
            self.dispatch(PageEvent::Click(button));
            return;
        }

        match key.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::Tab | KeyCode::Down => self.state.focus_next(&self.page),
            KeyCode::BackTab | KeyCode::Up => self.state.focus_prev(&self.page),
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                if let Some(el) = self.state.focus {
                    if self.page.type_char(el, c) {
                        self.dispatch(PageEvent::Input(el));
                    }
                }
            }
            KeyCode::Backspace => {
                if let Some(el) = self.state.focus {
                    if self.page.backspace(el) {
                        self.dispatch(PageEvent::Input(el));
                    }
                }
            }
            _ => {}
        }
    }

    /// Handle a mouse event: left click focuses, and presses buttons
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if self.state.has_errors() {
            return;
        }
        if !matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
            return;
        }
        let (width, height) = self.terminal_size.unwrap_or((80, 24));
        let content = ui::page_content_area(Rect::new(0, 0, width, height));
        let placed = ui::layout_page(&self.page, content);

        if let Some(el) = ui::hit_test(&self.page, &placed, mouse.column, mouse.row) {
            self.state.focus = Some(el);
            if self.focused_button().is_some() {
                self.dispatch(PageEvent::Click(el));
            }
        }
    }

    /// Deliver an event to the widget if it listens for it on the target
    fn dispatch(&mut self, event: PageEvent) {
        if !self.page.is_listening(event.target(), event.kind()) {
            return;
        }
        if let Some(widget) = self.widget.as_mut() {
            widget.handle_event(&mut self.page, event);
        }
        self.state.revalidate_focus(&self.page);
    }
}
