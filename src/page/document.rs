//! Trait abstraction over the hosted page to enable mocking in tests

use super::element::{ButtonContent, Display, ElementHandle, EventKind};

/// Operations a widget may perform against the page it is embedded in
#[cfg_attr(test, mockall::automock)]
pub trait Document {
    /// First element in document order carrying `id`
    fn element_by_id(&self, id: &str) -> Option<ElementHandle>;

    /// First input below `scope` whose name attribute equals `name`
    fn query_by_name(&self, scope: ElementHandle, name: &str) -> Option<ElementHandle>;

    /// Current text of an input (None for other elements)
    fn value(&self, el: ElementHandle) -> Option<String>;

    /// Replace the text of an input
    fn set_value(&mut self, el: ElementHandle, value: &str);

    /// Change how a container is rendered
    fn set_display(&mut self, el: ElementHandle, display: Display);

    /// Replace the icon and label of a button
    fn set_button_content(&mut self, el: ElementHandle, content: ButtonContent);

    /// Register interest in events of `kind` on `el`
    fn add_listener(&mut self, el: ElementHandle, kind: EventKind);
}
