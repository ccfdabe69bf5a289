//! Element value objects for the hosted page

use serde::{Deserialize, Serialize};

/// Handle to an element inside a [`Page`](super::Page), in insertion order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementHandle(pub(crate) usize);

/// How a container is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Display {
    /// Not rendered, takes no space
    None,
    /// Children stacked vertically
    #[default]
    Block,
    /// Children laid out in two columns
    Grid,
}

impl Display {
    pub fn is_rendered(self) -> bool {
        !matches!(self, Display::None)
    }
}

/// Icon glyph shown in front of a button label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    #[default]
    None,
    Edit,
    EyeSlash,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::None => "",
            Icon::Edit => "✎",
            Icon::EyeSlash => "◌",
        }
    }
}

/// Content of a button: an optional icon followed by a label
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ButtonContent {
    #[serde(default)]
    pub icon: Icon,
    pub label: String,
}

impl ButtonContent {
    pub fn new(icon: Icon, label: &str) -> Self {
        Self {
            icon,
            label: label.to_string(),
        }
    }

    /// Text used when rendering the button
    pub fn display_text(&self) -> String {
        match self.icon {
            Icon::None => self.label.clone(),
            icon => format!("{} {}", icon.glyph(), self.label),
        }
    }
}

/// Editable text input
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Input {
    pub name: Option<String>,
    pub label: Option<String>,
    pub value: String,
    pub readonly: bool,
}

impl Input {
    /// Label shown on the input box, falling back to the name attribute
    pub fn display_label(&self) -> &str {
        self.label
            .as_deref()
            .or(self.name.as_deref())
            .unwrap_or_default()
    }

    /// Push a character to the value
    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
    }

    /// Remove the last character, returning whether the value changed
    pub fn pop_char(&mut self) -> bool {
        self.value.pop().is_some()
    }
}

/// Kind-specific element data
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementKind {
    Button(ButtonContent),
    Container(Display),
    Form,
    Input(Input),
}

/// Event kinds an element can be listened to for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    Input,
}

/// Event delivered by the host to the attached widget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageEvent {
    Click(ElementHandle),
    Input(ElementHandle),
}

impl PageEvent {
    pub fn target(self) -> ElementHandle {
        match self {
            PageEvent::Click(el) | PageEvent::Input(el) => el,
        }
    }

    pub fn kind(self) -> EventKind {
        match self {
            PageEvent::Click(_) => EventKind::Click,
            PageEvent::Input(_) => EventKind::Input,
        }
    }
}

/// A node in the page arena
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub id: Option<String>,
    pub kind: ElementKind,
    pub parent: Option<ElementHandle>,
    pub children: Vec<ElementHandle>,
}

impl Element {
    pub fn as_input(&self) -> Option<&Input> {
        match &self.kind {
            ElementKind::Input(input) => Some(input),
            _ => None,
        }
    }

    pub fn as_input_mut(&mut self) -> Option<&mut Input> {
        match &mut self.kind {
            ElementKind::Input(input) => Some(input),
            _ => None,
        }
    }

    /// Display of the element itself; only containers can be hidden
    pub fn display(&self) -> Display {
        match self.kind {
            ElementKind::Container(display) => display,
            _ => Display::Block,
        }
    }

    /// Buttons and writable inputs take keyboard focus
    pub fn is_focusable(&self) -> bool {
        match &self.kind {
            ElementKind::Button(_) => true,
            ElementKind::Input(input) => !input.readonly,
            _ => false,
        }
    }
}
