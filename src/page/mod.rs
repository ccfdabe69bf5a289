//! Hosted page module: the element tree a widget is embedded in

mod arena;
mod document;
mod element;
mod loader;

pub use arena::Page;
pub use document::Document;
pub use element::{
    ButtonContent, Display, ElementHandle, ElementKind, EventKind, Icon, Input, PageEvent,
};
pub use loader::load_page;

#[cfg(test)]
pub use document::MockDocument;
