//! Arena-backed page document

use super::document::Document;
use super::element::{
    ButtonContent, Display, Element, ElementHandle, ElementKind, EventKind, Input,
};
use std::collections::HashSet;

/// A page made of elements stored in an arena, with listeners registered on them
#[derive(Debug, Clone, Default)]
pub struct Page {
    pub title: String,
    elements: Vec<Element>,
    roots: Vec<ElementHandle>,
    listeners: HashSet<(ElementHandle, EventKind)>,
}

impl Page {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            ..Default::default()
        }
    }

    /// Append an element under `parent` (or at the top level)
    pub fn push(
        &mut self,
        parent: Option<ElementHandle>,
        id: Option<&str>,
        kind: ElementKind,
    ) -> ElementHandle {
        let handle = ElementHandle(self.elements.len());
        self.elements.push(Element {
            id: id.map(str::to_string),
            kind,
            parent,
            children: Vec::new(),
        });
        match parent.and_then(|p| self.elements.get_mut(p.0)) {
            Some(parent) => parent.children.push(handle),
            None => self.roots.push(handle),
        }
        handle
    }

    pub fn get(&self, el: ElementHandle) -> Option<&Element> {
        self.elements.get(el.0)
    }

    fn get_mut(&mut self, el: ElementHandle) -> Option<&mut Element> {
        self.elements.get_mut(el.0)
    }

    pub fn roots(&self) -> &[ElementHandle] {
        &self.roots
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// All elements in document order (pre-order over the tree)
    pub fn walk(&self) -> Vec<ElementHandle> {
        let mut out = Vec::with_capacity(self.elements.len());
        for root in &self.roots {
            self.collect(*root, &mut out);
        }
        out
    }

    /// Descendants of `scope` in document order, excluding `scope` itself
    pub fn descendants(&self, scope: ElementHandle) -> Vec<ElementHandle> {
        let mut out = Vec::new();
        if let Some(element) = self.get(scope) {
            for child in &element.children {
                self.collect(*child, &mut out);
            }
        }
        out
    }

    fn collect(&self, el: ElementHandle, out: &mut Vec<ElementHandle>) {
        if let Some(element) = self.get(el) {
            out.push(el);
            for child in &element.children {
                self.collect(*child, out);
            }
        }
    }

    /// Current display of an element (containers only; others report block)
    pub fn display(&self, el: ElementHandle) -> Option<Display> {
        self.get(el).map(Element::display)
    }

    /// An element is visible when neither it nor any ancestor has display none
    pub fn is_visible(&self, el: ElementHandle) -> bool {
        let mut current = Some(el);
        while let Some(handle) = current {
            if !self.display(handle).is_some_and(Display::is_rendered) {
                return false;
            }
            current = self.get(handle).and_then(|element| element.parent);
        }
        true
    }

    /// Visible elements that take keyboard focus, in document order
    pub fn focus_order(&self) -> Vec<ElementHandle> {
        self.walk()
            .into_iter()
            .filter(|el| {
                self.get(*el).is_some_and(Element::is_focusable) && self.is_visible(*el)
            })
            .collect()
    }

    pub fn is_listening(&self, el: ElementHandle, kind: EventKind) -> bool {
        self.listeners.contains(&(el, kind))
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn writable_input_mut(&mut self, el: ElementHandle) -> Option<&mut Input> {
        self.get_mut(el)
            .and_then(Element::as_input_mut)
            .filter(|input| !input.readonly)
    }

    /// Append a typed character to a writable input; true when the text changed
    pub fn type_char(&mut self, el: ElementHandle, c: char) -> bool {
        match self.writable_input_mut(el) {
            Some(input) => {
                input.push_char(c);
                true
            }
            None => false,
        }
    }

    /// Delete the last character of a writable input; true when the text changed
    pub fn backspace(&mut self, el: ElementHandle) -> bool {
        self.writable_input_mut(el).is_some_and(Input::pop_char)
    }
}

impl Document for Page {
    fn element_by_id(&self, id: &str) -> Option<ElementHandle> {
        self.walk().into_iter().find(|el| {
            self.get(*el)
                .is_some_and(|element| element.id.as_deref() == Some(id))
        })
    }

    fn query_by_name(&self, scope: ElementHandle, name: &str) -> Option<ElementHandle> {
        self.descendants(scope).into_iter().find(|el| {
            self.get(*el)
                .and_then(Element::as_input)
                .is_some_and(|input| input.name.as_deref() == Some(name))
        })
    }

    fn value(&self, el: ElementHandle) -> Option<String> {
        self.get(el)
            .and_then(Element::as_input)
            .map(|input| input.value.clone())
    }

    fn set_value(&mut self, el: ElementHandle, value: &str) {
        if let Some(input) = self.get_mut(el).and_then(Element::as_input_mut) {
            input.value = value.to_string();
        }
    }

    fn set_display(&mut self, el: ElementHandle, display: Display) {
        if let Some(element) = self.get_mut(el) {
            if let ElementKind::Container(current) = &mut element.kind {
                *current = display;
            }
        }
    }

    fn set_button_content(&mut self, el: ElementHandle, content: ButtonContent) {
        if let Some(element) = self.get_mut(el) {
            if let ElementKind::Button(current) = &mut element.kind {
                *current = content;
            }
        }
    }

    fn add_listener(&mut self, el: ElementHandle, kind: EventKind) {
        if self.get(el).is_some() {
            self.listeners.insert((el, kind));
        }
    }
}
