use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use super::Content;
use crate::types::Display;

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

/// Tag name used for bare text nodes.
pub const TEXT_TAG: &str = "#text";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    // Identity
    pub id: String,
    pub tag: String,

    // Content
    pub content: Content,

    // Selectors
    /// Class list in document order. Marker classes live here too.
    pub classes: Vec<String>,
    /// Every attribute other than `id` and `class` (`href`, `data-*`, `value`, ...).
    pub attributes: HashMap<String, String>,

    // Presentation
    pub display: Display,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            tag: "div".to_string(),
            content: Content::None,
            classes: Vec::new(),
            attributes: HashMap::new(),
            display: Display::Default,
        }
    }
}

impl Element {
    /// Create an element with the given tag name.
    pub fn new(tag: impl Into<String>) -> Self {
        let tag = tag.into().to_ascii_lowercase();
        Self {
            id: generate_id(&tag),
            tag,
            ..Default::default()
        }
    }

    /// A bare text node.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            id: generate_id("text"),
            tag: TEXT_TAG.to_string(),
            content: Content::Text(content.into()),
            ..Default::default()
        }
    }

    pub fn div() -> Self {
        Self::new("div")
    }

    pub fn table() -> Self {
        Self::new("table")
    }

    pub fn thead() -> Self {
        Self::new("thead")
    }

    pub fn tbody() -> Self {
        Self::new("tbody")
    }

    pub fn tfoot() -> Self {
        Self::new("tfoot")
    }

    pub fn tr() -> Self {
        Self::new("tr")
    }

    /// Header cell holding `text`.
    pub fn th(text: impl Into<String>) -> Self {
        Self::new("th").child(Element::text(text))
    }

    /// Data cell holding `text`.
    pub fn td(text: impl Into<String>) -> Self {
        Self::new("td").child(Element::text(text))
    }

    /// Text input with an initial value.
    pub fn input(value: impl Into<String>) -> Self {
        Self::new("input").attr("type", "text").attr("value", value)
    }

    pub fn link(href: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new("a").attr("href", href).child(Element::text(label))
    }

    pub fn button(label: impl Into<String>) -> Self {
        Self::new("button").child(Element::text(label))
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn is_text(&self) -> bool {
        self.tag == TEXT_TAG
    }

    pub fn is_tag(&self, tag: &str) -> bool {
        self.tag.eq_ignore_ascii_case(tag)
    }

    // Classes
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.add_class(class);
        self
    }

    /// Add every whitespace-separated class in `list`.
    pub fn class_list(mut self, list: &str) -> Self {
        for class in list.split_whitespace() {
            self.add_class(class);
        }
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Returns true if the class was not present before.
    pub fn add_class(&mut self, class: impl Into<String>) -> bool {
        let class = class.into();
        if self.has_class(&class) {
            return false;
        }
        self.classes.push(class);
        true
    }

    /// Returns true if the class was present.
    pub fn remove_class(&mut self, class: &str) -> bool {
        let before = self.classes.len();
        self.classes.retain(|c| c != class);
        before != self.classes.len()
    }

    /// Add or remove `class` so that its presence matches `on`.
    pub fn toggle_class(&mut self, class: &str, on: bool) {
        if on {
            self.add_class(class);
        } else {
            self.remove_class(class);
        }
    }

    // Attributes
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    pub fn set_attr(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(key.into(), value.into());
    }

    /// Current value of a form control (the `value` attribute).
    pub fn value(&self) -> &str {
        self.get_attr("value").unwrap_or_default()
    }

    // Presentation
    pub fn hidden(mut self, hidden: bool) -> Self {
        self.display = if hidden { Display::None } else { Display::Default };
        self
    }

    pub fn is_hidden(&self) -> bool {
        self.display.is_hidden()
    }

    // Text
    /// Concatenated text of this element and all of its descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match &self.content {
            Content::Text(text) => out.push_str(text),
            Content::Children(children) => {
                for child in children {
                    child.collect_text(out);
                }
            }
            Content::None => {}
        }
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        self.push_child(child);
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            _ => self.content = Content::Children(new_children.into_iter().collect()),
        }
        self
    }

    pub fn push_child(&mut self, child: Element) {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            Content::None => self.content = Content::Children(vec![child]),
            Content::Text(text) => {
                // Keep the existing text as a leading text node.
                let text = Element::text(std::mem::take(text));
                self.content = Content::Children(vec![text, child]);
            }
        }
    }

    pub fn child_elements(&self) -> &[Element] {
        self.content.children()
    }

    /// Direct children with the given tag, in document order.
    pub fn children_by_tag<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.child_elements().iter().filter(move |c| c.is_tag(tag))
    }

    /// Direct children that are `th` or `td` cells.
    pub fn cells(&self) -> impl Iterator<Item = &Element> {
        self.child_elements()
            .iter()
            .filter(|c| c.is_tag("th") || c.is_tag("td"))
    }
}
