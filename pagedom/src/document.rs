//! The live page: a `<body>` element tree plus the mutations the page
//! behaviors need.
//!
//! Every mutation addresses elements by ID and reports whether it found
//! its target. Callers that treat a missing element as a no-op can simply
//! ignore the return value.

use log::trace;

use crate::element::{
    ancestry, closest, collect_by_class, collect_by_tag, find_element, find_element_mut, Content,
    Element,
};
use crate::types::Display;

/// ID given to the root `<body>` element.
pub const BODY_ID: &str = "body";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    body: Element,
}

impl Default for Document {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl Document {
    /// Create a document whose body holds `children`.
    pub fn new(children: impl IntoIterator<Item = Element>) -> Self {
        Self {
            body: Element::new("body").id(BODY_ID).children(children),
        }
    }

    /// Wrap an existing root element. Its ID becomes the body ID for
    /// [`Document::append_to_body`].
    pub fn from_root(body: Element) -> Self {
        Self { body }
    }

    pub fn body(&self) -> &Element {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut Element {
        &mut self.body
    }

    // -------------------------------------------------------------------------
    // Lookup
    // -------------------------------------------------------------------------

    pub fn get(&self, id: &str) -> Option<&Element> {
        find_element(&self.body, id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Element> {
        find_element_mut(&mut self.body, id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Every element carrying `class`, in document order.
    pub fn query_class(&self, class: &str) -> Vec<&Element> {
        collect_by_class(&self.body, class)
    }

    /// Every element with `tag`, in document order.
    pub fn query_tag(&self, tag: &str) -> Vec<&Element> {
        collect_by_tag(&self.body, tag)
    }

    /// Nearest element with `tag` at or above the element `id`.
    pub fn closest(&self, id: &str, tag: &str) -> Option<&Element> {
        closest(&self.body, id, tag)
    }

    /// IDs of the ancestors of `id`, root first, excluding `id` itself.
    pub fn ancestors(&self, id: &str) -> Vec<String> {
        let mut path = ancestry(&self.body, id).unwrap_or_default();
        path.pop();
        path
    }

    /// ID of the direct parent of `id`.
    pub fn parent_id(&self, id: &str) -> Option<String> {
        self.ancestors(id).pop()
    }

    // -------------------------------------------------------------------------
    // Mutation
    // -------------------------------------------------------------------------

    /// Append `child` to the element `parent_id`.
    pub fn append(&mut self, parent_id: &str, child: Element) -> bool {
        match self.get_mut(parent_id) {
            Some(parent) => {
                trace!("append {} to {}", child.id, parent_id);
                parent.push_child(child);
                true
            }
            None => false,
        }
    }

    pub fn append_to_body(&mut self, child: Element) {
        self.body.push_child(child);
    }

    /// Detach the element `id` from the tree and return it.
    ///
    /// The body itself cannot be removed.
    pub fn remove(&mut self, id: &str) -> Option<Element> {
        let parent_id = self.parent_id(id)?;
        let parent = self.get_mut(&parent_id)?;
        let children = parent.content.children_mut()?;
        let index = children.iter().position(|c| c.id == id)?;
        trace!("remove {} from {}", id, parent_id);
        Some(children.remove(index))
    }

    /// Rearrange the children of `parent_id` so that new position `i` holds
    /// the child previously at `order[i]`.
    ///
    /// `order` must be a permutation of the current child indices; anything
    /// else leaves the element untouched and returns false.
    pub fn reorder_children(&mut self, parent_id: &str, order: &[usize]) -> bool {
        let Some(parent) = self.get_mut(parent_id) else {
            return false;
        };
        let Content::Children(children) = &mut parent.content else {
            return order.is_empty();
        };
        if !is_permutation(order, children.len()) {
            return false;
        }

        let mut slots: Vec<Option<Element>> = children.drain(..).map(Some).collect();
        children.extend(order.iter().filter_map(|&i| slots[i].take()));
        true
    }

    pub fn set_display(&mut self, id: &str, display: Display) -> bool {
        match self.get_mut(id) {
            Some(el) => {
                el.display = display;
                true
            }
            None => false,
        }
    }

    pub fn add_class(&mut self, id: &str, class: &str) -> bool {
        self.get_mut(id).is_some_and(|el| {
            el.add_class(class);
            true
        })
    }

    pub fn remove_class(&mut self, id: &str, class: &str) -> bool {
        self.get_mut(id).is_some_and(|el| el.remove_class(class))
    }

    pub fn set_attr(&mut self, id: &str, key: &str, value: impl Into<String>) -> bool {
        match self.get_mut(id) {
            Some(el) => {
                el.set_attr(key, value);
                true
            }
            None => false,
        }
    }
}

fn is_permutation(order: &[usize], len: usize) -> bool {
    if order.len() != len {
        return false;
    }
    let mut seen = vec![false; len];
    for &i in order {
        if i >= len || seen[i] {
            return false;
        }
        seen[i] = true;
    }
    true
}
