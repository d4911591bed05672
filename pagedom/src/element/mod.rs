mod content;
mod node;

pub use content::Content;
pub use node::{Element, TEXT_TAG};

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    for child in root.child_elements() {
        if let Some(found) = find_element(child, id) {
            return Some(found);
        }
    }

    None
}

/// Find an element by ID in the tree, mutably.
pub fn find_element_mut<'a>(root: &'a mut Element, id: &str) -> Option<&'a mut Element> {
    if root.id == id {
        return Some(root);
    }

    if let Some(children) = root.content.children_mut() {
        for child in children {
            if let Some(found) = find_element_mut(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// IDs from `root` down to the element with `id`, both inclusive.
///
/// Returns `None` when the element is not in the tree.
pub fn ancestry(root: &Element, id: &str) -> Option<Vec<String>> {
    fn walk(node: &Element, id: &str, path: &mut Vec<String>) -> bool {
        path.push(node.id.clone());
        if node.id == id {
            return true;
        }
        for child in node.child_elements() {
            if walk(child, id, path) {
                return true;
            }
        }
        path.pop();
        false
    }

    let mut path = Vec::new();
    walk(root, id, &mut path).then_some(path)
}

/// Nearest element with `tag`, starting at `id` itself and walking up.
pub fn closest<'a>(root: &'a Element, id: &str, tag: &str) -> Option<&'a Element> {
    let path = ancestry(root, id)?;
    path.iter()
        .rev()
        .filter_map(|ancestor| find_element(root, ancestor))
        .find(|el| el.is_tag(tag))
}

/// Collect every element carrying `class`, in document order.
pub fn collect_by_class<'a>(root: &'a Element, class: &str) -> Vec<&'a Element> {
    let mut out = Vec::new();
    walk_collect(root, &mut out, &|el| el.has_class(class));
    out
}

/// Collect every element with `tag`, in document order.
pub fn collect_by_tag<'a>(root: &'a Element, tag: &str) -> Vec<&'a Element> {
    let mut out = Vec::new();
    walk_collect(root, &mut out, &|el| el.is_tag(tag));
    out
}

fn walk_collect<'a>(node: &'a Element, out: &mut Vec<&'a Element>, pred: &dyn Fn(&Element) -> bool) {
    if pred(node) {
        out.push(node);
    }
    for child in node.child_elements() {
        walk_collect(child, out, pred);
    }
}
