//! Highlighting the navigation link for the current page.

use log::debug;
use pagedom::Document;
use pagedom::element::collect_by_class;

/// Class of the navigation bar containers.
pub const NAV_CONTAINER_CLASS: &str = "navbar-nav";
/// Class of the links inside them.
pub const NAV_LINK_CLASS: &str = "nav-link";
/// Class added to the link(s) matching the current page.
pub const ACTIVE_CLASS: &str = "active";

/// Whether a link to `href` should be highlighted on `current_path`.
///
/// The root link matches only the root path; any other link matches every
/// path that contains it.
pub fn is_active_href(href: &str, current_path: &str) -> bool {
    if href.is_empty() {
        return false;
    }
    if href == "/" {
        current_path == "/"
    } else {
        current_path.contains(href)
    }
}

/// Mark the nav links matching `current_path` as active.
///
/// Existing `active` classes are left alone. Returns the IDs of the links
/// that match, in document order.
pub fn set_active_nav_item(doc: &mut Document, current_path: &str) -> Vec<String> {
    let mut matched: Vec<String> = Vec::new();
    for container in doc.query_class(NAV_CONTAINER_CLASS) {
        for link in collect_by_class(container, NAV_LINK_CLASS) {
            let href = link.get_attr("href").unwrap_or_default();
            if is_active_href(href, current_path) && !matched.contains(&link.id) {
                matched.push(link.id.clone());
            }
        }
    }

    for id in &matched {
        doc.add_class(id, ACTIVE_CLASS);
    }
    debug!("active nav links for {}: {:?}", current_path, matched);
    matched
}
