//! Applies sort and search results to a live document.
//!
//! Every function here looks its targets up fresh and degrades to a no-op
//! (returning `None`) when an element is missing.

use log::debug;
use pagedom::element::collect_by_tag;
use pagedom::{Display, Document};

use super::item::{Section, SectionKind, TableSnapshot};
use super::search::row_visibility;
use super::sort::sort_order;
use super::state::SortDirection;
use crate::config::EngineConfig;

/// What a header click did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortOutcome {
    pub table_id: String,
    pub column: usize,
    pub direction: SortDirection,
    /// Row permutation applied to the body, as returned by [`sort_order`].
    pub order: Vec<usize>,
}

/// Read the element `table_id` as a table.
pub fn read_table(doc: &Document, table_id: &str) -> Option<TableSnapshot> {
    doc.get(table_id).map(TableSnapshot::read)
}

/// Sort the table owning `header_id` on that header's column.
///
/// Toggles the header's direction, clears the sort classes from every
/// header cell of the table, flags the clicked one, and reorders the rows
/// of the first `<tbody>` in place.
pub fn sort_by_header(
    doc: &mut Document,
    header_id: &str,
    config: &EngineConfig,
) -> Option<SortOutcome> {
    let header = doc.get(header_id)?;
    let direction = SortDirection::next(SortDirection::of_header(header, config));

    let row_id = doc.parent_id(header_id)?;
    let column = doc.get(&row_id)?.cells().position(|c| c.id == header_id)?;

    let table = doc.closest(header_id, "table")?;
    let table_id = table.id.clone();
    let header_ids: Vec<String> = collect_by_tag(table, "th")
        .into_iter()
        .map(|th| th.id.clone())
        .collect();
    let snapshot = TableSnapshot::read(table);

    for id in &header_ids {
        if let Some(th) = doc.get_mut(id) {
            th.remove_class(&config.sort_asc_class);
            th.remove_class(&config.sort_desc_class);
        }
    }
    doc.add_class(header_id, direction.class(config));

    let order = match snapshot.body_section() {
        Some(body) => {
            let order = sort_order(&body.rows, column, direction);
            apply_row_order(doc, body, &order);
            order
        }
        None => Vec::new(),
    };

    debug!(
        "sorted table {} on column {} ({:?}, {} rows)",
        table_id,
        column,
        direction,
        order.len()
    );

    Some(SortOutcome {
        table_id,
        column,
        direction,
        order,
    })
}

/// Reorder the rows of `section` so that slot `i` holds row `order[i]`.
///
/// Non-row children of the section element keep their positions.
pub fn apply_row_order(doc: &mut Document, section: &Section, order: &[usize]) -> bool {
    let Some(element) = doc.get(&section.id) else {
        return false;
    };
    if order.len() != section.rows.len() {
        return false;
    }

    let mut child_order: Vec<usize> = (0..element.child_elements().len()).collect();
    for (slot, &row_index) in order.iter().enumerate() {
        let Some(&source) = section.positions.get(row_index) else {
            return false;
        };
        child_order[section.positions[slot]] = source;
    }
    doc.reorder_children(&section.id, &child_order)
}

/// Show only the body rows of `table_id` that contain `query` in some cell.
///
/// Rows directly under every `<tbody>` are filtered; rows of tables nested
/// inside a cell are left alone. Returns the number of rows left
/// visible, or `None` when the table does not exist.
pub fn filter_table(doc: &mut Document, table_id: &str, query: &str) -> Option<usize> {
    let snapshot = read_table(doc, table_id)?;
    let mut visible_count = 0;

    for section in snapshot
        .sections
        .iter()
        .filter(|s| s.kind == SectionKind::Body)
    {
        let visibility = row_visibility(&section.rows, query);
        for (row, visible) in section.rows.iter().zip(visibility) {
            let display = if visible {
                visible_count += 1;
                Display::Default
            } else {
                Display::None
            };
            doc.set_display(&row.id, display);
        }
    }

    debug!(
        "filtered table {} with {:?}: {} visible",
        table_id, query, visible_count
    );
    Some(visible_count)
}
