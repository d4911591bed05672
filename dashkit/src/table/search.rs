use super::item::Row;

/// Whether any cell of `row` contains `query`, ignoring case.
///
/// `query` must already be lowercased.
pub fn row_matches(row: &Row, query: &str) -> bool {
    query.is_empty() || row.cells.iter().any(|cell| cell.to_lowercase().contains(query))
}

/// Visibility of each row under a search query.
///
/// The result is parallel to `rows`. An empty query shows every row.
pub fn row_visibility(rows: &[Row], query: &str) -> Vec<bool> {
    let query = query.to_lowercase();
    rows.iter().map(|row| row_matches(row, &query)).collect()
}
