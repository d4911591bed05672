use super::item::Row;
use super::state::SortDirection;
use crate::collate::LocaleCollator;

/// Order in which `rows` should appear when sorted on `column`.
///
/// Returns a permutation: position `i` holds the index into `rows` of the
/// row that goes `i`-th. Cell text is trimmed before comparing and rows
/// lacking the column compare as empty text. The sort is stable, so rows
/// with equal keys keep their relative order in both directions.
pub fn sort_order(rows: &[Row], column: usize, direction: SortDirection) -> Vec<usize> {
    let keys: Vec<&str> = rows.iter().map(|row| row.sort_key(column)).collect();
    let collator = LocaleCollator::root();
    let mut order: Vec<usize> = (0..rows.len()).collect();
    order.sort_by(|&a, &b| direction.apply(collator.compare(keys[a], keys[b])));
    order
}
