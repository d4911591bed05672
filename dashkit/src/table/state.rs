//! Sort direction and how it is recorded on header cells.

use std::cmp::Ordering;

use pagedom::Element;

use crate::config::EngineConfig;

/// Direction of an active column sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// Direction a click moves to from `current`.
    ///
    /// Unsorted and descending columns become ascending; ascending columns
    /// become descending.
    pub fn next(current: Option<SortDirection>) -> SortDirection {
        match current {
            Some(SortDirection::Ascending) => SortDirection::Descending,
            None | Some(SortDirection::Descending) => SortDirection::Ascending,
        }
    }

    /// Orient a natural-order comparison.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }

    /// Read the direction flag off a header cell.
    ///
    /// A cell carrying both classes counts as ascending, which makes the
    /// next click descending.
    pub fn of_header(header: &Element, config: &EngineConfig) -> Option<SortDirection> {
        if header.has_class(&config.sort_asc_class) {
            Some(SortDirection::Ascending)
        } else if header.has_class(&config.sort_desc_class) {
            Some(SortDirection::Descending)
        } else {
            None
        }
    }

    /// The header class that reflects this direction.
    pub fn class<'a>(&self, config: &'a EngineConfig) -> &'a str {
        match self {
            SortDirection::Ascending => &config.sort_asc_class,
            SortDirection::Descending => &config.sort_desc_class,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_cycles() {
        assert_eq!(SortDirection::next(None), SortDirection::Ascending);
        assert_eq!(
            SortDirection::next(Some(SortDirection::Ascending)),
            SortDirection::Descending
        );
        assert_eq!(
            SortDirection::next(Some(SortDirection::Descending)),
            SortDirection::Ascending
        );
    }

    #[test]
    fn test_of_header_reads_classes() {
        let config = EngineConfig::default();
        let th = Element::th("Name").class("sortable");
        assert_eq!(SortDirection::of_header(&th, &config), None);

        let th = th.class("th-sort-desc");
        assert_eq!(
            SortDirection::of_header(&th, &config),
            Some(SortDirection::Descending)
        );
    }
}
