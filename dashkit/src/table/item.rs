//! Row and section types read out of a `<table>` element.

use pagedom::Element;

/// One table row: the element it came from and the text of its cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// ID of the `<tr>` element.
    pub id: String,
    /// Text content of each `th`/`td` cell, left to right, untrimmed.
    pub cells: Vec<String>,
    /// Whether the row is currently hidden.
    pub hidden: bool,
}

impl Row {
    /// Build a detached row, mostly useful for exercising the pure functions.
    pub fn new(id: impl Into<String>, cells: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            id: id.into(),
            cells: cells.into_iter().map(Into::into).collect(),
            hidden: false,
        }
    }

    /// Read a `<tr>` element.
    pub fn read(tr: &Element) -> Self {
        Self {
            id: tr.id.clone(),
            cells: tr.cells().map(Element::text_content).collect(),
            hidden: tr.is_hidden(),
        }
    }

    /// Text of the cell at `column`, or "" when the row is too short.
    pub fn cell(&self, column: usize) -> &str {
        self.cells.get(column).map(String::as_str).unwrap_or_default()
    }

    /// The trimmed cell text a sort compares.
    pub fn sort_key(&self, column: usize) -> &str {
        self.cell(column).trim()
    }
}

/// Which row group a section came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Head,
    Body,
    Foot,
    /// `<tr>` elements placed directly under `<table>`.
    Bare,
}

impl SectionKind {
    fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "thead" => Some(SectionKind::Head),
            "tbody" => Some(SectionKind::Body),
            "tfoot" => Some(SectionKind::Foot),
            _ => None,
        }
    }
}

/// A row group and its rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub kind: SectionKind,
    /// ID of the section element (the table's own ID for bare rows).
    pub id: String,
    pub rows: Vec<Row>,
    /// Child index of each row within the section element, parallel to `rows`.
    pub positions: Vec<usize>,
}

/// A point-in-time read of a table's rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSnapshot {
    /// ID of the `<table>` element.
    pub id: String,
    /// Row groups in document order.
    pub sections: Vec<Section>,
}

impl TableSnapshot {
    /// Read a `<table>` element.
    pub fn read(table: &Element) -> Self {
        let mut sections: Vec<Section> = Vec::new();

        for (index, child) in table.child_elements().iter().enumerate() {
            if let Some(kind) = SectionKind::from_tag(&child.tag) {
                let mut section = Section {
                    kind,
                    id: child.id.clone(),
                    rows: Vec::new(),
                    positions: Vec::new(),
                };
                for (pos, tr) in child.child_elements().iter().enumerate() {
                    if tr.is_tag("tr") {
                        section.rows.push(Row::read(tr));
                        section.positions.push(pos);
                    }
                }
                sections.push(section);
            } else if child.is_tag("tr") {
                // Consecutive bare rows share one section.
                match sections.last_mut() {
                    Some(last) if last.kind == SectionKind::Bare => {
                        last.rows.push(Row::read(child));
                        last.positions.push(index);
                    }
                    _ => sections.push(Section {
                        kind: SectionKind::Bare,
                        id: table.id.clone(),
                        rows: vec![Row::read(child)],
                        positions: vec![index],
                    }),
                }
            }
        }

        Self {
            id: table.id.clone(),
            sections,
        }
    }

    /// The section sorting and filtering act on: the first `<tbody>`.
    pub fn body_section(&self) -> Option<&Section> {
        self.sections.iter().find(|s| s.kind == SectionKind::Body)
    }

    /// Body rows, or an empty slice when the table has no `<tbody>`.
    pub fn body(&self) -> &[Row] {
        self.body_section().map(|s| s.rows.as_slice()).unwrap_or_default()
    }

    /// Header rows from every `<thead>`.
    pub fn header(&self) -> Vec<&Row> {
        self.sections
            .iter()
            .filter(|s| s.kind == SectionKind::Head)
            .flat_map(|s| s.rows.iter())
            .collect()
    }

    /// Every row of the table, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &Row> {
        self.sections.iter().flat_map(|s| s.rows.iter())
    }

    pub fn row_count(&self) -> usize {
        self.sections.iter().map(|s| s.rows.len()).sum()
    }
}
