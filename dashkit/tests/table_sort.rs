use dashkit::EngineConfig;
use dashkit::table::adapter::{read_table, sort_by_header};
use dashkit::table::{Row, SortDirection, sort_order};
use pagedom::{Document, Element};

fn scores_table(rows: &[(&str, &str, &str)]) -> Document {
    Document::new([Element::table().id("scores").children([
        Element::thead().child(Element::tr().id("head").children([
            Element::th("Name").id("h-name").class("sortable"),
            Element::th("Score").id("h-score").class("sortable"),
        ])),
        Element::tbody().id("scores-body").children(rows.iter().map(|(id, name, score)| {
            Element::tr()
                .id(*id)
                .children([Element::td(*name), Element::td(*score)])
        })),
    ])])
}

fn body_names(doc: &Document) -> Vec<String> {
    read_table(doc, "scores")
        .unwrap()
        .body()
        .iter()
        .map(|row| row.cell(0).to_string())
        .collect()
}

fn body_ids(doc: &Document) -> Vec<String> {
    read_table(doc, "scores")
        .unwrap()
        .body()
        .iter()
        .map(|row| row.id.clone())
        .collect()
}

// ============================================================================
// Pure ordering
// ============================================================================

#[test]
fn test_sort_order_ascending_and_descending() {
    let rows = vec![
        Row::new("a", ["Cat"]),
        Row::new("b", ["amy"]),
        Row::new("c", ["Bob"]),
    ];
    assert_eq!(sort_order(&rows, 0, SortDirection::Ascending), vec![1, 2, 0]);
    assert_eq!(sort_order(&rows, 0, SortDirection::Descending), vec![0, 2, 1]);
}

#[test]
fn test_sort_order_trims_and_treats_missing_as_empty() {
    let rows = vec![
        Row::new("a", ["x", "  beta "]),
        Row::new("b", ["y"]),
        Row::new("c", ["z", "alpha"]),
    ];
    // Row "b" has no second cell and sorts first.
    assert_eq!(sort_order(&rows, 1, SortDirection::Ascending), vec![1, 2, 0]);
}

#[test]
fn test_sort_order_is_stable_on_ties() {
    let rows = vec![
        Row::new("a", ["same", "1"]),
        Row::new("b", ["other", "2"]),
        Row::new("c", ["same", "3"]),
    ];
    assert_eq!(sort_order(&rows, 0, SortDirection::Ascending), vec![1, 0, 2]);
    assert_eq!(sort_order(&rows, 0, SortDirection::Descending), vec![0, 2, 1]);
}

#[test]
fn test_descending_reverses_ascending_without_ties() {
    let rows: Vec<Row> = ["delta", "Alpha", "charlie", "bravo", "echo"]
        .iter()
        .enumerate()
        .map(|(i, name)| Row::new(i.to_string(), [*name]))
        .collect();
    let mut asc = sort_order(&rows, 0, SortDirection::Ascending);
    let desc = sort_order(&rows, 0, SortDirection::Descending);
    asc.reverse();
    assert_eq!(asc, desc);
}

#[test]
fn test_sort_order_groups_accented_names_with_base_letter() {
    let rows = vec![
        Row::new("a", ["Zoe"]),
        Row::new("b", ["Émile"]),
        Row::new("c", ["Eve"]),
    ];
    let order = sort_order(&rows, 0, SortDirection::Ascending);
    let names: Vec<&str> = order.iter().map(|&i| rows[i].cell(0)).collect();
    assert_eq!(names, vec!["Émile", "Eve", "Zoe"]);
}

#[test]
fn test_sort_order_empty() {
    assert!(sort_order(&[], 0, SortDirection::Ascending).is_empty());
}

// ============================================================================
// Header clicks on a document
// ============================================================================

#[test]
fn test_scenario_sort_by_name() {
    let mut doc = scores_table(&[("r-bob", "Bob", "10"), ("r-amy", "Amy", "2")]);
    let config = EngineConfig::default();

    let outcome = sort_by_header(&mut doc, "h-name", &config).unwrap();
    assert_eq!(outcome.column, 0);
    assert_eq!(outcome.direction, SortDirection::Ascending);
    assert_eq!(outcome.table_id, "scores");

    let snapshot = read_table(&doc, "scores").unwrap();
    let cells: Vec<Vec<String>> = snapshot.body().iter().map(|r| r.cells.clone()).collect();
    assert_eq!(cells, vec![vec!["Amy", "2"], vec!["Bob", "10"]]);
}

#[test]
fn test_second_click_sorts_descending() {
    let mut doc = scores_table(&[
        ("r1", "Bob", "1"),
        ("r2", "Amy", "2"),
        ("r3", "Cat", "3"),
    ]);
    let config = EngineConfig::default();

    sort_by_header(&mut doc, "h-name", &config);
    assert_eq!(body_names(&doc), vec!["Amy", "Bob", "Cat"]);

    let outcome = sort_by_header(&mut doc, "h-name", &config).unwrap();
    assert_eq!(outcome.direction, SortDirection::Descending);
    assert_eq!(body_names(&doc), vec!["Cat", "Bob", "Amy"]);

    let header = doc.get("h-name").unwrap();
    assert!(header.has_class("th-sort-desc"));
    assert!(!header.has_class("th-sort-asc"));

    // Third click goes back to ascending.
    sort_by_header(&mut doc, "h-name", &config);
    assert_eq!(body_names(&doc), vec!["Amy", "Bob", "Cat"]);
}

#[test]
fn test_ascending_is_idempotent() {
    let mut doc = scores_table(&[
        ("r1", "Bob", "1"),
        ("r2", "Amy", "2"),
        ("r3", "Cat", "3"),
    ]);
    let config = EngineConfig::default();

    sort_by_header(&mut doc, "h-name", &config);
    let once = body_ids(&doc);

    // Clear the flag so the next click is ascending again.
    doc.remove_class("h-name", "th-sort-asc");
    sort_by_header(&mut doc, "h-name", &config);
    assert_eq!(body_ids(&doc), once);
}

#[test]
fn test_only_one_header_flagged() {
    let mut doc = scores_table(&[("r1", "Bob", "1"), ("r2", "Amy", "2")]);
    let config = EngineConfig::default();

    sort_by_header(&mut doc, "h-name", &config);
    sort_by_header(&mut doc, "h-score", &config);

    let name = doc.get("h-name").unwrap();
    let score = doc.get("h-score").unwrap();
    assert!(!name.has_class("th-sort-asc") && !name.has_class("th-sort-desc"));
    assert!(score.has_class("th-sort-asc"));
    assert!(score.has_class("sortable"));
}

#[test]
fn test_score_sorts_as_text() {
    let mut doc = scores_table(&[("r1", "Bob", "10"), ("r2", "Amy", "2")]);
    sort_by_header(&mut doc, "h-score", &EngineConfig::default());
    // "10" < "2" under string collation.
    assert_eq!(body_names(&doc), vec!["Bob", "Amy"]);
}

#[test]
fn test_sort_moves_rows_not_content() {
    let mut doc = scores_table(&[("r1", "Bob", "1"), ("r2", "Amy", "2")]);
    let before = doc.get("r2").unwrap().clone();
    sort_by_header(&mut doc, "h-name", &EngineConfig::default());
    assert_eq!(doc.get("r2").unwrap(), &before);
    assert_eq!(body_ids(&doc), vec!["r2", "r1"]);
}

#[test]
fn test_hidden_rows_participate() {
    let mut doc = scores_table(&[("r1", "Bob", "1"), ("r2", "Amy", "2")]);
    doc.set_display("r2", pagedom::Display::None);
    sort_by_header(&mut doc, "h-name", &EngineConfig::default());
    assert_eq!(body_ids(&doc), vec!["r2", "r1"]);
    assert!(doc.get("r2").unwrap().is_hidden());
}

#[test]
fn test_non_row_children_keep_their_slots() {
    let mut doc = Document::new([Element::table().id("t").children([
        Element::thead().child(Element::tr().child(Element::th("Name").id("h").class("sortable"))),
        Element::tbody().id("b").children([
            Element::text("\n"),
            Element::tr().id("r1").child(Element::td("b")),
            Element::text("\n"),
            Element::tr().id("r2").child(Element::td("a")),
        ]),
    ])]);
    sort_by_header(&mut doc, "h", &EngineConfig::default());

    let children: Vec<&str> = doc
        .get("b")
        .unwrap()
        .child_elements()
        .iter()
        .map(|c| c.tag.as_str())
        .collect();
    assert_eq!(children, vec!["#text", "tr", "#text", "tr"]);
    let rows: Vec<&str> = doc
        .get("b")
        .unwrap()
        .children_by_tag("tr")
        .map(|r| r.id.as_str())
        .collect();
    assert_eq!(rows, vec!["r2", "r1"]);
}

#[test]
fn test_table_without_body_only_flags_header() {
    let mut doc = Document::new([Element::table().id("t").child(
        Element::thead().child(Element::tr().child(Element::th("Name").id("h").class("sortable"))),
    )]);
    let outcome = sort_by_header(&mut doc, "h", &EngineConfig::default()).unwrap();
    assert!(outcome.order.is_empty());
    assert!(doc.get("h").unwrap().has_class("th-sort-asc"));
}

#[test]
fn test_header_outside_table_is_noop() {
    let mut doc = Document::new([Element::tr().child(Element::th("Loose").id("h").class("sortable"))]);
    assert!(sort_by_header(&mut doc, "h", &EngineConfig::default()).is_none());
    assert!(sort_by_header(&mut doc, "missing", &EngineConfig::default()).is_none());
}
