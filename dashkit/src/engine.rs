//! Binding the table behaviors to a page.
//!
//! [`init`] scans a document once for the configured markers and returns a
//! [`TableEngine`] that knows which elements it is responsible for. The
//! engine then reacts to [`Event`]s aimed at those elements.

use std::collections::{HashMap, HashSet};

use log::{debug, trace, warn};
use pagedom::{Document, Event};

use crate::config::EngineConfig;
use crate::events::{EventResult, PageBehavior};
use crate::export::{Download, DownloadError, DownloadSink, MemorySink, export_table};
use crate::table::adapter::{SortOutcome, filter_table, sort_by_header};

/// An element that exports a table when clicked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportTrigger {
    pub table_id: String,
    pub file_name: Option<String>,
}

/// Table behaviors bound to one page.
pub struct TableEngine {
    config: EngineConfig,
    /// IDs of header cells carrying the sortable marker.
    sortable_headers: HashSet<String>,
    /// Search input ID -> target table ID.
    search_inputs: HashMap<String, String>,
    /// Export trigger ID -> what to export.
    export_triggers: HashMap<String, ExportTrigger>,
    sink: Box<dyn DownloadSink>,
}

impl std::fmt::Debug for TableEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TableEngine")
            .field("config", &self.config)
            .field("sortable_headers", &self.sortable_headers)
            .field("search_inputs", &self.search_inputs)
            .field("export_triggers", &self.export_triggers)
            .finish_non_exhaustive()
    }
}

/// Bind the table behaviors to the markers present in `doc`.
///
/// Call once after the page is built. Elements added later are not bound.
/// Downloads go to an in-memory sink until [`TableEngine::with_sink`]
/// replaces it.
pub fn init(doc: &Document, config: EngineConfig) -> TableEngine {
    let sortable_headers: HashSet<String> = doc
        .query_class(&config.sortable_class)
        .into_iter()
        .filter(|el| el.is_tag("th"))
        .map(|el| el.id.clone())
        .collect();

    let mut search_inputs = HashMap::new();
    for input in doc.query_class(&config.search_class) {
        match input.get_attr(&config.table_id_attr) {
            Some(table_id) => {
                search_inputs.insert(input.id.clone(), table_id.to_string());
            }
            None => warn!(
                "search input {} has no {} attribute",
                input.id, config.table_id_attr
            ),
        }
    }

    let mut export_triggers = HashMap::new();
    for trigger in doc.query_class(&config.export_class) {
        match trigger.get_attr(&config.table_id_attr) {
            Some(table_id) => {
                export_triggers.insert(
                    trigger.id.clone(),
                    ExportTrigger {
                        table_id: table_id.to_string(),
                        file_name: trigger.get_attr(&config.file_name_attr).map(str::to_string),
                    },
                );
            }
            None => warn!(
                "export trigger {} has no {} attribute",
                trigger.id, config.table_id_attr
            ),
        }
    }

    debug!(
        "table engine bound {} sortable headers, {} search inputs, {} export triggers",
        sortable_headers.len(),
        search_inputs.len(),
        export_triggers.len()
    );

    TableEngine {
        config,
        sortable_headers,
        search_inputs,
        export_triggers,
        sink: Box::new(MemorySink::new()),
    }
}

impl TableEngine {
    /// Send downloads to `sink` instead.
    pub fn with_sink(mut self, sink: impl DownloadSink + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn is_sortable(&self, header_id: &str) -> bool {
        self.sortable_headers.contains(header_id)
    }

    /// Table a search input filters, if it is bound.
    pub fn search_target(&self, input_id: &str) -> Option<&str> {
        self.search_inputs.get(input_id).map(String::as_str)
    }

    pub fn export_trigger(&self, trigger_id: &str) -> Option<&ExportTrigger> {
        self.export_triggers.get(trigger_id)
    }

    /// Handle a click on a sortable header cell.
    pub fn on_header_click(&self, doc: &mut Document, header_id: &str) -> Option<SortOutcome> {
        if !self.is_sortable(header_id) {
            return None;
        }
        sort_by_header(doc, header_id, &self.config)
    }

    /// Handle a new value in a bound search input.
    ///
    /// Stores the value on the input and filters its table. Returns the
    /// number of rows left visible, or `None` when the input is not bound
    /// or its table is missing.
    pub fn on_search_input(&self, doc: &mut Document, input_id: &str, value: &str) -> Option<usize> {
        let table_id = self.search_target(input_id)?;
        doc.set_attr(input_id, "value", value);
        filter_table(doc, table_id, value)
    }

    /// Export the table `table_id` as CSV to the engine's sink.
    ///
    /// `file_name` defaults to the configured name (`export.csv`). A
    /// missing table yields `Ok(None)` and produces no file.
    pub fn export_table_to_csv(
        &mut self,
        doc: &mut Document,
        table_id: &str,
        file_name: Option<&str>,
    ) -> Result<Option<Download>, DownloadError> {
        let file_name = file_name.unwrap_or(&self.config.default_file_name);
        export_table(doc, table_id, file_name, self.sink.as_mut())
    }
}

impl PageBehavior for TableEngine {
    fn handle(&mut self, doc: &mut Document, event: &Event) -> EventResult {
        match event {
            Event::Click { target } if self.is_sortable(target) => {
                self.on_header_click(doc, target);
                EventResult::Consumed
            }
            Event::Click { target } => {
                let Some(trigger) = self.export_triggers.get(target).cloned() else {
                    return EventResult::Ignored;
                };
                if let Err(e) =
                    self.export_table_to_csv(doc, &trigger.table_id, trigger.file_name.as_deref())
                {
                    warn!("export trigger {} failed: {}", target, e);
                }
                EventResult::Consumed
            }
            Event::Input { target, value } => {
                if self.search_target(target).is_none() {
                    return EventResult::Ignored;
                }
                trace!("search input {} = {:?}", target, value);
                self.on_search_input(doc, target, value);
                EventResult::Consumed
            }
        }
    }
}
