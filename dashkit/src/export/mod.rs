//! CSV export of a table as a client-side download.

mod sink;

pub use sink::{DirectorySink, DownloadError, DownloadSink, MemorySink, sanitize_file_name};

use log::{debug, warn};
use pagedom::{Document, Element};
use uuid::Uuid;

use crate::table::TableSnapshot;

/// MIME type attached to exported files.
pub const CSV_MIME_TYPE: &str = "text/csv;charset=utf-8;";

/// A file ready to hand to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    pub file_name: String,
    pub mime_type: String,
    pub contents: String,
}

impl Download {
    pub fn csv(file_name: impl Into<String>, contents: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: CSV_MIME_TYPE.to_string(),
            contents: contents.into(),
        }
    }
}

/// Quote one CSV field.
///
/// Line breaks (`\r\n`, `\n`, `\r`) each become a single space, embedded
/// quotes are doubled, and the result is always wrapped in quotes.
pub fn escape_field(text: &str) -> String {
    let flattened = text.replace("\r\n", " ").replace(['\n', '\r'], " ");
    format!("\"{}\"", flattened.replace('"', "\"\""))
}

/// Render rows of cell text as CSV: fields joined by `,`, rows by `\n`.
pub fn rows_to_csv<R: AsRef<[String]>>(rows: &[R]) -> String {
    rows.iter()
        .map(|row| {
            row.as_ref()
                .iter()
                .map(|cell| escape_field(cell))
                .collect::<Vec<_>>()
                .join(",")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// CSV text for every row of a table snapshot, top to bottom.
pub fn table_to_csv(snapshot: &TableSnapshot) -> String {
    let rows: Vec<&[String]> = snapshot.rows().map(|row| row.cells.as_slice()).collect();
    rows_to_csv(&rows)
}

/// Export the table `table_id` to `sink`.
///
/// Rows are taken in current document order, hidden rows included. While
/// the sink runs, a hidden `<a download>` trigger is attached to the
/// document body; it is removed again whether or not delivery succeeds.
///
/// A missing table is a silent no-op and yields `Ok(None)`.
pub fn export_table(
    doc: &mut Document,
    table_id: &str,
    file_name: &str,
    sink: &mut dyn DownloadSink,
) -> Result<Option<Download>, DownloadError> {
    let Some(table) = doc.get(table_id) else {
        debug!("export skipped: no table {}", table_id);
        return Ok(None);
    };
    let download = Download::csv(file_name, table_to_csv(&TableSnapshot::read(table)));

    let trigger = Element::new("a")
        .attr("href", format!("blob:dashkit/{}", Uuid::new_v4()))
        .attr("download", file_name)
        .hidden(true);
    let trigger_id = trigger.id.clone();
    doc.append_to_body(trigger);

    let delivered = sink.deliver(&download);
    doc.remove(&trigger_id);

    match delivered {
        Ok(()) => {
            debug!(
                "exported table {} as {} ({} bytes)",
                table_id,
                download.file_name,
                download.contents.len()
            );
            Ok(Some(download))
        }
        Err(e) => {
            warn!("export of table {} failed: {}", table_id, e);
            Err(e)
        }
    }
}
