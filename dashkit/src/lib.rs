//! Behaviors for server-rendered admin dashboard pages.
//!
//! The centrepiece is the table interaction engine: click-to-sort on marked
//! header cells, live row filtering driven by a bound search input, and CSV
//! export of a table. The host builds a [`pagedom::Document`], calls
//! [`init`] once, and feeds page events to the returned [`TableEngine`].
//!
//! ```ignore
//! let mut engine = dashkit::init(&doc, EngineConfig::default());
//! engine.handle(&mut doc, &Event::click("name-header"));
//! engine.handle(&mut doc, &Event::input("server-search", "edge"));
//! engine.export_table_to_csv(&mut doc, "servers", Some("servers.csv"))?;
//! ```

pub mod collate;
pub mod config;
pub mod datefmt;
pub mod engine;
pub mod events;
pub mod export;
pub mod nav;
pub mod notify;
pub mod table;

pub use config::{ConfigError, EngineConfig};
pub use engine::{TableEngine, init};
pub use events::{EventResult, PageBehavior, dispatch};

pub mod prelude {
    pub use crate::config::{ConfigError, EngineConfig};
    pub use crate::engine::{TableEngine, init};
    pub use crate::events::{EventResult, PageBehavior, dispatch};
    pub use crate::export::{
        DirectorySink, Download, DownloadError, DownloadSink, MemorySink, rows_to_csv,
    };
    pub use crate::nav::set_active_nav_item;
    pub use crate::notify::{NotificationLevel, Notifications};
    pub use crate::table::{Row, SortDirection, TableSnapshot};

    pub use pagedom::{Document, Element, Event};
}
