//! Engine configuration: the declarative markers the page uses.

use serde::Deserialize;
use thiserror::Error;

/// File name used when an export does not name one.
pub const DEFAULT_EXPORT_FILE_NAME: &str = "export.csv";

/// Marker classes and attribute names the engine binds to.
///
/// Every field has the default the dashboard templates use, so a config
/// file only needs to list what it overrides.
///
/// # Example
///
/// ```ignore
/// let config = EngineConfig::from_json(r#"{ "search_class": "grid-search" }"#)?;
/// assert_eq!(config.sortable_class, "sortable");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Class marking header cells that sort their column on click.
    pub sortable_class: String,
    /// Class set on the header of an ascending sort.
    pub sort_asc_class: String,
    /// Class set on the header of a descending sort.
    pub sort_desc_class: String,
    /// Class marking text inputs that filter a table.
    pub search_class: String,
    /// Attribute naming the target table's ID (search inputs, export triggers).
    pub table_id_attr: String,
    /// Class marking elements that export a table when clicked.
    pub export_class: String,
    /// Attribute on export triggers naming the downloaded file.
    pub file_name_attr: String,
    /// Name used when an export does not specify one.
    pub default_file_name: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            sortable_class: "sortable".to_string(),
            sort_asc_class: "th-sort-asc".to_string(),
            sort_desc_class: "th-sort-desc".to_string(),
            search_class: "table-search".to_string(),
            table_id_attr: "data-table-id".to_string(),
            export_class: "export-csv".to_string(),
            file_name_attr: "data-filename".to_string(),
            default_file_name: DEFAULT_EXPORT_FILE_NAME.to_string(),
        }
    }
}

impl EngineConfig {
    /// Parse a JSON config, filling in defaults for absent fields.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configs that could never match anything.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("sortable_class", &self.sortable_class),
            ("sort_asc_class", &self.sort_asc_class),
            ("sort_desc_class", &self.sort_desc_class),
            ("search_class", &self.search_class),
            ("table_id_attr", &self.table_id_attr),
            ("export_class", &self.export_class),
            ("file_name_attr", &self.file_name_attr),
            ("default_file_name", &self.default_file_name),
        ];
        for (name, value) in fields {
            if value.trim().is_empty() {
                return Err(ConfigError::EmptyField(name));
            }
        }
        if self.sort_asc_class == self.sort_desc_class {
            return Err(ConfigError::SortClassesCollide(self.sort_asc_class.clone()));
        }
        Ok(())
    }

    /// Set the sortable header marker class.
    pub fn sortable_class(mut self, class: impl Into<String>) -> Self {
        self.sortable_class = class.into();
        self
    }

    /// Set the classes reflecting ascending and descending sorts.
    pub fn sort_classes(mut self, asc: impl Into<String>, desc: impl Into<String>) -> Self {
        self.sort_asc_class = asc.into();
        self.sort_desc_class = desc.into();
        self
    }

    /// Set the search input marker class.
    pub fn search_class(mut self, class: impl Into<String>) -> Self {
        self.search_class = class.into();
        self
    }

    /// Set the export trigger marker class.
    pub fn export_class(mut self, class: impl Into<String>) -> Self {
        self.export_class = class.into();
        self
    }

    /// Set the default export file name.
    pub fn default_file_name(mut self, name: impl Into<String>) -> Self {
        self.default_file_name = name.into();
        self
    }
}

/// Errors that can occur when loading an [`EngineConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config is not valid JSON or has mistyped fields.
    #[error("invalid engine config: {0}")]
    Parse(#[from] serde_json::Error),

    /// A marker or attribute name is blank.
    #[error("engine config field '{0}' must not be empty")]
    EmptyField(&'static str),

    /// Ascending and descending sorts would be indistinguishable.
    #[error("sort classes must differ (both are '{0}')")]
    SortClassesCollide(String),
}
