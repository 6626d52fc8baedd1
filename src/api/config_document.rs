use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::{Cell, ChartCategory, ChartKind, ColumnType, MapDefinition, Palette};

pub const DEFAULT_DATASOURCE: &str = "default";
pub const ORDERED_COLUMN_LIST: &str = "ordered-column-list";
pub const DOCUMENT_LOCALE: &str = "en-US";
pub const DOCUMENT_VERSION: &str = "6";
/// State document passed at engine creation; state restoration is unused.
pub const EMPTY_STATE_DOCUMENT: &str = "{}";

/// Versioned configuration document consumed by the rendering engine.
///
/// `maps` is present exactly when `components` is the map variant, and
/// `palette` is omitted (never `null`) when the engine default applies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigurationDocument {
    pub datasources: IndexMap<String, Datasource>,
    pub components: Components,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maps: Option<MapDefinition>,
    #[serde(default)]
    pub conditional_formats: Vec<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub palette: Option<Palette>,
    pub locale: String,
    pub version: String,
}

impl ConfigurationDocument {
    #[must_use]
    pub fn kind(&self) -> ChartKind {
        self.components.config().badgetype
    }

    #[must_use]
    pub fn default_datasource(&self) -> Option<&Datasource> {
        self.datasources.get(DEFAULT_DATASOURCE)
    }
}

/// Tabular datasource in the engine's ordered-column-list layout.
///
/// `num_rows`/`num_columns` duplicate the matrix shape; the engine uses them
/// for pre-allocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Datasource {
    #[serde(rename = "type")]
    pub source_type: String,
    pub column_metadata: Vec<ColumnMetadata>,
    pub column_mappings: Vec<String>,
    pub column_names: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
    pub num_rows: usize,
    pub num_columns: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMetadata {
    #[serde(rename = "type")]
    pub column_type: ColumnType,
}

/// The single visual component of a document. Serialized as
/// `{"graph": {...}}` or `{"map": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Components {
    Graph(ComponentConfig),
    Map(ComponentConfig),
}

impl Components {
    #[must_use]
    pub fn for_category(category: ChartCategory, config: ComponentConfig) -> Self {
        match category {
            ChartCategory::Graph => Self::Graph(config),
            ChartCategory::Map => Self::Map(config),
        }
    }

    #[must_use]
    pub fn category(&self) -> ChartCategory {
        match self {
            Self::Graph(_) => ChartCategory::Graph,
            Self::Map(_) => ChartCategory::Map,
        }
    }

    #[must_use]
    pub fn config(&self) -> &ComponentConfig {
        match self {
            Self::Graph(config) | Self::Map(config) => config,
        }
    }

    #[must_use]
    pub fn graph(&self) -> Option<&ComponentConfig> {
        match self {
            Self::Graph(config) => Some(config),
            Self::Map(_) => None,
        }
    }

    #[must_use]
    pub fn map(&self) -> Option<&ComponentConfig> {
        match self {
            Self::Map(config) => Some(config),
            Self::Graph(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentConfig {
    pub badgetype: ChartKind,
    pub datasource: String,
    #[serde(default)]
    pub column_formats: IndexMap<String, Value>,
    #[serde(default)]
    pub overrides: IndexMap<String, Value>,
}
