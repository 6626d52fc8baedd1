use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::RowKeyOrder;
use crate::error::{ChartError, ChartResult};

pub const DEFAULT_CHART_HEIGHT: u32 = 400;
pub const DEFAULT_CHART_WIDTH: u32 = 500;

/// Session-level chart options.
///
/// Serializable so host applications can persist chart setup. Absent
/// `colors`/`properties` mean "use the engine default".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartOptions {
    #[serde(default = "default_height")]
    pub height: u32,
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_animate")]
    pub animate: bool,
    #[serde(default)]
    pub colors: Option<Vec<String>>,
    #[serde(default)]
    pub properties: Option<IndexMap<String, Value>>,
    #[serde(default)]
    pub row_key_order: RowKeyOrder,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            height: default_height(),
            width: default_width(),
            animate: default_animate(),
            colors: None,
            properties: None,
            row_key_order: RowKeyOrder::default(),
        }
    }
}

impl ChartOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    #[must_use]
    pub fn with_animate(mut self, animate: bool) -> Self {
        self.animate = animate;
        self
    }

    /// Sets the custom palette colors (`#rrggbb` strings, order preserved).
    #[must_use]
    pub fn with_colors<I, S>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.colors = Some(colors.into_iter().map(Into::into).collect());
        self
    }

    /// Sets engine property overrides copied into the component `overrides`.
    #[must_use]
    pub fn with_properties(mut self, properties: IndexMap<String, Value>) -> Self {
        self.properties = Some(properties);
        self
    }

    #[must_use]
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties
            .get_or_insert_with(IndexMap::new)
            .insert(name.into(), value.into());
        self
    }

    #[must_use]
    pub fn with_row_key_order(mut self, order: RowKeyOrder) -> Self {
        self.row_key_order = order;
        self
    }

    /// Merges the fields present in `update` over these options.
    pub fn apply(&mut self, update: ChartOptionsUpdate) {
        if let Some(colors) = update.colors {
            self.colors = Some(colors);
        }
        if let Some(properties) = update.properties {
            self.properties = Some(properties);
        }
    }

    #[must_use]
    pub fn has_custom_palette(&self) -> bool {
        self.colors.as_ref().is_some_and(|colors| !colors.is_empty())
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize options: {e}")))
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse options: {e}")))
    }
}

/// Partial options accepted by `ChartSession::update`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartOptionsUpdate {
    #[serde(default)]
    pub colors: Option<Vec<String>>,
    #[serde(default)]
    pub properties: Option<IndexMap<String, Value>>,
}

impl ChartOptionsUpdate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_colors<I, S>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.colors = Some(colors.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn with_properties(mut self, properties: IndexMap<String, Value>) -> Self {
        self.properties = Some(properties);
        self
    }
}

fn default_height() -> u32 {
    DEFAULT_CHART_HEIGHT
}

fn default_width() -> u32 {
    DEFAULT_CHART_WIDTH
}

fn default_animate() -> bool {
    true
}
