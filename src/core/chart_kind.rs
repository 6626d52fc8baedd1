use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Visual family a chart kind belongs to.
///
/// Decides which engine component (`graph` or `map`) a configuration document
/// carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartCategory {
    Graph,
    Map,
}

/// Closed set of chart types understood by the rendering engine.
///
/// The serialized tag is the engine's `badgetype`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChartKind {
    Column,
    StackedColumn,
    Bar,
    StackedBar,
    Line,
    Area,
    StackedArea,
    Pie,
    Donut,
    Scatter,
    Bubble,
    Combo,
    WorldMap,
    UsaMap,
    CanadaMap,
    EuropeMap,
}

impl ChartKind {
    pub const ALL: [ChartKind; 16] = [
        ChartKind::Column,
        ChartKind::StackedColumn,
        ChartKind::Bar,
        ChartKind::StackedBar,
        ChartKind::Line,
        ChartKind::Area,
        ChartKind::StackedArea,
        ChartKind::Pie,
        ChartKind::Donut,
        ChartKind::Scatter,
        ChartKind::Bubble,
        ChartKind::Combo,
        ChartKind::WorldMap,
        ChartKind::UsaMap,
        ChartKind::CanadaMap,
        ChartKind::EuropeMap,
    ];

    #[must_use]
    pub const fn category(self) -> ChartCategory {
        match self {
            Self::WorldMap | Self::UsaMap | Self::CanadaMap | Self::EuropeMap => {
                ChartCategory::Map
            }
            Self::Column
            | Self::StackedColumn
            | Self::Bar
            | Self::StackedBar
            | Self::Line
            | Self::Area
            | Self::StackedArea
            | Self::Pie
            | Self::Donut
            | Self::Scatter
            | Self::Bubble
            | Self::Combo => ChartCategory::Graph,
        }
    }

    #[must_use]
    pub const fn is_map_kind(self) -> bool {
        matches!(self.category(), ChartCategory::Map)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Column => "column",
            Self::StackedColumn => "stacked-column",
            Self::Bar => "bar",
            Self::StackedBar => "stacked-bar",
            Self::Line => "line",
            Self::Area => "area",
            Self::StackedArea => "stacked-area",
            Self::Pie => "pie",
            Self::Donut => "donut",
            Self::Scatter => "scatter",
            Self::Bubble => "bubble",
            Self::Combo => "combo",
            Self::WorldMap => "world-map",
            Self::UsaMap => "usa-map",
            Self::CanadaMap => "canada-map",
            Self::EuropeMap => "europe-map",
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartKind {
    type Err = ChartError;

    fn from_str(input: &str) -> ChartResult<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == input)
            .ok_or_else(|| ChartError::InvalidData(format!("unknown chart kind `{input}`")))
    }
}
