pub mod chart_kind;
pub mod map_definitions;
pub mod normalize;
pub mod palette;
pub mod primitives;
pub mod types;

pub use chart_kind::{ChartCategory, ChartKind};
pub use map_definitions::{MapDefinition, MapDefinitionSource, StaticMapDefinitions};
pub use normalize::{RowKeyOrder, normalize_data, normalize_rows};
pub use palette::{CUSTOM_COLOR_RANGE_NAME, ColorRange, ColorRule, Palette, build_palette};
pub use primitives::{datetime_to_cell, decimal_to_cell, f64_to_cell};
pub use types::{Cell, ChartData, ColumnDescriptor, ColumnType, Row};
