use indexmap::IndexMap;

use crate::error::{ChartError, ChartResult};

use super::ChartKind;

/// Opaque map-definition payload attached as `maps` to map documents.
pub type MapDefinition = serde_json::Value;

/// Lookup of the static map definition for a map chart kind.
pub trait MapDefinitionSource {
    fn map_definition_for(&self, kind: ChartKind) -> ChartResult<MapDefinition>;
}

impl<F> MapDefinitionSource for F
where
    F: Fn(ChartKind) -> ChartResult<MapDefinition>,
{
    fn map_definition_for(&self, kind: ChartKind) -> ChartResult<MapDefinition> {
        self(kind)
    }
}

/// In-memory table of map definitions keyed by map kind.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StaticMapDefinitions {
    definitions: IndexMap<ChartKind, MapDefinition>,
}

impl StaticMapDefinitions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers or replaces the definition for a map kind.
    pub fn register(&mut self, kind: ChartKind, definition: MapDefinition) -> ChartResult<()> {
        if !kind.is_map_kind() {
            return Err(ChartError::UnsupportedChartKind { kind });
        }
        self.definitions.insert(kind, definition);
        Ok(())
    }

    pub fn with_definition(
        mut self,
        kind: ChartKind,
        definition: MapDefinition,
    ) -> ChartResult<Self> {
        self.register(kind, definition)?;
        Ok(self)
    }

    #[must_use]
    pub fn contains(&self, kind: ChartKind) -> bool {
        self.definitions.contains_key(&kind)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

impl MapDefinitionSource for StaticMapDefinitions {
    fn map_definition_for(&self, kind: ChartKind) -> ChartResult<MapDefinition> {
        self.definitions
            .get(&kind)
            .cloned()
            .ok_or(ChartError::UnsupportedChartKind { kind })
    }
}
