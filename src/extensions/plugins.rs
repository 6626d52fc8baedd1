use serde::{Deserialize, Serialize};

use crate::core::{ChartCategory, ChartKind};

/// Read-only session state passed to plugin hooks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionContext {
    pub kind: ChartKind,
    pub category: ChartCategory,
    pub num_rows: usize,
    pub num_columns: usize,
    pub width: u32,
    pub height: u32,
    pub animate: bool,
    pub has_palette: bool,
}

/// Event stream exposed to plugins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    /// A full configuration packet was rebuilt and pushed to the engine.
    ConfigUpdated { packet_len: usize },
    Rendered { skip_animation: bool },
    Resized { width: u32, height: u32 },
    Disposed,
}

/// Extension hook interface.
///
/// Plugins observe session events and read context; they cannot mutate the
/// session or the engine handle.
pub trait SessionPlugin {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: SessionEvent, context: SessionContext);
}
