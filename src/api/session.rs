use crate::core::{ChartData, ChartKind, MapDefinitionSource};
use crate::extensions::SessionPlugin;
use crate::render::EngineHandle;

use super::ChartOptions;

/// Stateful facade over one live engine instance.
///
/// A session exists only in the live state: construction builds the first
/// configuration packet and instantiates the engine, `dispose` releases it.
/// Every render-affecting mutation rebuilds the full document and submits it
/// as a replacement, even when nothing changed.
pub struct ChartSession<E: EngineHandle> {
    pub(super) handle: E,
    pub(super) state: SessionState,
    pub(super) maps: Box<dyn MapDefinitionSource>,
    pub(super) plugins: Vec<Box<dyn SessionPlugin>>,
}

/// Current kind, normalized data, options and last packet.
pub(super) struct SessionState {
    pub(super) kind: ChartKind,
    pub(super) data: ChartData,
    pub(super) options: ChartOptions,
    pub(super) packet: String,
}
