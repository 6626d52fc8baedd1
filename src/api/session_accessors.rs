use crate::core::{ChartData, ChartKind};
use crate::error::ChartResult;
use crate::render::EngineHandle;

use super::{ChartOptions, ChartSession, ConfigurationDocument};

impl<E: EngineHandle> ChartSession<E> {
    #[must_use]
    pub fn kind(&self) -> ChartKind {
        self.state.kind
    }

    /// Current data, always in canonical row form.
    #[must_use]
    pub fn data(&self) -> &ChartData {
        &self.state.data
    }

    #[must_use]
    pub fn options(&self) -> &ChartOptions {
        &self.state.options
    }

    /// Last serialized configuration document, for inspection only.
    #[must_use]
    pub fn packet(&self) -> &str {
        &self.state.packet
    }

    /// Decodes [`Self::packet`] back into a document.
    pub fn document(&self) -> ChartResult<ConfigurationDocument> {
        ConfigurationDocument::from_packet_str(&self.state.packet)
    }

    /// Canvas owned by the engine, for the host to mount.
    #[must_use]
    pub fn canvas(&self) -> &E::Canvas {
        self.handle.canvas()
    }

    #[must_use]
    pub fn handle(&self) -> &E {
        &self.handle
    }
}
