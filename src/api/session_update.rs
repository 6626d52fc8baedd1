use indexmap::IndexMap;
use serde_json::Value;
use tracing::{debug, trace};

use crate::core::{ChartData, ChartKind, normalize_data};
use crate::error::{ChartError, ChartResult};
use crate::render::EngineHandle;

use super::{ChartOptions, ChartOptionsUpdate, ChartSession, SessionEvent, build_configuration};

impl<E: EngineHandle> ChartSession<E> {
    /// Draws the current configuration; animation is skipped when disabled
    /// in the options.
    pub fn render(&mut self) -> ChartResult<()> {
        let skip_animation = !self.state.options.animate;
        trace!(skip_animation, "draw");
        self.handle.draw(skip_animation, false)?;
        self.emit_plugin_event(SessionEvent::Rendered { skip_animation });
        Ok(())
    }

    pub fn resize(&mut self, width: u32, height: u32) -> ChartResult<()> {
        if width == 0 || height == 0 {
            return Err(ChartError::InvalidViewport { width, height });
        }
        trace!(width, height, "resize");
        self.handle.resize(width, height)?;
        self.state.options.width = width;
        self.state.options.height = height;
        self.emit_plugin_event(SessionEvent::Resized { width, height });
        Ok(())
    }

    /// Replaces the data, merges supplied colors/properties and pushes a fresh
    /// packet to the engine.
    pub fn update(
        &mut self,
        data: ChartData,
        options: Option<ChartOptionsUpdate>,
    ) -> ChartResult<()> {
        let mut next_options = self.state.options.clone();
        if let Some(update) = options {
            next_options.apply(update);
        }
        self.replace_configuration(self.state.kind, data, next_options)
    }

    /// Sets the engine property overrides and rebuilds with the current data.
    pub fn set_chart_properties(&mut self, properties: IndexMap<String, Value>) -> ChartResult<()> {
        let mut next_options = self.state.options.clone();
        next_options.properties = Some(properties);
        self.replace_configuration(self.state.kind, self.state.data.clone(), next_options)
    }

    /// Drops custom colors so the engine falls back to its default palette.
    pub fn reset_color_palette(&mut self) -> ChartResult<()> {
        let mut next_options = self.state.options.clone();
        next_options.colors = None;
        self.replace_configuration(self.state.kind, self.state.data.clone(), next_options)
    }

    /// Switches chart kind and rebuilds with the current data and options.
    pub fn set_chart_kind(&mut self, kind: ChartKind) -> ChartResult<()> {
        self.replace_configuration(kind, self.state.data.clone(), self.state.options.clone())
    }

    /// Releases the engine instance and returns its handle.
    pub fn dispose(mut self) -> ChartResult<E> {
        self.handle.dispose()?;
        debug!(kind = %self.state.kind, "session disposed");
        self.emit_plugin_event(SessionEvent::Disposed);
        Ok(self.handle)
    }

    /// Session state is only committed once the new document has been built,
    /// so a rejected update leaves the previous configuration in place.
    fn replace_configuration(
        &mut self,
        kind: ChartKind,
        data: ChartData,
        options: ChartOptions,
    ) -> ChartResult<()> {
        let data = normalize_data(&data, options.row_key_order);
        let packet = build_configuration(kind, &data, &options, &*self.maps)?.to_packet()?;
        let skip_animation = !options.animate;

        self.state.kind = kind;
        self.state.data = data;
        self.state.options = options;
        self.state.packet = packet;

        self.handle.update_config(&self.state.packet, skip_animation)?;
        debug!(
            %kind,
            packet_len = self.state.packet.len(),
            skip_animation,
            "configuration replaced"
        );
        self.emit_plugin_event(SessionEvent::ConfigUpdated {
            packet_len: self.state.packet.len(),
        });
        Ok(())
    }
}
