use crate::extensions::SessionContext;
use crate::render::EngineHandle;

use super::{ChartSession, SessionEvent};

impl<E: EngineHandle> ChartSession<E> {
    pub(super) fn plugin_context(&self) -> SessionContext {
        let state = &self.state;
        SessionContext {
            kind: state.kind,
            category: state.kind.category(),
            num_rows: state.data.num_rows(),
            num_columns: state.data.num_columns(),
            width: state.options.width,
            height: state.options.height,
            animate: state.options.animate,
            has_palette: state.options.has_custom_palette(),
        }
    }

    pub(super) fn emit_plugin_event(&mut self, event: SessionEvent) {
        if self.plugins.is_empty() {
            return;
        }
        let context = self.plugin_context();
        for plugin in &mut self.plugins {
            plugin.on_event(event, context);
        }
    }
}
