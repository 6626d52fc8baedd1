mod null_engine;

pub use null_engine::{EngineCall, NullCanvas, NullEngine, NullEngineHandle};

use crate::error::ChartResult;

/// Arguments of one engine instantiation.
///
/// `state` is the serialized engine state document; the facade always passes
/// an empty object since it never restores state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineCreateRequest<'a> {
    pub config: &'a str,
    pub state: &'a str,
    pub width: u32,
    pub height: u32,
    pub use_engine_defaults: bool,
    pub flag: u32,
}

/// Creates engine instances from a configuration packet.
pub trait EngineFactory {
    type Handle: EngineHandle;

    fn create_instance(&mut self, request: EngineCreateRequest<'_>) -> ChartResult<Self::Handle>;
}

/// Live instance of the external rendering engine.
///
/// The engine owns the canvas and all drawing; the facade only hands it full
/// configuration packets and forwards draw/resize requests.
pub trait EngineHandle {
    type Canvas;

    /// Replaces the whole configuration with `config`.
    fn update_config(&mut self, config: &str, skip_animation: bool) -> ChartResult<()>;

    fn draw(&mut self, skip_animation: bool, flag: bool) -> ChartResult<()>;

    fn resize(&mut self, width: u32, height: u32) -> ChartResult<()>;

    fn canvas(&self) -> &Self::Canvas;

    /// Releases engine resources. The handle must not be used afterwards.
    fn dispose(&mut self) -> ChartResult<()> {
        Ok(())
    }
}
