use crate::error::{ChartError, ChartResult};
use crate::render::{EngineCreateRequest, EngineFactory, EngineHandle};

/// Calls received by a [`NullEngineHandle`], in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineCall {
    UpdateConfig { config: String, skip_animation: bool },
    Draw { skip_animation: bool, flag: bool },
    Resize { width: u32, height: u32 },
    Dispose,
}

/// Canvas stand-in carrying only its size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NullCanvas {
    pub width: u32,
    pub height: u32,
}

/// Headless engine factory used by tests and dry runs.
#[derive(Debug, Default)]
pub struct NullEngine {
    pub created: usize,
}

impl EngineFactory for NullEngine {
    type Handle = NullEngineHandle;

    fn create_instance(&mut self, request: EngineCreateRequest<'_>) -> ChartResult<Self::Handle> {
        validate_packet(request.config)?;
        validate_packet(request.state)?;
        self.created += 1;
        Ok(NullEngineHandle {
            initial_config: request.config.to_owned(),
            initial_state: request.state.to_owned(),
            use_engine_defaults: request.use_engine_defaults,
            flag: request.flag,
            canvas: NullCanvas {
                width: request.width,
                height: request.height,
            },
            calls: Vec::new(),
            disposed: false,
        })
    }
}

/// Recording engine handle.
///
/// It still parses every packet it receives so tests catch malformed
/// documents before a real engine is involved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NullEngineHandle {
    pub initial_config: String,
    pub initial_state: String,
    pub use_engine_defaults: bool,
    pub flag: u32,
    pub canvas: NullCanvas,
    pub calls: Vec<EngineCall>,
    pub disposed: bool,
}

impl NullEngineHandle {
    /// Most recent configuration the engine holds.
    #[must_use]
    pub fn current_config(&self) -> &str {
        self.calls
            .iter()
            .rev()
            .find_map(|call| match call {
                EngineCall::UpdateConfig { config, .. } => Some(config.as_str()),
                _ => None,
            })
            .unwrap_or(&self.initial_config)
    }

    #[must_use]
    pub fn update_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, EngineCall::UpdateConfig { .. }))
            .count()
    }

    fn ensure_live(&self) -> ChartResult<()> {
        if self.disposed {
            return Err(ChartError::Engine(
                "engine handle used after dispose".to_owned(),
            ));
        }
        Ok(())
    }
}

impl EngineHandle for NullEngineHandle {
    type Canvas = NullCanvas;

    fn update_config(&mut self, config: &str, skip_animation: bool) -> ChartResult<()> {
        self.ensure_live()?;
        validate_packet(config)?;
        self.calls.push(EngineCall::UpdateConfig {
            config: config.to_owned(),
            skip_animation,
        });
        Ok(())
    }

    fn draw(&mut self, skip_animation: bool, flag: bool) -> ChartResult<()> {
        self.ensure_live()?;
        self.calls.push(EngineCall::Draw {
            skip_animation,
            flag,
        });
        Ok(())
    }

    fn resize(&mut self, width: u32, height: u32) -> ChartResult<()> {
        self.ensure_live()?;
        self.canvas = NullCanvas { width, height };
        self.calls.push(EngineCall::Resize { width, height });
        Ok(())
    }

    fn canvas(&self) -> &Self::Canvas {
        &self.canvas
    }

    fn dispose(&mut self) -> ChartResult<()> {
        self.ensure_live()?;
        self.disposed = true;
        self.calls.push(EngineCall::Dispose);
        Ok(())
    }
}

fn validate_packet(packet: &str) -> ChartResult<()> {
    match serde_json::from_str::<serde_json::Value>(packet) {
        Ok(serde_json::Value::Object(_)) => Ok(()),
        Ok(_) => Err(ChartError::Engine(
            "configuration packet must be a JSON object".to_owned(),
        )),
        Err(e) => Err(ChartError::Engine(format!(
            "configuration packet is not valid JSON: {e}"
        ))),
    }
}
