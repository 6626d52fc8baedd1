use tracing::debug;

use crate::core::{ChartData, ChartKind, MapDefinitionSource, normalize_data};
use crate::error::{ChartError, ChartResult};
use crate::render::{EngineCreateRequest, EngineFactory, EngineHandle};

use super::session::SessionState;
use super::{ChartOptions, ChartSession, EMPTY_STATE_DOCUMENT, build_configuration};

/// Flag value passed to engine creation; the facade never sets engine flags.
pub const ENGINE_CREATE_FLAG: u32 = 0;

impl<E: EngineHandle> ChartSession<E> {
    /// Normalizes `data`, builds the initial packet and instantiates the engine.
    pub fn new<F, M>(
        factory: &mut F,
        kind: ChartKind,
        data: ChartData,
        options: ChartOptions,
        maps: M,
    ) -> ChartResult<Self>
    where
        F: EngineFactory<Handle = E>,
        M: MapDefinitionSource + 'static,
    {
        if options.width == 0 || options.height == 0 {
            return Err(ChartError::InvalidViewport {
                width: options.width,
                height: options.height,
            });
        }

        let data = normalize_data(&data, options.row_key_order);
        let packet = build_configuration(kind, &data, &options, &maps)?.to_packet()?;
        let handle = factory.create_instance(EngineCreateRequest {
            config: &packet,
            state: EMPTY_STATE_DOCUMENT,
            width: options.width,
            height: options.height,
            use_engine_defaults: false,
            flag: ENGINE_CREATE_FLAG,
        })?;
        debug!(
            %kind,
            width = options.width,
            height = options.height,
            packet_len = packet.len(),
            "engine instance created"
        );

        Ok(Self {
            handle,
            state: SessionState {
                kind,
                data,
                options,
                packet,
            },
            maps: Box::new(maps),
            plugins: Vec::new(),
        })
    }
}
