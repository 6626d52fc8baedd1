use thiserror::Error;

use crate::core::ChartKind;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid chart data: {0}")]
    InvalidChartData(String),

    #[error("unsupported chart kind: {kind}")]
    UnsupportedChartKind { kind: ChartKind },

    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("engine failure: {0}")]
    Engine(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
