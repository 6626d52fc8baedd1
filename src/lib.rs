//! chart-facade: configuration builder and session facade for canvas
//! chart/map rendering engines.
//!
//! The crate turns tabular data plus a [`ChartKind`] into the versioned
//! configuration document ("packet") consumed by an external rendering
//! engine, and drives that engine through the [`ChartSession`] lifecycle.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod render;
pub mod telemetry;

pub use api::{ChartOptions, ChartSession, ConfigurationDocument, build_configuration};
pub use core::{ChartData, ChartKind};
pub use error::{ChartError, ChartResult};
