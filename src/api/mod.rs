//! Public facade: options, configuration documents and the chart session.

mod chart_options;
mod config_builder;
mod config_document;
mod json_contract;
mod plugin_dispatch;
mod plugin_registry;
mod session;
mod session_accessors;
mod session_init;
mod session_update;

pub use chart_options::{
    ChartOptions, ChartOptionsUpdate, DEFAULT_CHART_HEIGHT, DEFAULT_CHART_WIDTH,
};
pub use config_builder::build_configuration;
pub use config_document::{
    ColumnMetadata, ComponentConfig, Components, ConfigurationDocument, DEFAULT_DATASOURCE,
    DOCUMENT_LOCALE, DOCUMENT_VERSION, Datasource, EMPTY_STATE_DOCUMENT, ORDERED_COLUMN_LIST,
};
pub use session::ChartSession;
pub use session_init::ENGINE_CREATE_FLAG;

pub use crate::extensions::{SessionContext, SessionEvent, SessionPlugin};
