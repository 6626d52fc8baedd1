use crate::core::ChartCategory;
use crate::error::{ChartError, ChartResult};

use super::{ConfigurationDocument, DOCUMENT_VERSION};

impl ConfigurationDocument {
    /// Serializes the document into the compact packet handed to the engine.
    pub fn to_packet(&self) -> ChartResult<String> {
        serde_json::to_string(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize configuration packet: {e}"))
        })
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize configuration document: {e}"))
        })
    }

    /// Parses a packet, rejecting unknown versions and documents whose `maps`
    /// presence disagrees with the component variant.
    pub fn from_packet_str(input: &str) -> ChartResult<Self> {
        let document: Self = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse configuration packet: {e}"))
        })?;
        if document.version != DOCUMENT_VERSION {
            return Err(ChartError::InvalidData(format!(
                "unsupported configuration document version: {}",
                document.version
            )));
        }
        let is_map = document.components.category() == ChartCategory::Map;
        if is_map != document.maps.is_some() {
            return Err(ChartError::InvalidData(
                "`maps` must be present exactly for map components".to_owned(),
            ));
        }
        Ok(document)
    }
}
