//! External record shape
//!
//! Matches the backend's per-panel payload: dimensions in meters, camelCase
//! field names on the wire (`layoutSections`, `isDoor`, `doorHeight`,
//! `photoId`, `photoUri`).

use serde::{Deserialize, Serialize};

/// One section of a panel: a plain span or a door opening
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionRecord {
    /// Section width in meters
    pub width: f32,
    /// Whether this section is a door opening
    pub is_door: bool,
    /// Door height in meters; null for plain sections
    pub door_height: Option<f32>,
    /// Ordinal index of the section within the panel
    pub position: u32,
}

/// A persisted panel layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelRecord {
    /// Panel height in meters
    pub height: f32,
    /// Sections, left to right
    pub layout_sections: Vec<SectionRecord>,
    /// Backend identifier of the attached photo, if uploaded
    #[serde(default)]
    pub photo_id: Option<String>,
    /// Local URI of a photo pending upload
    #[serde(default)]
    pub photo_uri: Option<String>,
}

/// Serialize a panel record to JSON
pub fn panel_record_to_json(record: &PanelRecord) -> crate::Result<String> {
    Ok(serde_json::to_string_pretty(record)?)
}

/// Deserialize a panel record from JSON
pub fn panel_record_from_json(json: &str) -> crate::Result<PanelRecord> {
    Ok(serde_json::from_str(json)?)
}
