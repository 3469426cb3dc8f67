use serde::Serialize;

use crate::label::LabelSet;

/// Render preferences passed through to the browser client.
///
/// Every field is optional and unset fields stay out of the JSON entirely,
/// so the client falls back to its own defaults. The single-letter keys
/// (`w`, `h`, `l`, `r`, `c`, `g`) are the client's own vocabulary.
#[derive(Clone, Debug, Default, Serialize)]
pub struct Display {
    /// Node count hint, for layouts with isolated nodes.
    #[serde(rename = "N", skip_serializing_if = "Option::is_none")]
    pub node_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Canvas width in pixels.
    #[serde(rename = "w", skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    /// Canvas height in pixels.
    #[serde(rename = "h", skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    /// Link length.
    #[serde(rename = "l", skip_serializing_if = "Option::is_none")]
    pub link_length: Option<f64>,
    /// Node radius.
    #[serde(rename = "r", skip_serializing_if = "Option::is_none")]
    pub node_radius: Option<f64>,
    /// Charge strength.
    #[serde(rename = "c", skip_serializing_if = "Option::is_none")]
    pub charge: Option<f64>,
    /// Gravity strength.
    #[serde(rename = "g", skip_serializing_if = "Option::is_none")]
    pub gravity: Option<f64>,
    #[serde(rename = "nodeNames", skip_serializing_if = "Option::is_none")]
    pub node_names: Option<Vec<String>>,
    /// Which network to show first.
    #[serde(rename = "networkName", skip_serializing_if = "Option::is_none")]
    pub network_name: Option<String>,
    /// Label name to color nodes by.
    #[serde(rename = "colorBy", skip_serializing_if = "Option::is_none")]
    pub color_by: Option<String>,
    /// Label name to size nodes by.
    #[serde(rename = "sizeBy", skip_serializing_if = "Option::is_none")]
    pub size_by: Option<String>,
    #[serde(rename = "colorPalette", skip_serializing_if = "Option::is_none")]
    pub color_palette: Option<String>,
    #[serde(rename = "colorInvertBinary", skip_serializing_if = "Option::is_none")]
    pub color_invert_binary: Option<bool>,
    #[serde(rename = "sizeInvertBinary", skip_serializing_if = "Option::is_none")]
    pub size_invert_binary: Option<bool>,
    /// Labels shared by every network in the document.
    #[serde(skip_serializing_if = "LabelSet::is_empty")]
    pub labels: LabelSet,
}

impl Display {
    pub fn new() -> Self {
        Display::default()
    }
}
