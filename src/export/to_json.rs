use crate::document::Document;
use crate::errors::DrawResult;

/// Global the data file assigns; the client script reads the whole
/// document through it.
pub const DATA_GLOBAL: &str = "webloomData";

/// Renders the flattened document as pretty-printed JSON: a `display`
/// object and a `network` map (singular key, one entry per network name).
pub fn render(document: &Document) -> DrawResult<String> {
    Ok(serde_json::to_string_pretty(document)?)
}

/// Renders the data file body: a script statement assigning the document
/// JSON to [`DATA_GLOBAL`].
pub fn render_data_file(document: &Document) -> DrawResult<String> {
    Ok(format!("var {} = {};", DATA_GLOBAL, render(document)?))
}
