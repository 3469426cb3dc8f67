use std::path::{Path, PathBuf};

use serde::ser::{Serialize, SerializeMap, Serializer};
use tracing::info;

use crate::common::write_string_to_file;
use crate::display::Display;
use crate::errors::{DrawError, DrawResult};
use crate::export;
use crate::network::NetworkSet;

/// The whole visualization: named networks, shared render preferences and
/// the output location.
///
/// `title` names the two output files (`<title>.html`, `<title>.json`);
/// `base_path` is where [`Document::draw`] writes them, the current
/// directory when unset.
#[derive(Clone, Debug)]
pub struct Document {
    pub title: String,
    pub display: Display,
    pub networks: NetworkSet,
    pub base_path: Option<PathBuf>,
}

/// Serializes to the envelope the client reads: a `display` object and a
/// `network` map (singular key). `title` and `base_path` only shape the
/// output files, so they stay out of the JSON.
impl Serialize for Document {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("display", &self.display)?;
        map.serialize_entry("network", &self.networks)?;
        map.end()
    }
}

impl Default for Document {
    fn default() -> Self {
        Document::new("webloom")
    }
}

impl Document {
    pub fn new(title: impl Into<String>) -> Self {
        Document {
            title: title.into(),
            display: Display::new(),
            networks: NetworkSet::new(),
            base_path: None,
        }
    }

    pub fn html_file_name(&self) -> String {
        format!("{}.html", self.title)
    }

    pub fn data_file_name(&self) -> String {
        format!("{}.json", self.title)
    }

    /// Writes the HTML shell and the data file into `dir` and returns
    /// their paths, HTML first.
    ///
    /// Identical document state produces byte-identical files. The two
    /// writes are not atomic as a pair: a failure on the second leaves
    /// the first in place.
    pub fn save(&self, dir: &Path) -> DrawResult<(PathBuf, PathBuf)> {
        let dir = std::path::absolute(dir).map_err(|source| DrawError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        let html_path = dir.join(self.html_file_name());
        let data_path = dir.join(self.data_file_name());

        let html = export::to_html::render(&self.title, &data_path)?;
        let data = export::to_json::render_data_file(self)?;

        write_string_to_file(&html_path, &html).map_err(|source| DrawError::Io {
            path: html_path.clone(),
            source,
        })?;
        write_string_to_file(&data_path, &data).map_err(|source| DrawError::Io {
            path: data_path.clone(),
            source,
        })?;

        info!("wrote {} and {}", html_path.display(), data_path.display());
        Ok((html_path, data_path))
    }

    /// Saves into `base_path` (current directory when unset), then opens
    /// the written HTML file in the default browser, fire and forget.
    /// The browser is only launched once both files are on disk.
    pub fn draw(&self) -> DrawResult<()> {
        let dir = self.base_path.clone().unwrap_or_else(|| PathBuf::from("."));
        let (html_path, _) = self.save(&dir)?;

        let url = format!("file://{}", html_path.display());
        webbrowser::open(&url).map_err(DrawError::Browser)?;
        info!("opened {} in the default browser", url);
        Ok(())
    }
}
