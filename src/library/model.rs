use std::path::Path;

use serde::{Deserialize, Serialize};

/// One playable item. Identity is the `path`; metadata is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub path: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub artist: Option<String>,
    #[serde(default)]
    pub album: Option<String>,
    #[serde(default)]
    pub duration_secs: Option<u64>,
}

impl Track {
    /// A track with no metadata.
    pub fn from_path(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            title: None,
            artist: None,
            album: None,
            duration_secs: None,
        }
    }

    /// Whether `self` and `other` name the same item.
    pub fn same_as(&self, other: &Track) -> bool {
        self.path == other.path
    }

    /// "Artist - Title", falling back to the title, the file stem and
    /// finally the raw path.
    pub fn display_name(&self) -> String {
        let title = self
            .title
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .or_else(|| {
                Path::new(&self.path)
                    .file_stem()
                    .and_then(|s| s.to_str())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| self.path.clone());

        match self.artist.as_deref().map(str::trim) {
            Some(a) if !a.is_empty() => format!("{a} - {title}"),
            _ => title,
        }
    }
}
