use thiserror::Error;
use tracing::debug;

use crate::library::Track;
use crate::store::Writable;

pub const TRACK_NOT_FOUND: &str = "Canción no encontrada";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("{message}")]
    NotFound { message: String },
    #[error("malformed track path: {0}")]
    MalformedPath(String),
}

impl RouteError {
    /// HTTP-style status for the hosting error page.
    pub fn status(&self) -> u16 {
        match self {
            RouteError::NotFound { .. } => 404,
            RouteError::MalformedPath(_) => 400,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrackData {
    pub track: Track,
}

/// Resolve the percent-encoded `raw_path` route parameter against a snapshot
/// of the track list.
pub fn load_track(raw_path: &str, track_list: &Writable<Vec<Track>>) -> Result<TrackData, RouteError> {
    let path = urlencoding::decode(raw_path)
        .map_err(|e| RouteError::MalformedPath(format!("{raw_path}: {e}")))?;

    let found = track_list.with(|list| list.iter().find(|t| t.path == path).cloned());
    match found {
        Some(track) => Ok(TrackData { track }),
        None => {
            debug!(path = %path, "track not in list");
            Err(RouteError::NotFound {
                message: TRACK_NOT_FOUND.to_string(),
            })
        }
    }
}
