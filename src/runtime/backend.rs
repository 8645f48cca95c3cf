use std::path::Path;

use lofty::prelude::*;
use tracing::debug;

use crate::player::{PlayError, PlaybackBackend};

/// Stand-in for the native audio backend: accepts a play request when the
/// file exists and lofty can identify it as audio. It produces no sound.
#[derive(Debug, Default)]
pub struct ProbeBackend;

impl PlaybackBackend for ProbeBackend {
    async fn play_track(&self, path: &str) -> Result<(), PlayError> {
        let p = Path::new(path);
        if !p.is_file() {
            return Err(PlayError::new(path, "no such file"));
        }
        let tagged = lofty::read_from_path(p).map_err(|e| PlayError::new(path, e))?;
        debug!(path, file_type = ?tagged.file_type(), "backend accepted track");
        Ok(())
    }
}
