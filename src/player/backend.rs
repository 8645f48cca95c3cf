use std::future::Future;

use thiserror::Error;

/// Failure reported by the backend for one play request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("could not play {path}: {cause}")]
pub struct PlayError {
    pub path: String,
    pub cause: String,
}

impl PlayError {
    pub fn new(path: impl Into<String>, cause: impl ToString) -> Self {
        Self {
            path: path.into(),
            cause: cause.to_string(),
        }
    }
}

/// The native subsystem that actually decodes and outputs audio.
///
/// The player only ever issues one opaque command, `play_track(path)`, and
/// waits for it to succeed or fail. There is no timeout or cancellation.
pub trait PlaybackBackend {
    fn play_track(&self, path: &str) -> impl Future<Output = Result<(), PlayError>>;
}
