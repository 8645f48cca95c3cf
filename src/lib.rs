//! Reactive playback state for a desktop music player.
//!
//! The crate holds the UI-facing state that mirrors playback happening in a
//! native backend: the track list, the active track, the playing flag, the
//! volume, elapsed position and duration, and the derived progress. All of it
//! is bundled in [`app::App`] and observable through [`store`] cells.

pub mod app;
pub mod config;
pub mod library;
pub mod playback;
pub mod player;
pub mod routes;
pub mod runtime;
pub mod store;
