use std::time::Instant;

use tracing::{error, info};

use crate::config::PlaybackSettings;
use crate::library::Track;
use crate::playback::PlaybackState;
use crate::player::{PlayError, PlaybackBackend, PlayerState, index_of, next_index, previous_index};

/// The player context handed to whatever needs playback state.
///
/// Construct it once with `App::new`, hand out the stores for observation and
/// call `shutdown` when the front end goes away.
pub struct App<B> {
    pub player: PlayerState,
    pub playback: PlaybackState,
    backend: B,
}

impl<B: PlaybackBackend> App<B> {
    pub fn new(backend: B, settings: &PlaybackSettings) -> Self {
        Self {
            player: PlayerState::new(settings.initial_volume),
            playback: PlaybackState::new(),
            backend,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Replace the track list wholesale.
    pub fn load_library(&self, tracks: Vec<Track>) {
        info!(count = tracks.len(), "track list loaded");
        self.player.track_list.set(tracks);
    }

    /// Ask the backend to play `track`. On success the track becomes active and
    /// the playing flag is raised; on failure the error is logged and both
    /// cells keep their previous values.
    pub async fn play_track(&self, track: Track) -> Result<(), PlayError> {
        match self.backend.play_track(&track.path).await {
            Ok(()) => {
                info!(path = %track.path, "playing");
                self.player.active_track.set(Some(track));
                self.player.is_playing.set(true);
                Ok(())
            }
            Err(e) => {
                error!(path = %track.path, cause = %e.cause, "failed to play track");
                Err(e)
            }
        }
    }

    /// Play the track after the active one, wrapping to the first.
    pub async fn play_next(&self) {
        self.step(next_index).await;
    }

    /// Play the track before the active one, wrapping to the last. With no
    /// active track (or one missing from the list) this plays the first
    /// track, the same as `play_next`.
    pub async fn play_previous(&self) {
        self.step(previous_index).await;
    }

    /// Play the track at `index` in the current list. Out-of-range is a no-op.
    pub async fn play_index(&self, index: usize) {
        if let Some(track) = self.player.track_at(index) {
            let _ = self.play_track(track).await;
        }
    }

    async fn step(&self, pick: fn(Option<usize>, usize) -> Option<usize>) {
        let chosen = self.player.track_list.with(|list| {
            let current = self
                .player
                .active_track
                .with(|active| index_of(active.as_ref(), list));
            pick(current, list.len()).and_then(|i| list.get(i).cloned())
        });

        if let Some(track) = chosen {
            // Failures are already logged and leave state untouched.
            let _ = self.play_track(track).await;
        }
    }

    pub fn start_timer(&mut self) {
        self.playback.start_timer();
    }

    pub fn start_timer_at(&mut self, now: Instant) {
        self.playback.start_timer_at(now);
    }

    pub fn stop_timer(&mut self) {
        self.playback.stop_timer();
    }

    /// Fire every timer tick due at `now`; see `PlaybackState::advance_timer`.
    pub fn advance_timer(&mut self, now: Instant) -> u32 {
        self.playback.advance_timer(now)
    }

    /// Stop the timer and lower the playing flag.
    pub fn shutdown(&mut self) {
        self.playback.stop_timer();
        self.player.is_playing.set(false);
        info!("player shut down");
    }
}
