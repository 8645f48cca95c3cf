use std::time::Instant;

use tracing::debug;

use crate::library::Track;
use crate::store::{Readable, Writable, derived2};

use super::timer::PlaybackTimer;

/// `position / duration * 100`, or 0 when the duration is 0.
///
/// Not clamped: a position past the end yields more than 100.
pub fn progress_percent(position: f64, duration: f64) -> f64 {
    if duration == 0.0 {
        return 0.0;
    }
    position / duration * 100.0
}

/// Position, duration and progress of the active track, plus the timer
/// that advances position once per tick.
pub struct PlaybackState {
    pub position: Writable<f64>,
    pub duration: Writable<f64>,
    pub progress: Readable<f64>,
    timer: PlaybackTimer,
}

impl PlaybackState {
    pub fn new() -> Self {
        let position = Writable::new(0.0);
        let duration = Writable::new(0.0);
        let progress = derived2(&position.readable(), &duration.readable(), |p, d| {
            progress_percent(*p, *d)
        });

        Self {
            position,
            duration,
            progress,
            timer: PlaybackTimer::default(),
        }
    }

    pub fn set_position(&self, secs: f64) {
        self.position.set(secs);
    }

    pub fn set_duration(&self, secs: f64) {
        self.duration.set(secs);
    }

    /// Rewind to 0 and take the duration from `track` (0 when unknown).
    pub fn reset_for(&self, track: Option<&Track>) {
        let secs = track.and_then(|t| t.duration_secs).unwrap_or(0);
        self.position.set(0.0);
        self.duration.set(secs as f64);
    }

    pub fn start_timer(&mut self) {
        self.start_timer_at(Instant::now());
    }

    pub fn start_timer_at(&mut self, now: Instant) {
        self.timer.start(now);
        debug!(period_ms = self.timer.period().as_millis() as u64, "position timer started");
    }

    pub fn stop_timer(&mut self) {
        if self.timer.is_running() {
            debug!("position timer stopped");
        }
        self.timer.stop();
    }

    pub fn timer_running(&self) -> bool {
        self.timer.is_running()
    }

    pub fn next_tick(&self) -> Option<Instant> {
        self.timer.next_deadline()
    }

    /// Fire every tick due at `now`, adding one second of position per tick.
    /// Ticks caught up by a late poll land as a single position update.
    /// Returns the number of ticks fired.
    pub fn advance_timer(&mut self, now: Instant) -> u32 {
        let ticks = self.timer.poll(now);
        if ticks > 0 {
            self.position.update(|p| p + f64::from(ticks));
        }
        ticks
    }

    /// Whether a known, non-zero duration has been reached.
    pub fn at_end(&self) -> bool {
        let d = self.duration.get();
        d > 0.0 && self.position.get() >= d
    }
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self::new()
    }
}
