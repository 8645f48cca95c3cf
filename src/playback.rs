//! Elapsed position, track duration, derived progress and the timer that
//! advances position while a track plays.

mod state;
mod timer;

pub use state::{PlaybackState, progress_percent};
pub use timer::{PlaybackTimer, TICK};

#[cfg(test)]
mod tests;
