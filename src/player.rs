//! Track list, active track, playing flag and volume, the pure next/previous
//! selection helpers, and the seam to the native playback backend.

mod backend;
mod select;
mod state;

pub use backend::{PlayError, PlaybackBackend};
pub use select::{find_next_track, index_of, next_index, previous_index};
pub use state::PlayerState;
