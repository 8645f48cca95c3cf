//! Page-data loaders for the now-playing and track-detail pages.

mod now_playing;
mod track;

pub use now_playing::{NavigationEnv, NowPlayingData, load_now_playing};
pub use track::{RouteError, TRACK_NOT_FOUND, TrackData, load_track};
