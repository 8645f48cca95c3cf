use crate::library::Track;
use crate::store::Writable;

use super::select::index_of;

/// Observable player cells. The track list is replaced wholesale by whatever
/// loads the library; the active track names an entry but never owns the list.
#[derive(Debug, Clone)]
pub struct PlayerState {
    pub track_list: Writable<Vec<Track>>,
    pub active_track: Writable<Option<Track>>,
    pub is_playing: Writable<bool>,
    pub volume: Writable<f32>,
}

impl PlayerState {
    pub fn new(volume: f32) -> Self {
        Self {
            track_list: Writable::new(Vec::new()),
            active_track: Writable::new(None),
            is_playing: Writable::new(false),
            volume: Writable::new(volume),
        }
    }

    /// Index of the active track in the current list, if it is there.
    pub fn active_index(&self) -> Option<usize> {
        self.active_track
            .with(|active| self.track_list.with(|list| index_of(active.as_ref(), list)))
    }

    /// Clone of the track at `index` in the current list.
    pub fn track_at(&self, index: usize) -> Option<Track> {
        self.track_list.with(|list| list.get(index).cloned())
    }
}

impl Default for PlayerState {
    fn default() -> Self {
        Self::new(1.0)
    }
}
