use crate::library::Track;

/// Position of `current` in `list`, matched by path.
pub fn index_of(current: Option<&Track>, list: &[Track]) -> Option<usize> {
    let current = current?;
    list.iter().position(|t| t.same_as(current))
}

/// The track after `current`, wrapping to the first. A missing or unknown
/// `current` selects the first track; an empty list selects nothing.
pub fn find_next_track<'a>(current: Option<&Track>, list: &'a [Track]) -> Option<&'a Track> {
    if list.is_empty() {
        return None;
    }
    match index_of(current, list) {
        Some(i) => list.get((i + 1) % list.len()),
        None => list.first(),
    }
}

/// Index after `current` in a list of `len`, wrapping. `None` counts as the
/// slot before the first track, so it yields 0.
pub fn next_index(current: Option<usize>, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some(current.map_or(0, |i| (i + 1) % len))
}

/// Index before `current` in a list of `len`, wrapping.
///
/// With no current track this selects 0 rather than the last track, which is
/// not the mirror image of `next_index`.
pub fn previous_index(current: Option<usize>, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some(current.map_or(0, |i| (i + len - 1) % len))
}
