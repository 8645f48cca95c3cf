use serde_json::Value;
use tracing::debug;

use crate::library::Track;

/// Where a page load runs.
#[derive(Debug, Clone)]
pub enum NavigationEnv {
    /// Inside the webview, with the transient state attached to the current
    /// history entry (if any).
    Browser { history_state: Option<Value> },
    /// Prerender / server side: no history exists.
    Server,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NowPlayingData {
    pub track: Option<Track>,
}

/// Pick up the track the previous page attached to the navigation.
///
/// Absence is not an error: a missing, `null` or malformed `track` field
/// yields `track: None`, as does running outside the browser.
pub fn load_now_playing(env: &NavigationEnv) -> NowPlayingData {
    let track = match env {
        NavigationEnv::Browser { history_state } => history_state
            .as_ref()
            .and_then(|state| state.get("track"))
            .filter(|v| !v.is_null())
            .and_then(|v| match serde_json::from_value::<Track>(v.clone()) {
                Ok(t) => Some(t),
                Err(e) => {
                    debug!(error = %e, "ignoring malformed track in navigation state");
                    None
                }
            }),
        NavigationEnv::Server => None,
    };

    NowPlayingData { track }
}
