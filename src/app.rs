//! Application context: owns every playback store, the position timer and
//! the backend, and implements the play / next / previous transitions.
//!
//! The `App` model lives in `app::model`.

mod model;

pub use model::*;
