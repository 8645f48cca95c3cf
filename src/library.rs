//! Track model and the folder scan that produces the track list.

mod model;
mod scan;

pub use model::Track;
pub use scan::scan;
