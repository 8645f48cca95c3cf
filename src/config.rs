//! Configuration loader and schema types.
//!
//! Settings are layered from struct defaults, an optional TOML file and
//! `ENCORE__`-prefixed environment variables.

mod load;
mod schema;

pub use load::{SettingsError, default_config_path, resolve_config_path};
pub use schema::*;
