use crate::config;

/// Load and validate settings. Config is optional: any problem falls back to
/// defaults and is returned so it can be logged once logging is up.
pub fn load_settings() -> (config::Settings, Option<String>) {
    match config::Settings::load() {
        Ok(s) => match s.validate() {
            Ok(()) => (s, None),
            Err(e) => (config::Settings::default(), Some(e.to_string())),
        },
        Err(e) => (config::Settings::default(), Some(e.to_string())),
    }
}
