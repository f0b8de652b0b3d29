use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    /// Overrides the default settings file location.
    pub settings_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Self {
        let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let settings_path = std::env::var("PHONICS_SETTINGS").ok().map(PathBuf::from);

        Self {
            log_level,
            settings_path,
        }
    }
}
