use std::path::PathBuf;

/// `<home>/.doc-pilot`
pub fn config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".doc-pilot")
}

/// `<home>/.doc-pilot/config.json`
pub fn config_path() -> PathBuf {
    config_dir().join("config.json")
}
