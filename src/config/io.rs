use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::models::Config;

/// Load the configuration from `path`.
///
/// A missing file is not an error: it means no credential has been configured
/// yet, so an empty `Config` is returned. A file that exists but cannot be
/// read or does not parse as JSON is propagated to the caller, never swallowed
/// here.
pub fn load(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("cannot read {}", path.display()))?;
    let config: Config = serde_json::from_str(&content)
        .with_context(|| format!("invalid JSON in {}", path.display()))?;
    Ok(config)
}

/// Save the configuration to `path`, creating the parent directory if needed.
///
/// Overwrites the whole file. Writes to a temp file and then renames it into
/// place (best-effort cross-platform).
pub fn save(path: &Path, config: &Config) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("cannot create {}", parent.display()))?;
    }

    let json = serde_json::to_string_pretty(config).context("failed to serialize config")?;

    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, &json).with_context(|| format!("cannot write {}", tmp.display()))?;
    let _ = fs::remove_file(path);
    if fs::rename(&tmp, path).is_err() {
        // fallback direct write
        fs::write(path, &json).with_context(|| format!("cannot write {}", path.display()))?;
    }
    Ok(())
}

/// Delete the configuration file. Returns `true` if a file was removed,
/// `false` if there was nothing to reset.
pub fn reset(path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(false);
    }
    fs::remove_file(path).with_context(|| format!("cannot remove {}", path.display()))?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn load_missing_file_returns_empty_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");

        let config = load(&path).unwrap();
        assert!(!config.has_api_key());
        assert!(config.extra.is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = Config::default();
        config.gemini_api_key = Some("SECRET1".to_string());
        save(&path, &config).unwrap();

        assert_eq!(load(&path).unwrap(), config);
    }

    #[test]
    fn save_creates_missing_parent_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".doc-pilot").join("config.json");

        save(&path, &Config::default()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn unknown_fields_survive_load_and_save() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(
            &path,
            r#"{ "geminiApiKey": "SECRET1", "theme": "dark" }"#,
        )
        .unwrap();

        let config = load(&path).unwrap();
        save(&path, &config).unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw["geminiApiKey"], json!("SECRET1"));
        assert_eq!(raw["theme"], json!("dark"));
    }

    #[test]
    fn load_invalid_json_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();

        assert!(load(&path).is_err());
    }

    #[test]
    fn reset_removes_file_and_reports_it() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{}").unwrap();

        assert!(reset(&path).unwrap());
        assert!(!path.exists());
        assert!(load(&path).unwrap().extra.is_empty());
    }

    #[test]
    fn reset_without_file_is_a_noop() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");

        assert!(!reset(&path).unwrap());
        assert!(!load(&path).unwrap().has_api_key());
    }
}
