//! Optional version lookup in a local `package.json`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;

/// Look up `library` among the direct and development dependencies declared in
/// `dir/package.json` and turn a declared version into a prompt fragment like
/// `version ^18.2.0`.
///
/// A missing manifest or an undeclared library yields `Ok(None)`. A manifest
/// that exists but is not valid JSON is an error for the caller to surface.
pub fn version_context(dir: &Path, library: &str) -> Result<Option<String>> {
    let path = dir.join("package.json");
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(&path)
        .with_context(|| format!("cannot read {}", path.display()))?;
    let pkg: Value = serde_json::from_str(&content)
        .with_context(|| format!("invalid JSON in {}", path.display()))?;

    let version = pkg
        .get("dependencies")
        .and_then(|deps| deps.get(library))
        .and_then(Value::as_str)
        .or_else(|| {
            pkg.get("devDependencies")
                .and_then(|deps| deps.get(library))
                .and_then(Value::as_str)
        });

    Ok(version.map(|v| format!("version {v}")))
}
