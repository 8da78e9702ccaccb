//! Loading and printing scene configuration files.

use std::fs;
use std::path::Path;

use greeting_common::SceneConfig;
use tracing::info;

use crate::error::Result;

/// Read a JSON scene configuration, or the built-in defaults when `path` is
/// `None`. Missing fields take their default values.
pub fn load(path: Option<&Path>) -> Result<SceneConfig> {
    let Some(path) = path else {
        return Ok(SceneConfig::default());
    };
    let text = fs::read_to_string(path)?;
    let config = serde_json::from_str(&text)?;
    info!(path = %path.display(), "loaded scene configuration");
    Ok(config)
}

/// Pretty JSON for `--dump-config`.
pub fn to_json(config: &SceneConfig) -> Result<String> { Ok(serde_json::to_string_pretty(config)?) }
