//! Loader for `.ai-rules.yml`
//!
//! The file is optional. When present it is size-checked, parsed with
//! `serde_yaml` into a raw form that mirrors the YAML, and normalized into a
//! [`RulesConfig`].

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use rulesync_fs::SyncMode;
use serde::Deserialize;
use tracing::debug;

use crate::config::{DEFAULT_INPUT_PATH, RulesConfig, ToolConfig};
use crate::{Error, Result};

/// Accepted configuration file names, in lookup order.
pub const CONFIG_FILE_NAMES: [&str; 2] = [".ai-rules.yml", ".ai-rules.yaml"];

/// Configuration files above this size are rejected before parsing.
pub const MAX_CONFIG_SIZE: u64 = 1024 * 1024;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    #[serde(default)]
    default_mode: Option<SyncMode>,
    #[serde(default)]
    input_path: Option<String>,
    #[serde(default)]
    tools: Option<BTreeMap<String, Option<ToolConfig>>>,
}

impl RawConfig {
    fn normalize(self) -> RulesConfig {
        let tools = match self.tools {
            Some(tools) => tools
                .into_iter()
                .map(|(name, config)| (name, config.unwrap_or_default()))
                .collect(),
            None => RulesConfig::builtin_tools(),
        };

        RulesConfig::new(
            self.default_mode.unwrap_or_default(),
            self.input_path.as_deref().unwrap_or(DEFAULT_INPUT_PATH),
            tools,
        )
    }
}

/// Locate the configuration file under `root`, if any.
pub fn find_config_file(root: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| root.join(name))
        .find(|path| path.is_file())
}

/// Load the configuration for the project at `root`.
///
/// A missing file yields [`RulesConfig::default`].
pub fn load_config(root: &Path) -> Result<RulesConfig> {
    let Some(path) = find_config_file(root) else {
        debug!(root = %root.display(), "No configuration file, using defaults");
        return Ok(RulesConfig::default());
    };

    let size = fs::metadata(&path)
        .map_err(|e| rulesync_fs::Error::io(&path, e))?
        .len();
    if size > MAX_CONFIG_SIZE {
        return Err(Error::ConfigTooLarge {
            path,
            size,
            max: MAX_CONFIG_SIZE,
        });
    }

    let content = rulesync_fs::io::read_text(&path)?;
    let config = parse_config(&content, &path)?;
    debug!(
        path = %path.display(),
        tools = config.tool_count(),
        "Loaded configuration"
    );
    Ok(config)
}

/// Parse configuration text. `path` is used for error messages only.
pub fn parse_config(content: &str, path: &Path) -> Result<RulesConfig> {
    if content.trim().is_empty() {
        return Ok(RulesConfig::default());
    }

    let raw: Option<RawConfig> =
        serde_yaml::from_str(content).map_err(|e| Error::InvalidConfig {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    Ok(raw.unwrap_or_default().normalize())
}
