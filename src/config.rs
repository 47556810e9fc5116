use crate::error::{DetectError, Result};
use crate::types::config::DetectConfig;
use std::path::{Path, PathBuf};
use toml::{Table, Value};

pub const DEFAULT_CONFIG_FILE: &str = "codetect.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".codetect/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/codetect/config.toml";

/// Loads the layered configuration rooted at `root`.
///
/// Layers apply global, then repo, then local, later layers winning per
/// key. Returns `None` when no repo-level file exists; callers then run on
/// defaults.
pub fn load_config(root: &Path) -> Result<Option<DetectConfig>> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, global.as_deref())
}

pub(crate) fn load_config_with_global(
    root: &Path,
    global_path: Option<&Path>,
) -> Result<Option<DetectConfig>> {
    let repo_path = root.join(DEFAULT_CONFIG_FILE);
    if !repo_path.exists() {
        return Ok(None);
    }

    let mut layers: Vec<PathBuf> = Vec::new();
    if let Some(path) = global_path {
        layers.push(path.to_path_buf());
    }
    layers.push(repo_path);
    layers.push(root.join(DEFAULT_LOCAL_FILE));

    let mut merged = Table::new();
    for layer in &layers {
        if !layer.exists() {
            continue;
        }
        overlay(&mut merged, parse_layer(layer)?);
    }

    let config: DetectConfig = Value::Table(merged)
        .try_into()
        .map_err(|err: toml::de::Error| DetectError::ConfigParse(err.to_string()))?;
    Ok(Some(config))
}

fn parse_layer(path: &Path) -> Result<Table> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|err| DetectError::ConfigParse(format!("{}: {}", path.display(), err)))
}

fn overlay(base: &mut Table, layer: Table) {
    for (key, value) in layer {
        match (base.get_mut(&key), value) {
            (Some(Value::Table(existing)), Value::Table(incoming)) => {
                overlay(existing, incoming);
            }
            (_, value) => {
                base.insert(key, value);
            }
        }
    }
}
