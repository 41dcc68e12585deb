use crate::error::{Result, ScorecardError};
use crate::types::config::ScorecardConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;

pub const DEFAULT_CONFIG_FILE: &str = "scorecard.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".scorecard/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/scorecard/config.toml";

/// Loads the layered configuration for a data directory: global defaults
/// under $HOME, the directory's own scorecard.toml, then local overrides.
pub fn load_config(root: &Path) -> Result<ScorecardConfig> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, global.as_deref())
}

pub(crate) fn load_config_with_global(
    root: &Path,
    global_path: Option<&Path>,
) -> Result<ScorecardConfig> {
    let repo_path = root.join(DEFAULT_CONFIG_FILE);
    if !repo_path.exists() {
        return Err(ScorecardError::ConfigParse(format!(
            "missing {} in {}",
            DEFAULT_CONFIG_FILE,
            root.display()
        )));
    }

    let mut merged = Value::Table(Map::new());
    if let Some(path) = global_path {
        merge_file_if_exists(&mut merged, path)?;
    }
    merge_file_if_exists(&mut merged, &repo_path)?;
    merge_file_if_exists(&mut merged, &root.join(DEFAULT_LOCAL_FILE))?;

    let cfg: ScorecardConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| ScorecardError::ConfigParse(e.to_string()))?;
    cfg.validate()?;
    Ok(cfg)
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }
    let content = std::fs::read_to_string(path)?;
    let overlay: Value = toml::from_str(&content)
        .map_err(|e| ScorecardError::ConfigParse(format!("{}: {}", path.display(), e)))?;
    merge_toml(merged, overlay);
    Ok(())
}

/// Recursively folds an overlay into the accumulated value. Tables merge
/// key by key; any scalar or array in a later layer replaces the earlier
/// value wholesale.
fn merge_toml(base: &mut Value, overlay: Value) {
    match overlay {
        Value::Table(overlay_table) => {
            let Value::Table(base_table) = base else {
                *base = Value::Table(overlay_table);
                return;
            };
            for (key, value) in overlay_table {
                match base_table.entry(key) {
                    toml::map::Entry::Occupied(mut existing) => {
                        merge_toml(existing.get_mut(), value);
                    }
                    toml::map::Entry::Vacant(slot) => {
                        slot.insert(value);
                    }
                }
            }
        }
        other => *base = other,
    }
}
