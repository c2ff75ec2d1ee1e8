use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

/// Root configuration structure, deserialized from `.repo-scorer/config.toml`.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Source tree walk settings.
    #[serde(default)]
    pub scan: ScanConfig,
}

/// Controls which directories the SPDX tag walk descends into.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ScanConfig {
    /// Directory names (not paths) skipped at any depth, e.g. `"node_modules"`.
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl ScanConfig {
    pub fn is_excluded(&self, dir_name: &str) -> bool {
        self.exclude.iter().any(|e| e == dir_name)
    }
}

/// Load the configuration, searching in order:
///
/// 1. `config_override` — path passed via `--config`
/// 2. `<project_path>/.repo-scorer/config.toml`
/// 3. `~/.config/repo-scorer/config.toml`
/// 4. Built-in [`Config::default`], which excludes nothing
pub fn load_config(project_path: &Path, config_override: Option<&Path>) -> Result<Config> {
    if let Some(path) = config_override {
        return read_config(path);
    }

    let project_config = project_path.join(".repo-scorer").join("config.toml");
    if project_config.exists() {
        return read_config(&project_config);
    }

    if let Some(home) = dirs::home_dir() {
        let home_config: PathBuf = home.join(".config").join("repo-scorer").join("config.toml");
        if home_config.exists() {
            return read_config(&home_config);
        }
    }

    debug!("no config file found, using defaults");
    Ok(Config::default())
}

fn read_config(path: &Path) -> Result<Config> {
    debug!(config = %path.display(), "loading config");
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("invalid config {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_excludes_nothing() {
        let cfg = Config::default();
        assert!(cfg.scan.exclude.is_empty());
        assert!(!cfg.scan.is_excluded(".git"));
    }

    #[test]
    fn test_parse_exclude_list() {
        let cfg: Config = toml::from_str("[scan]\nexclude = [\".git\", \"target\"]\n").unwrap();
        assert!(cfg.scan.is_excluded(".git"));
        assert!(cfg.scan.is_excluded("target"));
        assert!(!cfg.scan.is_excluded("src"));
    }

    #[test]
    fn test_empty_file_is_default() {
        let cfg: Config = toml::from_str("").unwrap();
        assert!(cfg.scan.exclude.is_empty());
    }

    #[test]
    fn test_project_config_is_picked_up() {
        let dir = tempdir().unwrap();
        let cfg_dir = dir.path().join(".repo-scorer");
        std::fs::create_dir(&cfg_dir).unwrap();
        std::fs::write(cfg_dir.join("config.toml"), "[scan]\nexclude = [\"vendor\"]\n").unwrap();

        let cfg = load_config(dir.path(), None).unwrap();
        assert!(cfg.scan.is_excluded("vendor"));
    }

    #[test]
    fn test_override_wins_and_must_exist() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        assert!(load_config(dir.path(), Some(missing.as_path())).is_err());

        let custom = dir.path().join("custom.toml");
        std::fs::write(&custom, "[scan]\nexclude = [\"build\"]\n").unwrap();
        let cfg = load_config(dir.path(), Some(custom.as_path())).unwrap();
        assert!(cfg.scan.is_excluded("build"));
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let dir = tempdir().unwrap();
        let custom = dir.path().join("bad.toml");
        std::fs::write(&custom, "[scan]\nexclude = 3\n").unwrap();
        assert!(load_config(dir.path(), Some(custom.as_path())).is_err());
    }
}
