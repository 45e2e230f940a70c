use acsum_core::ParsePolicy;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::state::{acsum_home, ensure_acsum_home};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub policy: ParsePolicy,
    pub output: OutputSection,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OutputSection {
    /// Pretty-print JSON output
    pub pretty: bool,
}

impl Default for OutputSection {
    fn default() -> Self {
        Self { pretty: true }
    }
}

pub fn config_path() -> Result<PathBuf> {
    Ok(acsum_home()?.join("config.toml"))
}

fn resolve_path(path: Option<&Path>) -> Result<PathBuf> {
    match path {
        Some(p) => Ok(p.to_path_buf()),
        None => Ok(ensure_acsum_home()?.join("config.toml")),
    }
}

/// Load `path`, or the default location. A missing file yields defaults.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let p = match path {
        Some(p) => p.to_path_buf(),
        None => config_path()?,
    };
    if !p.exists() {
        return Ok(Config::default());
    }
    let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
    toml::from_str(&s).with_context(|| format!("parse {}", p.display()))
}

pub fn save_config(cfg: &Config, path: &Path) -> Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
    }
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(path, s).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

/// Write defaults to `path` (or the default location) unless a file exists.
pub fn init_config(path: Option<&Path>) -> Result<PathBuf> {
    let p = resolve_path(path)?;
    if p.exists() {
        println!("Config already exists: {}", p.display());
        return Ok(p);
    }
    save_config(&Config::default(), &p)?;
    println!("Wrote {}", p.display());
    Ok(p)
}

#[cfg(test)]
mod tests {
    use super::*;
    use acsum_core::Field;

    #[test]
    fn test_partial_config_fills_defaults() {
        let cfg: Config = toml::from_str(
            r#"
[policy]
require_previous_ledger_balance = true

[policy.aliases]
availableMargin = ["Free\\s+Margin"]
"#,
        )
        .unwrap();
        assert!(cfg.output.pretty);
        assert!(cfg.policy.require_previous_equity);
        assert!(cfg.policy.require_previous_ledger_balance);
        assert_eq!(cfg.policy.aliases_for(Field::AvailableMargin).len(), 1);
    }

    #[test]
    fn test_default_config_round_trips_through_toml() {
        let cfg = Config::default();
        let s = toml::to_string_pretty(&cfg).unwrap();
        let back: Config = toml::from_str(&s).unwrap();
        assert_eq!(back, cfg);
    }

    #[test]
    fn test_missing_file_is_default() {
        let cfg = load_config(Some(Path::new("/nonexistent/acsum/config.toml"))).unwrap();
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn test_init_writes_to_explicit_path_once() {
        let dir = std::env::temp_dir().join(format!("acsum-config-{}", std::process::id()));
        let path = dir.join("nested").join("config.toml");
        let _ = fs::remove_dir_all(&dir);

        let written = init_config(Some(path.as_path())).unwrap();
        assert_eq!(written, path);
        assert_eq!(load_config(Some(path.as_path())).unwrap(), Config::default());

        fs::write(&path, "[output]\npretty = false\n").unwrap();
        init_config(Some(path.as_path())).unwrap();
        assert!(!load_config(Some(path.as_path())).unwrap().output.pretty);

        fs::remove_dir_all(&dir).unwrap();
    }
}
