use anyhow::Context;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub mod defaults;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub theme: ThemeConfig,
    pub input: InputConfig,
    pub paths: PathsConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Start the session in dark mode.
    pub start_dark: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    pub mouse: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub data_dir: PathBuf,
    /// Swatch dataset (.json or .toml). Built-in swatches when unset.
    pub swatches: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// One of trace, debug, info, warn, error
    pub level: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self { start_dark: true }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self { mouse: true }
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        let proj = ProjectDirs::from("dev", "swatchbook", "swatchbook");
        let data_dir = proj
            .as_ref()
            .map(|p| p.data_dir().to_path_buf())
            .unwrap_or_else(|| std::env::temp_dir().join("swatchbook"));
        Self {
            data_dir,
            swatches: None,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl LogConfig {
    /// Falls back to INFO on an unknown level name.
    pub fn max_level(&self) -> tracing::Level {
        self.level.parse().unwrap_or(tracing::Level::INFO)
    }
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    let proj = ProjectDirs::from("dev", "swatchbook", "swatchbook")
        .context("ProjectDirs unavailable")?;
    Ok(proj.config_dir().join("config.toml"))
}

pub fn parse(raw: &str) -> anyhow::Result<Config> {
    toml::from_str::<Config>(raw).context("parse config")
}

pub fn load(override_path: Option<&Path>) -> anyhow::Result<Config> {
    let path = match override_path {
        Some(p) => p.to_path_buf(),
        None => default_config_path()?,
    };

    if !path.exists() {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create dir {}", parent.display()))?;
        }
        let cfg = defaults::defaults();
        let raw = toml::to_string_pretty(&cfg).context("serialize default config")?;
        fs::write(&path, raw).with_context(|| format!("write {}", path.display()))?;
        return Ok(cfg);
    }

    let raw = fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
    parse(&raw).with_context(|| format!("load {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let cfg = parse("").unwrap();
        assert!(cfg.theme.start_dark);
        assert!(cfg.input.mouse);
        assert!(cfg.paths.swatches.is_none());
        assert_eq!(cfg.log.max_level(), tracing::Level::INFO);
    }

    #[test]
    fn test_partial_config() {
        let cfg = parse(
            r#"
[theme]
start_dark = false

[paths]
swatches = "/tmp/swatches.json"

[log]
level = "debug"
"#,
        )
        .unwrap();
        assert!(!cfg.theme.start_dark);
        assert!(cfg.input.mouse);
        assert_eq!(cfg.paths.swatches, Some(PathBuf::from("/tmp/swatches.json")));
        assert_eq!(cfg.log.max_level(), tracing::Level::DEBUG);
    }

    #[test]
    fn test_mouse_can_be_disabled() {
        let cfg = parse("[input]\nmouse = false\n").unwrap();
        assert!(!cfg.input.mouse);
        assert!(cfg.theme.start_dark);
    }

    #[test]
    fn test_unknown_log_level_falls_back() {
        let cfg = parse("[log]\nlevel = \"loud\"\n").unwrap();
        assert_eq!(cfg.log.max_level(), tracing::Level::INFO);
    }

    #[test]
    fn test_defaults_round_trip_through_toml() {
        let raw = toml::to_string_pretty(&defaults::defaults()).unwrap();
        let cfg = parse(&raw).unwrap();
        assert!(cfg.theme.start_dark);
    }

    #[test]
    fn test_load_creates_missing_file() {
        let dir = std::env::temp_dir().join(format!("swatchbook-cfg-{}", std::process::id()));
        let path = dir.join("config.toml");
        let _ = fs::remove_dir_all(&dir);

        let cfg = load(Some(&path)).unwrap();
        assert!(cfg.theme.start_dark);
        assert!(path.exists());

        let _ = fs::remove_dir_all(&dir);
    }
}
