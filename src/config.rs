use log::info;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_PATH: &str = "folio.toml";

#[derive(Debug)]
pub enum ConfigError {
    Io(PathBuf, std::io::Error),
    Parse(PathBuf, toml::de::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(path, e) => write!(f, "cannot read {}: {}", path.display(), e),
            ConfigError::Parse(path, e) => write!(f, "cannot parse {}: {}", path.display(), e),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Site configuration, read from `folio.toml`. Every key is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Directory served as static files; also the base for a local content document.
    pub site_dir: PathBuf,
    /// Relative location of the content document.
    pub content: String,
    /// Remote base the content location is resolved against. Local when unset.
    pub base_url: Option<String>,
    /// Custom page shell. The built-in shell is used when unset.
    pub shell: Option<PathBuf>,
    /// Image logo used when the document names none. Empty disables it.
    pub default_logo: String,
    pub interactions: InteractionConfig,
    /// Initial region content (raw HTML), keyed by placeholder name.
    pub regions: BTreeMap<String, String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            site_dir: PathBuf::from("site"),
            content: "content.json".to_string(),
            base_url: None,
            shell: None,
            default_logo: "VL.png".to_string(),
            interactions: InteractionConfig::default(),
            regions: BTreeMap::new(),
        }
    }
}

/// Timing and geometry shared by the Rust interaction models and the
/// generated client script.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionConfig {
    pub typewriter_delay_ms: u64,
    pub typewriter_interval_ms: u64,
    pub tilt_divisor: f64,
    pub blob_speed: f64,
    pub magnetic_strength: f64,
    pub reveal_threshold: f64,
    pub reveal_root_margin: String,
    pub reveal_animation: String,
    pub copy_feedback_ms: u64,
    pub copy_confirmation: String,
    pub scroll_duration_ms: u64,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        InteractionConfig {
            typewriter_delay_ms: 1000,
            typewriter_interval_ms: 50,
            tilt_divisor: 25.0,
            blob_speed: 2.0,
            magnetic_strength: 0.3,
            reveal_threshold: 0.1,
            reveal_root_margin: "0px 0px -50px 0px".to_string(),
            reveal_animation: "fadeInUp 1s ease forwards".to_string(),
            copy_feedback_ms: 2000,
            copy_confirmation: "Copied!".to_string(),
            scroll_duration_ms: 600,
        }
    }
}

impl SiteConfig {
    /// Load from `path`. A missing file is not an error: defaults apply.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            info!("No config at {}, using defaults", path.display());
            return Ok(SiteConfig::default());
        }
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        let config: SiteConfig =
            toml::from_str(&raw).map_err(|e| ConfigError::Parse(path.to_path_buf(), e))?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = SiteConfig::load(&dir.path().join("folio.toml")).unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.interactions.copy_feedback_ms, 2000);
        assert_eq!(config.interactions.typewriter_interval_ms, 50);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("folio.toml");
        std::fs::write(
            &path,
            r#"
base_url = "https://cdn.example.com/"
default_logo = ""

[interactions]
typewriter_delay_ms = 250

[regions]
logo = '<img src="me.svg" alt="me">'
"#,
        )
        .unwrap();
        let config = SiteConfig::load(&path).unwrap();
        assert_eq!(config.base_url.as_deref(), Some("https://cdn.example.com/"));
        assert_eq!(config.default_logo, "");
        assert_eq!(config.content, "content.json");
        assert_eq!(config.interactions.typewriter_delay_ms, 250);
        assert_eq!(config.interactions.typewriter_interval_ms, 50);
        assert!(config.regions["logo"].contains("me.svg"));
    }

    #[test]
    fn test_bad_toml_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("folio.toml");
        std::fs::write(&path, "site_dir = [").unwrap();
        let err = SiteConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(..)));
    }
}
