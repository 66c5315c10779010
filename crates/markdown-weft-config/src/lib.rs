use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// Viewer settings, read from `~/.config/markdown-weft/config.toml`.
///
/// Every section and key is optional; anything missing takes its default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub viewer: ViewerConfig,
    pub images: ImageConfig,
    pub links: LinkConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Soft-wrap paragraphs to the terminal width.
    pub wrap: bool,
    /// Print `<url>` after link text.
    pub show_link_targets: bool,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            wrap: true,
            show_link_targets: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageConfig {
    /// Resolve image references in the background.
    pub fetch: bool,
    pub timeout_secs: u64,
    /// Where relative image paths are looked up. Defaults to the document's
    /// own directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_dir: Option<PathBuf>,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            fetch: true,
            timeout_secs: 10,
            base_dir: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkConfig {
    /// Program run with the URL as its only argument when a link is
    /// activated. Without one, activation is only logged.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_command: Option<String>,
}

impl Config {
    /// Loads `config_path`, falling back to defaults when it does not exist.
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Self, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the image base directory
        config.images.base_dir = config
            .images
            .base_dir
            .map(|dir| Self::expand_path(&dir).unwrap_or(dir));

        Ok(config)
    }

    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/markdown-weft");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_config_path() {
        let config_path = Config::config_path();
        let path_str = config_path.to_string_lossy();

        // Should not contain tilde anymore
        assert!(!path_str.starts_with('~'));
        assert!(path_str.ends_with(".config/markdown-weft/config.toml"));
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.viewer.wrap);
        assert!(!config.viewer.show_link_targets);
        assert!(config.images.fetch);
        assert_eq!(config.images.timeout_secs, 10);
        assert_eq!(config.images.base_dir, None);
        assert_eq!(config.links.open_command, None);
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let original = Config {
            viewer: ViewerConfig {
                wrap: false,
                show_link_targets: true,
            },
            images: ImageConfig {
                fetch: false,
                timeout_secs: 3,
                base_dir: Some(PathBuf::from("/tmp/images")),
            },
            links: LinkConfig {
                open_command: Some("xdg-open".into()),
            },
        };

        let toml_str = toml::to_string(&original).unwrap();
        let deserialized: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(original, deserialized);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config: Config = toml::from_str("[images]\ntimeout_secs = 2\n").unwrap();
        assert_eq!(config.images.timeout_secs, 2);
        assert!(config.images.fetch);
        assert_eq!(config.viewer, ViewerConfig::default());
    }

    #[test]
    fn test_expand_path_with_tilde() {
        let path = PathBuf::from("~/test/path");
        let expanded = Config::expand_path(&path);

        assert!(expanded.is_some());
        let expanded = expanded.unwrap();
        assert!(!expanded.to_string_lossy().starts_with('~'));
        assert!(expanded.to_string_lossy().contains("test/path"));
    }

    #[test]
    fn test_expand_path_with_env_var() {
        unsafe {
            env::set_var("WEFT_TEST_VAR", "/test/env/path");
        }

        let path = PathBuf::from("$WEFT_TEST_VAR/subdir");
        let expanded = Config::expand_path(&path);

        assert_eq!(expanded, Some(PathBuf::from("/test/env/path/subdir")));

        unsafe {
            env::remove_var("WEFT_TEST_VAR");
        }
    }

    #[test]
    fn test_expand_path_with_relative_path() {
        let path = PathBuf::from("relative/path");
        let expanded = Config::expand_path(&path).unwrap();

        assert_eq!(expanded, path);
    }

    #[test]
    fn test_load_config_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let non_existent_config = temp_dir.path().join("nonexistent.toml");

        let result = Config::load_from_path(&non_existent_config).unwrap();

        assert_eq!(result, Config::default());
    }

    #[test]
    fn test_load_malformed_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "[viewer\nwrap = ").unwrap();

        let err = Config::load_from_path(&config_file).unwrap_err();

        assert!(matches!(err, ConfigError::ConfigParseError { .. }));
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn test_base_dir_env_var_in_toml() {
        unsafe {
            env::set_var("WEFT_PICS", "/custom/pics");
        }

        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "[images]\nbase_dir = \"$WEFT_PICS/shots\"\n").unwrap();

        let config = Config::load_from_path(&config_file).unwrap();

        assert_eq!(
            config.images.base_dir,
            Some(PathBuf::from("/custom/pics/shots"))
        );

        unsafe {
            env::remove_var("WEFT_PICS");
        }
    }
}
