//! Configuration file (jsxify.toml).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::Deserialize;

/// Configuration file structure.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub build: BuildSettings,
    #[serde(default)]
    pub server: ServerSettings,
}

#[derive(Debug, Deserialize)]
pub struct BuildSettings {
    #[serde(default = "default_src")]
    pub src: String,
    #[serde(default = "default_out")]
    pub out: String,
    #[serde(default = "default_extension")]
    pub extension: String,
    #[serde(default = "default_true")]
    pub component: bool,
    /// Custom component template
    pub template: Option<String>,
}

impl Default for BuildSettings {
    fn default() -> Self {
        Self {
            src: default_src(),
            out: default_out(),
            extension: default_extension(),
            component: true,
            template: None,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_true")]
    pub open: bool,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            open: true,
        }
    }
}

fn default_src() -> String {
    "html".to_string()
}
fn default_out() -> String {
    "jsx".to_string()
}
fn default_extension() -> String {
    "jsx".to_string()
}
fn default_host() -> String {
    "127.0.0.1".to_string()
}
fn default_port() -> u16 {
    7777
}
fn default_true() -> bool {
    true
}

/// Load configuration from the given path if it exists.
/// Returns an error if the config file exists but is malformed.
pub fn load_config(path: &Path) -> Result<ConfigFile> {
    if path.exists() {
        let content = fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))?;
        let config: ConfigFile = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path.display(), e))?;
        tracing::debug!("Loaded config from {}", path.display());
        return Ok(config);
    }
    Ok(ConfigFile::default())
}

/// Resolve a configured path against the directory holding the config file.
pub fn resolve_path(config_path: &Path, path: &str) -> PathBuf {
    config_path.parent().unwrap_or(Path::new("")).join(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn missing_file_uses_defaults() {
        let temp = tempdir().unwrap();
        let config = load_config(&temp.path().join("jsxify.toml")).unwrap();

        assert_eq!(config.build.src, "html");
        assert_eq!(config.build.out, "jsx");
        assert!(config.build.component);
        assert_eq!(config.server.port, 7777);
        assert!(config.server.open);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("jsxify.toml");
        fs::write(&path, "[build]\nout = \"components\"\n\n[server]\nport = 3000\n").unwrap();

        let config = load_config(&path).unwrap();

        assert_eq!(config.build.src, "html");
        assert_eq!(config.build.out, "components");
        assert_eq!(config.build.extension, "jsx");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.host, "127.0.0.1");
    }

    #[test]
    fn malformed_file_is_an_error() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("jsxify.toml");
        fs::write(&path, "[build\nsrc = ").unwrap();

        assert!(load_config(&path).is_err());
    }

    #[test]
    fn resolves_paths_next_to_config() {
        assert_eq!(
            resolve_path(Path::new("jsxify.toml"), "html"),
            PathBuf::from("html")
        );
        assert_eq!(
            resolve_path(Path::new("site/jsxify.toml"), "html"),
            PathBuf::from("site/html")
        );
    }

    #[test]
    fn default_config_file_parses() {
        let config: ConfigFile = toml::from_str(crate::commands::init::DEFAULT_CONFIG).unwrap();
        assert_eq!(config.build.src, "html");
        assert_eq!(config.server.port, 7777);
    }
}
