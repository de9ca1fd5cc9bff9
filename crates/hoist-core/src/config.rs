use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use hoist_util::errors::HoistError;

/// Global user configuration loaded from `~/.hoist/config.toml`.
///
/// ```toml
/// default-server = "nexus"
///
/// [servers]
/// nexus = { url = "https://nexus.co", username = "deploy", password = "s3cret" }
/// staging = "https://repo.staging.example.com"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalConfig {
    #[serde(default, rename = "default-server")]
    pub default_server: Option<String>,

    #[serde(default)]
    pub servers: BTreeMap<String, ServerEntry>,
}

/// A repository-manager server reference, either a URL string or a
/// detailed configuration with credentials.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ServerEntry {
    Url(String),
    Detailed {
        url: String,
        #[serde(default)]
        username: Option<String>,
        #[serde(default)]
        password: Option<String>,
    },
}

impl GlobalConfig {
    /// Load the global configuration from `~/.hoist/config.toml`, or return
    /// defaults if the file doesn't exist.
    pub fn load() -> miette::Result<Self> {
        Self::load_from(&Self::default_path())
    }

    /// Load from an explicit path (exposed for tests and `--config`).
    pub fn load_from(path: &Path) -> miette::Result<Self> {
        if !path.is_file() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|e| HoistError::Config {
            message: format!("Failed to read {}: {e}", path.display()),
        })?;
        Self::parse_toml(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn parse_toml(content: &str) -> miette::Result<Self> {
        toml::from_str(content).map_err(|e| {
            HoistError::Config {
                message: format!("Failed to parse config: {e}"),
            }
            .into()
        })
    }

    /// Resolve the server to talk to: an explicitly named one, the
    /// configured default, or — when exactly one server is configured —
    /// that one.
    pub fn resolve_server(&self, name: Option<&str>) -> miette::Result<(String, &ServerEntry)> {
        if let Some(name) = name {
            let entry = self.servers.get(name).ok_or_else(|| HoistError::Config {
                message: format!("Unknown server '{name}' (not in [servers])"),
            })?;
            return Ok((name.to_string(), entry));
        }

        if let Some(name) = &self.default_server {
            let entry = self.servers.get(name).ok_or_else(|| HoistError::Config {
                message: format!("default-server '{name}' is not in [servers]"),
            })?;
            return Ok((name.clone(), entry));
        }

        if self.servers.len() == 1 {
            if let Some((name, entry)) = self.servers.iter().next() {
                return Ok((name.clone(), entry));
            }
        }

        Err(HoistError::Config {
            message: "No server selected: pass --server or --url, or set default-server"
                .to_string(),
        }
        .into())
    }

    /// Returns the default path to the global config file.
    pub fn default_path() -> PathBuf {
        dirs_path().join("config.toml")
    }
}

/// Returns the path to the hoist data directory (`~/.hoist/`).
pub fn dirs_path() -> PathBuf {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .unwrap_or_else(|_| ".".to_string());
    Path::new(&home).join(".hoist")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_bare_url_entry() {
        let config = GlobalConfig::parse_toml(
            r#"
            [servers]
            staging = "https://repo.staging.example.com"
            "#,
        )
        .unwrap();
        match config.servers.get("staging").unwrap() {
            ServerEntry::Url(url) => assert_eq!(url, "https://repo.staging.example.com"),
            other => panic!("expected bare URL entry, got {other:?}"),
        }
    }

    #[test]
    fn parse_detailed_entry_with_credentials() {
        let config = GlobalConfig::parse_toml(
            r#"
            [servers]
            nexus = { url = "https://nexus.co", username = "deploy", password = "s3cret" }
            "#,
        )
        .unwrap();
        match config.servers.get("nexus").unwrap() {
            ServerEntry::Detailed {
                url,
                username,
                password,
            } => {
                assert_eq!(url, "https://nexus.co");
                assert_eq!(username.as_deref(), Some("deploy"));
                assert_eq!(password.as_deref(), Some("s3cret"));
            }
            other => panic!("expected detailed entry, got {other:?}"),
        }
    }

    #[test]
    fn resolve_named_server() {
        let config = GlobalConfig::parse_toml(
            r#"
            [servers]
            a = "https://a.example.com"
            b = "https://b.example.com"
            "#,
        )
        .unwrap();
        let (name, _) = config.resolve_server(Some("b")).unwrap();
        assert_eq!(name, "b");
    }

    #[test]
    fn resolve_falls_back_to_default_server() {
        let config = GlobalConfig::parse_toml(
            r#"
            default-server = "b"

            [servers]
            a = "https://a.example.com"
            b = "https://b.example.com"
            "#,
        )
        .unwrap();
        let (name, _) = config.resolve_server(None).unwrap();
        assert_eq!(name, "b");
    }

    #[test]
    fn resolve_single_configured_server_without_default() {
        let config = GlobalConfig::parse_toml(
            r#"
            [servers]
            only = "https://only.example.com"
            "#,
        )
        .unwrap();
        let (name, _) = config.resolve_server(None).unwrap();
        assert_eq!(name, "only");
    }

    #[test]
    fn resolve_unknown_server_fails() {
        let config = GlobalConfig::default();
        assert!(config.resolve_server(Some("nope")).is_err());
    }

    #[test]
    fn resolve_with_no_servers_and_no_default_fails() {
        let config = GlobalConfig::default();
        assert!(config.resolve_server(None).is_err());
    }

    #[test]
    fn missing_file_loads_defaults() {
        let config = GlobalConfig::load_from(Path::new("/nonexistent/hoist/config.toml")).unwrap();
        assert!(config.servers.is_empty());
        assert!(config.default_server.is_none());
    }
}
