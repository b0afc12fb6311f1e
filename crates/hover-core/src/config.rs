//! Configuration types for the Hover tools
//!
//! Values are resolved with the following priority (highest to lowest):
//!
//! 1. **Explicit CLI arguments** (including their environment variables)
//! 2. **TOML config file**, `[hover]` table
//! 3. **Built-in defaults**
//!
//! ```toml
//! [hover]
//! username = "USERNAME"
//! password = "PASSWORD"
//! domain = "home.example.com"   # dynhover target
//! ```

use crate::error::{Error, Result};
use crate::model::Credentials;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Default Hover API base URL
pub const DEFAULT_API_BASE: &str = "https://www.hover.com/api";

/// Default public IP discovery service (plain-text body)
pub const DEFAULT_IP_URL: &str = "https://api.ipify.org";

/// Settings for the HTTP side of the session client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    /// API base URL; the sign-in endpoint is `{api_base}/login`
    pub api_base: String,

    /// Per-request timeout; `None` leaves the transport default in place
    pub timeout: Option<Duration>,
}

impl ClientSettings {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
            timeout: None,
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

/// IP version accepted from the public IP service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IpVersion {
    /// IPv4 only
    V4,
    /// IPv6 only
    V6,
    /// Either
    Both,
}

/// One layer of partially specified configuration
///
/// The CLI and the config file each produce a layer; [`HoverConfig::resolve`]
/// merges them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ConfigLayer {
    pub username: Option<String>,
    pub password: Option<String>,
    /// Fully-qualified name for dynamic updates
    pub domain: Option<String>,
    pub api_base: Option<String>,
    pub ip_url: Option<String>,
}

impl ConfigLayer {
    /// Fill every unset field of `self` from `lower`
    pub fn or(self, lower: ConfigLayer) -> ConfigLayer {
        ConfigLayer {
            username: self.username.or(lower.username),
            password: self.password.or(lower.password),
            domain: self.domain.or(lower.domain),
            api_base: self.api_base.or(lower.api_base),
            ip_url: self.ip_url.or(lower.ip_url),
        }
    }

    /// Parse the `[hover]` table of a TOML document
    pub fn from_toml(text: &str) -> Result<ConfigLayer> {
        #[derive(Deserialize)]
        struct ConfigFile {
            hover: Option<ConfigLayer>,
        }

        let file: ConfigFile =
            toml::from_str(text).map_err(|e| Error::config(format!("invalid config file: {}", e)))?;

        file.hover
            .ok_or_else(|| Error::config("config file has no [hover] section"))
    }

    /// Read and parse a TOML config file
    pub fn from_file(path: impl AsRef<Path>) -> Result<ConfigLayer> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!("cannot read config file {}: {}", path.display(), e))
        })?;
        Self::from_toml(&text)
    }
}

/// Fully resolved configuration
#[derive(Debug, Clone)]
pub struct HoverConfig {
    pub credentials: Credentials,
    pub client: ClientSettings,
    /// Fully-qualified name for dynamic updates, if configured
    pub domain: Option<String>,
    /// Public IP discovery URL
    pub ip_url: String,
}

impl HoverConfig {
    /// Merge CLI and file layers and apply defaults
    pub fn resolve(cli: ConfigLayer, file: Option<ConfigLayer>) -> Result<Self> {
        let merged = match file {
            Some(file) => cli.or(file),
            None => cli,
        };

        let username = merged.username.ok_or_else(|| {
            Error::config("You must specify either a conf file, or a username and password")
        })?;
        let password = merged.password.ok_or_else(|| {
            Error::config("You must specify either a conf file, or a username and password")
        })?;

        let config = Self {
            credentials: Credentials::new(username, password),
            client: ClientSettings::new(
                merged
                    .api_base
                    .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            ),
            domain: merged.domain,
            ip_url: merged.ip_url.unwrap_or_else(|| DEFAULT_IP_URL.to_string()),
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.credentials.username.is_empty() {
            return Err(Error::config("username cannot be empty"));
        }
        if self.credentials.password.is_empty() {
            return Err(Error::config("password cannot be empty"));
        }

        validate_url("api_base", &self.client.api_base)?;
        validate_url("ip_url", &self.ip_url)?;

        if let Some(ref domain) = self.domain
            && domain.trim().is_empty()
        {
            return Err(Error::config("domain cannot be empty"));
        }

        Ok(())
    }
}

fn validate_url(field: &str, url: &str) -> Result<()> {
    if !url.starts_with("https://") && !url.starts_with("http://") {
        return Err(Error::config(format!(
            "{} must use HTTP or HTTPS scheme. Got: {}",
            field, url
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layer(username: Option<&str>, password: Option<&str>) -> ConfigLayer {
        ConfigLayer {
            username: username.map(String::from),
            password: password.map(String::from),
            ..ConfigLayer::default()
        }
    }

    #[test]
    fn test_from_toml_reads_hover_table() {
        let text = r#"
            [hover]
            username = "alice"
            password = "secret"
            domain = "home.example.com"
        "#;
        let parsed = ConfigLayer::from_toml(text).unwrap();
        assert_eq!(parsed.username.as_deref(), Some("alice"));
        assert_eq!(parsed.password.as_deref(), Some("secret"));
        assert_eq!(parsed.domain.as_deref(), Some("home.example.com"));
        assert_eq!(parsed.api_base, None);
    }

    #[test]
    fn test_from_toml_without_hover_table() {
        let err = ConfigLayer::from_toml("[other]\nusername = \"x\"\n").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_cli_overrides_file() {
        let cli = layer(Some("cli-user"), None);
        let file = layer(Some("file-user"), Some("file-pass"));

        let config = HoverConfig::resolve(cli, Some(file)).unwrap();
        assert_eq!(config.credentials.username, "cli-user");
        assert_eq!(config.credentials.password, "file-pass");
        assert_eq!(config.client.api_base, DEFAULT_API_BASE);
        assert_eq!(config.ip_url, DEFAULT_IP_URL);
    }

    #[test]
    fn test_missing_password_is_config_error() {
        let err = HoverConfig::resolve(layer(Some("alice"), None), None).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_invalid_api_base_rejected() {
        let cli = ConfigLayer {
            api_base: Some("ftp://hover.com".to_string()),
            ..layer(Some("alice"), Some("secret"))
        };
        assert!(HoverConfig::resolve(cli, None).is_err());
    }

    #[test]
    fn test_timeout_unset_by_default() {
        assert_eq!(ClientSettings::default().timeout, None);

        let settings = ClientSettings::default().with_timeout(Duration::from_secs(5));
        assert_eq!(settings.timeout, Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hover.toml");
        std::fs::write(&path, "[hover]\nusername = \"bob\"\npassword = \"pw\"\n").unwrap();

        let parsed = ConfigLayer::from_file(&path).unwrap();
        assert_eq!(parsed.username.as_deref(), Some("bob"));
    }
}
