//! Arguments shared by every tool

use clap::Args;
use hover_core::{ConfigLayer, HoverConfig, IpVersion};
use std::path::PathBuf;
use tracing::Level;

/// Credentials, endpoint and logging flags
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// The conf file that contains your username and password
    #[arg(short = 'c', long = "conf", env = "HOVER_CONF", value_name = "CONF")]
    pub conf: Option<PathBuf>,

    /// Your hover.com username
    #[arg(short, long, env = "HOVER_USERNAME")]
    pub username: Option<String>,

    /// Your hover.com password
    #[arg(short, long, env = "HOVER_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Base URL of the Hover API
    #[arg(long, env = "HOVER_API_BASE", value_name = "URL")]
    pub api_base: Option<String>,

    /// Log level written to stderr (trace, debug, info, warn, error)
    #[arg(
        long,
        env = "HOVER_LOG_LEVEL",
        default_value = "warn",
        value_parser = parse_log_level
    )]
    pub log_level: Level,
}

impl CommonArgs {
    /// The configuration layer given on the command line
    pub fn cli_layer(&self) -> ConfigLayer {
        ConfigLayer {
            username: self.username.clone(),
            password: self.password.clone(),
            api_base: self.api_base.clone(),
            ..ConfigLayer::default()
        }
    }

    /// Merge `cli` over the config file (if any) and validate
    pub fn load_config(&self, cli: ConfigLayer) -> hover_core::Result<HoverConfig> {
        let file = match &self.conf {
            Some(path) => {
                tracing::debug!("Reading configuration from {}", path.display());
                Some(ConfigLayer::from_file(path)?)
            }
            None => None,
        };

        HoverConfig::resolve(cli, file)
    }
}

/// Parse a log level name
pub fn parse_log_level(value: &str) -> Result<Level, String> {
    match value.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(format!(
            "'{}' is not valid. Valid levels: trace, debug, info, warn, error",
            value
        )),
    }
}

/// Parse an IP version name
pub fn parse_ip_version(value: &str) -> Result<IpVersion, String> {
    match value.to_lowercase().as_str() {
        "v4" | "4" => Ok(IpVersion::V4),
        "v6" | "6" => Ok(IpVersion::V6),
        "both" | "any" => Ok(IpVersion::Both),
        _ => Err(format!("'{}' is not valid. Valid versions: v4, v6, both", value)),
    }
}
