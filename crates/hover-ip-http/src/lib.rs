// # HTTP IP Source
//
// Discovers the caller's public address by asking an external "what is my
// IP" service.
//
// ## Behavior
//
// - One GET per call to `current()`, no caching
// - The body is trimmed and must be a bare IPv4 or IPv6 address
// - An optional version filter rejects addresses of the other family
//
// ## Services
//
// Any endpoint that answers with the address as plain text works, e.g.
// `https://api.ipify.org`, `https://ifconfig.me/ip`, `https://icanhazip.com`.

use hover_core::config::{DEFAULT_IP_URL, IpVersion};
use hover_core::traits::IpSource;
use hover_core::{Error, Result};

use std::net::IpAddr;
use std::time::Duration;

/// Public IP lookup over HTTP
#[derive(Debug, Clone)]
pub struct HttpIpSource {
    /// URL to fetch the address from
    url: String,

    /// Address family to accept (None = either)
    version: Option<IpVersion>,

    /// HTTP client
    client: reqwest::Client,
}

impl HttpIpSource {
    /// Create a new HTTP IP source
    ///
    /// # Parameters
    ///
    /// - `url`: URL to fetch the address from (e.g., "https://api.ipify.org")
    /// - `version`: address family to accept (None = either)
    pub fn new(url: impl Into<String>, version: Option<IpVersion>) -> Self {
        Self {
            url: url.into(),
            version,
            client: reqwest::Client::new(),
        }
    }

    /// Create with a request timeout
    pub fn with_timeout(url: impl Into<String>, version: Option<IpVersion>, timeout: Duration) -> Self {
        Self {
            url: url.into(),
            version,
            client: reqwest::Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_default(),
        }
    }

    /// The lookup URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch the current address from the service
    async fn fetch_ip(&self) -> Result<IpAddr> {
        tracing::debug!("Looking up public IP via {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| Error::ip_source(format!("Request to {} failed: {}", self.url, e)))?;

        if !response.status().is_success() {
            return Err(Error::ip_source(format!(
                "{} returned HTTP status {}",
                self.url,
                response.status()
            )));
        }

        let ip_text = response
            .text()
            .await
            .map_err(|e| Error::ip_source(format!("Failed to read response: {}", e)))?;

        let ip_text = ip_text.trim();

        let ip: IpAddr = ip_text
            .parse()
            .map_err(|_| Error::ip_source(format!("Invalid IP address: {:?}", ip_text)))?;

        if let Some(version) = self.version {
            let acceptable = match version {
                IpVersion::V4 => ip.is_ipv4(),
                IpVersion::V6 => ip.is_ipv6(),
                IpVersion::Both => true,
            };
            if !acceptable {
                return Err(Error::ip_source(format!("Expected {:?}, got: {}", version, ip)));
            }
        }

        tracing::debug!("Public IP is {}", ip);
        Ok(ip)
    }
}

impl Default for HttpIpSource {
    fn default() -> Self {
        Self::new(DEFAULT_IP_URL, Some(IpVersion::V4))
    }
}

#[async_trait::async_trait]
impl IpSource for HttpIpSource {
    async fn current(&self) -> Result<IpAddr> {
        self.fetch_ip().await
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}
