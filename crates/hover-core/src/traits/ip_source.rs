// # IP Source Trait
//
// Defines the interface for discovering the caller's current public IP.
//
// ## Implementations
//
// - HTTP plain-text services: `hover-ip-http` crate
//
// ## Usage
//
// ```rust,ignore
// use hover_core::IpSource;
//
// #[tokio::main]
// async fn main() -> hover_core::Result<()> {
//     let source = /* IpSource implementation */;
//     let current_ip = source.current().await?;
//     println!("public IP: {}", current_ip);
//     Ok(())
// }
// ```

use async_trait::async_trait;
use std::net::IpAddr;

/// Trait for public IP discovery
///
/// Implementations perform a single lookup per call. They must not cache
/// results across calls or retry on failure.
#[async_trait]
pub trait IpSource: Send + Sync {
    /// Get the current public IP address
    ///
    /// # Returns
    ///
    /// - `Ok(IpAddr)`: The current IP address
    /// - `Err(Error)`: If unable to determine the current IP
    async fn current(&self) -> Result<IpAddr, crate::Error>;

    /// Short name for logging (e.g. the service URL)
    fn describe(&self) -> String {
        "ip source".to_string()
    }
}
