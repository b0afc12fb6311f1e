//! Seams between the core and its pluggable parts
//!
//! - [`IpSource`]: Discover the caller's public IP address

pub mod ip_source;

pub use ip_source::IpSource;
