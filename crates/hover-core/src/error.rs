//! Error types for the Hover tools
//!
//! This module defines all error types used throughout the crate.

use thiserror::Error;

/// Result type alias for Hover operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for the Hover tools
#[derive(Error, Debug)]
pub enum Error {
    /// Sign-in rejected, network failure during sign-in, or no session cookie
    ///
    /// The detail is kept for debug logging only; it is never part of the
    /// displayed message.
    #[error("Authentication failed")]
    Authentication {
        /// Underlying reason (not shown to end users)
        detail: String,
    },

    /// Non-success HTTP status on an API call
    #[error("{method} {resource} failed with HTTP status {status}")]
    Transport {
        /// HTTP method of the failed call
        method: String,
        /// Resource path of the failed call
        resource: String,
        /// HTTP status code returned by the API
        status: u16,
    },

    /// Network-level failure before any status was received
    #[error("HTTP error ({context}): {message}")]
    Http {
        /// Method and resource, or other request context
        context: String,
        /// Transport error message
        message: String,
    },

    /// The API reported a logical failure, or the body was not what we expected
    #[error("API call failed ({reason}): {body}")]
    Api {
        /// Short description of what was wrong with the response
        reason: String,
        /// Raw decoded body (or the undecodable text as a JSON string)
        body: serde_json::Value,
    },

    /// No record matched a requested name
    #[error("No DNS record found for {0}")]
    NotFound(String),

    /// More than one A record matched a requested name
    #[error("{count} A records match {fqdn}; refusing to pick one")]
    AmbiguousMatch {
        /// The requested fully-qualified name
        fqdn: String,
        /// Number of matching records
        count: usize,
    },

    /// An import line did not contain name, type and content
    #[error("Malformed record on line {line_number}: {line:?}")]
    MalformedLine {
        /// 1-based line number in the input
        line_number: usize,
        /// The offending line, without its line terminator
        line: String,
    },

    /// Public IP discovery errors
    #[error("IP source error: {0}")]
    IpSource(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O errors (record files, standard streams)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create an authentication error
    pub fn auth(detail: impl Into<String>) -> Self {
        Self::Authentication {
            detail: detail.into(),
        }
    }

    /// Create a transport error
    pub fn transport(
        method: impl Into<String>,
        resource: impl Into<String>,
        status: u16,
    ) -> Self {
        Self::Transport {
            method: method.into(),
            resource: resource.into(),
            status,
        }
    }

    /// Create an HTTP (network) error
    pub fn http(context: impl Into<String>, message: impl std::fmt::Display) -> Self {
        Self::Http {
            context: context.into(),
            message: message.to_string(),
        }
    }

    /// Create an API error carrying the response body
    pub fn api(reason: impl Into<String>, body: serde_json::Value) -> Self {
        Self::Api {
            reason: reason.into(),
            body,
        }
    }

    /// Create a "not found" error
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create an IP source error
    pub fn ip_source(msg: impl Into<String>) -> Self {
        Self::IpSource(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Whether this is an expected, user-facing failure of the tools
    ///
    /// Domain failures map to exit status 1. Everything else (I/O, JSON
    /// encoding, configuration) is treated as unexpected by the binaries.
    pub fn is_domain_failure(&self) -> bool {
        matches!(
            self,
            Self::Authentication { .. }
                | Self::Transport { .. }
                | Self::Http { .. }
                | Self::Api { .. }
                | Self::NotFound(_)
                | Self::AmbiguousMatch { .. }
                | Self::MalformedLine { .. }
                | Self::IpSource(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authentication_message_hides_detail() {
        let err = Error::auth("connection refused to 10.0.0.1:443");
        assert_eq!(err.to_string(), "Authentication failed");
    }

    #[test]
    fn test_transport_message_has_context() {
        let err = Error::transport("DELETE", "dns/dns123", 500);
        assert_eq!(
            err.to_string(),
            "DELETE dns/dns123 failed with HTTP status 500"
        );
    }

    #[test]
    fn test_domain_failure_classification() {
        assert!(Error::not_found("www.example.com").is_domain_failure());
        assert!(
            Error::api("succeeded flag missing", serde_json::json!({})).is_domain_failure()
        );
        assert!(
            Error::MalformedLine {
                line_number: 3,
                line: "www".to_string(),
            }
            .is_domain_failure()
        );
        assert!(!Error::config("missing username").is_domain_failure());
        assert!(!Error::Io(std::io::Error::other("disk")).is_domain_failure());
    }
}
