//! Data model for the Hover API
//!
//! Wire names follow the API: a domain's name is `domain_name`, its records are
//! `entries`, and a record's type is `type`. Unknown fields are ignored.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Account credentials
///
/// The Debug implementation does NOT expose the password.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Hover account username
    pub username: String,
    /// Hover account password
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<REDACTED>")
            .finish()
    }
}

/// An authenticated session (the `hoverauth` cookie value)
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    token: String,
}

impl Session {
    pub(crate) fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    /// The opaque session token
    pub fn token(&self) -> &str {
        &self.token
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("token", &"<REDACTED>")
            .finish()
    }
}

/// A DNS record as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsRecord {
    /// Provider-assigned record id (e.g. "dns1234567")
    pub id: String,
    /// Host label, `@` for the apex
    pub name: String,
    /// Record type, passed through as-is
    #[serde(rename = "type")]
    pub record_type: String,
    /// Record content, passed through as-is (e.g. "10 mail.example.com" for MX)
    pub content: String,
}

impl DnsRecord {
    /// The (name, type, content) triple of this record
    pub fn to_new_record(&self) -> NewRecord {
        NewRecord {
            name: self.name.clone(),
            record_type: self.record_type.clone(),
            content: self.content.clone(),
        }
    }
}

impl fmt::Display for DnsRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.name, self.record_type, self.content)
    }
}

/// A domain, optionally with its records
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Domain {
    /// Provider-assigned domain id (e.g. "dom123456")
    pub id: String,
    /// Domain name (e.g. "example.com")
    #[serde(rename = "domain_name")]
    pub name: String,
    /// Records of this domain, in provider order
    #[serde(rename = "entries", default)]
    pub records: Vec<DnsRecord>,
}

/// Body of a record create call, and one line of the import/export format
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NewRecord {
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub content: String,
}

impl NewRecord {
    pub fn new(
        name: impl Into<String>,
        record_type: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            record_type: record_type.into(),
            content: content.into(),
        }
    }
}

impl fmt::Display for NewRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.name, self.record_type, self.content)
    }
}

/// Envelope of `GET dns`, `GET domains` and `GET domains/{id}/dns`
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct DomainList {
    #[serde(default)]
    pub domains: Vec<Domain>,
}

/// Envelope of `GET domains/{id}`
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct DomainDetail {
    pub domain: Domain,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_debug_hides_password() {
        let creds = Credentials::new("alice", "hunter2");
        let debug_str = format!("{:?}", creds);
        assert!(debug_str.contains("alice"));
        assert!(!debug_str.contains("hunter2"));
    }

    #[test]
    fn test_session_debug_hides_token() {
        let session = Session::new("secret-cookie-value");
        assert!(!format!("{:?}", session).contains("secret-cookie-value"));
        assert_eq!(session.token(), "secret-cookie-value");
    }

    #[test]
    fn test_domain_deserializes_wire_names() {
        let json = serde_json::json!({
            "id": "dom123",
            "domain_name": "example.com",
            "active": true,
            "entries": [
                {"id": "dns1", "name": "www", "type": "A", "content": "127.0.0.1", "ttl": 900},
                {"id": "dns2", "name": "@", "type": "MX", "content": "10 mail.example.com"}
            ]
        });
        let domain: Domain = serde_json::from_value(json).unwrap();
        assert_eq!(domain.name, "example.com");
        assert_eq!(domain.records.len(), 2);
        assert_eq!(domain.records[1].record_type, "MX");
        assert_eq!(domain.records[1].content, "10 mail.example.com");
    }

    #[test]
    fn test_domain_without_entries() {
        let json = serde_json::json!({"id": "dom9", "domain_name": "example.org"});
        let domain: Domain = serde_json::from_value(json).unwrap();
        assert!(domain.records.is_empty());
    }

    #[test]
    fn test_new_record_serializes_type_field() {
        let record = NewRecord::new("mail", "MX", "10 mail.example.com");
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            serde_json::json!({"name": "mail", "type": "MX", "content": "10 mail.example.com"})
        );
    }
}
