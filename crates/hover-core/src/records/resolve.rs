//! Fully-qualified name → record resolution
//!
//! A record named `www` in domain `example.com` answers to `www.example.com`.
//! The apex record is named `@`, so a request for `example.com` itself is
//! matched against `@.example.com`. Only A records are considered.

use crate::error::{Error, Result};
use crate::model::{DnsRecord, Domain};

/// Record type targeted by dynamic updates
pub const DYNAMIC_RECORD_TYPE: &str = "A";

/// A record together with the domain it belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedRecord<'a> {
    pub domain: &'a Domain,
    pub record: &'a DnsRecord,
}

/// Find the single A record answering to `fqdn`
///
/// # Returns
///
/// - `Ok(ResolvedRecord)`: exactly one record matched
/// - `Err(Error::NotFound)`: no A record matched
/// - `Err(Error::AmbiguousMatch)`: more than one A record matched
pub fn resolve_fqdn<'a>(fqdn: &str, domains: &'a [Domain]) -> Result<ResolvedRecord<'a>> {
    let wanted = fqdn.strip_suffix('.').unwrap_or(fqdn);

    let matches: Vec<ResolvedRecord<'a>> = domains
        .iter()
        .flat_map(|domain| {
            let target = if wanted == domain.name {
                format!("@.{}", domain.name)
            } else {
                wanted.to_string()
            };

            domain
                .records
                .iter()
                .filter(|record| record.record_type == DYNAMIC_RECORD_TYPE)
                .filter(move |record| format!("{}.{}", record.name, domain.name) == target)
                .map(move |record| ResolvedRecord { domain, record })
        })
        .collect();

    match matches.as_slice() {
        [] => Err(Error::not_found(fqdn)),
        [only] => Ok(*only),
        many => Err(Error::AmbiguousMatch {
            fqdn: fqdn.to_string(),
            count: many.len(),
        }),
    }
}

/// Resolve `fqdn` to the id of its A record
pub fn resolve_fqdn_to_record_id(fqdn: &str, domains: &[Domain]) -> Result<String> {
    resolve_fqdn(fqdn, domains).map(|resolved| resolved.record.id.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, name: &str, record_type: &str, content: &str) -> DnsRecord {
        DnsRecord {
            id: id.to_string(),
            name: name.to_string(),
            record_type: record_type.to_string(),
            content: content.to_string(),
        }
    }

    fn domains() -> Vec<Domain> {
        vec![
            Domain {
                id: "dom1".to_string(),
                name: "example.com".to_string(),
                records: vec![
                    record("dns1", "@", "A", "192.0.2.1"),
                    record("dns2", "www", "A", "192.0.2.2"),
                    record("dns3", "www", "TXT", "hello"),
                    record("dns4", "@", "MX", "10 mail.example.com"),
                ],
            },
            Domain {
                id: "dom2".to_string(),
                name: "example.org".to_string(),
                records: vec![record("dns5", "www", "A", "198.51.100.7")],
            },
        ]
    }

    #[test]
    fn test_resolves_subdomain() {
        assert_eq!(
            resolve_fqdn_to_record_id("www.example.com", &domains()).unwrap(),
            "dns2"
        );
        assert_eq!(
            resolve_fqdn_to_record_id("www.example.org", &domains()).unwrap(),
            "dns5"
        );
    }

    #[test]
    fn test_resolves_apex() {
        assert_eq!(
            resolve_fqdn_to_record_id("example.com", &domains()).unwrap(),
            "dns1"
        );
    }

    #[test]
    fn test_trailing_dot_is_ignored() {
        assert_eq!(
            resolve_fqdn_to_record_id("www.example.com.", &domains()).unwrap(),
            "dns2"
        );
    }

    #[test]
    fn test_non_a_records_are_not_matched() {
        let mut doms = domains();
        doms[0].records.retain(|r| r.id != "dns2");
        let err = resolve_fqdn_to_record_id("www.example.com", &doms).unwrap_err();
        assert!(matches!(err, Error::NotFound(ref name) if name == "www.example.com"));
    }

    #[test]
    fn test_unknown_name_not_found() {
        let err = resolve_fqdn_to_record_id("ftp.example.net", &domains()).unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[test]
    fn test_duplicate_a_records_are_ambiguous() {
        let mut doms = domains();
        doms[0].records.push(record("dns9", "www", "A", "192.0.2.99"));
        let err = resolve_fqdn_to_record_id("www.example.com", &doms).unwrap_err();
        assert!(matches!(err, Error::AmbiguousMatch { count: 2, .. }));
    }

    #[test]
    fn test_resolved_record_carries_domain() {
        let doms = domains();
        let resolved = resolve_fqdn("www.example.org", &doms).unwrap();
        assert_eq!(resolved.domain.id, "dom2");
        assert_eq!(resolved.record.content, "198.51.100.7");
    }
}
