//! Record operations built on the session client
//!
//! The [`RecordService`] is responsible for:
//! - Enumerating domains and records
//! - Resolving a fully-qualified name to a record id
//! - Bulk deletion (flush) and bulk creation (import)
//! - Export of a domain's records
//! - Dynamic IP updates of a single A record
//!
//! ## Execution Model
//!
//! Every call is awaited before the next one starts. Bulk operations stop at
//! the first failure; records handled before the failure stay handled and
//! are reported through [`RecordEvent`]s.
//!
//! ```text
//! ┌──────────┐  RecordEvent   ┌─────────────────┐
//! │ Binaries │◀───────────────│  RecordService  │
//! └──────────┘                └─────────────────┘
//!                                      │
//!                     ┌────────────────┼────────────────┐
//!                     ▼                ▼                ▼
//!              ┌─────────────┐  ┌─────────────┐  ┌─────────────┐
//!              │ HoverClient │  │  resolve    │  │  IpSource   │
//!              │ (API calls) │  │ (fqdn → id) │  │ (public IP) │
//!              └─────────────┘  └─────────────┘  └─────────────┘
//! ```

pub mod resolve;

pub use resolve::{ResolvedRecord, resolve_fqdn, resolve_fqdn_to_record_id};

use crate::client::{HoverClient, ensure_succeeded};
use crate::error::{Error, Result};
use crate::lines::{self, MalformedLinePolicy, SkippedLine};
use crate::model::{DnsRecord, Domain, NewRecord};
use crate::traits::IpSource;
use serde_json::Value;
use std::collections::HashSet;
use std::io::BufRead;
use std::net::IpAddr;
use tokio::sync::mpsc;
use tracing::{debug, info};

/// Events emitted by the RecordService, in the order the work happened
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordEvent {
    /// A record was deleted
    Deleted(DnsRecord),

    /// A record was created
    Created(NewRecord),

    /// A record was not created because an identical one already exists
    SkippedExisting(NewRecord),

    /// An import line was skipped because it was malformed
    SkippedMalformed(SkippedLine),

    /// A record's content was replaced
    Updated {
        record: DnsRecord,
        previous_content: String,
    },
}

/// Options for [`RecordService::import_records`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportOptions {
    /// Delete every existing record of the domain before importing
    pub flush: bool,

    /// Do not create records whose (name, type, content) already exists
    pub skip_existing: bool,

    /// What to do with malformed input lines
    pub malformed: MalformedLinePolicy,
}

/// Outcome of an import
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub deleted: Vec<DnsRecord>,
    pub created: Vec<NewRecord>,
    pub skipped_existing: Vec<NewRecord>,
    pub skipped_lines: Vec<SkippedLine>,
}

/// Record operations on one authenticated session
pub struct RecordService {
    /// Session client for API calls
    client: HoverClient,

    /// Event sender for progress reporting
    event_tx: mpsc::UnboundedSender<RecordEvent>,
}

impl RecordService {
    /// Create a new record service
    ///
    /// # Returns
    ///
    /// A tuple of (service, event_receiver) where event_receiver yields
    /// progress events
    pub fn new(client: HoverClient) -> (Self, mpsc::UnboundedReceiver<RecordEvent>) {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        (Self { client, event_tx }, event_rx)
    }

    /// The underlying session client
    pub fn client(&self) -> &HoverClient {
        &self.client
    }

    /// List domains without records
    pub async fn list_domains(&self) -> Result<Vec<Domain>> {
        self.client.list_domains().await
    }

    /// List every domain with its full record set (one `GET dns`)
    pub async fn list_all_domains_with_records(&self) -> Result<Vec<Domain>> {
        self.client.list_dns().await
    }

    /// Delete every record of a domain, one at a time, in provider order
    ///
    /// Stops at the first failed delete; later records are left untouched.
    pub async fn flush_domain_records(&self, domain_id: &str) -> Result<Vec<DnsRecord>> {
        let records = self.client.get_domain_records(domain_id).await?;
        info!("Flushing {} record(s) from {}", records.len(), domain_id);

        let mut deleted = Vec::with_capacity(records.len());
        for record in records {
            self.client.delete_record(&record.id).await?;
            debug!("Deleted {} ({})", record, record.id);
            self.emit_event(RecordEvent::Deleted(record.clone()));
            deleted.push(record);
        }

        Ok(deleted)
    }

    /// Create records one at a time, in input order
    ///
    /// Stops at the first failed create.
    pub async fn bulk_create_records(
        &self,
        domain_id: &str,
        records: &[NewRecord],
    ) -> Result<Vec<NewRecord>> {
        let mut created = Vec::with_capacity(records.len());
        for record in records {
            self.client.create_record(domain_id, record).await?;
            debug!("Created {} in {}", record, domain_id);
            self.emit_event(RecordEvent::Created(record.clone()));
            created.push(record.clone());
        }

        Ok(created)
    }

    /// Import records into a domain
    ///
    /// # Parameters
    ///
    /// - `domain`: domain name or id
    /// - `records`: records to create, in order
    /// - `options`: flush and skip-existing behaviour
    pub async fn import_records(
        &self,
        domain: &str,
        records: &[NewRecord],
        options: &ImportOptions,
    ) -> Result<ImportSummary> {
        let domain_id = self.client.get_domain(domain).await?.id;
        let mut summary = ImportSummary::default();

        if options.flush {
            summary.deleted = self.flush_domain_records(&domain_id).await?;
        }

        let to_create: Vec<NewRecord> = if options.skip_existing {
            let existing: HashSet<NewRecord> = self
                .client
                .get_domain_records(&domain_id)
                .await?
                .iter()
                .map(DnsRecord::to_new_record)
                .collect();

            let (present, missing): (Vec<NewRecord>, Vec<NewRecord>) = records
                .iter()
                .cloned()
                .partition(|record| existing.contains(record));

            for record in &present {
                debug!("Skipping existing record {}", record);
                self.emit_event(RecordEvent::SkippedExisting(record.clone()));
            }
            summary.skipped_existing = present;
            missing
        } else {
            records.to_vec()
        };

        summary.created = self.bulk_create_records(&domain_id, &to_create).await?;
        info!(
            "Imported {} record(s) into {} ({} skipped)",
            summary.created.len(),
            domain,
            summary.skipped_existing.len()
        );

        Ok(summary)
    }

    /// Parse record lines and import them
    ///
    /// The whole input is parsed before any API call, so a malformed line
    /// under [`MalformedLinePolicy::Abort`] leaves the domain untouched.
    pub async fn import_from_reader(
        &self,
        domain: &str,
        reader: impl BufRead,
        options: &ImportOptions,
    ) -> Result<ImportSummary> {
        let parsed = lines::read_records(reader, options.malformed)?;
        for skipped in &parsed.skipped {
            self.emit_event(RecordEvent::SkippedMalformed(skipped.clone()));
        }

        let mut summary = self.import_records(domain, &parsed.records, options).await?;
        summary.skipped_lines = parsed.skipped;
        Ok(summary)
    }

    /// Current records of a domain, for export
    pub async fn export_records(&self, domain: &str) -> Result<Vec<DnsRecord>> {
        self.client.get_domain_records(domain).await
    }

    /// Point the A record for `fqdn` at the caller's current public IP
    ///
    /// # Returns
    ///
    /// The record with its new content
    pub async fn update_dynamic_record(
        &self,
        fqdn: &str,
        ip_source: &dyn IpSource,
    ) -> Result<DnsRecord> {
        let domains = self.list_all_domains_with_records().await?;
        let resolved = resolve_fqdn(fqdn, &domains)?;
        debug!(
            "Resolved {} to record {} in {}",
            fqdn, resolved.record.id, resolved.domain.name
        );

        let ip = ip_source.current().await?;
        if !matches!(ip, IpAddr::V4(_)) {
            return Err(Error::ip_source(format!(
                "{} returned {}, but an A record needs an IPv4 address",
                ip_source.describe(),
                ip
            )));
        }

        let content = ip.to_string();
        let response = self
            .client
            .update_record(&resolved.record.id, &serde_json::json!({ "content": content }))
            .await?
            .ok_or_else(|| Error::api("empty response to record update", Value::Null))?;
        ensure_succeeded(&response)?;

        let updated = DnsRecord {
            content,
            ..resolved.record.clone()
        };
        info!(
            "Updated {} -> {} (was: {})",
            fqdn, updated.content, resolved.record.content
        );
        self.emit_event(RecordEvent::Updated {
            record: updated.clone(),
            previous_content: resolved.record.content.clone(),
        });

        Ok(updated)
    }

    /// Emit a progress event
    ///
    /// A dropped receiver only means nobody is listening.
    fn emit_event(&self, event: RecordEvent) {
        let _ = self.event_tx.send(event);
    }
}
