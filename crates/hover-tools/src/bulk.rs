//! `bulkhover`: import or export the records of one domain

use crate::args::CommonArgs;
use anyhow::Context;
use clap::{Parser, ValueEnum};
use hover_core::lines::{self, MalformedLinePolicy};
use hover_core::{HoverClient, ImportOptions, RecordEvent, RecordService};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use tokio::sync::mpsc::UnboundedReceiver;

/// File name standing for stdin (import) or stdout (export)
pub const STDIO: &str = "-";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Operation {
    Import,
    Export,
}

/// Import or export DNS records for a single domain in a hover account.
///
/// One record per line: `{name} {type} {content}`, e.g. `www A 127.0.0.1`.
/// Copy a whole domain with:
/// `bulkhover -c CONF export example.com - | bulkhover -c CONF -f import other.com -`
#[derive(Debug, Clone, Parser)]
#[command(name = "bulkhover", version)]
pub struct BulkArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Flush all DNS records associated with the domain before importing
    #[arg(short, long)]
    pub flush: bool,

    /// Do not create records whose name, type and content already exist
    #[arg(long)]
    pub skip_existing: bool,

    /// Skip malformed lines with a warning instead of aborting
    #[arg(long)]
    pub skip_malformed: bool,

    /// import or export
    #[arg(value_enum)]
    pub operation: Operation,

    /// Domain name or id
    pub domain: String,

    /// Record file, or `-` for stdin/stdout
    #[arg(value_name = "DNS_FILE")]
    pub file: String,
}

impl BulkArgs {
    pub fn import_options(&self) -> ImportOptions {
        ImportOptions {
            flush: self.flush,
            skip_existing: self.skip_existing,
            malformed: if self.skip_malformed {
                MalformedLinePolicy::Skip
            } else {
                MalformedLinePolicy::Abort
            },
        }
    }
}

/// Run one import or export
///
/// Progress lines ("Created ...", "Deleted ...") are written to `out` as each
/// record is handled, so records handled before a failure are reported too.
pub async fn run(args: &BulkArgs, out: &mut impl Write) -> anyhow::Result<()> {
    let config = args.common.load_config(args.common.cli_layer())?;
    let client = HoverClient::authenticate(&config.client, &config.credentials).await?;
    let (service, mut events) = RecordService::new(client);

    match args.operation {
        Operation::Import => {
            let reader = open_input(&args.file)?;
            let options = args.import_options();
            let import = service.import_from_reader(&args.domain, reader, &options);
            tokio::pin!(import);

            // Report each record as soon as it is handled
            let result = loop {
                tokio::select! {
                    biased;
                    Some(event) = events.recv() => write_event(out, &event)?,
                    result = &mut import => break result,
                }
            };
            report_events(&mut events, out)?;
            let summary = result?;
            tracing::info!(
                "Import into {} done: {} deleted, {} created",
                args.domain,
                summary.deleted.len(),
                summary.created.len()
            );
        }
        Operation::Export => {
            let records = service.export_records(&args.domain).await?;
            let writer = open_output(&args.file)?;
            lines::write_records(writer, &records)?;
            tracing::info!("Exported {} record(s) from {}", records.len(), args.domain);
        }
    }

    Ok(())
}

/// Write one line per pending event
pub fn report_events(
    events: &mut UnboundedReceiver<RecordEvent>,
    out: &mut impl Write,
) -> io::Result<()> {
    while let Ok(event) = events.try_recv() {
        writeln!(out, "{}", event_line(&event))?;
    }
    out.flush()
}

fn write_event(out: &mut impl Write, event: &RecordEvent) -> io::Result<()> {
    writeln!(out, "{}", event_line(event))?;
    out.flush()
}

/// Human-readable progress line
pub fn event_line(event: &RecordEvent) -> String {
    match event {
        RecordEvent::Deleted(record) => format!("Deleted {}", record),
        RecordEvent::Created(record) => format!("Created {}", record),
        RecordEvent::SkippedExisting(record) => format!("Skipped existing {}", record),
        RecordEvent::SkippedMalformed(skipped) => {
            format!("Skipped line {}: {}", skipped.line_number, skipped.line)
        }
        RecordEvent::Updated {
            record,
            previous_content,
        } => format!("Updated {} (was {})", record, previous_content),
    }
}

fn open_input(file: &str) -> anyhow::Result<Box<dyn BufRead + Send>> {
    if file == STDIO {
        return Ok(Box::new(BufReader::new(io::stdin())));
    }
    let handle = File::open(file).with_context(|| format!("cannot open {}", file))?;
    Ok(Box::new(BufReader::new(handle)))
}

fn open_output(file: &str) -> anyhow::Result<Box<dyn Write>> {
    if file == STDIO {
        return Ok(Box::new(io::stdout()));
    }
    let handle = File::create(file).with_context(|| format!("cannot create {}", file))?;
    Ok(Box::new(BufWriter::new(handle)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use hover_core::{DnsRecord, NewRecord};

    #[test]
    fn test_parse_import_with_flush() {
        let args = BulkArgs::try_parse_from([
            "bulkhover", "-u", "alice", "-p", "secret", "-f", "import", "example.com", "-",
        ])
        .unwrap();

        assert_eq!(args.operation, Operation::Import);
        assert_eq!(args.domain, "example.com");
        assert_eq!(args.file, STDIO);
        assert!(args.import_options().flush);
        assert_eq!(args.import_options().malformed, MalformedLinePolicy::Abort);
    }

    #[test]
    fn test_unknown_operation_rejected() {
        let parsed =
            BulkArgs::try_parse_from(["bulkhover", "-c", "hover.toml", "sync", "example.com", "-"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_missing_file_rejected() {
        let parsed = BulkArgs::try_parse_from(["bulkhover", "export", "example.com"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_event_lines() {
        let record = DnsRecord {
            id: "dns1".into(),
            name: "www".into(),
            record_type: "A".into(),
            content: "127.0.0.1".into(),
        };
        assert_eq!(
            event_line(&RecordEvent::Deleted(record)),
            "Deleted www A 127.0.0.1"
        );
        assert_eq!(
            event_line(&RecordEvent::Created(NewRecord::new("@", "MX", "10 mail.example.com"))),
            "Created @ MX 10 mail.example.com"
        );
    }
}
