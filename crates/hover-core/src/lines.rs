//! Record line format used by bulk import and export
//!
//! One record per line: `{name} {type} {content}`. The content is everything
//! after the type and may contain spaces (`@ MX 10 mail.example.com`).

use crate::error::{Error, Result};
use crate::model::{DnsRecord, NewRecord};
use std::io::{BufRead, Write};

/// What to do with a line that does not split into name, type and content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MalformedLinePolicy {
    /// Stop at the first malformed line
    #[default]
    Abort,
    /// Log a warning and continue with the next line
    Skip,
}

/// A malformed line that was skipped under [`MalformedLinePolicy::Skip`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    pub line_number: usize,
    pub line: String,
}

/// Records parsed from an input, plus any lines that were skipped
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedRecords {
    pub records: Vec<NewRecord>,
    pub skipped: Vec<SkippedLine>,
}

/// Parse one line
///
/// Returns `Ok(None)` for blank lines. Only the line terminator and leading
/// whitespace are stripped; the content is kept as written, trailing spaces
/// included.
pub fn parse_line(line: &str, line_number: usize) -> Result<Option<NewRecord>> {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.trim().is_empty() {
        return Ok(None);
    }

    let malformed = || Error::MalformedLine {
        line_number,
        line: line.to_string(),
    };

    let (name, rest) = line
        .trim_start()
        .split_once(char::is_whitespace)
        .ok_or_else(malformed)?;
    let (record_type, content) = rest
        .trim_start()
        .split_once(char::is_whitespace)
        .ok_or_else(malformed)?;
    let content = content.trim_start();

    if content.is_empty() {
        return Err(malformed());
    }

    Ok(Some(NewRecord::new(name, record_type, content)))
}

/// Parse every line of a reader
///
/// A line that is not valid UTF-8 is malformed like any other and goes
/// through `policy`.
pub fn read_records(reader: impl BufRead, policy: MalformedLinePolicy) -> Result<ParsedRecords> {
    let mut parsed = ParsedRecords::default();

    for (index, bytes) in reader.split(b'\n').enumerate() {
        let bytes = bytes?;
        let line_number = index + 1;

        let outcome = match String::from_utf8(bytes) {
            Ok(line) => parse_line(&line, line_number),
            Err(e) => Err(Error::MalformedLine {
                line_number,
                line: String::from_utf8_lossy(e.as_bytes())
                    .trim_end_matches('\r')
                    .to_string(),
            }),
        };

        match outcome {
            Ok(Some(record)) => parsed.records.push(record),
            Ok(None) => {}
            Err(Error::MalformedLine { line_number, line }) if policy == MalformedLinePolicy::Skip => {
                tracing::warn!("Skipping malformed line {}: {:?}", line_number, line);
                parsed.skipped.push(SkippedLine { line_number, line });
            }
            Err(e) => return Err(e),
        }
    }

    Ok(parsed)
}

/// Write records in line format
pub fn write_records<'a>(
    mut writer: impl Write,
    records: impl IntoIterator<Item = &'a DnsRecord>,
) -> Result<()> {
    for record in records {
        writeln!(writer, "{}", record)?;
    }
    writer.flush()?;
    Ok(())
}
