// # hover-core
//
// Session client and record operations for the Hover DNS API.
//
// ## Architecture Overview
//
// - **HoverClient**: Signs in once, then performs typed calls against
//   `domains`, `domains/{id}/dns`, `dns` and `dns/{id}`
// - **RecordService**: Enumeration, fqdn → record resolution, flush, bulk
//   create, import/export and dynamic IP updates
// - **IpSource**: Trait for discovering the caller's public IP
// - **lines**: The `name type content` record line format
//
// ## Design Principles
//
// 1. **Sequential**: One request at a time, first failure stops a bulk run
// 2. **Checked**: Every non-empty response must carry `"succeeded": true`
// 3. **Library-First**: The binaries in `hover-tools` only parse arguments,
//    load configuration and print results

pub mod client;
pub mod config;
pub mod error;
pub mod lines;
pub mod model;
pub mod records;
pub mod traits;

// Re-export core types for convenience
pub use client::HoverClient;
pub use config::{ClientSettings, ConfigLayer, HoverConfig, IpVersion};
pub use error::{Error, Result};
pub use lines::MalformedLinePolicy;
pub use model::{Credentials, DnsRecord, Domain, NewRecord, Session};
pub use records::{ImportOptions, ImportSummary, RecordEvent, RecordService};
pub use traits::IpSource;
