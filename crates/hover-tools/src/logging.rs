//! Log output for the tools

use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Install the global subscriber
///
/// Logs go to stderr so that `export ... -` output on stdout stays clean.
pub fn init_logging(level: Level) -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to set tracing subscriber: {}", e))
}
