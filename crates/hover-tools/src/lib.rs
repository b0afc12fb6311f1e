// # hover-tools
//
// Shared plumbing for the `bulkhover` and `dynhover` binaries.
//
// The binaries stay thin: parse arguments, install logging, build a runtime,
// call one runner from this crate and turn its result into an exit status.
// All DNS logic lives in hover-core.
//
// ## Configuration
//
// Every flag can also come from the environment or a TOML file:
//
// ```toml
// [hover]
// username = "USERNAME"
// password = "PASSWORD"
// domain = "home.example.com"   # dynhover only
// ```
//
// Priority: command line / environment > config file > defaults.

pub mod args;
pub mod bulk;
pub mod dynamic;
pub mod exit;
pub mod logging;

pub use args::CommonArgs;
pub use exit::ToolExitCode;
