//! Process exit codes

use std::process::ExitCode;

/// Exit codes for the tools
///
/// - 0: Success
/// - 1: The operation failed (authentication, API, lookup, bad input)
/// - 2: Anything else (configuration, local I/O, runtime setup)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolExitCode {
    /// The operation completed
    Success = 0,
    /// The operation failed against the API or on its input
    Failure = 1,
    /// Unexpected failure
    Unexpected = 2,
}

impl ToolExitCode {
    /// Classify an error returned by a runner
    pub fn for_error(err: &anyhow::Error) -> Self {
        match err.downcast_ref::<hover_core::Error>() {
            Some(e) if e.is_domain_failure() => ToolExitCode::Failure,
            _ => ToolExitCode::Unexpected,
        }
    }
}

impl From<ToolExitCode> for ExitCode {
    fn from(code: ToolExitCode) -> Self {
        ExitCode::from(code as u8)
    }
}
