//! Dispatch and validation errors.
//!
//! Everything that can go wrong between receiving a command name and
//! invoking its callback. All variants are non-fatal: the dispatcher
//! reports them on stderr and returns without running the callback.

use thiserror::Error;

/// Errors surfaced while resolving and validating a command invocation.
///
/// The `Display` impl produces the single-line message the dispatcher
/// prints to the error stream.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// No command registered under the given name.
    #[error("unknown command: {0}")]
    UnknownCommand(String),
    /// Fewer argument groups than the command's declared minimum.
    #[error("not enough arguments: expected at least {min}, got {got}")]
    NotEnoughArguments { min: usize, got: usize },
    /// More argument groups than the command's declared maximum.
    #[error("too many arguments: expected at most {max}, got {got}")]
    TooManyArguments { max: usize, got: usize },
    /// An option token matched no declared alias (and not implicit help).
    #[error("no matching option for \"{0}\"")]
    UnknownOption(String),
    /// An option token matched aliases from more than one group.
    #[error("conflicting options: \"{0}\" and \"{1}\"")]
    ConflictingOptions(String, String),
}
