//! Command registration, tokenization, validation, and dispatch.
//!
//! This crate is a minimal command-line front-end pipeline:
//!
//! - [`tokenize`] — raw argument strings → ordered [`ArgGroup`]s (one
//!   positional value plus the option tokens attached to it).
//! - [`OptionToken`] — a supplied flag name and the alias-matching rule.
//! - [`CommandSpec`] — one command's contract (arity bounds, option alias
//!   groups, help text, callback) and its validation.
//! - [`Registry`] — descriptors by name, plus the lookup → tokenize →
//!   validate → dispatch loop.
//!
//! Validation failures are values ([`DispatchError`]), reported by
//! [`Registry::execute`] as single lines on stderr; a failed invocation
//! never reaches its callback and never aborts the process.
//!
//! # Example
//!
//! ```
//! use command_router_core::{CommandSpec, Registry};
//!
//! let mut registry = Registry::new();
//! registry.register(
//!     CommandSpec::new("touch", |args| {
//!         for group in args {
//!             let quiet = group.has_option("q");
//!             if !quiet {
//!                 println!("touching {}", group.positional);
//!             }
//!         }
//!     })
//!     .with_min_args(1)
//!     .with_option_group(["q", "quiet"])
//!     .with_help("usage: touch <file>... [-q]"),
//! );
//!
//! // argv[1] picks the command, the rest is tokenized and validated.
//! registry.execute("touch", ["a.txt", "-q", "b.txt"]);
//! ```

mod args;
mod command;
mod error;
mod registry;

pub use args::{ArgGroup, OptionToken, tokenize};
pub use command::{Callback, CommandSpec};
pub use error::DispatchError;
pub use registry::{Dispatch, Registry};
