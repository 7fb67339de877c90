//! Command registry and dispatch.
//!
//! A [`Registry`] owns the command descriptors for one program. The entry
//! point builds it, registers every command through ordinary calls, and
//! then routes exactly one invocation through
//! [`execute`](Registry::execute). There is no global state: registration
//! order is whatever the caller writes, and it always completes before the
//! first dispatch.

use std::collections::HashMap;

use tracing::debug;

use crate::args::tokenize;
use crate::command::CommandSpec;
use crate::error::DispatchError;

/// How a successful dispatch concluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// The command callback ran with the validated argument groups.
    Invoked,
    /// The invocation was a bare help request; help text was printed and
    /// the callback was not run.
    HelpShown,
}

/// Mapping from command name to [`CommandSpec`], plus the dispatch loop.
///
/// Registration has map semantics: registering a second descriptor under
/// an existing name replaces the first and hands it back.
///
/// # Examples
///
/// ```
/// use command_router_core::{CommandSpec, Registry};
///
/// let mut registry = Registry::new();
/// registry.register(
///     CommandSpec::new("greet", |args| {
///         for group in args {
///             println!("hello, {}", group.positional);
///         }
///     })
///     .with_min_args(1),
/// );
///
/// registry.execute("greet", ["world"]);
/// ```
#[derive(Debug, Default)]
pub struct Registry {
    commands: HashMap<String, CommandSpec>,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a command descriptor under its own name.
    ///
    /// Returns the descriptor previously registered under that name, if
    /// any, so callers that want to forbid duplicates can detect them.
    pub fn register(&mut self, spec: CommandSpec) -> Option<CommandSpec> {
        self.commands.insert(spec.name().to_string(), spec)
    }

    /// Looks up a command by name.
    pub fn get(&self, name: &str) -> Option<&CommandSpec> {
        self.commands.get(name)
    }

    /// Registered command names, sorted for stable display.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.commands.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Routes one invocation: lookup, tokenize, validate, then either
    /// print help or run the callback.
    ///
    /// # Examples
    ///
    /// ```
    /// use command_router_core::{Dispatch, DispatchError, CommandSpec, Registry};
    ///
    /// let mut registry = Registry::new();
    /// registry.register(CommandSpec::new("noop", |_| {}).with_help("does nothing"));
    ///
    /// assert_eq!(registry.dispatch("noop", ["--help"]), Ok(Dispatch::HelpShown));
    /// assert_eq!(
    ///     registry.dispatch("missing", ["x"]),
    ///     Err(DispatchError::UnknownCommand("missing".into())),
    /// );
    /// ```
    pub fn dispatch<I, S>(&self, name: &str, raw_args: I) -> Result<Dispatch, DispatchError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let spec = self
            .commands
            .get(name)
            .ok_or_else(|| DispatchError::UnknownCommand(name.to_string()))?;

        let groups = tokenize(raw_args);
        spec.check(&groups)?;

        if spec.wants_help(&groups) {
            debug!(command = name, "bare help request");
            spec.print_help();
            return Ok(Dispatch::HelpShown);
        }

        debug!(command = name, groups = groups.len(), "invoking callback");
        spec.invoke(&groups);
        Ok(Dispatch::Invoked)
    }

    /// Dispatches and reports any failure as one line on stderr.
    ///
    /// This is the process boundary: lookup and validation errors are
    /// printed, the callback stays uninvoked, and control returns
    /// normally. Nothing here exits or panics.
    pub fn execute<I, S>(&self, name: &str, raw_args: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if let Err(err) = self.dispatch(name, raw_args) {
            eprintln!("{err}");
        }
    }
}
