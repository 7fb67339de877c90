//! Command descriptors and invocation validation.
//!
//! A [`CommandSpec`] is the registered contract for one named command:
//! arity bounds, declared option alias groups, optional help text, and the
//! callback to run. Validation checks a tokenized invocation against that
//! contract before the callback ever sees it.

use std::fmt;

use crate::args::{ArgGroup, OptionToken};
use crate::error::DispatchError;

/// Callback invoked with the validated, ordered argument groups.
pub type Callback = Box<dyn Fn(&[ArgGroup])>;

/// Aliases of the implicit help option, available to every command that
/// declares help text. The one-byte `h` alias is what lets `-h` match
/// under the option matcher's first-byte rule.
const HELP_ALIASES: [&str; 2] = ["help", "h"];

/// The registered contract for one named command.
///
/// Built with [`new`](Self::new) plus `with_*` chaining, then handed to
/// [`Registry::register`](crate::Registry::register). Immutable afterwards.
///
/// Defaults: no minimum, no maximum (unbounded), no options, no help text.
/// A command without help text does not answer `--help`; the token is
/// validated like any other option.
///
/// # Examples
///
/// ```
/// use command_router_core::{CommandSpec, tokenize};
///
/// let spec = CommandSpec::new("copy", |args| {
///     for group in args {
///         println!("{}", group.positional);
///     }
/// })
/// .with_min_args(2)
/// .with_max_args(2)
/// .with_option_group(["f", "force"])
/// .with_help("usage: copy <src> <dst> [-f]");
///
/// assert!(spec.check(&tokenize(["a", "b", "--force"])).is_ok());
/// assert!(spec.check(&tokenize(["a"])).is_err());
/// ```
pub struct CommandSpec {
    name: String,
    callback: Callback,
    min_args: usize,
    max_args: Option<usize>,
    options: Vec<Vec<String>>,
    help: Option<String>,
}

impl CommandSpec {
    /// Creates a descriptor with default (fully permissive) constraints.
    pub fn new(name: impl Into<String>, callback: impl Fn(&[ArgGroup]) + 'static) -> Self {
        Self {
            name: name.into(),
            callback: Box::new(callback),
            min_args: 0,
            max_args: None,
            options: Vec::new(),
            help: None,
        }
    }

    /// Requires at least `min` argument groups.
    pub fn with_min_args(mut self, min: usize) -> Self {
        self.min_args = min;
        self
    }

    /// Allows at most `max` argument groups (the default is unbounded).
    pub fn with_max_args(mut self, max: usize) -> Self {
        self.max_args = Some(max);
        self
    }

    /// Declares one option as a group of mutually-exclusive alias
    /// spellings, e.g. `["v", "verbose"]`.
    pub fn with_option_group<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.push(aliases.into_iter().map(Into::into).collect());
        self
    }

    /// Attaches help text, enabling the implicit `--help`/`-h` option.
    ///
    /// Empty text leaves help disabled, matching the absent default.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// The command's registered name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The help text, if any was declared.
    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    fn has_help(&self) -> bool {
        self.help.as_deref().is_some_and(|text| !text.is_empty())
    }

    /// Validates a tokenized invocation against this contract.
    ///
    /// Checks arity first, then resolves every option in every group
    /// against the implicit help option (when help text is declared) and
    /// the declared alias groups. Each option must land in exactly one of
    /// those buckets.
    ///
    /// # Examples
    ///
    /// ```
    /// use command_router_core::{CommandSpec, DispatchError, tokenize};
    ///
    /// let spec = CommandSpec::new("tail", |_| {})
    ///     .with_min_args(1)
    ///     .with_option_group(["f", "follow"]);
    ///
    /// assert!(spec.check(&tokenize(["log.txt", "-f"])).is_ok());
    /// assert_eq!(
    ///     spec.check(&tokenize(["log.txt", "-q"])),
    ///     Err(DispatchError::UnknownOption("q".into())),
    /// );
    /// ```
    pub fn check(&self, args: &[ArgGroup]) -> Result<(), DispatchError> {
        if args.len() < self.min_args {
            return Err(DispatchError::NotEnoughArguments {
                min: self.min_args,
                got: args.len(),
            });
        }
        if let Some(max) = self.max_args {
            if args.len() > max {
                return Err(DispatchError::TooManyArguments {
                    max,
                    got: args.len(),
                });
            }
        }

        for group in args {
            for opt in &group.options {
                self.resolve_option(opt)?;
            }
        }
        Ok(())
    }

    /// Resolves one supplied option to the alias group that claims it.
    ///
    /// Matching two aliases of the same group is fine (the short and long
    /// spellings of one option routinely both match); matching two
    /// distinct groups, or a group and implicit help, is a conflict.
    fn resolve_option<'a>(&'a self, opt: &OptionToken) -> Result<&'a str, DispatchError> {
        let mut matched: Option<&str> = None;

        if self.has_help() && HELP_ALIASES.iter().any(|alias| opt.matches(alias)) {
            matched = Some(HELP_ALIASES[0]);
        }

        for group in &self.options {
            if let Some(alias) = group.iter().find(|alias| opt.matches(alias)) {
                if let Some(previous) = matched {
                    return Err(DispatchError::ConflictingOptions(
                        alias.clone(),
                        previous.to_string(),
                    ));
                }
                matched = Some(alias);
            }
        }

        matched.ok_or_else(|| DispatchError::UnknownOption(opt.as_str().to_string()))
    }

    /// Whether this invocation is a bare help request: help text declared,
    /// exactly one group with an empty positional, and exactly one option
    /// that resolves to the implicit help option.
    ///
    /// Only meaningful after [`check`](Self::check) has succeeded.
    pub fn wants_help(&self, args: &[ArgGroup]) -> bool {
        self.has_help()
            && args.len() == 1
            && args[0].positional.is_empty()
            && args[0].options.len() == 1
            && HELP_ALIASES.iter().any(|alias| args[0].options[0].matches(alias))
    }

    /// Prints the help text to stdout: a leading blank line, then the text.
    pub fn print_help(&self) {
        if let Some(text) = self.help() {
            println!();
            println!("{text}");
        }
    }

    /// Runs the callback with the validated argument groups.
    pub fn invoke(&self, args: &[ArgGroup]) {
        (self.callback)(args);
    }
}

impl fmt::Debug for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandSpec")
            .field("name", &self.name)
            .field("min_args", &self.min_args)
            .field("max_args", &self.max_args)
            .field("options", &self.options)
            .field("help", &self.help)
            .finish_non_exhaustive()
    }
}
