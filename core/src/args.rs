//! Raw argument tokenization and the invocation data model.
//!
//! This module turns a flat list of command-line tokens into an ordered
//! sequence of [`ArgGroup`]s. Each group pairs one positional value with the
//! option tokens that followed it (options seen before the first positional
//! form a leading group with an empty positional string).
//!
//! The types are plain data and serialize with [`serde`], so an invocation
//! can round-trip through JSON for inspection or logging.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// One flag name as supplied on the command line, with leading dashes
/// already stripped (`-v` → `v`, `--verbose` → `verbose`).
///
/// Matching against a declared alias follows a deliberate first-byte rule
/// for one-byte aliases: a declared `v` matches *any* supplied token whose
/// first byte is `v` (so `v2` matches too), while multi-byte aliases
/// require exact equality. See [`matches`](Self::matches).
///
/// # Examples
///
/// ```
/// use command_router_core::OptionToken;
///
/// let opt = OptionToken::new("verbose");
/// assert!(opt.matches("verbose"));
/// assert!(opt.matches("v"));
/// assert!(!opt.matches("quiet"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptionToken {
    name: String,
}

impl OptionToken {
    /// Wraps a dash-stripped flag name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The flag name as supplied (without dashes).
    pub fn as_str(&self) -> &str {
        &self.name
    }

    /// Checks this token against one declared alias.
    ///
    /// - Either side empty → no match.
    /// - Alias of exactly one byte → match iff the supplied token's first
    ///   byte equals it, regardless of what follows.
    /// - Otherwise → exact string equality.
    ///
    /// # Examples
    ///
    /// ```
    /// use command_router_core::OptionToken;
    ///
    /// assert!(OptionToken::new("v").matches("v"));
    /// assert!(OptionToken::new("v2").matches("v")); // first-byte rule
    /// assert!(!OptionToken::new("verbose").matches("verb"));
    /// assert!(!OptionToken::new("").matches("v"));
    /// ```
    pub fn matches(&self, alias: &str) -> bool {
        if self.name.is_empty() || alias.is_empty() {
            return false;
        }
        if alias.len() == 1 {
            self.name.as_bytes()[0] == alias.as_bytes()[0]
        } else {
            self.name == alias
        }
    }
}

/// One positional value together with the options attached to it.
///
/// Group order is the order positionals appeared on the command line and is
/// preserved all the way to the command callback.
///
/// # Examples
///
/// ```
/// use command_router_core::tokenize;
///
/// let groups = tokenize(["build", "--release", "pkg"]);
/// assert_eq!(groups[0].positional, "build");
/// assert!(groups[0].has_option("release"));
/// assert_eq!(groups[1].positional, "pkg");
/// assert!(groups[1].options.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArgGroup {
    /// The positional token's full text (empty for a leading options-only
    /// group).
    pub positional: String,
    /// Options that appeared after this positional and before the next one.
    pub options: Vec<OptionToken>,
}

impl ArgGroup {
    /// Creates a group for one positional token, with no options yet.
    pub fn new(positional: impl Into<String>) -> Self {
        Self {
            positional: positional.into(),
            options: Vec::new(),
        }
    }

    /// True when the group carries no positional text and no options.
    pub fn is_empty(&self) -> bool {
        self.positional.is_empty() && self.options.is_empty()
    }

    /// Whether any option in this group matches the given alias.
    ///
    /// Matching uses the same rule as [`OptionToken::matches`], so callbacks
    /// can probe with the short alias and catch the long spelling too.
    ///
    /// # Examples
    ///
    /// ```
    /// use command_router_core::tokenize;
    ///
    /// let groups = tokenize(["target", "--verbose"]);
    /// assert!(groups[0].has_option("v"));
    /// assert!(groups[0].has_option("verbose"));
    /// assert!(!groups[0].has_option("quiet"));
    /// ```
    pub fn has_option(&self, alias: &str) -> bool {
        self.options.iter().any(|opt| opt.matches(alias))
    }
}

/// Splits an option token into its dash-stripped name.
///
/// Returns `None` for positional text. A bare `-` or `--` has no name left
/// after stripping and is treated as positional text, not as an empty
/// option.
fn strip_option(token: &str) -> Option<&str> {
    let rest = token.strip_prefix('-')?;
    if rest.is_empty() {
        return None; // bare "-"
    }
    match rest.strip_prefix('-') {
        Some("") => None, // bare "--"
        Some(long) => Some(long),
        None => Some(rest),
    }
}

/// Tokenizes raw arguments into ordered [`ArgGroup`]s.
///
/// Scans left to right with one accumulating group. Option tokens attach to
/// the group opened by the most recent positional; a positional token
/// flushes the previous group and opens its own. Options seen before any
/// positional end up in a leading group with an empty positional string,
/// and options left over at the end of the scan are flushed as a final
/// group.
///
/// # Examples
///
/// ```
/// use command_router_core::tokenize;
///
/// let groups = tokenize(["-n", "src", "--follow"]);
/// assert_eq!(groups.len(), 2);
/// assert_eq!(groups[0].positional, "");
/// assert!(groups[0].has_option("n"));
/// assert_eq!(groups[1].positional, "src");
/// assert!(groups[1].has_option("follow"));
/// ```
pub fn tokenize<I, S>(raw_args: I) -> Vec<ArgGroup>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut groups = Vec::new();
    let mut current = ArgGroup::default();
    // The leading accumulator is dropped when empty; a group opened by a
    // positional token is kept even if its text is the empty string.
    let mut opened = false;

    for raw in raw_args {
        let token = raw.as_ref();
        match strip_option(token) {
            Some(name) => current.options.push(OptionToken::new(name)),
            None => {
                if opened || !current.is_empty() {
                    groups.push(current);
                }
                current = ArgGroup::new(token);
                opened = true;
            }
        }
    }
    if opened || !current.is_empty() {
        groups.push(current);
    }

    debug!(groups = groups.len(), "tokenized argument list");
    groups
}
