//! Argument normalization.
//!
//! Everything here is pure: it turns typed inputs into pieces of a single
//! command line without touching the filesystem or spawning anything.

use crate::flags::{Flag, Flags};

/// The path used when an operation is given no targets.
pub(crate) const ALL_PATHS: &str = ".";

/// One or more paths or names, in caller order.
///
/// Values are never split or reordered. Omitted targets render as `.`; an
/// explicit empty list renders as nothing and is left for git to reject.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Targets(Option<Vec<String>>);

impl Targets {
    /// Creates an omitted target set, meaning every path.
    #[must_use]
    pub fn all() -> Self {
        Self(None)
    }

    /// Returns true if the targets were omitted.
    #[must_use]
    pub fn is_omitted(&self) -> bool {
        self.0.is_none()
    }

    /// Returns true if no target was given, omitted or not.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.as_ref().is_none_or(Vec::is_empty)
    }

    /// Joins the targets with single spaces, or `.` if they were omitted.
    ///
    /// Empty values render as `""` so they still reach git as arguments.
    #[must_use]
    pub fn render(&self) -> String {
        match &self.0 {
            None => ALL_PATHS.to_string(),
            Some(targets) => targets
                .iter()
                .map(|target| positional(target))
                .collect::<Vec<_>>()
                .join(" "),
        }
    }
}

impl From<()> for Targets {
    fn from((): ()) -> Self {
        Self::all()
    }
}

impl From<&str> for Targets {
    fn from(target: &str) -> Self {
        Self(Some(vec![target.to_string()]))
    }
}

impl From<String> for Targets {
    fn from(target: String) -> Self {
        Self(Some(vec![target]))
    }
}

impl From<Vec<String>> for Targets {
    fn from(targets: Vec<String>) -> Self {
        Self(Some(targets))
    }
}

impl From<Vec<&str>> for Targets {
    fn from(targets: Vec<&str>) -> Self {
        Self(Some(targets.into_iter().map(String::from).collect()))
    }
}

impl From<&[&str]> for Targets {
    fn from(targets: &[&str]) -> Self {
        Self(Some(targets.iter().map(|t| (*t).to_string()).collect()))
    }
}

impl<const N: usize> From<[&str; N]> for Targets {
    fn from(targets: [&str; N]) -> Self {
        Self(Some(targets.iter().map(|t| (*t).to_string()).collect()))
    }
}

impl<T: Into<Targets>> From<Option<T>> for Targets {
    fn from(targets: Option<T>) -> Self {
        targets.map_or_else(Self::all, Into::into)
    }
}

fn positional(value: &str) -> String {
    if value.is_empty() {
        quote(value)
    } else {
        value.to_string()
    }
}

/// Wraps free text in double quotes for the shell.
///
/// Embedded `"` becomes `\"`. Backslash, `$` and backtick are escaped the
/// same way since they keep their meaning inside double quotes. The result
/// is meant for a POSIX `sh`, which is what the shell executor runs.
#[must_use]
pub fn quote(text: &str) -> String {
    let mut quoted = String::with_capacity(text.len() + 2);
    quoted.push('"');
    for c in text.chars() {
        if matches!(c, '"' | '\\' | '$' | '`') {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('"');
    quoted
}

/// Builder for a single `git` command line.
#[derive(Debug, Clone)]
pub(crate) struct CommandLine {
    parts: Vec<String>,
}

impl CommandLine {
    pub(crate) fn new(verb: &str) -> Self {
        Self {
            parts: vec!["git".to_string(), verb.to_string()],
        }
    }

    /// Appends a positional value. An empty value is kept as `""`.
    pub(crate) fn arg(mut self, arg: &str) -> Self {
        self.parts.push(positional(arg));
        self
    }

    pub(crate) fn opt_arg(self, arg: Option<&str>) -> Self {
        match arg {
            Some(arg) => self.arg(arg),
            None => self,
        }
    }

    /// Appends rendered flags, or nothing if there are none.
    pub(crate) fn flags<F: Flag>(mut self, flags: &Flags<F>) -> Self {
        if !flags.is_empty() {
            self.parts.push(flags.render());
        }
        self
    }

    /// Appends rendered targets, or nothing for an explicit empty list.
    pub(crate) fn targets(mut self, targets: &Targets) -> Self {
        let rendered = targets.render();
        if !rendered.is_empty() {
            self.parts.push(rendered);
        }
        self
    }

    pub(crate) fn message(mut self, message: &str) -> Self {
        self.parts.push(quote(message));
        self
    }

    pub(crate) fn build(self) -> String {
        self.parts.join(" ")
    }
}
