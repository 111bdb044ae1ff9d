//! Resolution of `git push` positional arguments.
//!
//! Push accepts its first two positions as either a name or a flag list. The
//! shapes are classified once into a [`PushTarget`] before any command line
//! is built.

use crate::args::CommandLine;
use crate::flags::{Flags, PushFlag};

/// Remote used when none is given.
pub const DEFAULT_REMOTE: &str = "origin";

/// A positional push argument: either a name or a flag list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PushArg {
    /// A remote or branch name.
    Name(String),
    /// A complete flag set.
    Flags(Flags<PushFlag>),
}

impl From<&str> for PushArg {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for PushArg {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl From<PushFlag> for PushArg {
    fn from(flag: PushFlag) -> Self {
        Self::Flags(flag.into())
    }
}

impl From<Vec<PushFlag>> for PushArg {
    fn from(flags: Vec<PushFlag>) -> Self {
        Self::Flags(flags.into())
    }
}

impl<const N: usize> From<[PushFlag; N]> for PushArg {
    fn from(flags: [PushFlag; N]) -> Self {
        Self::Flags(flags.into())
    }
}

impl From<Flags<PushFlag>> for PushArg {
    fn from(flags: Flags<PushFlag>) -> Self {
        Self::Flags(flags)
    }
}

/// Canonical push arguments: remote, optional branch and flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushTarget {
    /// The remote to push to.
    pub remote: String,
    /// The branch to push, if any.
    pub branch: Option<String>,
    /// Flags, in caller order.
    pub flags: Flags<PushFlag>,
}

impl PushTarget {
    /// Classifies positional arguments by shape.
    ///
    /// - A flag list in first position is the whole flag set; the remote is
    ///   [`DEFAULT_REMOTE`] and there is no branch.
    /// - Otherwise the first position is the remote. A flag list in second
    ///   position is the flag set with no branch; a name there is the branch
    ///   and `third` supplies the flags.
    #[must_use]
    pub fn resolve(
        first: Option<PushArg>,
        second: Option<PushArg>,
        third: Flags<PushFlag>,
    ) -> Self {
        let remote = match first {
            Some(PushArg::Flags(flags)) => return Self::new(DEFAULT_REMOTE, None, flags),
            Some(PushArg::Name(remote)) => remote,
            None => DEFAULT_REMOTE.to_string(),
        };

        match second {
            Some(PushArg::Flags(flags)) => Self::new(remote, None, flags),
            Some(PushArg::Name(branch)) => Self::new(remote, Some(branch), third),
            None => Self::new(remote, None, third),
        }
    }

    fn new(remote: impl Into<String>, branch: Option<String>, flags: Flags<PushFlag>) -> Self {
        Self {
            remote: remote.into(),
            branch,
            flags,
        }
    }

    /// Builds the `git push` command line.
    #[must_use]
    pub fn command_line(&self) -> String {
        CommandLine::new("push")
            .flags(&self.flags)
            .arg(self.remote.as_str())
            .opt_arg(self.branch.as_deref())
            .build()
    }
}

impl Default for PushTarget {
    fn default() -> Self {
        Self::resolve(None, None, Flags::none())
    }
}

impl From<()> for PushTarget {
    fn from((): ()) -> Self {
        Self::default()
    }
}

impl From<&str> for PushTarget {
    fn from(remote: &str) -> Self {
        Self::resolve(Some(remote.into()), None, Flags::none())
    }
}

impl From<String> for PushTarget {
    fn from(remote: String) -> Self {
        Self::resolve(Some(remote.into()), None, Flags::none())
    }
}

impl From<PushFlag> for PushTarget {
    fn from(flag: PushFlag) -> Self {
        Self::resolve(Some(flag.into()), None, Flags::none())
    }
}

impl From<Vec<PushFlag>> for PushTarget {
    fn from(flags: Vec<PushFlag>) -> Self {
        Self::resolve(Some(flags.into()), None, Flags::none())
    }
}

impl<const N: usize> From<[PushFlag; N]> for PushTarget {
    fn from(flags: [PushFlag; N]) -> Self {
        Self::resolve(Some(flags.into()), None, Flags::none())
    }
}

impl<A, B> From<(A, B)> for PushTarget
where
    A: Into<PushArg>,
    B: Into<PushArg>,
{
    fn from((first, second): (A, B)) -> Self {
        Self::resolve(Some(first.into()), Some(second.into()), Flags::none())
    }
}

impl<A, B, C> From<(A, B, C)> for PushTarget
where
    A: Into<PushArg>,
    B: Into<PushArg>,
    C: Into<Flags<PushFlag>>,
{
    fn from((first, second, third): (A, B, C)) -> Self {
        Self::resolve(Some(first.into()), Some(second.into()), third.into())
    }
}
