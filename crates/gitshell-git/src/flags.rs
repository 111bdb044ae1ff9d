//! Closed flag sets, one per operation.
//!
//! Each operation only accepts tokens from its own enumeration, so passing a
//! flag that does not belong to an operation does not compile.

use std::borrow::Cow;

/// A command-line modifier token.
pub trait Flag {
    /// Returns the token as it appears on the command line.
    fn token(&self) -> Cow<'_, str>;
}

/// Zero, one or many flags of one kind, in caller order.
///
/// A single flag and a one-element list convert to the same value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flags<F>(Vec<F>);

impl<F> Flags<F> {
    /// Creates an empty flag set.
    #[must_use]
    pub fn none() -> Self {
        Self(Vec::new())
    }

    /// Returns true if no flags are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the flags in order.
    #[must_use]
    pub fn as_slice(&self) -> &[F] {
        &self.0
    }

    /// Appends a flag.
    #[must_use]
    pub fn with(mut self, flag: F) -> Self {
        self.0.push(flag);
        self
    }
}

impl<F: Flag> Flags<F> {
    /// Joins the tokens with single spaces.
    #[must_use]
    pub fn render(&self) -> String {
        self.0
            .iter()
            .map(Flag::token)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl<F> Default for Flags<F> {
    fn default() -> Self {
        Self::none()
    }
}

impl<F> From<()> for Flags<F> {
    fn from((): ()) -> Self {
        Self::none()
    }
}

impl<F: Flag> From<Vec<F>> for Flags<F> {
    fn from(flags: Vec<F>) -> Self {
        Self(flags)
    }
}

impl<F: Flag, const N: usize> From<[F; N]> for Flags<F> {
    fn from(flags: [F; N]) -> Self {
        Self(flags.into())
    }
}

impl<F: Flag + Clone> From<&[F]> for Flags<F> {
    fn from(flags: &[F]) -> Self {
        Self(flags.to_vec())
    }
}

macro_rules! flag_set {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $token:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl Flag for $name {
            fn token(&self) -> Cow<'_, str> {
                Cow::Borrowed(match self {
                    $( Self::$variant => $token, )+
                })
            }
        }

        impl From<$name> for Flags<$name> {
            fn from(flag: $name) -> Self {
                Self(vec![flag])
            }
        }

        impl From<Option<$name>> for Flags<$name> {
            fn from(flag: Option<$name>) -> Self {
                Self(flag.into_iter().collect())
            }
        }
    };
}

flag_set! {
    /// Modes accepted by `git reset`; at most one applies.
    pub enum ResetMode {
        /// `--soft`
        Soft => "--soft",
        /// `--mixed`
        Mixed => "--mixed",
        /// `--hard`
        Hard => "--hard",
        /// `--merge`
        Merge => "--merge",
        /// `--keep`
        Keep => "--keep",
    }
}

flag_set! {
    /// Flags accepted by `git push`.
    pub enum PushFlag {
        /// `--force`
        Force => "--force",
        /// `--force-with-lease`
        ForceWithLease => "--force-with-lease",
        /// `--tags`
        Tags => "--tags",
        /// `--follow-tags`
        FollowTags => "--follow-tags",
        /// `--set-upstream`
        SetUpstream => "--set-upstream",
        /// `--no-verify`
        NoVerify => "--no-verify",
        /// `--dry-run`
        DryRun => "--dry-run",
        /// `--all`
        All => "--all",
        /// `--delete`
        Delete => "--delete",
    }
}

flag_set! {
    /// Flags accepted by `git merge`.
    pub enum MergeFlag {
        /// `--no-ff`
        NoFastForward => "--no-ff",
        /// `--ff-only`
        FastForwardOnly => "--ff-only",
        /// `--squash`
        Squash => "--squash",
        /// `--no-commit`
        NoCommit => "--no-commit",
        /// `--no-edit`
        NoEdit => "--no-edit",
        /// `--abort`
        Abort => "--abort",
        /// `--continue`
        Continue => "--continue",
    }
}

flag_set! {
    /// Flags accepted by `git checkout`.
    pub enum CheckoutFlag {
        /// `-b`, create the branch.
        NewBranch => "-b",
        /// `-B`, create or reset the branch.
        ResetBranch => "-B",
        /// `--force`
        Force => "--force",
        /// `--track`
        Track => "--track",
        /// `--detach`
        Detach => "--detach",
        /// `--orphan`
        Orphan => "--orphan",
    }
}

flag_set! {
    /// Flags accepted by `git branch`.
    pub enum BranchFlag {
        /// `-d`
        Delete => "-d",
        /// `-D`
        ForceDelete => "-D",
        /// `-m`
        Move => "-m",
        /// `-M`
        ForceMove => "-M",
        /// `-f`
        Force => "-f",
        /// `--list`
        List => "--list",
        /// `--all`
        All => "--all",
        /// `--remotes`
        Remotes => "--remotes",
    }
}

flag_set! {
    /// Flags accepted by `git tag`.
    pub enum TagFlag {
        /// `-a`
        Annotate => "-a",
        /// `-f`
        Force => "-f",
        /// `-d`
        Delete => "-d",
        /// `-s`
        Sign => "-s",
        /// `--list`
        List => "--list",
    }
}

flag_set! {
    /// Flags accepted by `git commit`.
    pub enum CommitFlag {
        /// `--all`
        All => "--all",
        /// `--amend`
        Amend => "--amend",
        /// `--allow-empty`
        AllowEmpty => "--allow-empty",
        /// `--no-verify`
        NoVerify => "--no-verify",
        /// `--signoff`
        Signoff => "--signoff",
    }
}

/// Flags accepted by `git restore`.
///
/// The source flag carries the reference to restore from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RestoreFlag {
    /// `--staged`
    Staged,
    /// `--worktree`
    Worktree,
    /// `--source=<ref>`
    Source(String),
}

impl RestoreFlag {
    /// Creates a `--source=<ref>` flag.
    #[must_use]
    pub fn source(reference: impl Into<String>) -> Self {
        Self::Source(reference.into())
    }
}

impl Flag for RestoreFlag {
    fn token(&self) -> Cow<'_, str> {
        match self {
            Self::Staged => Cow::Borrowed("--staged"),
            Self::Worktree => Cow::Borrowed("--worktree"),
            Self::Source(reference) => Cow::Owned(format!("--source={reference}")),
        }
    }
}

impl From<RestoreFlag> for Flags<RestoreFlag> {
    fn from(flag: RestoreFlag) -> Self {
        Self(vec![flag])
    }
}
