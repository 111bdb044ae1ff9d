//! Default branch inference from `git branch -r` output.

use std::sync::LazyLock;

use regex::Regex;

/// Branch name returned when the listing has no symbolic HEAD line.
///
/// This is a guess. A repository may legitimately default to another name.
pub const DEFAULT_BRANCH_FALLBACK: &str = "main";

const HEAD_MARKER: &str = "HEAD ->";

static HEAD_POINTER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*\S*HEAD\s*->\s*(?:[^/\s]+/)?(?P<branch>\S.*?)\s*$").expect("invalid regex")
});

/// Extracts the default branch from a remote-tracking branch listing.
///
/// Looks for a line such as `  origin/HEAD -> origin/main` and returns the
/// target without its remote prefix. Falls back to
/// [`DEFAULT_BRANCH_FALLBACK`] when no such line exists.
#[must_use]
pub fn parse_default_branch(listing: &str) -> String {
    listing
        .lines()
        .find(|line| line.contains(HEAD_MARKER))
        .and_then(|line| HEAD_POINTER_RE.captures(line))
        .and_then(|captures| captures.name("branch"))
        .map_or_else(
            || DEFAULT_BRANCH_FALLBACK.to_string(),
            |branch| branch.as_str().to_string(),
        )
}
