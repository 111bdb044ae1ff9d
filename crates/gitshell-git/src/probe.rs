//! Fail-soft adapter for presence/absence questions.

use std::fmt::Display;
use std::future::Future;

use tracing::trace;

/// Awaits a fallible operation and reports only whether it succeeded.
///
/// The success payload and the error are both discarded. Commands such as
/// `git diff --quiet` signal "condition not met" with a non-zero exit, and
/// this turns that convention into a plain `false`.
pub async fn probe<T, E, F>(operation: F) -> bool
where
    F: Future<Output = Result<T, E>>,
    E: Display,
{
    match operation.await {
        Ok(_) => true,
        Err(err) => {
            trace!(%err, "probe resolved to false");
            false
        }
    }
}
