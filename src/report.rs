use std::fmt::Formatter;

use crate::cause::Cause;

/// Read-only view shared by [`Outcome`](crate::Outcome) and
/// [`ValueOutcome`](crate::ValueOutcome).
///
/// Fields are not validated against each other: a successful report may still
/// carry a cause, and a failed one may carry a message meant for success.
pub trait Report {
    /// Whether the represented operation succeeded.
    fn success(&self) -> bool;

    /// Human-readable note attached to the outcome.
    fn message(&self) -> Option<&str>;

    /// Error explaining the outcome, if one was attached.
    fn cause(&self) -> Option<&Cause>;
}

/// Writes `ok`/`fail`, then the message and the cause when present.
pub(crate) fn fmt_report<R>(report: &R, f: &mut Formatter<'_>) -> std::fmt::Result
where
    R: Report + ?Sized,
{
    f.write_str(if report.success() { "ok" } else { "fail" })?;

    if let Some(message) = report.message() {
        write!(f, ": {}", message)?;
    }

    if let Some(cause) = report.cause() {
        write!(f, " (caused by: {})", cause)?;
    }

    Ok(())
}
