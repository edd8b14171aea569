use std::fmt::Display;

use log::{debug, trace};

use crate::{
    cause::Cause,
    report::{fmt_report, Report},
    value::ValueOutcome,
};

/// Success or failure of an operation that produces no payload.
///
/// Outcomes are plain data: every constructor and mutator is total. Mutators
/// change the outcome in place and hand the same outcome back, so calls chain:
///
/// ```rust
/// use outcome::{Cause, Outcome, Report};
///
/// let mut outcome = Outcome::empty();
/// outcome
///     .with_success(false)
///     .with_message(Some("could not save"))
///     .with_cause(Some(Cause::msg("disk is full")));
///
/// assert!(!outcome.success());
/// assert_eq!(outcome.message(), Some("could not save"));
/// ```
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    success: bool,
    message: Option<String>,
    cause: Option<Cause>,
}

impl Outcome {
    /// Failed outcome with nothing else set.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn ok() -> Self {
        Self::of(true)
    }

    pub fn ok_with<M>(message: M) -> Self
    where
        M: Into<String>,
    {
        Self {
            success: true,
            message: Some(message.into()),
            cause: None,
        }
    }

    pub fn fail() -> Self {
        Self::of(false)
    }

    pub fn fail_with<M>(message: M) -> Self
    where
        M: Into<String>,
    {
        Self {
            success: false,
            message: Some(message.into()),
            cause: None,
        }
    }

    /// Failed outcome explained by `cause`, with an optional message.
    pub fn fail_caused(cause: Option<Cause>, message: Option<&str>) -> Self {
        Self {
            success: false,
            message: message.map(String::from),
            cause,
        }
    }

    pub fn of(success: bool) -> Self {
        Self {
            success,
            ..Default::default()
        }
    }

    /// Failed outcome carrying `cause` and no message. An absent cause still
    /// yields a failure.
    pub fn from_error(cause: Option<Cause>) -> Self {
        debug!("Outcome::from_error - cause: {:?}", cause);
        Self {
            success: false,
            message: None,
            cause,
        }
    }

    /// Independent copy of `other`.
    pub fn from_outcome(other: &Outcome) -> Self {
        other.clone()
    }

    /// Copies success, message and cause of `other`, dropping its payload.
    pub fn from_value_outcome<T>(other: &ValueOutcome<T>) -> Self {
        Self {
            success: other.success(),
            message: other.message().map(String::from),
            cause: other.cause().cloned(),
        }
    }

    pub fn with_success(&mut self, success: bool) -> &mut Self {
        self.success = success;
        self
    }

    pub fn with_message(&mut self, message: Option<&str>) -> &mut Self {
        self.message = message.map(String::from);
        self
    }

    pub fn with_cause(&mut self, cause: Option<Cause>) -> &mut Self {
        self.cause = cause;
        self
    }

    /// Sets cause, then message. A `None` message clears the current one.
    pub fn with(&mut self, cause: Option<Cause>, message: Option<&str>) -> &mut Self {
        self.with_cause(cause).with_message(message)
    }

    /// Calls `on_success` or `on_fail` with this outcome, depending on
    /// [`success`](Report::success). Exactly one of them runs.
    pub fn match_with<S, F>(&self, on_success: S, on_fail: F)
    where
        S: FnOnce(&Self),
        F: FnOnce(&Self),
    {
        trace!("Outcome::match_with - success: {}", self.success);
        if self.success {
            on_success(self)
        } else {
            on_fail(self)
        }
    }
}

impl Report for Outcome {
    fn success(&self) -> bool {
        self.success
    }

    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    fn cause(&self) -> Option<&Cause> {
        self.cause.as_ref()
    }
}

impl Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fmt_report(self, f)
    }
}

impl From<Cause> for Outcome {
    fn from(cause: Cause) -> Self {
        Self::from_error(Some(cause))
    }
}

impl From<Option<Cause>> for Outcome {
    fn from(cause: Option<Cause>) -> Self {
        Self::from_error(cause)
    }
}

impl From<anyhow::Error> for Outcome {
    fn from(err: anyhow::Error) -> Self {
        Self::from_error(Some(err.into()))
    }
}

/// `Ok(())` becomes [`Outcome::ok`], `Err(e)` becomes a failure caused by `e`.
impl From<anyhow::Result<()>> for Outcome {
    fn from(result: anyhow::Result<()>) -> Self {
        match result {
            Ok(()) => Self::ok(),
            Err(e) => Self::from(e),
        }
    }
}

impl<T> From<&ValueOutcome<T>> for Outcome {
    fn from(other: &ValueOutcome<T>) -> Self {
        Self::from_value_outcome(other)
    }
}

impl<T> From<ValueOutcome<T>> for Outcome {
    fn from(other: ValueOutcome<T>) -> Self {
        Self::from_value_outcome(&other)
    }
}
