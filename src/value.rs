use std::fmt::Display;

use log::{debug, trace};

use crate::{
    cause::Cause,
    outcome::Outcome,
    report::{fmt_report, Report},
};

/// Success or failure of an operation, together with the value it produced.
///
/// The value is optional: outcomes built without one (`empty`, `ok`, `fail`,
/// copies of an [`Outcome`]) hold `None`. Neither the value nor the cause is
/// checked against the success flag, so a failure may still carry a value.
///
/// ```rust
/// use outcome::{Cause, Report, ValueOutcome};
///
/// let cause = Cause::msg("checksum mismatch");
/// let outcome = ValueOutcome::fail_detailed(Some(42), Some("bad"), Some(cause.clone()));
///
/// assert!(!outcome.success());
/// assert_eq!(outcome.value(), Some(&42));
/// assert_eq!(outcome.message(), Some("bad"));
/// assert_eq!(outcome.cause(), Some(&cause));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueOutcome<T> {
    success: bool,
    message: Option<String>,
    cause: Option<Cause>,
    value: Option<T>,
}

impl<T> Default for ValueOutcome<T> {
    fn default() -> Self {
        Self {
            success: false,
            message: None,
            cause: None,
            value: None,
        }
    }
}

impl<T> ValueOutcome<T> {
    /// Failed outcome with nothing else set.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn ok() -> Self {
        Self::of(true)
    }

    pub fn ok_with(value: T) -> Self {
        Self {
            success: true,
            value: Some(value),
            ..Default::default()
        }
    }

    pub fn ok_with_message<M>(value: T, message: M) -> Self
    where
        M: Into<String>,
    {
        Self {
            success: true,
            message: Some(message.into()),
            value: Some(value),
            ..Default::default()
        }
    }

    pub fn fail() -> Self {
        Self::of(false)
    }

    pub fn fail_with(value: T) -> Self {
        Self {
            value: Some(value),
            ..Default::default()
        }
    }

    pub fn fail_with_message<M>(value: T, message: M) -> Self
    where
        M: Into<String>,
    {
        Self {
            message: Some(message.into()),
            value: Some(value),
            ..Default::default()
        }
    }

    /// Failed outcome with every field given explicitly.
    pub fn fail_detailed(value: Option<T>, message: Option<&str>, cause: Option<Cause>) -> Self {
        Self {
            success: false,
            message: message.map(String::from),
            cause,
            value,
        }
    }

    /// Failed outcome without a value, explained by `message` and `cause`.
    pub fn fail_caused(message: Option<&str>, cause: Option<Cause>) -> Self {
        Self::fail_detailed(None, message, cause)
    }

    pub fn of(success: bool) -> Self {
        Self {
            success,
            ..Default::default()
        }
    }

    /// Successful outcome carrying `value`. `None` is stored as is and the
    /// outcome still succeeds.
    pub fn from_value(value: Option<T>) -> Self {
        Self {
            success: true,
            value,
            ..Default::default()
        }
    }

    /// Failed outcome carrying `cause`, no value and no message. An absent
    /// cause still yields a failure.
    pub fn from_error(cause: Option<Cause>) -> Self {
        debug!("ValueOutcome::from_error - cause: {:?}", cause);
        Self {
            cause,
            ..Default::default()
        }
    }

    /// Copies success, message and cause of `other`. The value stays `None`.
    pub fn from_outcome(other: &Outcome) -> Self {
        Self {
            success: other.success(),
            message: other.message().map(String::from),
            cause: other.cause().cloned(),
            value: None,
        }
    }

    /// Independent copy of `other`, value included.
    pub fn from_value_outcome(other: &ValueOutcome<T>) -> Self
    where
        T: Clone,
    {
        other.clone()
    }

    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn into_value(self) -> Option<T> {
        self.value
    }

    pub fn with_data(&mut self, value: Option<T>) -> &mut Self {
        self.value = value;
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

    /// Sets value, then message. A `None` message clears the current one.
    pub fn with(&mut self, value: Option<T>, message: Option<&str>) -> &mut Self {
        self.with_data(value).with_message(message)
    }

    /// Sets value, message and cause, in that order.
    pub fn with_all(
        &mut self,
        value: Option<T>,
        message: Option<&str>,
        cause: Option<Cause>,
    ) -> &mut Self {
        self.with_data(value).with_message(message).with_cause(cause)
    }

    /// Calls `on_success` or `on_fail` with this outcome, depending on
    /// [`success`](Report::success). Exactly one of them runs.
    pub fn match_with<S, F>(&self, on_success: S, on_fail: F)
    where
        S: FnOnce(&Self),
        F: FnOnce(&Self),
    {
        trace!("ValueOutcome::match_with - success: {}", self.success);
        if self.success {
            on_success(self)
        } else {
            on_fail(self)
        }
    }
}

impl<T> Report for ValueOutcome<T> {
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

/// Only the report is shown, never the value.
impl<T> Display for ValueOutcome<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fmt_report(self, f)
    }
}

impl<T> From<Option<T>> for ValueOutcome<T> {
    fn from(value: Option<T>) -> Self {
        Self::from_value(value)
    }
}

impl<T> From<Cause> for ValueOutcome<T> {
    fn from(cause: Cause) -> Self {
        Self::from_error(Some(cause))
    }
}

impl<T> From<anyhow::Error> for ValueOutcome<T> {
    fn from(err: anyhow::Error) -> Self {
        Self::from_error(Some(err.into()))
    }
}

impl<T> From<&Outcome> for ValueOutcome<T> {
    fn from(other: &Outcome) -> Self {
        Self::from_outcome(other)
    }
}

impl<T> From<Outcome> for ValueOutcome<T> {
    fn from(other: Outcome) -> Self {
        Self::from_outcome(&other)
    }
}

/// `Ok(v)` becomes a success carrying `v`, `Err(e)` a failure caused by `e`.
impl<T> From<anyhow::Result<T>> for ValueOutcome<T> {
    fn from(result: anyhow::Result<T>) -> Self {
        match result {
            Ok(value) => Self::ok_with(value),
            Err(e) => Self::from(e),
        }
    }
}
