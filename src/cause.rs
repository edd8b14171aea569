use std::{
    fmt::{Debug, Display},
    ops::Deref,
    sync::Arc,
};

/// Underlying failure detail stored by an outcome.
///
/// Cloning a `Cause` shares the wrapped error instead of copying it, so two
/// outcomes copied from each other point at the very same error. Equality is
/// identity: two causes are equal only when they share the same error.
///
/// ```rust
/// use outcome::Cause;
///
/// let cause = Cause::msg("disk is full");
/// let copy = cause.clone();
///
/// assert_eq!(cause, copy);
/// assert_ne!(cause, Cause::msg("disk is full"));
/// ```
#[derive(Clone)]
pub struct Cause(Arc<anyhow::Error>);

impl Cause {
    /// Wraps anything that converts into `anyhow::Error`, including every
    /// `std::error::Error + Send + Sync + 'static`.
    pub fn new<E>(err: E) -> Self
    where
        E: Into<anyhow::Error>,
    {
        Self(Arc::new(err.into()))
    }

    /// Builds a cause out of a plain message.
    pub fn msg<M>(message: M) -> Self
    where
        M: Display + Debug + Send + Sync + 'static,
    {
        Self(Arc::new(anyhow::Error::msg(message)))
    }

    pub fn error(&self) -> &anyhow::Error {
        &self.0
    }

    /// Returns true if both causes share the same error.
    pub fn ptr_eq(&self, other: &Cause) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl From<anyhow::Error> for Cause {
    fn from(err: anyhow::Error) -> Self {
        Self(Arc::new(err))
    }
}

impl Deref for Cause {
    type Target = anyhow::Error;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl PartialEq for Cause {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for Cause {}

impl Display for Cause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&*self.0, f)
    }
}

impl Debug for Cause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Debug::fmt(&*self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::Cause;
    use std::io;

    #[test]
    fn test_cause_identity() {
        let cause = Cause::msg("boom");

        assert_eq!(cause, cause.clone());
        assert!(cause.ptr_eq(&cause.clone()));
        assert_ne!(cause, Cause::msg("boom"));
    }

    #[test]
    fn test_cause_keeps_source_error() {
        let cause = Cause::new(io::Error::new(io::ErrorKind::NotFound, "missing file"));

        let inner = cause
            .downcast_ref::<io::Error>()
            .expect("cause should wrap io::Error");
        assert_eq!(inner.kind(), io::ErrorKind::NotFound);
        assert_eq!(cause.to_string(), "missing file");
    }

    #[test]
    fn test_cause_from_anyhow() {
        let cause: Cause = anyhow::anyhow!("invalid state: {}", 3).into();

        assert_eq!(cause.error().to_string(), "invalid state: 3");
        assert_eq!(format!("{}", cause), "invalid state: 3");
    }
}
