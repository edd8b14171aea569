//! Structured outcomes for operations whose failure is expected.
//!
//! An [`Outcome`] tells whether something succeeded, optionally with a message
//! and the [`Cause`] of a failure. A [`ValueOutcome`] additionally carries the
//! value the operation produced. Both expose their fields through [`Report`].
//!
//! ```rust
//! use outcome::{Outcome, Report, ValueOutcome};
//!
//! fn parse_port(raw: &str) -> ValueOutcome<u16> {
//!     match raw.parse::<u16>() {
//!         Ok(port) => ValueOutcome::ok_with(port),
//!         Err(e) => anyhow::Error::new(e).into(),
//!     }
//! }
//!
//! let port = parse_port("8080");
//! assert_eq!(port.value(), Some(&8080));
//!
//! let narrowed = Outcome::from(&parse_port("http"));
//! assert!(!narrowed.success());
//! assert!(narrowed.cause().is_some());
//! ```
//!
//! Outcomes hold no locks. Mutators take `&mut self`, so sharing one outcome
//! between threads for mutation needs synchronization on the caller's side.

mod cause;
pub use cause::Cause;

mod outcome;
pub use outcome::Outcome;

mod report;
pub use report::Report;

mod value;
pub use value::ValueOutcome;
