//! Accumulating rule checks that end in a [`ValidationFailure`].
//!
//! Every rule is evaluated; a failing rule never stops the ones after it. The
//! collected messages come out in the order the rules were declared.
//!
//! ```rust
//! use clienthub_errors::Rules;
//!
//! let name = "";
//! let email = "not-an-email";
//!
//! let result = Rules::new()
//!     .not_empty(name, "Name is required")
//!     .email(email, "Email invalid")
//!     .finish();
//!
//! let failure = result.unwrap_err();
//! assert_eq!(failure.errors(), ["Name is required", "Email invalid"]);
//! ```

use std::sync::OnceLock;

use regex::Regex;
use stillwater::prelude::*;
use stillwater::Validation;

use crate::error::ValidationFailure;

static EMAIL: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL.get_or_init(|| {
        Regex::new(r"^[^@\s]+@[^@\s.]+(\.[^@\s.]+)+$").expect("email pattern is a valid regex")
    })
}

/// An accumulator of rule outcomes.
///
/// Internally this is a `Validation<(), NonEmptyVec<String>>`: success until
/// the first rule fails, then a failure that every further failing rule
/// extends.
pub struct Rules {
    outcome: Validation<(), NonEmptyVec<String>>,
}

impl Rules {
    /// Creates an accumulator with no failures.
    pub fn new() -> Self {
        Self {
            outcome: Validation::Success(()),
        }
    }

    fn record(mut self, message: String) -> Self {
        let failed = NonEmptyVec::singleton(message);
        self.outcome = match self.outcome {
            Validation::Success(()) => Validation::Failure(failed),
            Validation::Failure(errors) => Validation::Failure(errors.combine(failed)),
        };
        self
    }

    /// Records `message` unless `ok` holds.
    pub fn check(self, ok: bool, message: impl Into<String>) -> Self {
        if ok {
            self
        } else {
            self.record(message.into())
        }
    }

    /// Fails when `value` is empty or only whitespace.
    pub fn not_empty(self, value: &str, message: impl Into<String>) -> Self {
        self.check(!value.trim().is_empty(), message)
    }

    /// Fails when `value` has more than `max` characters.
    ///
    /// Characters are counted as Unicode scalar values.
    pub fn max_len(self, value: &str, max: usize, message: impl Into<String>) -> Self {
        self.check(value.chars().count() <= max, message)
    }

    /// Fails unless `value` has the shape `local@domain.tld`.
    ///
    /// Every dot-separated domain label must be non-empty.
    pub fn email(self, value: &str, message: impl Into<String>) -> Self {
        self.check(email_regex().is_match(value), message)
    }

    /// Appends the failures of `other` after this accumulator's own.
    pub fn merge(self, other: Rules) -> Self {
        match other.outcome {
            Validation::Success(()) => self,
            Validation::Failure(errors) => errors.into_vec().into_iter().fold(self, Self::record),
        }
    }

    /// Returns true if no rule has failed.
    pub fn is_valid(&self) -> bool {
        self.outcome.is_success()
    }

    /// Returns the messages recorded so far, in order.
    pub fn failures(&self) -> Vec<&str> {
        match &self.outcome {
            Validation::Success(()) => Vec::new(),
            Validation::Failure(errors) => errors.iter().map(String::as_str).collect(),
        }
    }

    /// Finishes the checks.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationFailure` holding every recorded message if any
    /// rule failed.
    pub fn finish(self) -> Result<(), ValidationFailure> {
        self.finish_with(())
    }

    /// Finishes the checks, handing back `value` when all rules passed.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationFailure` holding every recorded message if any
    /// rule failed.
    pub fn finish_with<T>(self, value: T) -> Result<T, ValidationFailure> {
        match self.outcome {
            Validation::Success(()) => Ok(value),
            Validation::Failure(errors) => Err(ValidationFailure::new(errors.into_vec())),
        }
    }

    /// Returns the underlying accumulated validation.
    pub fn into_validation(self) -> Validation<(), NonEmptyVec<String>> {
        self.outcome
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self::new()
    }
}
