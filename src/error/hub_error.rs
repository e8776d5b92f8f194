//! The base failure contract and the tagged enum over hub failure kinds.

use crate::error::ValidationFailure;

/// Base contract for failures raised inside the hub.
///
/// `errors` defaults to an empty list. Implementors that carry messages meant
/// for the caller override it.
///
/// # Example
///
/// ```rust
/// use clienthub_errors::{HubFailure, ValidationFailure};
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("storage unavailable")]
/// struct StorageDown;
///
/// impl HubFailure for StorageDown {
///     fn message(&self) -> &str {
///         "storage unavailable"
///     }
/// }
///
/// assert!(StorageDown.errors().is_empty());
///
/// let failure = ValidationFailure::new(vec!["Name is required".to_string()]);
/// assert_eq!(HubFailure::errors(&failure), vec!["Name is required"]);
/// ```
pub trait HubFailure: std::error::Error + Send + Sync {
    /// The description the failure was constructed with.
    fn message(&self) -> &str;

    /// Human-readable errors to report back to the caller.
    fn errors(&self) -> Vec<String> {
        Vec::new()
    }
}

/// Every failure kind the hub raises.
///
/// Higher layers catch a `HubError` and translate it into an
/// [`ErrorMessageList`](crate::ErrorMessageList) for the response body.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HubError {
    /// One or more validation rules failed.
    #[error(transparent)]
    Validation(#[from] ValidationFailure),

    /// Any other failure, known only by its description.
    #[error("{description}")]
    Unexpected { description: String },
}

impl HubError {
    /// Creates an [`HubError::Unexpected`] with the given description.
    pub fn unexpected(description: impl Into<String>) -> Self {
        HubError::Unexpected {
            description: description.into(),
        }
    }

    /// Returns true if this is a validation failure.
    pub fn is_validation(&self) -> bool {
        matches!(self, HubError::Validation(_))
    }
}

impl HubFailure for HubError {
    fn message(&self) -> &str {
        match self {
            HubError::Validation(failure) => failure.message(),
            HubError::Unexpected { description } => description,
        }
    }

    fn errors(&self) -> Vec<String> {
        match self {
            HubError::Validation(failure) => HubFailure::errors(failure),
            HubError::Unexpected { .. } => Vec::new(),
        }
    }
}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<HubError>();
    assert_sync::<HubError>();
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unexpected_uses_base_errors() {
        let error = HubError::unexpected("database offline");

        assert_eq!(error.message(), "database offline");
        assert!(error.errors().is_empty());
        assert!(!error.is_validation());
        assert_eq!(error.to_string(), "database offline");
    }

    #[test]
    fn test_validation_dispatches_errors() {
        let error: HubError =
            ValidationFailure::new(vec!["A".to_string(), "B".to_string()]).into();

        assert!(error.is_validation());
        assert_eq!(error.message(), "");
        assert_eq!(error.errors(), vec!["A", "B"]);
    }

    #[test]
    fn test_question_mark_converts_validation_failure() {
        fn register() -> Result<(), HubError> {
            Err(ValidationFailure::new(vec!["Email invalid".to_string()]))?;
            Ok(())
        }

        let error = register().unwrap_err();
        assert_eq!(error.errors(), vec!["Email invalid"]);
    }

    #[test]
    fn test_as_trait_object() {
        let failures: Vec<Box<dyn HubFailure>> = vec![
            Box::new(HubError::unexpected("boom")),
            Box::new(ValidationFailure::new(vec!["bad".to_string()])),
        ];

        let counts: Vec<usize> = failures.iter().map(|f| f.errors().len()).collect();
        assert_eq!(counts, vec![0, 1]);
    }
}
