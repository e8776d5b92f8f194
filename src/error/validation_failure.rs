//! The failure raised when one or more validation rules fail.

use crate::error::HubFailure;

/// Validation failure carrying the messages of every rule that failed.
///
/// The messages are fixed at construction and returned unchanged, in the
/// order given. The list may be empty; no check is made on its contents.
///
/// The inherent [`errors`](Self::errors) borrows the messages as a slice.
/// [`HubFailure::errors`] returns an owned copy, so it works through
/// `dyn HubFailure` and [`HubError`](crate::HubError) alike.
///
/// # Example
///
/// ```rust
/// use clienthub_errors::ValidationFailure;
///
/// let failure = ValidationFailure::new(vec![
///     "Name is required".to_string(),
///     "Email invalid".to_string(),
/// ]);
///
/// assert_eq!(failure.errors(), ["Name is required", "Email invalid"]);
/// assert_eq!(failure.to_string(), "validation failed: Name is required; Email invalid");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("validation failed{}", summary(.messages))]
pub struct ValidationFailure {
    messages: Vec<String>,
}

fn summary(messages: &[String]) -> String {
    if messages.is_empty() {
        String::new()
    } else {
        format!(": {}", messages.join("; "))
    }
}

impl ValidationFailure {
    /// Creates a failure holding `messages`.
    ///
    /// The vector is moved in, not copied.
    pub fn new(messages: Vec<String>) -> Self {
        Self { messages }
    }

    /// Returns the stored messages.
    pub fn errors(&self) -> &[String] {
        &self.messages
    }

    /// Consumes the failure and returns its messages.
    pub fn into_errors(self) -> Vec<String> {
        self.messages
    }
}

impl HubFailure for ValidationFailure {
    /// Always empty: the messages carry the detail.
    fn message(&self) -> &str {
        ""
    }

    fn errors(&self) -> Vec<String> {
        self.messages.clone()
    }
}

impl<S: Into<String>> FromIterator<S> for ValidationFailure {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<ValidationFailure>();
    assert_sync::<ValidationFailure>();
};
