//! The JSON error body returned to callers.
//!
//! [`ErrorMessageList`] serializes as `{"Errors": ["...", "..."]}`.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{HubError, HubFailure, ValidationFailure};

/// A list of human-readable error messages, ready to be sent as a response body.
///
/// Built either from a single message or from a list prepared elsewhere.
/// The list is never mutated after construction.
///
/// # Example
///
/// ```rust
/// use clienthub_errors::ErrorMessageList;
///
/// let single = ErrorMessageList::new("Name is required");
/// assert_eq!(single.errors(), ["Name is required"]);
///
/// let many = ErrorMessageList::from_messages(vec![
///     "Name is required".to_string(),
///     "Email invalid".to_string(),
/// ]);
/// assert_eq!(
///     many.to_json().unwrap(),
///     r#"{"Errors":["Name is required","Email invalid"]}"#
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ErrorMessageList {
    errors: Vec<String>,
}

impl ErrorMessageList {
    /// Creates a list holding exactly `message`.
    ///
    /// The message is taken as-is; an empty string is still one entry.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            errors: vec![message.into()],
        }
    }

    /// Creates a list from messages already collected by the caller.
    pub fn from_messages(messages: Vec<String>) -> Self {
        Self { errors: messages }
    }

    /// Returns the messages in order.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Consumes the list and returns its messages.
    pub fn into_errors(self) -> Vec<String> {
        self.errors
    }

    /// Returns the number of messages.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if the list holds no messages.
    ///
    /// Only possible when built with [`from_messages`](Self::from_messages)
    /// from an empty vector.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Serializes the list to its JSON wire form.
    pub fn to_json(&self) -> Result<String, ResponseError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parses a list from its JSON wire form.
    ///
    /// # Errors
    ///
    /// Returns `ResponseError::Decode` if the input is not an object with an
    /// `Errors` array of strings.
    pub fn from_json(input: &str) -> Result<Self, ResponseError> {
        serde_json::from_str(input).map_err(|err| {
            warn!(error = %err, "failed to decode error message list");
            ResponseError::Decode(err)
        })
    }
}

impl Display for ErrorMessageList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.errors.join("; "))
    }
}

impl From<String> for ErrorMessageList {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

impl From<&str> for ErrorMessageList {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<Vec<String>> for ErrorMessageList {
    fn from(messages: Vec<String>) -> Self {
        Self::from_messages(messages)
    }
}

impl From<ValidationFailure> for ErrorMessageList {
    fn from(failure: ValidationFailure) -> Self {
        let messages = failure.into_errors();
        debug!(count = messages.len(), "translating validation failure into response");
        Self::from_messages(messages)
    }
}

impl From<HubError> for ErrorMessageList {
    fn from(error: HubError) -> Self {
        match error {
            HubError::Validation(failure) => failure.into(),
            HubError::Unexpected { description } => {
                debug!(%description, "translating unexpected failure into response");
                Self::new(description)
            }
        }
    }
}

impl From<&HubError> for ErrorMessageList {
    fn from(error: &HubError) -> Self {
        match error {
            HubError::Validation(failure) => {
                debug!(
                    count = failure.errors().len(),
                    "translating validation failure into response"
                );
                Self::from_messages(HubFailure::errors(failure))
            }
            HubError::Unexpected { description } => Self::new(description.as_str()),
        }
    }
}

impl IntoIterator for ErrorMessageList {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a ErrorMessageList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<ErrorMessageList>();
    assert_sync::<ErrorMessageList>();
};

/// Errors that can occur while encoding or decoding a response body.
#[derive(Debug, thiserror::Error)]
pub enum ResponseError {
    /// The body could not be serialized or parsed as JSON.
    #[error("invalid error message payload: {0}")]
    Decode(#[from] serde_json::Error),
}
