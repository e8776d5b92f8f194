//! # clienthub-errors
//!
//! Error payloads and validation failures for the product client hub.
//!
//! ## Overview
//!
//! Validation runs every rule and reports every failure at once. The failing
//! messages travel up the call stack as a [`ValidationFailure`], are caught by
//! the layer that builds responses, and leave the service as an
//! [`ErrorMessageList`] serialized to `{"Errors": [...]}`.
//!
//! ## Core Types
//!
//! - [`HubFailure`]: base failure contract, with `errors()` defaulting to an empty list
//! - [`HubError`]: every failure kind the hub raises
//! - [`ValidationFailure`]: one or more validation rules failed
//! - [`ErrorMessageList`]: the JSON error body returned to callers
//! - [`Rules`]: accumulating rule checks producing a `ValidationFailure`
//!
//! ## Example
//!
//! ```rust
//! use clienthub_errors::{ErrorMessageList, HubError, Rules};
//!
//! fn register(name: &str, email: &str) -> Result<(), HubError> {
//!     Rules::new()
//!         .not_empty(name, "Name is required")
//!         .email(email, "Email invalid")
//!         .finish()?;
//!     Ok(())
//! }
//!
//! let error = register("", "nope").unwrap_err();
//! let body = ErrorMessageList::from(error);
//! assert_eq!(
//!     body.to_json().unwrap(),
//!     r#"{"Errors":["Name is required","Email invalid"]}"#
//! );
//! ```

pub mod error;
pub mod response;
pub mod rules;

pub use error::{HubError, HubFailure, ValidationFailure};
pub use response::{ErrorMessageList, ResponseError};
pub use rules::Rules;
