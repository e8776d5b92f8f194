//! Failure types raised by the hub.
//!
//! [`HubFailure`] is the base contract every hub failure fulfils: a description
//! plus the list of human-readable errors a caller can report back. Most
//! failures carry no list and inherit the empty default; [`ValidationFailure`]
//! overrides it with the messages of the rules that failed.

mod hub_error;
mod validation_failure;

pub use hub_error::{HubError, HubFailure};
pub use validation_failure::ValidationFailure;
