//! Response payloads reporting errors back to a caller.

mod error_messages;

pub use error_messages::{ErrorMessageList, ResponseError};
