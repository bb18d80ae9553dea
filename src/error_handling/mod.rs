//! Error handling: typed errors and failure categorization.

mod categorization;
mod types;

pub use categorization::{categorize_lookup_error, categorize_reqwest_error};
pub use types::{ErrorType, InitializationError, LookupError, OffsetError};
