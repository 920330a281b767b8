//! Error types for session resolution
//!
//! Every error implements the `UnifiedError` trait which provides:
//! - error_code: A unique identifier for programmatic error handling
//! - message: Human-readable error message
//! - context: Optional additional context about where/why the error occurred
//!
//! Soft problems (an unusable `authOrder` entry, an unparsable proxy URL) are
//! logged and recovered where they happen. Only contract violations, bad user
//! input and prompt timeouts surface as errors.

mod constructors;
mod conversions;
mod types;
mod unified_error;

pub use types::{UnifiedError, ZoweError, ZoweResult};
