//! Centralized timeout configuration

use std::time::Duration;

/// Default timeout values for interactive prompts
pub mod prompt {
    use super::*;

    /// Default time to wait for an answer (30 seconds)
    pub const DEFAULT_SECS: u64 = 30;

    /// Get the default prompt timeout as Duration
    pub fn default_timeout() -> Duration {
        Duration::from_secs(DEFAULT_SECS)
    }
}
