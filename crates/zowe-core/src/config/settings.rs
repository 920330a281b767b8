//! Settings shared by every resolution in a process

use super::timeouts;
use std::time::Duration;

/// Process-level resolver settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverSettings {
    /// Time to wait for each prompted value
    pub prompt_timeout: Duration,
    /// Prefix of environment variables that become command arguments
    pub env_prefix: String,
}

impl ResolverSettings {
    pub fn with_prompt_timeout(mut self, timeout: Duration) -> Self {
        self.prompt_timeout = timeout;
        self
    }
}

impl Default for ResolverSettings {
    fn default() -> Self {
        Self {
            prompt_timeout: timeouts::prompt::default_timeout(),
            env_prefix: super::ENV_OPT_PREFIX.to_string(),
        }
    }
}
