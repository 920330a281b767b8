//! Resolver configuration
//!
//! Settings come from defaults in [`timeouts`] and from environment
//! variables. `ZOWE_OPT_*` variables become command arguments that sit
//! beneath whatever the command line supplies.

mod env_loader;
mod settings;
pub mod timeouts;

pub use env_loader::{
    ENV_OPT_PREFIX, PROMPT_TIMEOUT_VAR, load_args_from_env, load_args_from_vars,
    load_settings_from_env, load_settings_from_vars,
};
pub use settings::ResolverSettings;
