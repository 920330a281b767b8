//! Environment variable-based configuration loading

use super::settings::ResolverSettings;
use crate::error::{ZoweError, ZoweResult};
use crate::session::CommandArgs;
use std::env;
use std::time::Duration;

/// Variables with this prefix become command arguments
pub const ENV_OPT_PREFIX: &str = "ZOWE_OPT_";

/// Prompt timeout in seconds
pub const PROMPT_TIMEOUT_VAR: &str = "ZOWE_PROMPT_TIMEOUT";

/// Load command arguments from `ZOWE_OPT_*` variables.
///
/// `ZOWE_OPT_AUTH_ORDER=token,basic` becomes the argument `authOrder`.
pub fn load_args_from_env() -> CommandArgs {
    load_args_from_vars(env::vars(), ENV_OPT_PREFIX)
}

/// Load command arguments from explicit variables
pub fn load_args_from_vars<I, K, V>(vars: I, prefix: &str) -> CommandArgs
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<String>,
{
    let mut args = CommandArgs::new();
    for (name, value) in vars {
        let Some(suffix) = name.as_ref().strip_prefix(prefix) else {
            continue;
        };
        if suffix.is_empty() {
            continue;
        }
        let value: String = value.into();
        if value.is_empty() {
            continue;
        }
        args.set(env_suffix_to_camel_case(suffix), value);
    }
    args
}

/// Load resolver settings from the environment
pub fn load_settings_from_env() -> ZoweResult<ResolverSettings> {
    load_settings_from_vars(env::vars())
}

/// Load resolver settings from explicit variables
pub fn load_settings_from_vars<I, K, V>(vars: I) -> ZoweResult<ResolverSettings>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<String>,
{
    let mut settings = ResolverSettings::default();
    for (name, value) in vars {
        if name.as_ref() != PROMPT_TIMEOUT_VAR {
            continue;
        }
        let raw: String = value.into();
        let secs: u64 = raw.trim().parse().map_err(|_| {
            ZoweError::config_with_context(
                format!("Invalid {} value", PROMPT_TIMEOUT_VAR),
                format!("Parsing prompt timeout '{}' as whole seconds", raw),
            )
        })?;
        if secs == 0 {
            return Err(ZoweError::config(format!(
                "{} must be greater than zero",
                PROMPT_TIMEOUT_VAR
            )));
        }
        settings.prompt_timeout = Duration::from_secs(secs);
    }
    Ok(settings)
}

fn env_suffix_to_camel_case(suffix: &str) -> String {
    let mut camel = String::with_capacity(suffix.len());
    for (i, word) in suffix.split('_').filter(|w| !w.is_empty()).enumerate() {
        let lower = word.to_ascii_lowercase();
        if i == 0 {
            camel.push_str(&lower);
            continue;
        }
        let mut chars = lower.chars();
        if let Some(first) = chars.next() {
            camel.push(first.to_ascii_uppercase());
            camel.push_str(chars.as_str());
        }
    }
    camel
}
