//! Hide secrets before a session reaches a log line or the terminal

use super::descriptor::SessionConfig;
use serde_json::Value;

/// Session properties whose values are never shown
pub const SECURE_PROPS: [&str; 4] = ["user", "password", "tokenValue", "base64EncodedAuth"];

/// JSON view of `session` with secret values replaced.
///
/// Properties marked with [`SessionConfig::mark_secure`] are hidden too.
pub fn censor_session(session: &SessionConfig) -> Value {
    censor_session_with(session, &[])
}

/// Like [`censor_session`], also hiding caller-declared secure properties
pub fn censor_session_with(session: &SessionConfig, extra_secure: &[&str]) -> Value {
    let mut value = serde_json::to_value(session).unwrap_or(Value::Null);
    if let Value::Object(map) = &mut value {
        let declared = session.secure_props.iter().map(String::as_str);
        for name in SECURE_PROPS.iter().copied().chain(extra_secure.iter().copied()).chain(declared) {
            if let Some(slot) = map.get_mut(name) {
                hide(slot, name);
            }
        }
        if let Some(Value::Object(proxy)) = map.get_mut("proxy") {
            if let Some(slot) = proxy.get_mut("proxyAuthorization") {
                hide(slot, "proxyAuthorization");
            }
        }
    }
    value
}

fn hide(slot: &mut Value, name: &str) {
    if !slot.is_null() {
        *slot = Value::String(format!("{}_is_hidden", name));
    }
}
