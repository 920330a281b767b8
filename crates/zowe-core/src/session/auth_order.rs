//! Auth order resolution
//!
//! The order is derived from the `authOrder` argument when the user supplied a
//! usable one, otherwise from a built-in default. A user order is sticky:
//! later requests to promote a default method are ignored.

use super::args::CommandArgs;
use super::constants::{AuthType, TopDefaultAuth};
use super::creds::{AuthCache, AvailableCreds};
use super::descriptor::SessionConfig;
use serde_json::Value;
use tracing::{debug, info, warn};

/// Argument holding the user's comma-separated auth order
pub const AUTH_ORDER_ARG: &str = "authOrder";

/// Default order with `top` first. `none` is never part of a default.
pub fn default_auth_order(top: TopDefaultAuth) -> [AuthType; 4] {
    match top {
        TopDefaultAuth::Basic => [
            AuthType::Basic,
            AuthType::Token,
            AuthType::Bearer,
            AuthType::CertPem,
        ],
        TopDefaultAuth::Token => [
            AuthType::Token,
            AuthType::Basic,
            AuthType::Bearer,
            AuthType::CertPem,
        ],
    }
}

/// Cache the auth order and every available credential for `session`
pub fn cache_creds_and_auth_order(session: &mut SessionConfig, args: &CommandArgs) {
    cache_auth_order(session, args);
    session.auth_cache.available_creds = AvailableCreds::build(session, args);
    session.auth_cache.creds_cached = true;

    debug!(
        order = %format_order(&session.auth_type_order),
        creds = ?session.auth_cache.available_creds.cached_names(),
        user_set_order = session.auth_cache.did_user_set_auth_order,
        "Cached credentials and auth order"
    );
}

/// Derive the auth order from `args`, falling back to the default order
pub fn cache_auth_order<'a>(session: &'a mut SessionConfig, args: &CommandArgs) -> &'a [AuthType] {
    session.auth_type_order.clear();
    session.auth_cache.did_user_set_auth_order = false;

    match args.get(AUTH_ORDER_ARG) {
        None | Some(Value::Null) => {}
        Some(Value::String(raw)) => {
            let order = parse_auth_order(raw);
            if !order.is_empty() {
                session.auth_type_order = order;
                session.auth_cache.did_user_set_auth_order = true;
            }
        }
        Some(other) => {
            warn!(
                "The authOrder option = '{}' is not a valid authOrder string. A default authOrder will be used.",
                other
            );
        }
    }

    if !session.auth_cache.did_user_set_auth_order {
        choose_default_auth_order(session);
    }
    &session.auth_type_order
}

/// Parse a comma-separated auth order, dropping invalid entries and duplicates
pub fn parse_auth_order(raw: &str) -> Vec<AuthType> {
    let mut order = Vec::new();
    if raw.trim().is_empty() {
        return order;
    }
    for entry in raw.split(',').map(str::trim) {
        match entry.parse::<AuthType>() {
            Ok(auth) => {
                if !order.contains(&auth) {
                    order.push(auth);
                }
            }
            Err(_) => warn!(
                "The authentication = '{}' is not valid and will be ignored.",
                entry
            ),
        }
    }
    order
}

/// Rebuild the default order with `top` first.
///
/// Returns false, leaving the order untouched, when the user set an order.
pub fn cache_default_auth_order(session: &mut SessionConfig, top: TopDefaultAuth) -> bool {
    if session.auth_cache.did_user_set_auth_order {
        info!(
            "Because user set authOrder, an attempt to put {} at the top of the order was ignored.",
            top
        );
        return false;
    }

    session.auth_cache.top_default_auth = Some(top);
    session.auth_type_order = default_auth_order(top).to_vec();
    true
}

/// Current auth order, creating a default one when none is cached
pub fn get_auth_order(session: &mut SessionConfig) -> &[AuthType] {
    if session.auth_type_order.is_empty() {
        session.auth_cache.did_user_set_auth_order = false;
        choose_default_auth_order(session);
    }
    &session.auth_type_order
}

/// Mark the session as being used to obtain a token
pub fn making_request_for_token(session: &mut SessionConfig) {
    session.auth_cache.auth_type_to_request_token = Some(AuthType::None);
}

pub fn remove_request_for_token(session: &mut SessionConfig) {
    session.auth_cache.auth_type_to_request_token = None;
}

pub fn is_requesting_token(session: &SessionConfig) -> bool {
    session.auth_cache.auth_type_to_request_token.is_some()
}

/// Discard cached credentials and order bookkeeping
pub fn clear_auth_cache(session: &mut SessionConfig) {
    session.auth_cache = AuthCache::default();
}

fn choose_default_auth_order(session: &mut SessionConfig) {
    if session.auth_cache.did_user_set_auth_order {
        return;
    }
    let top = session
        .auth_cache
        .top_default_auth
        .unwrap_or(TopDefaultAuth::Basic);
    cache_default_auth_order(session, top);
}

pub(crate) fn format_order(order: &[AuthType]) -> String {
    order
        .iter()
        .map(AuthType::as_str)
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
#[path = "auth_order_tests.rs"]
mod tests;
