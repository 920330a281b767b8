//! Session credential selector
//!
//! Walks the cached auth order against the cached credentials and
//! materializes the first method whose credentials are complete.

use super::auth::{BasicCreds, CertPemCreds, SessionAuth, TokenRequestVia};
use super::auth_order::format_order;
use super::censor::censor_session;
use super::constants::AuthType;
use super::creds::AvailableCreds;
use super::descriptor::SessionConfig;
use crate::error::{ZoweError, ZoweResult};
use tracing::{debug, error};

/// Place the highest-priority available authentication into `session`.
///
/// Requires [`cache_creds_and_auth_order`](super::auth_order::cache_creds_and_auth_order)
/// to have run first. When nothing matches, `type` is removed along with
/// every credential field.
pub fn put_top_auth_in_session(session: &mut SessionConfig) -> ZoweResult<Option<SessionAuth>> {
    if session.auth_type_order.is_empty() {
        let msg = "The auth order has not been cached for this session.";
        error!("{}", msg);
        return Err(ZoweError::config_with_context(
            msg,
            "call cache_creds_and_auth_order before put_top_auth_in_session",
        ));
    }
    if !session.auth_cache.creds_cached {
        let msg = "The available credentials have not been cached for this session.";
        error!("{}", msg);
        return Err(ZoweError::config_with_context(
            msg,
            "call cache_creds_and_auth_order before put_top_auth_in_session",
        ));
    }

    debug!(session = %censor_session(session), "Starting session config");

    let selected = select_auth(
        &session.auth_type_order,
        &session.auth_cache.available_creds,
        session.auth_cache.auth_type_to_request_token.is_some(),
    );
    match &selected {
        Some(auth) => auth.apply_to(session),
        None => {
            debug!(
                order = %format_order(&session.auth_type_order),
                "No credentials match the auth order"
            );
            session.clear_creds();
            session.auth_type = None;
        }
    }

    debug!(session = %censor_session(session), "Ending session config");
    Ok(selected)
}

/// First method in `order` whose credentials are complete.
///
/// Token and bearer are skipped while requesting a token; basic and
/// cert-pem then become the login method of a token request.
pub fn select_auth(
    order: &[AuthType],
    creds: &AvailableCreds,
    requesting_token: bool,
) -> Option<SessionAuth> {
    for auth in order {
        let found = match auth {
            AuthType::Basic => BasicCreds::from_available(creds).map(|basic| {
                if requesting_token {
                    SessionAuth::TokenRequest {
                        token_type: creds.token_type.clone(),
                        via: TokenRequestVia::Basic(basic),
                    }
                } else {
                    SessionAuth::Basic(basic)
                }
            }),
            AuthType::Token => {
                if requesting_token {
                    continue;
                }
                match (&creds.token_type, &creds.token_value) {
                    (Some(token_type), Some(token_value)) => Some(SessionAuth::Token {
                        token_type: token_type.clone(),
                        token_value: token_value.clone(),
                    }),
                    _ => None,
                }
            }
            AuthType::Bearer => {
                if requesting_token {
                    continue;
                }
                match (&creds.token_type, &creds.token_value) {
                    (None, Some(token_value)) => Some(SessionAuth::Bearer {
                        token_value: token_value.clone(),
                    }),
                    _ => None,
                }
            }
            AuthType::CertPem => CertPemCreds::from_available(creds).map(|cert| {
                if requesting_token {
                    SessionAuth::TokenRequest {
                        token_type: creds.token_type.clone(),
                        via: TokenRequestVia::CertPem(cert),
                    }
                } else {
                    SessionAuth::CertPem(cert)
                }
            }),
            AuthType::None => Some(SessionAuth::None),
        };
        if found.is_some() {
            return found;
        }
    }
    None
}

#[cfg(test)]
#[path = "selector_tests.rs"]
mod tests;
