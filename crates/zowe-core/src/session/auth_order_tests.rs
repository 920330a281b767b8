//! Tests for auth order resolution

use super::*;
use serde_json::json;

fn order_for(args: CommandArgs) -> (Vec<AuthType>, bool) {
    let mut session = SessionConfig::new();
    let order = cache_auth_order(&mut session, &args).to_vec();
    (order, session.auth_cache.did_user_set_auth_order)
}

#[test]
fn test_user_order_drops_invalid_and_duplicates() {
    let (order, user_set) =
        order_for(CommandArgs::new().with("authOrder", "cert-pem,basic,bogus,basic"));
    assert_eq!(order, vec![AuthType::CertPem, AuthType::Basic]);
    assert!(user_set);
}

#[test]
fn test_user_order_trims_whitespace() {
    let (order, _) = order_for(CommandArgs::new().with("authOrder", " token , none ,bearer"));
    assert_eq!(order, vec![AuthType::Token, AuthType::None, AuthType::Bearer]);
}

#[test]
fn test_missing_order_uses_default() {
    let (order, user_set) = order_for(CommandArgs::new());
    assert_eq!(order, default_auth_order(TopDefaultAuth::Basic).to_vec());
    assert!(!user_set);
    assert!(!order.contains(&AuthType::None));
}

#[test]
fn test_entirely_invalid_order_uses_default() {
    let (order, user_set) = order_for(CommandArgs::new().with("authOrder", "kerberos, ,saml"));
    assert_eq!(order, default_auth_order(TopDefaultAuth::Basic).to_vec());
    assert!(!user_set);
}

#[test]
fn test_non_string_order_uses_default() {
    let (order, user_set) = order_for(CommandArgs::new().with("authOrder", json!(12)));
    assert_eq!(order, default_auth_order(TopDefaultAuth::Basic).to_vec());
    assert!(!user_set);

    let (order, _) = order_for(CommandArgs::new().with("authOrder", json!(["basic"])));
    assert_eq!(order, default_auth_order(TopDefaultAuth::Basic).to_vec());
}

#[test]
fn test_kebab_case_argument_is_honoured() {
    let (order, user_set) = order_for(CommandArgs::new().with("auth-order", "bearer"));
    assert_eq!(order, vec![AuthType::Bearer]);
    assert!(user_set);
}

#[test]
fn test_promote_token_without_user_order() {
    let mut session = SessionConfig::new();
    cache_auth_order(&mut session, &CommandArgs::new());
    assert!(cache_default_auth_order(&mut session, TopDefaultAuth::Token));
    assert_eq!(
        session.auth_type_order,
        vec![
            AuthType::Token,
            AuthType::Basic,
            AuthType::Bearer,
            AuthType::CertPem
        ]
    );
    assert_eq!(session.auth_cache.top_default_auth, Some(TopDefaultAuth::Token));
}

#[test]
fn test_promotion_is_ignored_after_user_order() {
    let mut session = SessionConfig::new();
    cache_auth_order(&mut session, &CommandArgs::new().with("authOrder", "bearer,basic"));
    let before = session.clone();

    assert!(!cache_default_auth_order(&mut session, TopDefaultAuth::Token));
    assert!(!cache_default_auth_order(&mut session, TopDefaultAuth::Basic));
    assert_eq!(session, before);
}

#[test]
fn test_promoted_top_survives_recaching() {
    let mut session = SessionConfig::new();
    cache_default_auth_order(&mut session, TopDefaultAuth::Token);
    cache_auth_order(&mut session, &CommandArgs::new());
    assert_eq!(session.auth_type_order[0], AuthType::Token);
}

#[test]
fn test_get_auth_order_creates_default() {
    let mut session = SessionConfig::new();
    assert_eq!(
        get_auth_order(&mut session).to_vec(),
        default_auth_order(TopDefaultAuth::Basic).to_vec()
    );
}

#[test]
fn test_cache_creds_and_auth_order_replaces_cache() {
    let mut session = SessionConfig::new();
    cache_creds_and_auth_order(
        &mut session,
        &CommandArgs::new().with("user", "u").with("password", "p"),
    );
    assert!(session.auth_cache.creds_cached);
    assert_eq!(session.auth_cache.available_creds.user.as_deref(), Some("u"));

    cache_creds_and_auth_order(&mut session, &CommandArgs::new().with("tokenValue", "t"));
    let creds = &session.auth_cache.available_creds;
    assert_eq!(creds.user, None);
    assert_eq!(creds.password, None);
    assert_eq!(creds.token_value.as_deref(), Some("t"));
}

#[test]
fn test_request_token_flag_lifecycle() {
    let mut session = SessionConfig::new();
    assert!(!is_requesting_token(&session));
    making_request_for_token(&mut session);
    assert_eq!(
        session.auth_cache.auth_type_to_request_token,
        Some(AuthType::None)
    );
    remove_request_for_token(&mut session);
    assert!(!is_requesting_token(&session));
}

#[test]
fn test_clear_auth_cache_resets_bookkeeping() {
    let mut session = SessionConfig::new();
    cache_creds_and_auth_order(&mut session, &CommandArgs::new().with("authOrder", "basic"));
    making_request_for_token(&mut session);
    clear_auth_cache(&mut session);
    assert_eq!(session.auth_cache, AuthCache::default());
}
