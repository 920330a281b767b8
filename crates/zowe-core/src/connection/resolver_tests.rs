//! Tests for the connection property resolver

use super::*;
use crate::connection::options::PropertyOverride;
use crate::connection::prompt::MockPrompter;
use crate::connection::provider::{ProvidedValues, ValuesProvider};
use crate::error::UnifiedError;
use crate::session::TopDefaultAuth;
use async_trait::async_trait;
use mockall::Sequence;
use serde_json::json;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

fn full_args() -> CommandArgs {
    CommandArgs::new()
        .with("host", "lpar1.example.com")
        .with("port", 443)
        .with("user", "ibmuser")
        .with("password", "secret")
}

fn expect_answer(
    prompter: &mut MockPrompter,
    seq: &mut Sequence,
    starts_with: &'static str,
    hidden: bool,
    answer: Option<&'static str>,
) {
    prompter
        .expect_prompt()
        .withf(move |question, options| {
            question.starts_with(starts_with) && options.hide_text == hidden
        })
        .times(1)
        .in_sequence(seq)
        .returning(move |_, _| Ok(answer.map(str::to_string)));
}

fn with_prompter(prompter: MockPrompter) -> AddConnPropsOptions {
    AddConnPropsOptions::default().with_prompter(Arc::new(prompter))
}

#[tokio::test]
async fn test_complete_arguments_need_no_prompt() {
    let options = with_prompter(MockPrompter::new());
    let session = ConnectionPropsResolver::add_props_or_prompt(SessionConfig::new(), &full_args(), &options)
        .await
        .unwrap();

    assert_eq!(session.hostname.as_deref(), Some("lpar1.example.com"));
    assert_eq!(session.port, Some(443));
    assert_eq!(session.auth_type, Some(AuthType::Basic));
    assert_eq!(session.base64_encoded_auth.as_deref(), Some("aWJtdXNlcjpzZWNyZXQ="));
}

#[tokio::test]
async fn test_prompts_for_every_missing_property() {
    let mut prompter = MockPrompter::new();
    let mut seq = Sequence::new();
    expect_answer(&mut prompter, &mut seq, "Enter the host name of z/OSMF", false, Some(" lpar2 "));
    expect_answer(&mut prompter, &mut seq, "Enter the port number for z/OSMF", false, Some("1443"));
    expect_answer(&mut prompter, &mut seq, "Enter the user name for z/OSMF", false, Some("ibmuser"));
    expect_answer(&mut prompter, &mut seq, "Enter the password for z/OSMF", true, Some(" pw "));

    let options = with_prompter(prompter).with_service_description("z/OSMF");
    let session = ConnectionPropsResolver::add_props_or_prompt(SessionConfig::new(), &CommandArgs::new(), &options)
        .await
        .unwrap();

    assert_eq!(session.hostname.as_deref(), Some("lpar2"));
    assert_eq!(session.port, Some(1443));
    assert_eq!(session.user.as_deref(), Some("ibmuser"));
    assert_eq!(session.password.as_deref(), Some(" pw "));
    assert_eq!(session.auth_type, Some(AuthType::Basic));
}

#[tokio::test]
async fn test_session_values_win_over_arguments() {
    let initial = SessionConfig::new()
        .with_hostname("from-session")
        .with_user("sessuser")
        .with_password("sesspass");
    let options = with_prompter(MockPrompter::new());
    let session = ConnectionPropsResolver::add_props_or_prompt(initial, &full_args(), &options)
        .await
        .unwrap();

    assert_eq!(session.hostname.as_deref(), Some("from-session"));
    assert_eq!(session.user.as_deref(), Some("sessuser"));
    assert_eq!(session.port, Some(443));
}

#[tokio::test]
async fn test_non_numeric_port_argument_is_rejected() {
    let args = full_args().with("port", "https");
    let err = ConnectionPropsResolver::add_props_or_prompt(
        SessionConfig::new(),
        &args,
        &with_prompter(MockPrompter::new()),
    )
    .await
    .unwrap_err();

    assert_eq!(err.error_code(), "ZOWE_INVALID_INPUT");
    assert_eq!(err.message(), "Specified port was not a number.");
}

#[tokio::test]
async fn test_non_numeric_port_answer_is_rejected() {
    let mut prompter = MockPrompter::new();
    let mut seq = Sequence::new();
    expect_answer(&mut prompter, &mut seq, "Enter the port number", false, Some("eighty"));

    let args = CommandArgs::new()
        .with("host", "lpar1")
        .with("tokenValue", "abc");
    let err = ConnectionPropsResolver::add_props_or_prompt(SessionConfig::new(), &args, &with_prompter(prompter))
        .await
        .unwrap_err();
    assert_eq!(err.message(), "Specified port was not a number.");
}

#[tokio::test]
async fn test_null_answer_is_a_timeout() {
    let mut prompter = MockPrompter::new();
    let mut seq = Sequence::new();
    expect_answer(&mut prompter, &mut seq, "Enter the host name", false, None);

    let err = ConnectionPropsResolver::add_props_or_prompt(
        SessionConfig::new(),
        &CommandArgs::new(),
        &with_prompter(prompter),
    )
    .await
    .unwrap_err();

    assert!(matches!(err, ZoweError::Timeout { ref property, .. } if property == "host name"));
    assert_eq!(err.to_string(), "Timed out waiting for host name.");
}

struct SlowPrompter;

#[async_trait]
impl Prompter for SlowPrompter {
    async fn prompt(&self, _question: &str, _options: PromptOptions) -> ZoweResult<Option<String>> {
        tokio::time::sleep(Duration::from_secs(30)).await;
        Ok(Some("too late".to_string()))
    }
}

#[tokio::test]
async fn test_slow_prompt_times_out() {
    let options = AddConnPropsOptions::default()
        .with_prompter(Arc::new(SlowPrompter))
        .with_prompt_timeout(Duration::from_millis(20));
    let args = CommandArgs::new()
        .with("host", "lpar1")
        .with("port", 443)
        .with("user", "ibmuser");

    let err = ConnectionPropsResolver::add_props_or_prompt(SessionConfig::new(), &args, &options)
        .await
        .unwrap_err();
    assert_eq!(err.message(), "Timed out waiting for password.");
}

#[tokio::test]
async fn test_empty_answer_is_asked_again() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let mut prompter = MockPrompter::new();
    prompter
        .expect_prompt()
        .withf(|question, _| question.starts_with("Enter the user name"))
        .times(2)
        .returning(move |_, _| {
            let answer = if counter.fetch_add(1, Ordering::SeqCst) == 0 {
                "  "
            } else {
                "ibmuser"
            };
            Ok(Some(answer.to_string()))
        });

    let args = CommandArgs::new()
        .with("host", "lpar1")
        .with("port", 443)
        .with("password", "secret");
    let session = ConnectionPropsResolver::add_props_or_prompt(SessionConfig::new(), &args, &with_prompter(prompter))
        .await
        .unwrap();
    assert_eq!(session.user.as_deref(), Some("ibmuser"));
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_token_value_suppresses_credential_prompts() {
    let args = CommandArgs::new()
        .with("host", "lpar1")
        .with("port", 443)
        .with("tokenValue", "abc");
    let session = ConnectionPropsResolver::add_props_or_prompt(
        SessionConfig::new(),
        &args,
        &with_prompter(MockPrompter::new()),
    )
    .await
    .unwrap();
    assert_eq!(session.auth_type, Some(AuthType::Bearer));
}

#[tokio::test]
async fn test_prompting_disabled_leaves_gaps() {
    let options = AddConnPropsOptions::default()
        .with_prompter(Arc::new(MockPrompter::new()))
        .with_prompting(false);
    let session = ConnectionPropsResolver::add_props_or_prompt(
        SessionConfig::new(),
        &CommandArgs::new().with("host", "lpar1"),
        &options,
    )
    .await
    .unwrap();
    assert_eq!(session.port, None);
    assert_eq!(session.auth_type, None);
}

struct RecordingProvider {
    seen: Mutex<Vec<String>>,
}

#[async_trait]
impl ValuesProvider for RecordingProvider {
    async fn values_for(&self, needed: &[String]) -> anyhow::Result<ProvidedValues> {
        if let Ok(mut seen) = self.seen.lock() {
            seen.extend(needed.iter().cloned());
        }
        let mut values = ProvidedValues::new();
        values.insert("port".into(), json!(7554));
        values.insert("user".into(), json!("ssouser"));
        values.insert("password".into(), json!("ssopass"));
        values.insert("unrelated".into(), json!("ignored"));
        Ok(values)
    }
}

#[tokio::test]
async fn test_values_provider_replaces_prompting() {
    let provider = Arc::new(RecordingProvider {
        seen: Mutex::new(Vec::new()),
    });
    let options = AddConnPropsOptions::default()
        .with_prompter(Arc::new(MockPrompter::new()))
        .with_values_provider(provider.clone());

    let session = ConnectionPropsResolver::add_props_or_prompt(
        SessionConfig::new(),
        &CommandArgs::new().with("host", "lpar1"),
        &options,
    )
    .await
    .unwrap();

    assert_eq!(
        *provider.seen.lock().unwrap(),
        vec!["port".to_string(), "user".to_string(), "password".to_string()]
    );
    assert_eq!(session.port, Some(7554));
    assert_eq!(session.user.as_deref(), Some("ssouser"));
    assert!(!session.extra.contains_key("unrelated"));
    assert_eq!(session.auth_type, Some(AuthType::Basic));
}

#[tokio::test]
async fn test_sync_closure_provider() {
    let provider = |needed: &[String]| -> anyhow::Result<ProvidedValues> {
        Ok(needed
            .iter()
            .filter(|name| name.as_str() == "hostname")
            .map(|name| (name.clone(), json!("closure-host")))
            .collect())
    };
    let options = AddConnPropsOptions::default().with_values_provider(Arc::new(provider));
    let args = CommandArgs::new().with("port", 443).with("tokenValue", "abc");

    let session = ConnectionPropsResolver::add_props_or_prompt(SessionConfig::new(), &args, &options)
        .await
        .unwrap();
    assert_eq!(session.hostname.as_deref(), Some("closure-host"));
}

#[tokio::test]
async fn test_provider_failure_aborts() {
    let provider = |_: &[String]| -> anyhow::Result<ProvidedValues> { anyhow::bail!("sso unavailable") };
    let options = AddConnPropsOptions::default().with_values_provider(Arc::new(provider));
    let err = ConnectionPropsResolver::add_props_or_prompt(SessionConfig::new(), &CommandArgs::new(), &options)
        .await
        .unwrap_err();
    assert!(err.message().contains("sso unavailable"));
}

#[tokio::test]
async fn test_override_property_suppresses_prompts() {
    let options = with_prompter(MockPrompter::new())
        .with_property_override(PropertyOverride::new("apiKey", ["user", "password"]).with_argument_name("api-key"));
    let args = CommandArgs::new()
        .with("host", "lpar1")
        .with("port", 443)
        .with("api-key", "k-123");
    let initial = SessionConfig::new().with_user("stale");

    let session = ConnectionPropsResolver::add_props_or_prompt(initial, &args, &options)
        .await
        .unwrap();
    assert_eq!(session.extra.get("apiKey"), Some(&json!("k-123")));
    assert_eq!(session.user, None);
    assert_eq!(session.password, None);
}

#[tokio::test]
async fn test_request_token_uses_basic_to_log_in() {
    let args = full_args().with("tokenValue", "old-token");
    let options = with_prompter(MockPrompter::new()).with_request_token(true);

    let session = ConnectionPropsResolver::add_props_or_prompt(SessionConfig::new(), &args, &options)
        .await
        .unwrap();

    assert_eq!(session.auth_type, Some(AuthType::Token));
    assert_eq!(session.token_type.as_deref(), Some("jwtToken"));
    assert_eq!(session.token_value, None);
    assert_eq!(session.user.as_deref(), Some("ibmuser"));
    assert_eq!(
        session.auth_cache.auth_type_to_request_token,
        Some(AuthType::Basic)
    );
}

#[tokio::test]
async fn test_request_token_prefers_argument_token_type() {
    let args = full_args().with("tokenType", "apimlAuthenticationToken");
    let options = with_prompter(MockPrompter::new()).with_request_token(true);
    let session = ConnectionPropsResolver::add_props_or_prompt(SessionConfig::new(), &args, &options)
        .await
        .unwrap();
    assert_eq!(session.token_type.as_deref(), Some("apimlAuthenticationToken"));
}

#[tokio::test]
async fn test_unsupported_auth_types_are_ignored() {
    let mut prompter = MockPrompter::new();
    let mut seq = Sequence::new();
    expect_answer(&mut prompter, &mut seq, "Enter the user name", false, Some("u"));
    expect_answer(&mut prompter, &mut seq, "Enter the password", true, Some("p"));

    let args = CommandArgs::new()
        .with("host", "lpar1")
        .with("port", 443)
        .with("tokenValue", "bearer-token");
    let options = with_prompter(prompter).with_supported_auth_types([AuthType::Basic]);

    let session = ConnectionPropsResolver::add_props_or_prompt(SessionConfig::new(), &args, &options)
        .await
        .unwrap();
    assert_eq!(session.auth_type, Some(AuthType::Basic));
    assert_eq!(session.token_value, None);
}

#[tokio::test]
async fn test_custom_property_is_prompted_and_converted() {
    let mut prompter = MockPrompter::new();
    let mut seq = Sequence::new();
    expect_answer(&mut prompter, &mut seq, "Enter the account number", true, Some("42"));

    let options = with_prompter(prompter).with_prompt_prop(
        PromptProp::new("account")
            .with_description("the account number")
            .with_type(PropType::Number)
            .secure(),
    );
    let session = ConnectionPropsResolver::add_props_or_prompt(SessionConfig::new(), &full_args(), &options)
        .await
        .unwrap();
    assert_eq!(session.extra.get("account"), Some(&json!(42)));
}

#[tokio::test]
async fn test_custom_property_validator() {
    let mut prompter = MockPrompter::new();
    let mut seq = Sequence::new();
    expect_answer(&mut prompter, &mut seq, "Enter region", false, Some("mars"));

    let options = with_prompter(prompter).with_prompt_prop(
        PromptProp::new("region").with_validator(|v| {
            if v == "eu" || v == "us" {
                Ok(())
            } else {
                Err(format!("Unknown region '{}'", v))
            }
        }),
    );
    let err = ConnectionPropsResolver::add_props_or_prompt(SessionConfig::new(), &full_args(), &options)
        .await
        .unwrap_err();
    assert_eq!(err.message(), "Unknown region 'mars'");
}

#[tokio::test]
async fn test_default_top_auth_promotes_token() {
    let args = full_args().with("tokenType", "jwtToken").with("tokenValue", "t");
    let options = with_prompter(MockPrompter::new()).with_default_top_auth(TopDefaultAuth::Token);
    let session = ConnectionPropsResolver::add_props_or_prompt(SessionConfig::new(), &args, &options)
        .await
        .unwrap();
    assert_eq!(session.auth_type, Some(AuthType::Token));
    assert_eq!(session.user, None);
}

#[tokio::test]
async fn test_user_order_beats_default_top_auth() {
    let args = full_args()
        .with("tokenType", "jwtToken")
        .with("tokenValue", "t")
        .with("authOrder", "basic,token");
    let options = with_prompter(MockPrompter::new()).with_default_top_auth(TopDefaultAuth::Token);
    let session = ConnectionPropsResolver::add_props_or_prompt(SessionConfig::new(), &args, &options)
        .await
        .unwrap();
    assert_eq!(session.auth_type, Some(AuthType::Basic));
    assert_eq!(session.auth_type_order, vec![AuthType::Basic, AuthType::Token]);
}

#[test]
fn test_sess_has_creds() {
    assert!(!ConnectionPropsResolver::sess_has_creds(&SessionConfig::new().with_user("u")));
    assert!(ConnectionPropsResolver::sess_has_creds(
        &SessionConfig::new().with_user("u").with_password("p")
    ));
    assert!(ConnectionPropsResolver::sess_has_creds(&SessionConfig::new().with_token_value("t")));
    assert!(ConnectionPropsResolver::sess_has_creds(
        &SessionConfig::new().with_cert("c.pem", "k.pem")
    ));
    assert!(!ConnectionPropsResolver::sess_has_creds(&SessionConfig {
        cert: Some("c.pem".into()),
        ..Default::default()
    }));
}

#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn text(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl std::io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[tokio::test]
async fn test_secure_properties_never_reach_debug_logs() {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let mut initial = SessionConfig::new();
    initial.extra.insert("pin".into(), json!("SUPERSECRETPIN"));
    initial.extra.insert("tenantKey".into(), json!("TENANTSECRET"));
    let options = with_prompter(MockPrompter::new())
        .with_prompt_prop(PromptProp::new("pin").secure())
        .with_property_override(PropertyOverride::new("tenantKey", ["cert"]));

    let session = ConnectionPropsResolver::add_props_or_prompt(initial, &full_args(), &options)
        .await
        .unwrap();
    assert_eq!(session.extra.get("pin"), Some(&json!("SUPERSECRETPIN")));

    let text = logs.text();
    assert!(text.contains("Starting session config"));
    assert!(text.contains("Ending session config"));
    assert!(text.contains("pin_is_hidden"));
    assert!(!text.contains("SUPERSECRETPIN"));
    assert!(!text.contains("TENANTSECRET"));
}
