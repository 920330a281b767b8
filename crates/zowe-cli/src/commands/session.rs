//! Session resolution command

use crate::args::{OutputFormat, SessionArgs};
use crate::console::CliConsole;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;
use zowe_core::config::{load_args_from_vars, load_settings_from_env};
use zowe_core::session::censor::censor_session;
use zowe_core::session::AuthType;
use zowe_core::{
    AddConnPropsOptions, ConnectionPropsResolver, Session, SessionAuth, SessionConfig, ZoweError,
    ZoweResult,
};

/// What the command prints once a session is resolved
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SessionReport {
    base_url: String,
    auth_type: AuthType,
    #[serde(skip_serializing_if = "Option::is_none")]
    token_request_via: Option<AuthType>,
    /// Resolved descriptor with secure values hidden
    session: Value,
}

/// Execute session command
pub async fn execute(args: SessionArgs, console: &CliConsole) -> ZoweResult<()> {
    let mut settings = load_settings_from_env()?;
    if let Some(secs) = args.prompt_timeout {
        if secs == 0 {
            return Err(ZoweError::invalid_input_field(
                "Prompt timeout must be greater than zero.",
                "promptTimeout",
            ));
        }
        settings = settings.with_prompt_timeout(Duration::from_secs(secs));
    }

    let env_args = load_args_from_vars(std::env::vars(), &settings.env_prefix);
    if !env_args.is_empty() {
        console.info(&format!(
            "Read {} argument(s) from {}* variables",
            env_args.len(),
            settings.env_prefix
        ));
    }
    let command_args = args.connection.to_command_args().layered_over(env_args);
    debug!(
        args = command_args.len(),
        prompting = !args.no_prompt,
        request_token = args.request_token,
        "Resolving session from command arguments"
    );

    let mut options = AddConnPropsOptions::from_settings(&settings)
        .with_prompting(!args.no_prompt)
        .with_request_token(args.request_token)
        .with_service_description(args.service.clone())
        .with_prompter(super::default_prompter());
    if let Some(top) = args.default_top_auth {
        options = options.with_default_top_auth(top.into());
    }
    if !args.supported_auth.is_empty() {
        options = options.with_supported_auth_types(args.supported_auth.iter().copied());
    }

    let resolved =
        ConnectionPropsResolver::add_props_or_prompt(SessionConfig::new(), &command_args, &options)
            .await?;
    let session = Session::from_config(&resolved)?;

    console.print_header("Session");
    console.print_field("Base URL", &session.base_url());
    console.print_field("Authentication", session.auth().auth_type().as_str());
    if matches!(session.auth(), SessionAuth::None) {
        console.warn("No credentials matched the authentication order");
    }

    let report = SessionReport {
        base_url: session.base_url(),
        auth_type: session.auth().auth_type(),
        token_request_via: token_request_via(session.auth()),
        session: censor_session(&resolved),
    };
    console.report(&render(&report, args.format)?);
    console.success("Session resolved");
    Ok(())
}

fn token_request_via(auth: &SessionAuth) -> Option<AuthType> {
    match auth {
        SessionAuth::TokenRequest { via, .. } => Some(via.auth_type()),
        _ => None,
    }
}

fn render<T: Serialize>(report: &T, format: OutputFormat) -> ZoweResult<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Yaml => serde_yaml::to_string(report)
            .map_err(|e| ZoweError::other(format!("Failed to render YAML: {}", e))),
    }
}
