//! Proxy decision command

use crate::args::ProxyArgs;
use crate::console::CliConsole;
use zowe_core::config::load_args_from_env;
use zowe_core::proxy::ProxyOverrides;
use zowe_core::{
    AddConnPropsOptions, ConnectionPropsResolver, ProxySettings, Session, SessionConfig,
    ZoweResult,
};

/// Execute proxy command.
///
/// The session is resolved without prompting; only connection properties
/// matter for the proxy decision.
pub async fn execute(args: ProxyArgs, console: &CliConsole) -> ZoweResult<()> {
    let mut initial = SessionConfig::new();
    if let Some(overrides) = overrides_from(&args) {
        initial = initial.with_proxy(overrides);
    }

    let command_args = args.connection.to_command_args().layered_over(load_args_from_env());
    let options = AddConnPropsOptions::new().with_prompting(false);
    let resolved =
        ConnectionPropsResolver::add_props_or_prompt(initial, &command_args, &options).await?;
    let session = Session::from_config(&resolved)?;

    let settings = ProxySettings::from_process();
    console.print_header("Proxy");
    console.print_field("Target", &session.base_url());

    if settings.matches_no_proxy_settings(&session) {
        console.info(&format!("{} is listed in the no-proxy hosts", session.hostname()));
    }

    match settings.get_proxy_agent(&session) {
        Some(agent) => {
            console.print_field("Proxy", agent.url.as_str());
            console.print_field("Agent", &agent.kind.to_string());
            if agent.proxy_authorization.is_some() {
                console.print_field("Authorization", "Proxy-Authorization header set");
            }
            console.report(agent.url.as_str());
        }
        None => {
            console.print_field("Proxy", "none, connecting directly");
            console.report("DIRECT");
        }
    }
    Ok(())
}

fn overrides_from(args: &ProxyArgs) -> Option<ProxyOverrides> {
    let overrides = ProxyOverrides {
        http_proxy: args.http_proxy.clone(),
        https_proxy: args.https_proxy.clone(),
        no_proxy: args.no_proxy.clone(),
        proxy_authorization: args.proxy_authorization.clone(),
    };
    (overrides != ProxyOverrides::default()).then_some(overrides)
}
