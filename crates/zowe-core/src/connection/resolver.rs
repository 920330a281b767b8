//! Connection property resolver
//!
//! Fills in whatever a session still lacks (host, port, credentials and
//! caller-declared properties) from arguments, an external provider or
//! prompts, then hands the session to the credential selector.

use super::options::{AddConnPropsOptions, PromptProp, PropType};
use super::prompt::{PromptOptions, Prompter, TermPrompter};
use crate::error::{ZoweError, ZoweResult};
use crate::session::auth_order::{self, AUTH_ORDER_ARG};
use crate::session::censor::censor_session;
use crate::session::{
    AuthType, CommandArgs, CredField, SessionConfig, selector, value_is_present,
};
use serde_json::Value;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::debug;

/// Connection properties merged from arguments before anything is prompted
const CONNECTION_ARGS: [(&str, &str); 5] = [
    ("hostname", "host"),
    ("port", "port"),
    ("protocol", "protocol"),
    ("rejectUnauthorized", "rejectUnauthorized"),
    ("basePath", "basePath"),
];

/// Adds connection properties to session descriptors
pub struct ConnectionPropsResolver;

impl ConnectionPropsResolver {
    /// Complete `initial` from `args`, a values provider or prompts, then
    /// select its authentication.
    ///
    /// A timed out prompt aborts the whole resolution.
    pub async fn add_props_or_prompt(
        initial: SessionConfig,
        args: &CommandArgs,
        options: &AddConnPropsOptions,
    ) -> ZoweResult<SessionConfig> {
        let mut session = initial;
        Self::mark_secure_props(&mut session, options);

        Self::merge_args(&mut session, args)?;
        Self::drop_unsupported_creds(&mut session, options);

        if options.request_token {
            // a token cannot be used to obtain a new token
            session.token_value = None;
            auth_order::making_request_for_token(&mut session);
        }

        let overridden = Self::apply_overrides(&mut session, args, options)?;
        let needed = Self::missing_props(&session, options, &overridden);

        if !needed.is_empty() {
            if let Some(provider) = &options.get_values_back {
                debug!(needed = ?needed, "Requesting connection values from provider");
                let answers = provider.values_for(&needed).await?;
                for name in &needed {
                    if let Some(value) = answers.get(name).filter(|v| value_is_present(v)) {
                        Self::store_answer(&mut session, name, value.clone(), options)?;
                    }
                }
            } else if options.do_prompting {
                Self::prompt_for_missing(&mut session, &needed, options).await?;
            }
        }

        if options.request_token {
            let token_type = args
                .get_str("tokenType")
                .or(session.token_type.as_deref())
                .unwrap_or(options.default_token_type.as_str())
                .to_string();
            session.token_type = Some(token_type);
        }

        // credentials were merged above; only the order comes from args
        let mut order_args = CommandArgs::new();
        if let Some(order) = args.get(AUTH_ORDER_ARG) {
            order_args.set(AUTH_ORDER_ARG, order.clone());
        }
        auth_order::cache_creds_and_auth_order(&mut session, &order_args);
        if let Some(top) = options.default_top_auth {
            auth_order::cache_default_auth_order(&mut session, top);
        }
        selector::put_top_auth_in_session(&mut session)?;

        debug!(
            session = %censor_session(&session),
            "Creating a session config with these properties"
        );
        Ok(session)
    }

    /// True when the session holds credentials of any method
    pub fn sess_has_creds(session: &SessionConfig) -> bool {
        session.has_cred(CredField::TokenValue)
            || (session.has_cred(CredField::Cert) && session.has_cred(CredField::CertKey))
            || session.has_cred(CredField::Base64EncodedAuth)
            || (session.has_cred(CredField::User) && session.has_cred(CredField::Password))
    }

    /// Secure custom properties and override values stay out of logs
    fn mark_secure_props(session: &mut SessionConfig, options: &AddConnPropsOptions) {
        for prop in options.props_to_prompt_for.iter().filter(|p| p.secure) {
            session.mark_secure(prop.name.as_str());
        }
        for property_override in &options.property_overrides {
            session.mark_secure(property_override.property_name.as_str());
        }
    }

    /// Session values win; arguments fill the gaps
    fn merge_args(session: &mut SessionConfig, args: &CommandArgs) -> ZoweResult<()> {
        for (property, arg_name) in CONNECTION_ARGS {
            if session.has_property(property) {
                continue;
            }
            if let Some(value) = args.get(arg_name).filter(|v| value_is_present(v)) {
                session.set_property(property, value.clone())?;
            }
        }
        for field in CredField::ALL {
            if session.has_cred(field) {
                continue;
            }
            if let Some(value) = args.get_str(field.arg_name()) {
                *session.cred_mut(field) = Some(value.to_string());
            }
        }
        Ok(())
    }

    fn drop_unsupported_creds(session: &mut SessionConfig, options: &AddConnPropsOptions) {
        if !options.supports(AuthType::Basic) {
            session.user = None;
            session.password = None;
            session.base64_encoded_auth = None;
        }
        if !options.supports(AuthType::Token) && session.token_type.is_some() {
            session.token_type = None;
            session.token_value = None;
        }
        if !options.supports(AuthType::Bearer) && session.token_type.is_none() {
            session.token_value = None;
        }
        if !options.supports(AuthType::CertPem) {
            session.cert = None;
            session.cert_key = None;
        }
    }

    /// Apply override properties; returns the names that must not be prompted
    fn apply_overrides(
        session: &mut SessionConfig,
        args: &CommandArgs,
        options: &AddConnPropsOptions,
    ) -> ZoweResult<HashSet<String>> {
        let mut overridden = HashSet::new();
        for property_override in &options.property_overrides {
            let value = args
                .get(property_override.argument_name())
                .filter(|v| value_is_present(v))
                .cloned()
                .or_else(|| {
                    session
                        .get_property(&property_override.property_name)
                        .filter(value_is_present)
                });
            let Some(value) = value else {
                continue;
            };

            session.set_property(&property_override.property_name, value)?;
            for name in &property_override.properties_overridden {
                session.clear_property(name);
                overridden.insert(name.clone());
            }
            debug!(
                property = %property_override.property_name,
                overridden = ?property_override.properties_overridden,
                "Override property is set"
            );
        }
        Ok(overridden)
    }

    /// Names of the properties still without a value, in prompting order
    fn missing_props(
        session: &SessionConfig,
        options: &AddConnPropsOptions,
        overridden: &HashSet<String>,
    ) -> Vec<String> {
        let mut needed = Vec::new();
        for name in ["hostname", "port"] {
            if !session.has_property(name) {
                needed.push(name.to_string());
            }
        }

        let has_other_creds = session.has_cred(CredField::TokenValue)
            || (session.has_cred(CredField::Cert) && session.has_cred(CredField::CertKey))
            || session.has_cred(CredField::Base64EncodedAuth);
        if options.supports(AuthType::Basic) && !has_other_creds {
            for field in [CredField::User, CredField::Password] {
                if !session.has_cred(field) {
                    needed.push(field.session_name().to_string());
                }
            }
        }

        for prop in &options.props_to_prompt_for {
            if !session.has_property(&prop.name) && !needed.contains(&prop.name) {
                needed.push(prop.name.clone());
            }
        }

        needed.retain(|name| !overridden.contains(name));
        needed
    }

    async fn prompt_for_missing(
        session: &mut SessionConfig,
        needed: &[String],
        options: &AddConnPropsOptions,
    ) -> ZoweResult<()> {
        let prompter: Arc<dyn Prompter> = match &options.prompter {
            Some(prompter) => Arc::clone(prompter),
            None => Arc::new(TermPrompter),
        };

        for name in needed {
            let question = Self::question_for(name, options);
            let prompt_options = PromptOptions {
                hide_text: question.hide_text,
                timeout: options.prompt_timeout,
            };

            let answer = loop {
                let reply = tokio::time::timeout(
                    options.prompt_timeout,
                    prompter.prompt(&question.text, prompt_options),
                )
                .await
                .map_err(|_| ZoweError::timeout_waiting_for(question.label.as_str()))??;

                match reply {
                    None => return Err(ZoweError::timeout_waiting_for(question.label.as_str())),
                    Some(text) if text.trim().is_empty() => continue,
                    Some(text) => break text,
                }
            };

            Self::store_answer(session, name, Value::String(answer), options)?;
        }
        Ok(())
    }

    /// Validate, convert and store a value for `name`
    fn store_answer(
        session: &mut SessionConfig,
        name: &str,
        value: Value,
        options: &AddConnPropsOptions,
    ) -> ZoweResult<()> {
        let value = match Self::prompt_prop(name, options) {
            Some(prop) => Self::convert_custom(prop, value)?,
            None => match value {
                // answers for text properties are taken without surrounding blanks
                Value::String(text) if name != "password" => Value::String(text.trim().to_string()),
                other => other,
            },
        };
        session.set_property(name, value)
    }

    fn convert_custom(prop: &PromptProp, value: Value) -> ZoweResult<Value> {
        if let (Some(validator), Value::String(text)) = (&prop.validator, &value) {
            validator(text).map_err(|msg| ZoweError::invalid_input_field(msg, prop.name.as_str()))?;
        }
        let text = match value {
            Value::String(text) => text,
            other => return Ok(other),
        };
        match prop.prop_type {
            PropType::String => Ok(Value::String(text)),
            PropType::Number => {
                let trimmed = text.trim();
                if let Ok(int) = trimmed.parse::<i64>() {
                    return Ok(Value::from(int));
                }
                trimmed
                    .parse::<f64>()
                    .ok()
                    .and_then(serde_json::Number::from_f64)
                    .map(Value::Number)
                    .ok_or_else(|| {
                        ZoweError::invalid_input_field(
                            format!("Specified {} was not a number.", prop.name),
                            prop.name.as_str(),
                        )
                    })
            }
            PropType::Boolean => match text.trim().to_ascii_lowercase().as_str() {
                "true" | "yes" | "y" => Ok(Value::Bool(true)),
                "false" | "no" | "n" => Ok(Value::Bool(false)),
                _ => Err(ZoweError::invalid_input_field(
                    format!("Specified {} was not true or false.", prop.name),
                    prop.name.as_str(),
                )),
            },
        }
    }

    fn prompt_prop<'a>(name: &str, options: &'a AddConnPropsOptions) -> Option<&'a PromptProp> {
        options.props_to_prompt_for.iter().find(|p| p.name == name)
    }

    fn question_for(name: &str, options: &AddConnPropsOptions) -> Question {
        let service = &options.service_description;
        match name {
            "hostname" => Question::plain(format!("Enter the host name of {}: ", service), "host name"),
            "port" => Question::plain(format!("Enter the port number for {}: ", service), "port number"),
            "user" => Question::plain(format!("Enter the user name for {}: ", service), "user name"),
            "password" => Question {
                text: format!("Enter the password for {}: ", service),
                label: "password".to_string(),
                hide_text: true,
            },
            other => {
                let prop = Self::prompt_prop(other, options);
                let description = prop
                    .and_then(|p| p.description.clone())
                    .unwrap_or_else(|| other.to_string());
                Question {
                    text: format!("Enter {}: ", description),
                    label: other.to_string(),
                    hide_text: prop.is_some_and(|p| p.secure),
                }
            }
        }
    }
}

struct Question {
    text: String,
    label: String,
    hide_text: bool,
}

impl Question {
    fn plain(text: String, label: &str) -> Self {
        Self {
            text,
            label: label.to_string(),
            hide_text: false,
        }
    }
}

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod tests;
