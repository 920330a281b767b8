//! Mutable session descriptor
//!
//! A `SessionConfig` carries connection properties and candidate credentials
//! through the resolution pipeline. Once resolved it is turned into an
//! immutable [`Session`](super::Session).

use super::args::value_is_present;
use super::constants::{AuthType, KNOWN_TOKEN_TYPES, Protocol};
use super::creds::{AuthCache, CredField};
use crate::error::{ZoweError, ZoweResult};
use crate::proxy::ProxyOverrides;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};

const PORT_NOT_A_NUMBER: &str = "Specified port was not a number.";

/// Connection and authentication state of one REST session
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<Protocol>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reject_unauthorized: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_path: Option<String>,

    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub auth_type: Option<AuthType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base64_encoded_auth: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cert: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cert_key: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub auth_type_order: Vec<AuthType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxy: Option<ProxyOverrides>,

    /// Caller-declared properties (override and custom prompted properties)
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,

    /// Caller-declared properties hidden whenever the session is censored
    #[serde(skip)]
    pub secure_props: BTreeSet<String>,

    #[serde(skip)]
    pub auth_cache: AuthCache,
}

impl SessionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_hostname(mut self, hostname: impl Into<String>) -> Self {
        self.hostname = Some(hostname.into());
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub fn with_protocol(mut self, protocol: Protocol) -> Self {
        self.protocol = Some(protocol);
        self
    }

    pub fn with_reject_unauthorized(mut self, reject: bool) -> Self {
        self.reject_unauthorized = Some(reject);
        self
    }

    pub fn with_base_path(mut self, base_path: impl Into<String>) -> Self {
        self.base_path = Some(base_path.into());
        self
    }

    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }

    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    pub fn with_base64_encoded_auth(mut self, encoded: impl Into<String>) -> Self {
        self.base64_encoded_auth = Some(encoded.into());
        self
    }

    pub fn with_token(mut self, token_type: impl Into<String>, token_value: impl Into<String>) -> Self {
        self.token_type = Some(token_type.into());
        self.token_value = Some(token_value.into());
        self
    }

    pub fn with_token_value(mut self, token_value: impl Into<String>) -> Self {
        self.token_value = Some(token_value.into());
        self
    }

    pub fn with_cert(mut self, cert: impl Into<String>, cert_key: impl Into<String>) -> Self {
        self.cert = Some(cert.into());
        self.cert_key = Some(cert_key.into());
        self
    }

    pub fn with_proxy(mut self, proxy: ProxyOverrides) -> Self {
        self.proxy = Some(proxy);
        self
    }

    /// Credential field value
    pub fn cred(&self, field: CredField) -> Option<&str> {
        match field {
            CredField::User => self.user.as_deref(),
            CredField::Password => self.password.as_deref(),
            CredField::Base64EncodedAuth => self.base64_encoded_auth.as_deref(),
            CredField::TokenType => self.token_type.as_deref(),
            CredField::TokenValue => self.token_value.as_deref(),
            CredField::Cert => self.cert.as_deref(),
            CredField::CertKey => self.cert_key.as_deref(),
        }
    }

    pub fn cred_mut(&mut self, field: CredField) -> &mut Option<String> {
        match field {
            CredField::User => &mut self.user,
            CredField::Password => &mut self.password,
            CredField::Base64EncodedAuth => &mut self.base64_encoded_auth,
            CredField::TokenType => &mut self.token_type,
            CredField::TokenValue => &mut self.token_value,
            CredField::Cert => &mut self.cert,
            CredField::CertKey => &mut self.cert_key,
        }
    }

    /// Hide `name` from every censored view of this session
    pub fn mark_secure(&mut self, name: impl Into<String>) {
        self.secure_props.insert(name.into());
    }

    /// True when a non-empty credential value is present
    pub fn has_cred(&self, field: CredField) -> bool {
        self.cred(field).is_some_and(|v| !v.is_empty())
    }

    /// Remove every credential field
    pub fn clear_creds(&mut self) {
        for field in CredField::ALL {
            *self.cred_mut(field) = None;
        }
    }

    /// Value of a named property, as JSON
    pub fn get_property(&self, name: &str) -> Option<Value> {
        if let Some(field) = CredField::from_name(name) {
            return self.cred(field).map(|v| Value::String(v.to_string()));
        }
        match name {
            "hostname" | "host" => self.hostname.clone().map(Value::String),
            "port" => self.port.map(Value::from),
            "protocol" => self.protocol.map(|p| Value::String(p.to_string())),
            "rejectUnauthorized" => self.reject_unauthorized.map(Value::Bool),
            "basePath" => self.base_path.clone().map(Value::String),
            _ => self.extra.get(name).cloned(),
        }
    }

    /// True when a property holds a usable value. Port 0 counts as missing.
    pub fn has_property(&self, name: &str) -> bool {
        match name {
            "port" => self.port.is_some_and(|p| p != 0),
            _ => self.get_property(name).is_some_and(|v| value_is_present(&v)),
        }
    }

    /// Store a named property. Typed fields are converted, others land in `extra`.
    pub fn set_property(&mut self, name: &str, value: Value) -> ZoweResult<()> {
        if let Some(field) = CredField::from_name(name) {
            let text = expect_string(name, value)?;
            *self.cred_mut(field) = Some(text);
            return Ok(());
        }
        match name {
            "hostname" | "host" => self.hostname = Some(expect_string(name, value)?),
            "port" => self.port = Some(parse_port(&value)?),
            "protocol" => self.protocol = Some(expect_string(name, value)?.parse()?),
            "rejectUnauthorized" => self.reject_unauthorized = Some(parse_bool(name, &value)?),
            "basePath" => self.base_path = Some(expect_string(name, value)?),
            _ => {
                self.extra.insert(name.to_string(), value);
            }
        }
        Ok(())
    }

    /// Remove a named property
    pub fn clear_property(&mut self, name: &str) {
        if let Some(field) = CredField::from_name(name) {
            *self.cred_mut(field) = None;
            return;
        }
        match name {
            "hostname" | "host" => self.hostname = None,
            "port" => self.port = None,
            "protocol" => self.protocol = None,
            "rejectUnauthorized" => self.reject_unauthorized = None,
            "basePath" => self.base_path = None,
            _ => {
                self.extra.remove(name);
            }
        }
    }

    /// Capture a token from `Set-Cookie` header values after a login.
    ///
    /// With a token type already set, only a cookie of that name is taken.
    /// Otherwise the first cookie named after a known token type is used.
    /// Returns true when a token was stored.
    pub fn store_cookie<S: AsRef<str>>(&mut self, set_cookie_headers: &[S]) -> bool {
        for header in set_cookie_headers {
            let Some(pair) = header.as_ref().split(';').next() else {
                continue;
            };
            let Some((name, value)) = pair.split_once('=') else {
                continue;
            };
            let (name, value) = (name.trim(), value.trim());
            if value.is_empty() {
                continue;
            }
            let wanted = match self.token_type.as_deref() {
                Some(token_type) => token_type == name,
                None => KNOWN_TOKEN_TYPES.contains(&name),
            };
            if wanted {
                self.token_type = Some(name.to_string());
                self.token_value = Some(value.to_string());
                return true;
            }
        }
        false
    }
}

fn expect_string(name: &str, value: Value) -> ZoweResult<String> {
    match value {
        Value::String(s) => Ok(s),
        other => Err(ZoweError::invalid_input_field(
            format!("Property '{}' must be a string, got {}.", name, other),
            name,
        )),
    }
}

/// Interpret a port from an argument, prompt answer or callback value
pub fn parse_port(value: &Value) -> ZoweResult<u16> {
    let port = match value {
        Value::Number(n) => n.as_u64().and_then(|p| u16::try_from(p).ok()),
        Value::String(s) => s.trim().parse::<u16>().ok(),
        _ => None,
    };
    port.ok_or_else(|| ZoweError::invalid_input_field(PORT_NOT_A_NUMBER, "port"))
}

fn parse_bool(name: &str, value: &Value) -> ZoweResult<bool> {
    match value {
        Value::Bool(b) => Ok(*b),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "yes" | "1" => Ok(true),
            "false" | "no" | "0" => Ok(false),
            _ => Err(ZoweError::invalid_input_field(
                format!("Property '{}' must be true or false.", name),
                name,
            )),
        },
        _ => Err(ZoweError::invalid_input_field(
            format!("Property '{}' must be true or false.", name),
            name,
        )),
    }
}
