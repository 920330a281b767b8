//! Immutable session handed to the transport layer

use super::auth::{BasicCreds, CertPemCreds, SessionAuth, TokenRequestVia, encode_basic};
use super::constants::{AuthType, DEFAULT_BASE_PATH, DEFAULT_REJECT_UNAUTHORIZED, Protocol};
use super::descriptor::SessionConfig;
use crate::error::{ZoweError, ZoweResult};
use crate::proxy::ProxyOverrides;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// A validated session with exactly one authentication method
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    hostname: String,
    port: u16,
    protocol: Protocol,
    reject_unauthorized: bool,
    base_path: String,
    auth: SessionAuth,
    proxy: Option<ProxyOverrides>,
}

impl Session {
    /// Build a session from a resolved descriptor, applying connection defaults
    pub fn from_config(config: &SessionConfig) -> ZoweResult<Self> {
        let hostname = config
            .hostname
            .as_deref()
            .map(str::trim)
            .filter(|h| !h.is_empty())
            .ok_or_else(|| ZoweError::config("Session requires a host name."))?;

        let protocol = config.protocol.unwrap_or_default();
        let port = match config.port {
            Some(port) if port != 0 => port,
            _ => protocol.default_port(),
        };
        let auth = auth_from_config(config, protocol)?;

        Ok(Self {
            hostname: hostname.to_string(),
            port,
            protocol,
            reject_unauthorized: config
                .reject_unauthorized
                .unwrap_or(DEFAULT_REJECT_UNAUTHORIZED),
            base_path: config
                .base_path
                .clone()
                .unwrap_or_else(|| DEFAULT_BASE_PATH.to_string()),
            auth,
            proxy: config.proxy.clone(),
        })
    }

    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn protocol(&self) -> Protocol {
        self.protocol
    }

    pub fn reject_unauthorized(&self) -> bool {
        self.reject_unauthorized
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    pub fn auth(&self) -> &SessionAuth {
        &self.auth
    }

    pub fn proxy(&self) -> Option<&ProxyOverrides> {
        self.proxy.as_ref()
    }

    /// Scheme, host, port and base path
    pub fn base_url(&self) -> String {
        let base_path = self.base_path.trim_end_matches('/');
        let separator = if base_path.is_empty() || base_path.starts_with('/') {
            ""
        } else {
            "/"
        };
        format!(
            "{}://{}:{}{}{}",
            self.protocol, self.hostname, self.port, separator, base_path
        )
    }

    /// Value of the `Authorization` header, if the method sends one
    pub fn authorization_header(&self) -> Option<String> {
        match &self.auth {
            SessionAuth::Basic(basic)
            | SessionAuth::TokenRequest {
                via: TokenRequestVia::Basic(basic),
                ..
            } => Some(format!("Basic {}", basic.base64_encoded_auth)),
            SessionAuth::Bearer { token_value } => Some(format!("Bearer {}", token_value)),
            _ => None,
        }
    }

    /// Value of the `Cookie` header for token authentication
    pub fn cookie_header(&self) -> Option<String> {
        match &self.auth {
            SessionAuth::Token {
                token_type,
                token_value,
            } => Some(format!("{}={}", token_type, token_value)),
            _ => None,
        }
    }

    /// Base64 encoding of `user:password`
    pub fn get_base64_auth(user: &str, password: &str) -> String {
        encode_basic(user, password)
    }

    /// User name part of a base64 `user:password` value
    pub fn get_username_from_auth(encoded: &str) -> ZoweResult<String> {
        decode_basic(encoded).map(|(user, _)| user)
    }

    /// Password part of a base64 `user:password` value
    pub fn get_password_from_auth(encoded: &str) -> ZoweResult<String> {
        decode_basic(encoded).map(|(_, password)| password)
    }
}

fn decode_basic(encoded: &str) -> ZoweResult<(String, String)> {
    let bytes = STANDARD
        .decode(encoded.trim())
        .map_err(|e| ZoweError::invalid_input_field(format!("Invalid base64 credentials: {}", e), "base64EncodedAuth"))?;
    let text = String::from_utf8(bytes).map_err(|_| {
        ZoweError::invalid_input_field("Decoded credentials are not valid UTF-8.", "base64EncodedAuth")
    })?;
    match text.split_once(':') {
        Some((user, password)) => Ok((user.to_string(), password.to_string())),
        None => Err(ZoweError::invalid_input_field(
            "Decoded credentials are not in user:password form.",
            "base64EncodedAuth",
        )),
    }
}

fn basic_from_config(config: &SessionConfig) -> Option<BasicCreds> {
    match (&config.user, &config.password) {
        (Some(user), Some(password)) => Some(BasicCreds {
            user: Some(user.clone()),
            password: Some(password.clone()),
            base64_encoded_auth: config
                .base64_encoded_auth
                .clone()
                .unwrap_or_else(|| encode_basic(user, password)),
        }),
        _ => config.base64_encoded_auth.as_ref().map(|encoded| BasicCreds {
            user: config.user.clone(),
            password: config.password.clone(),
            base64_encoded_auth: encoded.clone(),
        }),
    }
}

fn cert_from_config(config: &SessionConfig, protocol: Protocol) -> ZoweResult<CertPemCreds> {
    if protocol == Protocol::Http {
        return Err(ZoweError::config(
            "Certificate authentication requires the https protocol.",
        ));
    }
    match (&config.cert, &config.cert_key) {
        (Some(cert), Some(cert_key)) => Ok(CertPemCreds {
            cert: cert.clone(),
            cert_key: cert_key.clone(),
        }),
        _ => Err(ZoweError::config(
            "Certificate authentication requires both a certificate and a certificate key.",
        )),
    }
}

fn auth_from_config(config: &SessionConfig, protocol: Protocol) -> ZoweResult<SessionAuth> {
    let Some(auth_type) = config.auth_type else {
        return Ok(SessionAuth::None);
    };
    match auth_type {
        AuthType::None => Ok(SessionAuth::None),
        AuthType::Basic => basic_from_config(config).map(SessionAuth::Basic).ok_or_else(|| {
            ZoweError::config("Basic authentication requires user and password or base64 encoded credentials.")
        }),
        AuthType::Bearer => config
            .token_value
            .clone()
            .map(|token_value| SessionAuth::Bearer { token_value })
            .ok_or_else(|| ZoweError::config("Bearer authentication requires a token value.")),
        AuthType::CertPem => cert_from_config(config, protocol).map(SessionAuth::CertPem),
        AuthType::Token => token_auth_from_config(config, protocol),
    }
}

fn token_auth_from_config(config: &SessionConfig, protocol: Protocol) -> ZoweResult<SessionAuth> {
    match config.auth_cache.auth_type_to_request_token {
        Some(AuthType::Basic) => {
            let basic = basic_from_config(config).ok_or_else(|| {
                ZoweError::config("Requesting a token with basic authentication requires user and password.")
            })?;
            Ok(SessionAuth::TokenRequest {
                token_type: config.token_type.clone(),
                via: TokenRequestVia::Basic(basic),
            })
        }
        Some(AuthType::CertPem) => Ok(SessionAuth::TokenRequest {
            token_type: config.token_type.clone(),
            via: TokenRequestVia::CertPem(cert_from_config(config, protocol)?),
        }),
        Some(other) => Err(ZoweError::config(format!(
            "The requested session contains an invalid value for 'authTypeToRequestToken' = {}.",
            other
        ))),
        None => {
            let token_type = config
                .token_type
                .clone()
                .ok_or_else(|| ZoweError::config("Token authentication requires a token type."))?;
            match &config.token_value {
                Some(token_value) => Ok(SessionAuth::Token {
                    token_type,
                    token_value: token_value.clone(),
                }),
                None => basic_from_config(config)
                    .map(|basic| SessionAuth::TokenRequest {
                        token_type: Some(token_type),
                        via: TokenRequestVia::Basic(basic),
                    })
                    .ok_or_else(|| {
                        ZoweError::config("Token authentication requires a token value or credentials to obtain one.")
                    }),
            }
        }
    }
}
