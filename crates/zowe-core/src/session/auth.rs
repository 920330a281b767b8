//! Tagged authentication variants
//!
//! A resolved session carries exactly one of these. Materializing a variant
//! into a descriptor rewrites every credential field, so material that does
//! not belong to the chosen method cannot survive.

use super::constants::AuthType;
use super::creds::AvailableCreds;
use super::descriptor::SessionConfig;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// User/password credentials and their base64 encoding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicCreds {
    pub user: Option<String>,
    pub password: Option<String>,
    pub base64_encoded_auth: String,
}

impl BasicCreds {
    /// Basic credentials from a cache: a user/password pair is re-encoded,
    /// otherwise a cached encoding is used as is.
    pub fn from_available(creds: &AvailableCreds) -> Option<Self> {
        match (&creds.user, &creds.password) {
            (Some(user), Some(password)) => Some(Self {
                user: Some(user.clone()),
                password: Some(password.clone()),
                base64_encoded_auth: encode_basic(user, password),
            }),
            _ => creds.base64_encoded_auth.as_ref().map(|encoded| Self {
                user: creds.user.clone(),
                password: creds.password.clone(),
                base64_encoded_auth: encoded.clone(),
            }),
        }
    }
}

/// Client certificate and private key pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertPemCreds {
    pub cert: String,
    pub cert_key: String,
}

impl CertPemCreds {
    pub fn from_available(creds: &AvailableCreds) -> Option<Self> {
        match (&creds.cert, &creds.cert_key) {
            (Some(cert), Some(cert_key)) => Some(Self {
                cert: cert.clone(),
                cert_key: cert_key.clone(),
            }),
            _ => None,
        }
    }
}

/// Credentials used to log in when the session exists to obtain a token
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenRequestVia {
    Basic(BasicCreds),
    CertPem(CertPemCreds),
}

impl TokenRequestVia {
    pub fn auth_type(&self) -> AuthType {
        match self {
            TokenRequestVia::Basic(_) => AuthType::Basic,
            TokenRequestVia::CertPem(_) => AuthType::CertPem,
        }
    }
}

/// The single authentication method of a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionAuth {
    None,
    Basic(BasicCreds),
    Token {
        token_type: String,
        token_value: String,
    },
    Bearer {
        token_value: String,
    },
    CertPem(CertPemCreds),
    /// Log in with `via` and receive a token of `token_type`
    TokenRequest {
        token_type: Option<String>,
        via: TokenRequestVia,
    },
}

impl SessionAuth {
    /// Value recorded as the session `type`
    pub fn auth_type(&self) -> AuthType {
        match self {
            SessionAuth::None => AuthType::None,
            SessionAuth::Basic(_) => AuthType::Basic,
            SessionAuth::Token { .. } | SessionAuth::TokenRequest { .. } => AuthType::Token,
            SessionAuth::Bearer { .. } => AuthType::Bearer,
            SessionAuth::CertPem(_) => AuthType::CertPem,
        }
    }

    /// Rewrite the credential fields and `type` of `session` from this variant
    pub fn apply_to(&self, session: &mut SessionConfig) {
        session.clear_creds();
        session.auth_type = Some(self.auth_type());
        match self {
            SessionAuth::None => {}
            SessionAuth::Basic(basic) => write_basic(session, basic),
            SessionAuth::Token {
                token_type,
                token_value,
            } => {
                session.token_type = Some(token_type.clone());
                session.token_value = Some(token_value.clone());
            }
            SessionAuth::Bearer { token_value } => {
                session.token_value = Some(token_value.clone());
            }
            SessionAuth::CertPem(cert) => write_cert(session, cert),
            SessionAuth::TokenRequest { token_type, via } => {
                session.token_type = token_type.clone();
                session.auth_cache.auth_type_to_request_token = Some(via.auth_type());
                match via {
                    TokenRequestVia::Basic(basic) => write_basic(session, basic),
                    TokenRequestVia::CertPem(cert) => write_cert(session, cert),
                }
            }
        }
    }
}

fn write_basic(session: &mut SessionConfig, basic: &BasicCreds) {
    session.user = basic.user.clone();
    session.password = basic.password.clone();
    session.base64_encoded_auth = Some(basic.base64_encoded_auth.clone());
}

fn write_cert(session: &mut SessionConfig, cert: &CertPemCreds) {
    session.cert = Some(cert.cert.clone());
    session.cert_key = Some(cert.cert_key.clone());
}

/// Base64 encoding of `user:password`
pub fn encode_basic(user: &str, password: &str) -> String {
    STANDARD.encode(format!("{}:{}", user, password))
}
