//! Credential cache
//!
//! The cache is rebuilt from scratch for every resolution pass and lives
//! inside the session descriptor it describes.

use super::args::CommandArgs;
use super::constants::{AuthType, TopDefaultAuth};
use super::descriptor::SessionConfig;
use serde::Serialize;

/// Credential fields that can appear on a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CredField {
    User,
    Password,
    Base64EncodedAuth,
    TokenType,
    TokenValue,
    Cert,
    CertKey,
}

impl CredField {
    pub const ALL: [CredField; 7] = [
        CredField::User,
        CredField::Password,
        CredField::Base64EncodedAuth,
        CredField::TokenType,
        CredField::TokenValue,
        CredField::Cert,
        CredField::CertKey,
    ];

    /// Property name on a session
    pub fn session_name(self) -> &'static str {
        match self {
            CredField::User => "user",
            CredField::Password => "password",
            CredField::Base64EncodedAuth => "base64EncodedAuth",
            CredField::TokenType => "tokenType",
            CredField::TokenValue => "tokenValue",
            CredField::Cert => "cert",
            CredField::CertKey => "certKey",
        }
    }

    /// Argument name; certificate files are named differently on the command line
    pub fn arg_name(self) -> &'static str {
        match self {
            CredField::Cert => "certFile",
            CredField::CertKey => "certKeyFile",
            other => other.session_name(),
        }
    }

    /// Look a field up by its session or argument name
    pub fn from_name(name: &str) -> Option<Self> {
        CredField::ALL
            .into_iter()
            .find(|field| field.session_name() == name || field.arg_name() == name)
    }
}

/// Credentials discovered for one resolution pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailableCreds {
    pub user: Option<String>,
    pub password: Option<String>,
    pub base64_encoded_auth: Option<String>,
    pub token_type: Option<String>,
    pub token_value: Option<String>,
    pub cert: Option<String>,
    pub cert_key: Option<String>,
}

impl AvailableCreds {
    /// Merge session and argument credentials; a non-empty session value wins
    pub fn build(session: &SessionConfig, args: &CommandArgs) -> Self {
        let mut creds = Self::default();
        for field in CredField::ALL {
            let value = session
                .cred(field)
                .filter(|v| !v.is_empty())
                .or_else(|| args.get_str(field.arg_name()));
            *creds.slot_mut(field) = value.map(str::to_string);
        }
        creds
    }

    pub fn get(&self, field: CredField) -> Option<&str> {
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

    fn slot_mut(&mut self, field: CredField) -> &mut Option<String> {
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

    pub fn has(&self, field: CredField) -> bool {
        self.get(field).is_some()
    }

    pub fn is_empty(&self) -> bool {
        CredField::ALL.into_iter().all(|field| !self.has(field))
    }

    /// Names of the cached fields, safe to log
    pub fn cached_names(&self) -> Vec<&'static str> {
        CredField::ALL
            .into_iter()
            .filter(|field| self.has(*field))
            .map(CredField::session_name)
            .collect()
    }
}

/// Bookkeeping attached to one session descriptor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthCache {
    pub available_creds: AvailableCreds,
    /// Set once `available_creds` has been built for this session
    pub creds_cached: bool,
    pub did_user_set_auth_order: bool,
    pub top_default_auth: Option<TopDefaultAuth>,
    /// Present while the session is used to obtain a token.
    /// `Some(AuthType::None)` is the placeholder until a method is selected.
    pub auth_type_to_request_token: Option<AuthType>,
}
