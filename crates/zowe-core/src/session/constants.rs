//! Authentication identifiers, token types and connection defaults

use crate::error::ZoweError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Token type of a JSON web token issued by z/OSMF or the API Mediation Layer
pub const TOKEN_TYPE_JWT: &str = "jwtToken";

/// Token type of an LTPA2 token
pub const TOKEN_TYPE_LTPA: &str = "LtpaToken2";

/// Token type of an API Mediation Layer authentication token
pub const TOKEN_TYPE_APIML: &str = "apimlAuthenticationToken";

/// Token types recognized when a login response sets a cookie
pub const KNOWN_TOKEN_TYPES: [&str; 3] = [TOKEN_TYPE_JWT, TOKEN_TYPE_LTPA, TOKEN_TYPE_APIML];

/// Default port for https connections
pub const DEFAULT_HTTPS_PORT: u16 = 443;

/// Default port for http connections
pub const DEFAULT_HTTP_PORT: u16 = 80;

/// Certificates are verified unless the caller opts out
pub const DEFAULT_REJECT_UNAUTHORIZED: bool = true;

/// Default base path prepended to every resource
pub const DEFAULT_BASE_PATH: &str = "";

/// Method used to authenticate a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AuthType {
    None,
    Basic,
    Bearer,
    Token,
    CertPem,
}

impl AuthType {
    /// Every method in declaration order
    pub const ALL: [AuthType; 5] = [
        AuthType::None,
        AuthType::Basic,
        AuthType::Bearer,
        AuthType::Token,
        AuthType::CertPem,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AuthType::None => "none",
            AuthType::Basic => "basic",
            AuthType::Bearer => "bearer",
            AuthType::Token => "token",
            AuthType::CertPem => "cert-pem",
        }
    }
}

impl fmt::Display for AuthType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AuthType {
    type Err = ZoweError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AuthType::ALL
            .into_iter()
            .find(|auth| auth.as_str() == s)
            .ok_or_else(|| {
                ZoweError::invalid_input_field(
                    format!("The authentication = '{}' is not valid.", s),
                    "authOrder",
                )
            })
    }
}

/// Method a caller may place at the top of a default auth order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TopDefaultAuth {
    Basic,
    Token,
}

impl From<TopDefaultAuth> for AuthType {
    fn from(top: TopDefaultAuth) -> Self {
        match top {
            TopDefaultAuth::Basic => AuthType::Basic,
            TopDefaultAuth::Token => AuthType::Token,
        }
    }
}

impl fmt::Display for TopDefaultAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        AuthType::from(*self).fmt(f)
    }
}

/// Transport protocol of a session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    Http,
    #[default]
    Https,
}

impl Protocol {
    pub fn as_str(&self) -> &'static str {
        match self {
            Protocol::Http => "http",
            Protocol::Https => "https",
        }
    }

    /// Port used when a session names none
    pub fn default_port(&self) -> u16 {
        match self {
            Protocol::Http => DEFAULT_HTTP_PORT,
            Protocol::Https => DEFAULT_HTTPS_PORT,
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Protocol {
    type Err = ZoweError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "http" => Ok(Protocol::Http),
            "https" => Ok(Protocol::Https),
            _ => Err(ZoweError::invalid_input_field(
                format!("Protocol '{}' is not supported. Use http or https.", s),
                "protocol",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_type_round_trips_identifiers() {
        for auth in AuthType::ALL {
            assert_eq!(auth.as_str().parse::<AuthType>().unwrap(), auth);
        }
    }

    #[test]
    fn test_auth_type_rejects_other_spellings() {
        assert!("Basic".parse::<AuthType>().is_err());
        assert!("cert_pem".parse::<AuthType>().is_err());
        assert!("".parse::<AuthType>().is_err());
    }

    #[test]
    fn test_auth_type_serde_uses_identifiers() {
        let json = serde_json::to_string(&AuthType::CertPem).unwrap();
        assert_eq!(json, "\"cert-pem\"");
    }

    #[test]
    fn test_protocol_defaults() {
        assert_eq!(Protocol::default(), Protocol::Https);
        assert_eq!(Protocol::Https.default_port(), 443);
        assert_eq!(Protocol::Http.default_port(), 80);
        assert_eq!(" HTTP ".parse::<Protocol>().unwrap(), Protocol::Http);
        assert!("ftp".parse::<Protocol>().is_err());
    }
}
