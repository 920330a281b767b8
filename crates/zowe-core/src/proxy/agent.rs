//! Proxy agent description and its reqwest form

use crate::error::{ZoweError, ZoweResult};
use reqwest::header::HeaderValue;
use std::fmt;
use url::Url;

/// Which requests the agent proxies, chosen from the session protocol
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProxyKind {
    Http,
    Https,
}

impl fmt::Display for ProxyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProxyKind::Http => f.write_str("http"),
            ProxyKind::Https => f.write_str("https"),
        }
    }
}

/// Proxy configuration for one session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyAgent {
    pub kind: ProxyKind,
    pub url: Url,
    pub reject_unauthorized: bool,
    pub proxy_authorization: Option<String>,
}

impl ProxyAgent {
    /// Convert into a proxy for a reqwest client
    pub fn to_reqwest(&self) -> ZoweResult<reqwest::Proxy> {
        let mut proxy = match self.kind {
            ProxyKind::Http => reqwest::Proxy::http(self.url.as_str())?,
            ProxyKind::Https => reqwest::Proxy::https(self.url.as_str())?,
        };
        if let Some(auth) = &self.proxy_authorization {
            let value = HeaderValue::from_str(auth).map_err(|e| {
                ZoweError::proxy(
                    format!("Invalid proxy authorization header: {}", e),
                    self.url.as_str(),
                )
            })?;
            proxy = proxy.custom_http_auth(value);
        }
        Ok(proxy)
    }

    /// Install this proxy on a client builder
    pub fn apply_to(&self, builder: reqwest::ClientBuilder) -> ZoweResult<reqwest::ClientBuilder> {
        Ok(builder
            .proxy(self.to_reqwest()?)
            .danger_accept_invalid_certs(!self.reject_unauthorized))
    }
}
