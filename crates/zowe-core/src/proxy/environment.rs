//! Proxy sources: session overrides and environment variables

use serde::{Deserialize, Serialize};
use std::env;

/// Proxy settings attached to a single session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http_proxy: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub https_proxy: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_proxy: Option<Vec<String>>,
    /// Sent as the `Proxy-Authorization` header
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxy_authorization: Option<String>,
}

/// Snapshot of the proxy environment variables.
///
/// Upper-case names win over lower-case ones. Empty values count as unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProxyEnvironment {
    pub http_proxy: Option<String>,
    pub https_proxy: Option<String>,
    pub no_proxy: Option<String>,
}

impl ProxyEnvironment {
    /// Read the variables of the current process
    pub fn from_process() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build from explicit name/value pairs
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let vars: Vec<(String, String)> = vars
            .into_iter()
            .map(|(k, v)| (k.as_ref().to_string(), v.into()))
            .collect();
        Self::from_lookup(|name| {
            vars.iter()
                .find(|(k, _)| k == name)
                .map(|(_, v)| v.clone())
        })
    }

    fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Self {
        let pick = |upper: &str, lower: &str| {
            lookup(upper)
                .filter(|v| !v.trim().is_empty())
                .or_else(|| lookup(lower).filter(|v| !v.trim().is_empty()))
        };
        Self {
            http_proxy: pick("HTTP_PROXY", "http_proxy"),
            https_proxy: pick("HTTPS_PROXY", "https_proxy"),
            no_proxy: pick("NO_PROXY", "no_proxy"),
        }
    }

    /// Entries of the no-proxy variable, trimmed and without blanks
    pub fn no_proxy_list(&self) -> Vec<String> {
        self.no_proxy
            .as_deref()
            .map(|list| {
                list.split(',')
                    .map(str::trim)
                    .filter(|entry| !entry.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }
}
