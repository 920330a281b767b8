//! Proxy decision for a session

use super::agent::{ProxyAgent, ProxyKind};
use super::environment::ProxyEnvironment;
use crate::session::{Protocol, Session};
use tracing::{debug, info, warn};
use url::Url;

/// Resolves proxy usage against a fixed environment snapshot
#[derive(Debug, Clone, Default)]
pub struct ProxySettings {
    env: ProxyEnvironment,
}

impl ProxySettings {
    pub fn new(env: ProxyEnvironment) -> Self {
        Self { env }
    }

    /// Resolver over the variables of the current process
    pub fn from_process() -> Self {
        Self::new(ProxyEnvironment::from_process())
    }

    pub fn environment(&self) -> &ProxyEnvironment {
        &self.env
    }

    /// Proxy agent for `session`, or `None` when no proxy applies
    pub fn get_proxy_agent(&self, session: &Session) -> Option<ProxyAgent> {
        if self.matches_no_proxy_settings(session) {
            info!(host = session.hostname(), "Host matches no-proxy settings, not using a proxy");
            return None;
        }
        let url = self.get_system_proxy_url(session)?;
        let kind = match session.protocol() {
            Protocol::Http => ProxyKind::Http,
            Protocol::Https => ProxyKind::Https,
        };
        info!(host = session.hostname(), proxy = %url, kind = %kind, "Using proxy");
        Some(ProxyAgent {
            kind,
            url,
            reject_unauthorized: session.reject_unauthorized(),
            proxy_authorization: Self::get_proxy_auth_setting(session).map(str::to_string),
        })
    }

    /// Proxy URL for the session protocol.
    ///
    /// https sessions fall back to the http sources when no https proxy is set.
    pub fn get_system_proxy_url(&self, session: &Session) -> Option<Url> {
        let overrides = session.proxy();
        let http = overrides
            .and_then(|p| p.http_proxy.clone())
            .or_else(|| self.env.http_proxy.clone());
        let raw = match session.protocol() {
            Protocol::Http => http,
            Protocol::Https => overrides
                .and_then(|p| p.https_proxy.clone())
                .or_else(|| self.env.https_proxy.clone())
                .or(http),
        }?;

        match Url::parse(raw.trim()) {
            Ok(url) => Some(url),
            Err(e) => {
                warn!(proxy = %raw, error = %e, "Ignoring proxy URL that cannot be parsed");
                None
            }
        }
    }

    /// True when the session host appears in the no-proxy list.
    ///
    /// A session-level list replaces the environment one. Matching is exact
    /// and case-insensitive; wildcards and CIDR ranges are not interpreted.
    pub fn matches_no_proxy_settings(&self, session: &Session) -> bool {
        let session_list = session
            .proxy()
            .and_then(|p| p.no_proxy.clone())
            .filter(|list| !list.is_empty());
        let list = session_list.unwrap_or_else(|| self.env.no_proxy_list());

        let host = session.hostname().trim().to_lowercase();
        let matched = list
            .iter()
            .any(|entry| entry.trim().to_lowercase() == host);
        debug!(host = %host, entries = list.len(), matched, "Checked no-proxy settings");
        matched
    }

    /// Session-level proxy authorization header value
    pub fn get_proxy_auth_setting(session: &Session) -> Option<&str> {
        session
            .proxy()
            .and_then(|p| p.proxy_authorization.as_deref())
            .filter(|v| !v.is_empty())
    }
}

#[cfg(test)]
#[path = "settings_tests.rs"]
mod tests;
