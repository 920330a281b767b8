//! Proxy settings resolution
//!
//! Decides whether a session reaches its host through an HTTP(S) proxy.
//! Session-level overrides take precedence over the standard proxy
//! environment variables. An unusable proxy URL means "no proxy".

mod agent;
mod environment;
mod settings;

pub use agent::{ProxyAgent, ProxyKind};
pub use environment::{ProxyEnvironment, ProxyOverrides};
pub use settings::ProxySettings;
