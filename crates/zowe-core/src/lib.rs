//! Session credential resolution for z/OSMF REST clients
//!
//! Given credentials arriving from command arguments, the environment, an
//! initial session, prompts or an external provider, this crate picks
//! exactly one authentication method for a session and strips everything
//! that belongs to other methods. It also decides whether the session goes
//! through an HTTP(S) proxy.
//!
//! - [`session`]: descriptor, credential cache, auth order and selector
//! - [`connection`]: fills in missing connection properties
//! - [`proxy`]: proxy agent selection with no-proxy matching
//! - [`config`]: timeouts and environment-derived settings

pub mod config;
pub mod connection;
pub mod error;
pub mod proxy;
pub mod session;

pub use connection::{AddConnPropsOptions, ConnectionPropsResolver};
pub use error::{UnifiedError, ZoweError, ZoweResult};
pub use proxy::{ProxyAgent, ProxySettings};
pub use session::{AuthType, CommandArgs, Session, SessionAuth, SessionConfig};
