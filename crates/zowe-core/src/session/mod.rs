//! Session descriptor and credential selection
//!
//! Resolution runs as a strictly sequential pipeline on one descriptor:
//!
//! 1. [`auth_order::cache_creds_and_auth_order`] builds the credential cache
//!    and the auth order from the descriptor and the command arguments.
//! 2. [`auth_order::cache_default_auth_order`] optionally promotes basic or
//!    token to the top of a default order.
//! 3. [`selector::put_top_auth_in_session`] materializes exactly one method.
//! 4. [`Session::from_config`] freezes the result for the transport layer.
//!
//! All bookkeeping lives in the descriptor's [`AuthCache`], so independent
//! resolutions never share state.
//!
//! # Example
//!
//! ```
//! use zowe_core::session::{auth_order, selector, AuthType, CommandArgs, SessionConfig};
//!
//! let mut session = SessionConfig::new().with_hostname("lpar1.example.com");
//! let args = CommandArgs::new()
//!     .with("authOrder", "token,basic")
//!     .with("user", "ibmuser")
//!     .with("password", "secret");
//!
//! auth_order::cache_creds_and_auth_order(&mut session, &args);
//! selector::put_top_auth_in_session(&mut session).unwrap();
//! assert_eq!(session.auth_type, Some(AuthType::Basic));
//! ```

mod args;
mod auth;
pub mod auth_order;
pub mod censor;
mod constants;
mod creds;
mod descriptor;
mod rest_session;
pub mod selector;

pub use args::{CommandArgs, value_is_present};
pub use auth::{BasicCreds, CertPemCreds, SessionAuth, TokenRequestVia, encode_basic};
pub use constants::{
    AuthType, DEFAULT_BASE_PATH, DEFAULT_HTTP_PORT, DEFAULT_HTTPS_PORT,
    DEFAULT_REJECT_UNAUTHORIZED, KNOWN_TOKEN_TYPES, Protocol, TOKEN_TYPE_APIML,
    TOKEN_TYPE_JWT, TOKEN_TYPE_LTPA, TopDefaultAuth,
};
pub use creds::{AuthCache, AvailableCreds, CredField};
pub use descriptor::{SessionConfig, parse_port};
pub use rest_session::Session;
