//! Zowe session command-line tool
//!
//! Resolves connection properties for a z/OSMF session the same way the
//! library does for any command handler, and reports the outcome.
//!
//! ```bash
//! zowe session --host lpar1.example.com --port 443 --user ibmuser
//! zowe session --auth-order token,basic --token-type jwtToken --token-value eyJ...
//! zowe proxy --host lpar1.example.com
//! ```
//!
//! Values may also come from `ZOWE_OPT_*` environment variables, for
//! example `ZOWE_OPT_AUTH_ORDER=cert-pem,basic`. Command line flags win.

#![allow(clippy::collapsible_if)]

mod args;
mod commands;
mod console;
mod prompt;
mod router;

use args::Cli;
use clap::Parser;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    // Set RUST_LOG=debug to see the resolution steps
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match router::route(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
