//! Command routing logic for CLI

use crate::args::{Cli, Commands};
use crate::commands;
use crate::console::CliConsole;
use zowe_core::{UnifiedError, ZoweResult};

/// Route CLI commands to their respective handlers.
///
/// Errors are reported on the console before they are returned.
pub async fn route(cli: Cli) -> ZoweResult<()> {
    let console = CliConsole::new(cli.verbose);

    let result = match cli.command {
        Commands::Session(args) => commands::session::execute(args, &console).await,
        Commands::Proxy(args) => commands::proxy::execute(args, &console).await,
    };

    if let Err(err) = &result {
        if err.is_user_error() {
            console.error(err.message());
        } else {
            console.error(&format!("[{}] {}", err.error_code(), err.message()));
        }
    }
    result
}
