//! CLI commands

pub mod proxy;
pub mod session;

use crate::prompt::DialoguerPrompter;
use std::io::IsTerminal;
use std::sync::Arc;
use zowe_core::connection::{Prompter, TermPrompter};

/// Dialoguer needs a terminal; piped input falls back to plain line reads
pub(crate) fn default_prompter() -> Arc<dyn Prompter> {
    if std::io::stdin().is_terminal() && std::io::stderr().is_terminal() {
        Arc::new(DialoguerPrompter)
    } else {
        Arc::new(TermPrompter)
    }
}
