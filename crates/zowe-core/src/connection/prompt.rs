//! Prompt primitive
//!
//! The resolver asks for missing values through [`Prompter`]. A command
//! handler can supply its own implementation; otherwise [`TermPrompter`]
//! reads from the controlling terminal.

use crate::error::{ZoweError, ZoweResult};
use async_trait::async_trait;
use console::Term;
use std::time::Duration;

/// How a single question is asked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptOptions {
    /// Do not echo the answer
    pub hide_text: bool,
    /// Give up after this long
    pub timeout: Duration,
}

/// Source of interactive answers.
///
/// `Ok(None)` means no answer arrived, which the resolver reports as a
/// timeout for the property being asked.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Prompter: Send + Sync {
    async fn prompt(&self, question: &str, options: PromptOptions) -> ZoweResult<Option<String>>;
}

/// Reads answers from the terminal on a blocking thread
#[derive(Debug, Clone, Default)]
pub struct TermPrompter;

#[async_trait]
impl Prompter for TermPrompter {
    async fn prompt(&self, question: &str, options: PromptOptions) -> ZoweResult<Option<String>> {
        let question = question.to_string();
        let read = tokio::task::spawn_blocking(move || {
            let term = Term::stderr();
            term.write_str(&question)?;
            if options.hide_text {
                term.read_secure_line()
            } else {
                term.read_line()
            }
        });

        // A read that outlives the timeout is abandoned on its thread.
        match tokio::time::timeout(options.timeout, read).await {
            Err(_) => Ok(None),
            Ok(joined) => {
                let line = joined?
                    .map_err(|e| ZoweError::prompt(format!("failed to read from terminal: {}", e)))?;
                Ok(Some(line))
            }
        }
    }
}
