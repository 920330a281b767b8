//! Interactive prompts backed by dialoguer

use async_trait::async_trait;
use dialoguer::{Input, Password, theme::ColorfulTheme};
use zowe_core::ZoweError;
use zowe_core::ZoweResult;
use zowe_core::connection::{PromptOptions, Prompter};

/// Asks questions with dialoguer's colorful theme
#[derive(Debug, Clone, Default)]
pub struct DialoguerPrompter;

#[async_trait]
impl Prompter for DialoguerPrompter {
    async fn prompt(&self, question: &str, options: PromptOptions) -> ZoweResult<Option<String>> {
        let question = prompt_text(question).to_string();

        // Use spawn_blocking to avoid blocking the async runtime
        let read = tokio::task::spawn_blocking(move || {
            let theme = ColorfulTheme::default();
            if options.hide_text {
                Password::with_theme(&theme)
                    .with_prompt(question)
                    .allow_empty_password(true)
                    .interact()
            } else {
                Input::<String>::with_theme(&theme)
                    .with_prompt(question)
                    .allow_empty(true)
                    .interact_text()
            }
        });

        match tokio::time::timeout(options.timeout, read).await {
            Err(_) => Ok(None),
            Ok(joined) => {
                let answer = joined?.map_err(|e| ZoweError::prompt(format!("Prompt failed: {}", e)))?;
                Ok(Some(answer))
            }
        }
    }
}

/// The theme draws its own separator after the prompt
fn prompt_text(question: &str) -> &str {
    question.trim_end().trim_end_matches(':')
}
