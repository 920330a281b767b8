//! Interactive and deferred connection properties
//!
//! [`ConnectionPropsResolver::add_props_or_prompt`] merges arguments into a
//! session, obtains whatever is still missing and finally selects the
//! session's authentication.

mod options;
mod prompt;
mod provider;
mod resolver;

pub use options::{AddConnPropsOptions, PromptProp, PropType, PropValidator, PropertyOverride};
pub use prompt::{PromptOptions, Prompter, TermPrompter};
pub use provider::{ProvidedValues, ValuesProvider};
pub use resolver::ConnectionPropsResolver;
