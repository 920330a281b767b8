//! Constructor methods for ZoweError

use super::types::ZoweError;

impl ZoweError {
    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            context: None,
        }
    }

    /// Create a configuration error with context
    pub fn config_with_context(message: impl Into<String>, context: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            context: Some(context.into()),
        }
    }

    /// Create a new invalid input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
            field: None,
            context: None,
        }
    }

    /// Create an invalid input error with field
    pub fn invalid_input_field(message: impl Into<String>, field: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
            field: Some(field.into()),
            context: None,
        }
    }

    /// Create a timeout error for a property that never received an answer
    pub fn timeout_waiting_for(property: impl Into<String>) -> Self {
        let property = property.into();
        Self::Timeout {
            message: format!("Timed out waiting for {}.", property),
            property,
            context: None,
        }
    }

    /// Create a new prompt error
    pub fn prompt(message: impl Into<String>) -> Self {
        Self::Prompt {
            message: message.into(),
            context: None,
        }
    }

    /// Create a proxy error for a specific proxy URL
    pub fn proxy(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::Proxy {
            message: message.into(),
            url: Some(url.into()),
            context: None,
        }
    }

    /// Create a new IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
            context: None,
        }
    }

    /// Create a generic error
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
            context: None,
        }
    }

    /// Attach context to an existing error
    pub fn with_context(self, ctx: impl Into<String>) -> Self {
        let ctx = Some(ctx.into());
        match self {
            Self::Config { message, .. } => Self::Config {
                message,
                context: ctx,
            },
            Self::InvalidInput { message, field, .. } => Self::InvalidInput {
                message,
                field,
                context: ctx,
            },
            Self::Timeout {
                message, property, ..
            } => Self::Timeout {
                message,
                property,
                context: ctx,
            },
            Self::Prompt { message, .. } => Self::Prompt {
                message,
                context: ctx,
            },
            Self::Proxy { message, url, .. } => Self::Proxy {
                message,
                url,
                context: ctx,
            },
            Self::Io { message, .. } => Self::Io {
                message,
                context: ctx,
            },
            Self::Cancelled => Self::Cancelled,
            Self::Other { message, .. } => Self::Other {
                message,
                context: ctx,
            },
        }
    }
}
