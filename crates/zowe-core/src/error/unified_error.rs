//! UnifiedError trait implementation for ZoweError

use super::types::{UnifiedError, ZoweError};

impl UnifiedError for ZoweError {
    fn error_code(&self) -> &str {
        match self {
            Self::Config { .. } => "ZOWE_CONFIG",
            Self::InvalidInput { .. } => "ZOWE_INVALID_INPUT",
            Self::Timeout { .. } => "ZOWE_TIMEOUT",
            Self::Prompt { .. } => "ZOWE_PROMPT",
            Self::Proxy { .. } => "ZOWE_PROXY",
            Self::Io { .. } => "ZOWE_IO",
            Self::Cancelled => "ZOWE_CANCELLED",
            Self::Other { .. } => "ZOWE_OTHER",
        }
    }

    fn message(&self) -> &str {
        match self {
            Self::Config { message, .. } => message,
            Self::InvalidInput { message, .. } => message,
            Self::Timeout { message, .. } => message,
            Self::Prompt { message, .. } => message,
            Self::Proxy { message, .. } => message,
            Self::Io { message, .. } => message,
            Self::Cancelled => "Operation was cancelled",
            Self::Other { message, .. } => message,
        }
    }

    fn context(&self) -> Option<&str> {
        match self {
            Self::Config { context, .. } => context.as_deref(),
            Self::InvalidInput { context, .. } => context.as_deref(),
            Self::Timeout { context, .. } => context.as_deref(),
            Self::Prompt { context, .. } => context.as_deref(),
            Self::Proxy { context, .. } => context.as_deref(),
            Self::Io { context, .. } => context.as_deref(),
            Self::Cancelled => None,
            Self::Other { context, .. } => context.as_deref(),
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidInput { .. } | Self::Timeout { .. } | Self::Cancelled
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_names_property() {
        let err = ZoweError::timeout_waiting_for("host name");
        assert_eq!(err.to_string(), "Timed out waiting for host name.");
        assert_eq!(err.message(), "Timed out waiting for host name.");
        assert_eq!(err.error_code(), "ZOWE_TIMEOUT");
        assert!(err.is_user_error());
    }

    #[test]
    fn test_config_error_is_not_user_error() {
        let err = ZoweError::config_with_context("auth order missing", "put_top_auth_in_session");
        assert_eq!(err.error_code(), "ZOWE_CONFIG");
        assert_eq!(err.context(), Some("put_top_auth_in_session"));
        assert!(!err.is_user_error());
    }

    #[test]
    fn test_with_context_keeps_field() {
        let err = ZoweError::invalid_input_field("Specified port was not a number.", "port")
            .with_context("from command arguments");
        match &err {
            ZoweError::InvalidInput { field, context, .. } => {
                assert_eq!(field.as_deref(), Some("port"));
                assert_eq!(context.as_deref(), Some("from command arguments"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(err.message(), "Specified port was not a number.");
    }
}
