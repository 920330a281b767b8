//! From trait implementations for ZoweError conversions

use super::types::ZoweError;

impl From<anyhow::Error> for ZoweError {
    fn from(error: anyhow::Error) -> Self {
        Self::other(error.to_string())
    }
}

impl From<std::io::Error> for ZoweError {
    fn from(error: std::io::Error) -> Self {
        Self::io(error.to_string())
    }
}

impl From<serde_json::Error> for ZoweError {
    fn from(error: serde_json::Error) -> Self {
        Self::other(format!("JSON error: {}", error))
    }
}

impl From<reqwest::Error> for ZoweError {
    fn from(error: reqwest::Error) -> Self {
        let url = error.url().map(|u| u.to_string());
        Self::Proxy {
            message: error.to_string(),
            url,
            context: None,
        }
    }
}

impl From<tokio::task::JoinError> for ZoweError {
    fn from(error: tokio::task::JoinError) -> Self {
        if error.is_cancelled() {
            Self::Cancelled
        } else {
            Self::prompt(format!("prompt task failed: {}", error))
        }
    }
}
