// src/error.rs
use reqwest::{Method, StatusCode};
use thiserror::Error;

/// Everything that can go wrong while talking to the PowerDNS API.
#[derive(Debug, Error)]
pub enum PdnsError {
    /// The request never completed (connection refused, DNS failure, timeout, ...).
    #[error("HTTP call to {method} '{url}' failed: {source}")]
    Transport {
        method: Method,
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered, but not with a status the operation accepts.
    #[error("HTTP call to {method} '{url}' returned {status}\n\tPowerDNS response: {body}")]
    UnexpectedStatus {
        method: Method,
        url: String,
        status: StatusCode,
        body: String,
    },

    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("failed to decode zone returned by '{url}': {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl PdnsError {
    pub fn unexpected_status(
        method: Method,
        url: impl Into<String>,
        status: StatusCode,
        body: impl Into<String>,
    ) -> Self {
        PdnsError::UnexpectedStatus {
            method,
            url: url.into(),
            status,
            body: body.into(),
        }
    }

    /// HTTP status received from the server, if the call got that far.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            PdnsError::UnexpectedStatus { status, .. } => Some(*status),
            PdnsError::Transport { source, .. } => source.status(),
            PdnsError::Encode(_) | PdnsError::Decode { .. } => None,
        }
    }
}
