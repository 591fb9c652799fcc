//! Error taxonomy for a single client invocation.

use thiserror::Error;

use crate::constants;

#[derive(Error, Debug)]
pub enum ClientError {
    /// A required flag is missing or out of range. Raised before any network call.
    #[error("{0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to encode request: {0}")]
    Encode(String),

    #[error("{msg}: {source}", msg = constants::ERR_HTTP_CLIENT_BUILD_FAILED)]
    ClientBuild {
        #[source]
        source: reqwest::Error,
    },

    #[error("{msg} ({url}): {source}", msg = constants::ERR_NETWORK_REQUEST_FAILED)]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{msg}: {source}", msg = constants::ERR_READ_CONTENT_FAILED)]
    ReadBody {
        #[source]
        source: reqwest::Error,
    },

    /// The body matched neither the expected success shape nor a fault.
    #[error("Could not decode response: {reason}\nRaw body:\n{body}")]
    Decode { reason: String, body: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ClientError {
    pub(crate) fn decode(reason: impl Into<String>, body: &[u8]) -> Self {
        Self::Decode {
            reason: reason.into(),
            body: String::from_utf8_lossy(body).into_owned(),
        }
    }

    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Validation(_) => constants::EXIT_VALIDATION,
            Self::ClientBuild { .. } | Self::Transport { .. } | Self::ReadBody { .. } => {
                constants::EXIT_TRANSPORT
            }
            Self::Encode(_) | Self::Decode { .. } => constants::EXIT_DECODE,
            Self::Config(_) | Self::Io(_) => constants::EXIT_CONFIG,
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
