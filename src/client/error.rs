//! Errors for the two call tiers: token acquisition and prediction

use reqwest::StatusCode;
use thiserror::Error;

/// Failure while exchanging credentials for an access token.
///
/// `EmotionScorer` construction logs these and carries on inactive.
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("token request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("token endpoint returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("malformed token response: {0}")]
    MalformedResponse(String),
}

/// Failure of a single `predict` call. Never swallowed.
#[derive(Debug, Error)]
pub enum PredictError {
    /// The scorer never obtained an access token
    #[error("scorer is inactive: no access token was acquired")]
    Inactive,

    #[error("sentiment request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("sentiment endpoint returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("malformed sentiment response: {0}")]
    MalformedResponse(String),
}

/// Coarse classification of a prediction failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Transport,
    MalformedResponse,
}

impl PredictError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PredictError::MalformedResponse(_) => ErrorKind::MalformedResponse,
            PredictError::Inactive | PredictError::Transport(_) | PredictError::Status { .. } => {
                ErrorKind::Transport
            }
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::Transport => write!(f, "transport-error"),
            ErrorKind::MalformedResponse => write!(f, "malformed-response"),
        }
    }
}

/// Non-JSON failure of one POST, shared by both call tiers
#[derive(Debug)]
pub(crate) enum HttpFailure {
    Transport(reqwest::Error),
    Status { status: StatusCode, body: String },
}

impl From<reqwest::Error> for HttpFailure {
    fn from(e: reqwest::Error) -> Self {
        HttpFailure::Transport(e)
    }
}

impl From<HttpFailure> for TokenError {
    fn from(f: HttpFailure) -> Self {
        match f {
            HttpFailure::Transport(e) => TokenError::Transport(e),
            HttpFailure::Status { status, body } => TokenError::Status { status, body },
        }
    }
}

impl From<HttpFailure> for PredictError {
    fn from(f: HttpFailure) -> Self {
        match f {
            HttpFailure::Transport(e) => PredictError::Transport(e),
            HttpFailure::Status { status, body } => PredictError::Status { status, body },
        }
    }
}
