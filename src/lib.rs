//! cotoha-score: emotional score normalization over the COTOHA sentiment API
//!
//! This library authenticates against COTOHA, sends text to its sentiment
//! endpoint, and folds the returned label and confidence into a single
//! score in `[0.0, 1.0]`: negative text lands in `[0.0, 0.25]`, positive
//! text in `[0.75, 1.0]`.

pub mod client;
pub mod config;
pub mod reporter;
pub mod scoring;

pub use client::{EmotionScorer, Endpoints, ErrorKind, PredictError, TokenError};
pub use config::Credentials;
pub use scoring::ScoreNormalizer;

use serde::{Deserialize, Serialize};

/// The normalized result of one prediction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionalScore {
    /// The text that was analyzed, unmodified
    pub input_message: String,
    /// Normalized score in `[0.0, 1.0]`
    pub emotional_score: f64,
}

impl EmotionalScore {
    pub fn new(input_message: impl Into<String>, emotional_score: f64) -> Self {
        Self {
            input_message: input_message.into(),
            emotional_score,
        }
    }
}

/// Sentiment label used to pick a normalization band
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
    /// A label or emotion code the API returned that has no known mapping.
    /// Scored in the negative band.
    Other(String),
}

impl Sentiment {
    /// Parse a top-level sentiment label (`Positive`, `Neutral`, `Negative`)
    pub fn from_label(label: &str) -> Self {
        match label {
            "Positive" => Sentiment::Positive,
            "Neutral" => Sentiment::Neutral,
            "Negative" => Sentiment::Negative,
            other => Sentiment::Other(other.to_string()),
        }
    }

    /// Map an emotional-phrase code (`P`, `PN`, `N`) to its label.
    /// Unknown codes are kept verbatim.
    pub fn from_code(code: &str) -> Self {
        match code {
            "P" => Sentiment::Positive,
            "PN" => Sentiment::Neutral,
            "N" => Sentiment::Negative,
            other => Sentiment::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Neutral => "Neutral",
            Sentiment::Negative => "Negative",
            Sentiment::Other(s) => s,
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
