//! Wire types for the COTOHA token and sentiment endpoints

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TokenRequest<'a> {
    pub grant_type: &'a str,
    pub client_id: &'a str,
    pub client_secret: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TokenResponse {
    pub access_token: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct SentimentRequest<'a> {
    pub sentence: &'a str,
}

/// Envelope of the sentiment endpoint's response
#[derive(Debug, Clone, Deserialize)]
pub struct SentimentResponse {
    pub result: SentimentResult,
}

/// Raw sentiment analysis of one sentence
#[derive(Debug, Clone, Deserialize)]
pub struct SentimentResult {
    /// Coarse label: `Positive`, `Negative` or `Neutral`. Only consulted
    /// when `emotional_phrase` is empty.
    #[serde(default)]
    pub sentiment: Option<String>,
    /// Confidence in `sentiment`, in `[0, 1]`
    pub score: f64,
    pub emotional_phrase: Vec<EmotionalPhrase>,
}

/// A phrase the API tagged with one or more emotion codes
#[derive(Debug, Clone, Deserialize)]
pub struct EmotionalPhrase {
    /// Surface form of the phrase
    #[serde(default)]
    pub form: String,
    /// Comma-separated emotion codes, e.g. `"P,PN"`
    pub emotion: String,
}
