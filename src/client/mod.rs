//! COTOHA API client: token exchange and sentiment prediction

mod error;
mod response;

pub use error::{ErrorKind, PredictError, TokenError};
pub use response::{EmotionalPhrase, SentimentResponse, SentimentResult};

use crate::config::Credentials;
use crate::scoring::ScoreNormalizer;
use crate::EmotionalScore;
use error::HttpFailure;
use log::{debug, warn};
use reqwest::blocking::Client;
use response::{SentimentRequest, TokenRequest, TokenResponse};
use serde::Serialize;

pub const DEFAULT_TOKEN_URL: &str = "https://api.ce-cotoha.com/v1/oauth/accesstokens";
pub const DEFAULT_API_BASE_URL: &str = "https://api.ce-cotoha.com/api/dev/";

const GRANT_TYPE: &str = "client_credentials";
const JSON_CONTENT_TYPE: &str = "application/json;charset=UTF-8";
const SENTIMENT_PATH: &str = "nlp/v1/sentiment";

/// Where the token and sentiment endpoints live
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// Full URL of the OAuth token endpoint
    pub token_url: String,
    /// Developer API root; the sentiment path is appended to it
    pub api_base_url: String,
}

impl Endpoints {
    /// Endpoints served from one host, e.g. `http://127.0.0.1:8080`
    pub fn for_host(host: &str) -> Self {
        let host = host.trim_end_matches('/');
        Self {
            token_url: format!("{}/v1/oauth/accesstokens", host),
            api_base_url: format!("{}/api/dev/", host),
        }
    }

    pub fn sentiment_url(&self) -> String {
        format!("{}/{}", self.api_base_url.trim_end_matches('/'), SENTIMENT_PATH)
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            token_url: DEFAULT_TOKEN_URL.to_string(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

/// Scores text through the COTOHA sentiment API.
///
/// The access token is fetched once, when the scorer is built. If that
/// fails the scorer is still returned, but [`is_active`](Self::is_active)
/// reports `false` and every [`predict`](Self::predict) call fails.
pub struct EmotionScorer {
    http: Client,
    endpoints: Endpoints,
    access_token: Option<String>,
}

impl EmotionScorer {
    /// Build a scorer against the public COTOHA endpoints
    pub fn new(credentials: &Credentials) -> Self {
        Self::with_endpoints(credentials, Endpoints::default())
    }

    /// Build a scorer against custom endpoints. Never fails.
    pub fn with_endpoints(credentials: &Credentials, endpoints: Endpoints) -> Self {
        let http = Client::new();
        let access_token = match acquire_access_token(&http, &endpoints.token_url, credentials) {
            Ok(token) => Some(token),
            Err(e) => {
                warn!("COTOHA access token unavailable, scorer inactive: {}", e);
                None
            }
        };

        Self {
            http,
            endpoints,
            access_token,
        }
    }

    /// Whether token acquisition succeeded at construction
    pub fn is_active(&self) -> bool {
        self.access_token.is_some()
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Analyze `input_message` and return its normalized emotional score
    pub fn predict(&self, input_message: &str) -> Result<EmotionalScore, PredictError> {
        let token = self.access_token.as_deref().ok_or(PredictError::Inactive)?;

        let body = post_json(
            &self.http,
            &self.endpoints.sentiment_url(),
            Some(token),
            &SentimentRequest {
                sentence: input_message,
            },
        )?;

        let response: SentimentResponse = serde_json::from_str(&body)
            .map_err(|e| PredictError::MalformedResponse(e.to_string()))?;
        let result = &response.result;

        let label = ScoreNormalizer::emotional_sentiment(result).ok_or_else(|| {
            PredictError::MalformedResponse(
                "missing field `sentiment` and no emotional phrases".to_string(),
            )
        })?;
        let score = ScoreNormalizer::normalize(&label, result.score);
        debug!(
            "sentiment={} phrases={} label={} raw={} score={}",
            result.sentiment.as_deref().unwrap_or("-"),
            result.emotional_phrase.len(),
            label,
            result.score,
            score
        );

        Ok(EmotionalScore::new(input_message, score))
    }
}

/// Exchange client credentials for a bearer token at `token_url`
pub fn acquire_access_token(
    http: &Client,
    token_url: &str,
    credentials: &Credentials,
) -> Result<String, TokenError> {
    let body = post_json(
        http,
        token_url,
        None,
        &TokenRequest {
            grant_type: GRANT_TYPE,
            client_id: &credentials.client_id,
            client_secret: &credentials.client_secret,
        },
    )?;

    let response: TokenResponse =
        serde_json::from_str(&body).map_err(|e| TokenError::MalformedResponse(e.to_string()))?;
    debug!("acquired COTOHA access token from {}", token_url);
    Ok(response.access_token)
}

/// POST a JSON body and return the raw response text of a 2xx reply
fn post_json<B: Serialize>(
    http: &Client,
    url: &str,
    bearer: Option<&str>,
    body: &B,
) -> Result<String, HttpFailure> {
    let mut request = http
        .post(url)
        .header(reqwest::header::CONTENT_TYPE, JSON_CONTENT_TYPE);
    if let Some(token) = bearer {
        request = request.bearer_auth(token);
    }

    let response = request.json(body).send()?;
    let status = response.status();
    let text = response.text()?;

    if !status.is_success() {
        return Err(HttpFailure::Status { status, body: text });
    }
    Ok(text)
}
