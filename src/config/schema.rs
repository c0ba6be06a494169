//! Config schema and deserialization

use crate::client::Endpoints;
use serde::Deserialize;

/// Root config structure for .cotoharc.json
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// COTOHA client id. `COTOHA_CLIENT_ID` takes precedence when set.
    #[serde(default)]
    pub client_id: Option<String>,

    /// COTOHA client secret. `COTOHA_CLIENT_SECRET` takes precedence when set.
    #[serde(default)]
    pub client_secret: Option<String>,

    /// Developer API root (default: https://api.ce-cotoha.com/api/dev/)
    #[serde(default)]
    pub api_base_url: Option<String>,

    /// OAuth token endpoint (default: https://api.ce-cotoha.com/v1/oauth/accesstokens)
    #[serde(default)]
    pub token_url: Option<String>,
}

impl Config {
    /// Endpoints with unset fields falling back to the public COTOHA URLs
    pub fn endpoints(&self) -> Endpoints {
        let defaults = Endpoints::default();
        Endpoints {
            token_url: self.token_url.clone().unwrap_or(defaults.token_url),
            api_base_url: self.api_base_url.clone().unwrap_or(defaults.api_base_url),
        }
    }
}
