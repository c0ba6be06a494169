//! Credentials and configuration loading

mod schema;

pub use schema::Config;

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = ".cotoharc.json";
pub const CLIENT_ID_VAR: &str = "COTOHA_CLIENT_ID";
pub const CLIENT_SECRET_VAR: &str = "COTOHA_CLIENT_SECRET";

/// COTOHA client credentials
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

impl Credentials {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }

    /// Read `COTOHA_CLIENT_ID` and `COTOHA_CLIENT_SECRET`, empty when unset
    pub fn from_env() -> Self {
        Self::resolve(&Config::default(), |key| std::env::var(key).ok())
    }

    /// Environment values win over the config file; missing values become empty strings
    pub fn resolve<F>(config: &Config, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let pick = |var: &str, file: &Option<String>| {
            lookup(var)
                .or_else(|| file.clone())
                .unwrap_or_default()
        };
        Self {
            client_id: pick(CLIENT_ID_VAR, &config.client_id),
            client_secret: pick(CLIENT_SECRET_VAR, &config.client_secret),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

/// Find and load the config file. Searches current directory then parents.
pub fn load_config(work_dir: &Path, custom_path: Option<&Path>) -> Result<Config> {
    let path = if let Some(p) = custom_path {
        let path = if p.is_absolute() {
            p.to_path_buf()
        } else {
            work_dir.join(p)
        };
        if path.exists() {
            Some(path)
        } else {
            anyhow::bail!("Config file not found: {}", path.display());
        }
    } else {
        find_config_in_parents(work_dir)
    };

    match path {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config: {}", path.display()))?;
            serde_json::from_str(&content)
                .with_context(|| format!("Invalid JSON in config: {}", path.display()))
        }
        None => Ok(Config::default()),
    }
}

/// Search for .cotoharc.json in directory and its parents
fn find_config_in_parents(mut dir: &Path) -> Option<PathBuf> {
    loop {
        let candidate = dir.join(CONFIG_FILENAME);
        if candidate.exists() {
            return Some(candidate);
        }
        dir = dir.parent()?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_config(dir: &Path, name: &str, body: &str) -> PathBuf {
        let path = dir.join(name);
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "{}", body).unwrap();
        path
    }

    #[test]
    fn test_missing_env_gives_empty_credentials() {
        let creds = Credentials::resolve(&Config::default(), |_| None);
        assert_eq!(creds, Credentials::new("", ""));
    }

    #[test]
    fn test_env_overrides_file() {
        let config = Config {
            client_id: Some("file-id".to_string()),
            client_secret: Some("file-secret".to_string()),
            ..Config::default()
        };
        let env: HashMap<&str, &str> = [(CLIENT_ID_VAR, "env-id")].into_iter().collect();
        let creds = Credentials::resolve(&config, |k| env.get(k).map(|v| v.to_string()));
        assert_eq!(creds.client_id, "env-id");
        assert_eq!(creds.client_secret, "file-secret");
    }

    #[test]
    fn test_debug_redacts_secret() {
        let shown = format!("{:?}", Credentials::new("id-123", "hunter2"));
        assert!(shown.contains("id-123"));
        assert!(!shown.contains("hunter2"));
    }

    #[test]
    fn test_load_config_from_parent() {
        let dir = TempDir::new().unwrap();
        write_config(dir.path(), CONFIG_FILENAME, r#"{"clientId": "parent-id"}"#);
        let nested = dir.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();

        let config = load_config(&nested, None).unwrap();
        assert_eq!(config.client_id.as_deref(), Some("parent-id"));
    }

    #[test]
    fn test_load_custom_path() {
        let dir = TempDir::new().unwrap();
        write_config(dir.path(), "cotoha.json", r#"{"tokenUrl": "http://localhost/token"}"#);

        let config = load_config(dir.path(), Some(Path::new("cotoha.json"))).unwrap();
        assert_eq!(config.endpoints().token_url, "http://localhost/token");
    }

    #[test]
    fn test_custom_path_missing() {
        let dir = TempDir::new().unwrap();
        let err = load_config(dir.path(), Some(Path::new("nope.json"))).unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
    }

    #[test]
    fn test_invalid_json_is_reported() {
        let dir = TempDir::new().unwrap();
        write_config(dir.path(), CONFIG_FILENAME, "{ not json");
        let err = load_config(dir.path(), None).unwrap_err();
        assert!(err.to_string().contains("Invalid JSON in config"));
    }
}
