//! Configuration management for cycleops

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::client::models::Credential;
use crate::error::{ConfigError, Result};

/// Default platform API base URL
pub const DEFAULT_API_URL: &str = "https://api.cyclerewards.app/api";

/// Default OIDC issuer base URL (token endpoint lives at `{issuer}/token`)
pub const DEFAULT_ISSUER_URL: &str = "https://api.cyclerewards.app/dex";

/// OAuth client registered for this CLI
pub const DEFAULT_CLIENT_ID: &str = "cycleops";

/// Client secret for the CLI's OAuth client. The token endpoint requires one
/// even for first-party clients, so a default ships with the binary; it can
/// be overridden in the config file for self-hosted deployments.
pub const DEFAULT_CLIENT_SECRET: &str = "pUxrsJcdgmNWVzKkQbTHhfLa";

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Platform API base URL
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// OIDC issuer base URL
    #[serde(default = "default_issuer_url")]
    pub issuer_url: String,

    /// OAuth client identifier used for token exchanges
    #[serde(default = "default_client_id")]
    pub client_id: String,

    /// OAuth client secret used for token exchanges
    #[serde(default = "default_client_secret")]
    pub client_secret: String,

    /// Stored credential pair (absent when signed out)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credential: Option<Credential>,

    /// User preferences
    #[serde(default)]
    pub preferences: Preferences,
}

/// User preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Preferences {
    /// Default output format
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// Default page size for list requests
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_issuer_url() -> String {
    DEFAULT_ISSUER_URL.to_string()
}

fn default_client_id() -> String {
    DEFAULT_CLIENT_ID.to_string()
}

fn default_client_secret() -> String {
    DEFAULT_CLIENT_SECRET.to_string()
}

fn default_limit() -> usize {
    50
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            format: None,
            limit: default_limit(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            issuer_url: default_issuer_url(),
            client_id: default_client_id(),
            client_secret: default_client_secret(),
            credential: None,
            preferences: Preferences::default(),
        }
    }
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".cycleops").join("config.yaml"))
    }

    /// Resolve the config path, honoring an explicit override.
    pub fn resolve_path(path: Option<&str>) -> Result<PathBuf> {
        match path {
            Some(p) => Ok(PathBuf::from(p)),
            None => Self::default_path(),
        }
    }

    /// Load configuration, falling back to defaults when no file exists yet.
    ///
    /// A missing file is not an error: `login` creates it, and every other
    /// command reports the signed-out state on its own terms.
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        Self::load_from(Self::resolve_path(path)?)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: PathBuf) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;

        Ok(config)
    }

    /// Save configuration, honoring an explicit path override.
    pub fn save_at(&self, path: Option<&str>) -> Result<()> {
        self.save_to(Self::resolve_path(path)?)
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: PathBuf) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents =
            serde_yaml::to_string(self).map_err(|e| ConfigError::SaveError(e.to_string()))?;

        std::fs::write(&path, contents)?;

        // Tokens live in this file; keep it private to the owner
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(&path)?.permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(&path, perms)?;
        }

        Ok(())
    }

    /// Require a stored credential, erroring with a pointer to `login`.
    pub fn require_credential(&self) -> Result<&Credential> {
        self.credential
            .as_ref()
            .ok_or_else(|| ConfigError::MissingCredentials.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.credential.is_none());
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.issuer_url, DEFAULT_ISSUER_URL);
        assert_eq!(config.client_id, DEFAULT_CLIENT_ID);
        assert_eq!(config.preferences.limit, 50);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.yaml");

        let config = Config::load_from(path).unwrap();
        assert!(config.credential.is_none());
        assert_eq!(config.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");

        let mut config = Config::default();
        config.api_url = "http://localhost:8080/api".to_string();
        config.credential = Some(Credential {
            access_token: "access-abc".to_string(),
            refresh_token: "refresh-def".to_string(),
        });
        config.save_to(path.clone()).unwrap();

        let loaded = Config::load_from(path).unwrap();
        assert_eq!(loaded.api_url, "http://localhost:8080/api");
        let cred = loaded.credential.unwrap();
        assert_eq!(cred.access_token, "access-abc");
        assert_eq!(cred.refresh_token, "refresh-def");
    }

    #[test]
    fn test_partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "api_url: http://localhost:9999/api\n").unwrap();

        let config = Config::load_from(path).unwrap();
        assert_eq!(config.api_url, "http://localhost:9999/api");
        assert_eq!(config.issuer_url, DEFAULT_ISSUER_URL);
        assert_eq!(config.client_id, DEFAULT_CLIENT_ID);
    }

    #[test]
    fn test_require_credential_errors_when_signed_out() {
        let config = Config::default();
        let err = config.require_credential().unwrap_err();
        assert!(err.to_string().contains("cycleops login"));
    }

    #[cfg(unix)]
    #[test]
    fn test_saved_config_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        Config::default().save_to(path.clone()).unwrap();

        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
