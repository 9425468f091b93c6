use crate::constants::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use crate::utils::config::{get_env_non_blank, get_env_or_default};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, error, warn};

/// Which login endpoint to authenticate against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthMode {
    /// `api/auth/loginadmin` with BEID and web services key
    #[default]
    Admin,
    /// `api/auth/login` with a named user's username and password
    User,
}

impl fmt::Display for AuthMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthMode::Admin => write!(f, "admin"),
            AuthMode::User => write!(f, "user"),
        }
    }
}

impl FromStr for AuthMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "admin" => Ok(AuthMode::Admin),
            "user" => Ok(AuthMode::User),
            other => Err(format!("unknown auth mode: {other}")),
        }
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default)]
/// Credentials for both login flavours
///
/// Secrets are never serialized, so printing a config does not leak them.
pub struct Credentials {
    /// Business entity id from TDAdmin
    pub beid: String,
    /// Web services key from TDAdmin
    #[serde(skip_serializing, default)]
    pub web_services_key: String,
    /// Named user account
    pub username: String,
    /// Password of the named user account
    #[serde(skip_serializing, default)]
    pub password: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL of the web API, in the form `<your TeamDynamix domain>/TDWebApi/`
    pub base_url: String,
    /// Timeout in seconds for REST API requests
    pub timeout: u64,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration for the TDX client
pub struct Config {
    /// Authentication credentials
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Login endpoint used by `login()`
    pub auth_mode: AuthMode,
    /// Address notified when an import job completes
    pub notify_email: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a new configuration from the environment and an optional `.env` file
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let auth_mode = get_env_or_default("TDX_AUTH_MODE", AuthMode::Admin);
        let credentials = Credentials {
            beid: get_env_or_default("TDX_BEID", String::new()),
            web_services_key: get_env_or_default("TDX_WEB_SERVICES_KEY", String::new()),
            username: get_env_or_default("TDX_USERNAME", String::new()),
            password: get_env_or_default("TDX_PASSWORD", String::new()),
        };

        match auth_mode {
            AuthMode::Admin => {
                if credentials.beid.is_empty() {
                    error!("TDX_BEID not found in environment variables or .env file");
                }
                if credentials.web_services_key.is_empty() {
                    error!("TDX_WEB_SERVICES_KEY not found in environment variables or .env file");
                }
            }
            AuthMode::User => {
                if credentials.username.is_empty() {
                    error!("TDX_USERNAME not found in environment variables or .env file");
                }
                if credentials.password.is_empty() {
                    error!("TDX_PASSWORD not found in environment variables or .env file");
                }
            }
        }

        let base_url = get_env_or_default("TDX_BASE_URL", String::from(DEFAULT_BASE_URL));
        if base_url == DEFAULT_BASE_URL {
            warn!("TDX_BASE_URL not set, using {}", DEFAULT_BASE_URL);
        }

        Config {
            credentials,
            rest_api: RestApiConfig {
                base_url,
                timeout: get_env_or_default("TDX_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS),
            },
            auth_mode,
            notify_email: get_env_non_blank("TDX_NOTIFY_EMAIL"),
        }
    }

    /// Builds a configuration for an explicit base URL, without touching the environment
    ///
    /// Credentials are left empty and the timeout is the 2 minute default.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Config {
            credentials: Credentials::default(),
            rest_api: RestApiConfig {
                base_url: base_url.into(),
                timeout: DEFAULT_TIMEOUT_SECS,
            },
            auth_mode: AuthMode::Admin,
            notify_email: None,
        }
    }
}
