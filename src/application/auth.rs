/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Authentication against the TDX Web API
//!
//! Two login flavours are supported:
//! - Admin login with the web services BEID and key from TDAdmin
//! - Named user login with username and password
//!
//! Both return a bearer token as the plain response body. The token is stored
//! on the shared [`HttpClient`] and attached to every later request.

use crate::application::config::{AuthMode, Config};
use crate::constants::{LOGIN_ADMIN_PATH, LOGIN_USER_PATH};
use crate::error::AppError;
use crate::model::auth::{AdminLoginRequest, UserLoginRequest};
use crate::model::http::HttpClient;
use crate::model::responses::reason_phrase;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// An authenticated session
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    token: String,
    /// Login endpoint the token was obtained from
    pub mode: AuthMode,
    /// When the token was obtained
    pub authenticated_at: DateTime<Utc>,
}

impl Session {
    /// Creates a session for a freshly issued token
    pub fn new(token: impl Into<String>, mode: AuthMode) -> Self {
        Self {
            token: token.into(),
            mode,
            authenticated_at: Utc::now(),
        }
    }

    /// The bearer token
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Value of the `Authorization` header carried by authenticated requests
    #[must_use]
    pub fn authorization_header(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("token", &"***")
            .field("mode", &self.mode)
            .field("authenticated_at", &self.authenticated_at)
            .finish()
    }
}

/// Pulls the token out of a login response body
///
/// The API answers with the bare token; a JSON string literal is unwrapped too.
/// Returns `None` for blank bodies.
pub fn extract_token(body: &str) -> Option<String> {
    let trimmed = body.trim();
    let token = if trimmed.starts_with('"') {
        serde_json::from_str::<String>(trimmed).unwrap_or_else(|_| trimmed.to_string())
    } else {
        trimmed.to_string()
    };

    let token = token.trim();
    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}

/// Authentication manager for the TDX Web API
pub struct Auth {
    config: Arc<Config>,
    http: Arc<HttpClient>,
}

impl Auth {
    /// Creates a new Auth instance over a shared HTTP client
    pub fn new(config: Arc<Config>, http: Arc<HttpClient>) -> Self {
        Self { config, http }
    }

    /// Logs in with the flavour and credentials from the configuration
    pub async fn login(&self) -> Result<Session, AppError> {
        let credentials = &self.config.credentials;
        info!("Logging in as {}", self.config.auth_mode);

        match self.config.auth_mode {
            AuthMode::Admin => {
                self.login_admin(&credentials.beid, &credentials.web_services_key)
                    .await
            }
            AuthMode::User => {
                self.login_user(&credentials.username, &credentials.password)
                    .await
            }
        }
    }

    /// Calls `api/auth/loginadmin` with the web services BEID and key
    ///
    /// # Errors
    /// * `AppError::AuthenticationFailed` - non-success status, details logged
    /// * `AppError::MissingToken` - success status but an empty body
    /// * `AppError::Network` - transport failure
    pub async fn login_admin(
        &self,
        beid: &str,
        web_services_key: &str,
    ) -> Result<Session, AppError> {
        let body = AdminLoginRequest::new(beid, web_services_key);
        self.authenticate(LOGIN_ADMIN_PATH, &body, AuthMode::Admin)
            .await
    }

    /// Calls `api/auth/login` with a named user's credentials
    ///
    /// Errors are the same as for [`Auth::login_admin`].
    pub async fn login_user(&self, username: &str, password: &str) -> Result<Session, AppError> {
        let body = UserLoginRequest::new(username, password);
        self.authenticate(LOGIN_USER_PATH, &body, AuthMode::User)
            .await
    }

    async fn authenticate<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        mode: AuthMode,
    ) -> Result<Session, AppError> {
        debug!("Sending {} login request to: {}", mode, path);
        let response = self.http.post_json(path, body).await?;

        let status = response.status();
        if !status.is_success() {
            let reason = reason_phrase(&response);
            let body = response.text().await.unwrap_or_else(|e| {
                warn!("Authenticate: failed to read error response body: {}", e);
                String::new()
            });

            error!("Error authenticating against the TeamDynamix Web API. See error details below.");
            error!("Authenticate: Status Code: {}", status.as_u16());
            error!("Authenticate: Error Phrase: {}", reason);
            error!("Authenticate: Error message: {}", body);

            return Err(AppError::AuthenticationFailed {
                status,
                reason,
                body,
            });
        }

        info!("Successfully authenticated against the TeamDynamix Web API.");
        let text = response.text().await?;

        let Some(token) = extract_token(&text) else {
            error!(
                "Authentication to the TeamDynamix Web API succeeded but a token was unable to be obtained. \
                 The client cannot proceed without an authorization token."
            );
            return Err(AppError::MissingToken);
        };

        let session = Session::new(token, mode);
        self.http.set_session(session.clone()).await;

        debug!("Bearer token stored at {}", session.authenticated_at);
        Ok(session)
    }

    /// Returns the stored session, if any
    pub async fn get_session(&self) -> Option<Session> {
        self.http.session().await
    }

    /// Forgets the stored token; no request is made
    pub async fn logout(&self) {
        info!("Logging out");
        self.http.clear_session().await;
    }
}
