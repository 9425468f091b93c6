/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

use crate::application::auth::Session;
use crate::application::config::Config;
use crate::constants::{
    ACCEPT_MEDIA_TYPES, ATTACHMENT_FIELD, DEFAULT_TIMEOUT_SECS, NOTIFY_EMAIL_FIELD, USER_AGENT,
};
use crate::error::AppError;
use crate::model::requests::UploadRequest;
use crate::model::responses::{UploadResponse, reason_phrase};
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder, Response, Url};
use serde::Serialize;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, error, info, warn};

/// Normalizes a base URL so relative endpoint paths resolve beneath it
///
/// Surrounding whitespace and any trailing `/` or `\` are removed, then a single
/// `/` is appended.
pub fn normalize_base_url(raw: &str) -> Result<Url, AppError> {
    let trimmed = raw.trim().trim_end_matches(['/', '\\']);
    if trimmed.is_empty() {
        return Err(AppError::InvalidInput("base url is empty".to_string()));
    }

    Url::parse(&format!("{trimmed}/"))
        .map_err(|e| AppError::InvalidInput(format!("invalid base url {trimmed}: {e}")))
}

/// HTTP client bound to the TDX Web API base address
///
/// Every request carries the JSON `Accept` header. Once a session is stored,
/// requests to the base origin also carry `Authorization: Bearer <token>`.
pub struct HttpClient {
    http_client: Client,
    base_url: Url,
    timeout: Duration,
    session: RwLock<Option<Session>>,
}

impl HttpClient {
    /// Creates a new client from the REST API section of `config`
    ///
    /// # Errors
    /// * `AppError::InvalidInput` - if the base URL is empty or malformed
    /// * `AppError::Network` - if the underlying reqwest client cannot be built
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let base_url = normalize_base_url(&config.rest_api.base_url)?;

        let timeout_secs = match config.rest_api.timeout {
            0 => DEFAULT_TIMEOUT_SECS,
            secs => secs,
        };
        let timeout = Duration::from_secs(timeout_secs);

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_MEDIA_TYPES));

        let http_client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .default_headers(headers)
            .build()?;

        debug!("HTTP client ready for {} (timeout {:?})", base_url, timeout);

        Ok(Self {
            http_client,
            base_url,
            timeout,
            session: RwLock::new(None),
        })
    }

    /// Normalized base address, always ending in `/`
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Request timeout applied to every call
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Resolves an endpoint path against the base address
    ///
    /// Absolute `http(s)://` URLs are used as they are; the token is only
    /// attached to them when they share the base origin.
    pub fn endpoint_url(&self, path: &str) -> Result<Url, AppError> {
        let path = path.trim();
        let resolved = if path.starts_with("http://") || path.starts_with("https://") {
            Url::parse(path)
        } else {
            self.base_url.join(path.trim_start_matches('/'))
        };
        resolved.map_err(|e| AppError::InvalidInput(format!("invalid endpoint {path}: {e}")))
    }

    /// Stores the session whose token is attached to subsequent requests
    pub async fn set_session(&self, session: Session) {
        let mut current = self.session.write().await;
        *current = Some(session);
    }

    /// Drops the stored session
    pub async fn clear_session(&self) {
        let mut current = self.session.write().await;
        *current = None;
    }

    /// Returns a copy of the stored session, if any
    pub async fn session(&self) -> Option<Session> {
        self.session.read().await.clone()
    }

    /// `true` once a bearer token is stored
    pub async fn is_authenticated(&self) -> bool {
        self.session.read().await.is_some()
    }

    async fn authorize(&self, request: RequestBuilder, url: &Url) -> RequestBuilder {
        let session = self.session.read().await;
        let Some(session) = session.as_ref() else {
            return request;
        };

        if url.origin() != self.base_url.origin() {
            warn!(
                "Not sending the bearer token to {}, it is outside {}",
                url.origin().ascii_serialization(),
                self.base_url
            );
            return request;
        }

        request.header(AUTHORIZATION, session.authorization_header())
    }

    fn send_error(&self, url: &Url, err: reqwest::Error) -> AppError {
        if err.is_timeout() {
            error!("Request to {} timed out after {:?}", url, self.timeout());
        } else {
            error!("Request to {} failed: {}", url, err);
        }
        AppError::Network(err)
    }

    /// Posts `body` as JSON and returns the raw response, whatever its status
    pub async fn post_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Response, AppError> {
        let url = self.endpoint_url(path)?;
        debug!("POST {}", url);

        let request = self
            .authorize(self.http_client.post(url.clone()).json(body), &url)
            .await;
        let response = request.send().await.map_err(|e| self.send_error(&url, e))?;

        debug!("Response status: {}", response.status());
        Ok(response)
    }

    /// Posts a multipart form and returns the raw response, whatever its status
    pub async fn post_multipart(&self, path: &str, form: Form) -> Result<Response, AppError> {
        let url = self.endpoint_url(path)?;
        debug!("POST (multipart) {}", url);

        let request = self
            .authorize(self.http_client.post(url.clone()).multipart(form), &url)
            .await;
        let response = request.send().await.map_err(|e| self.send_error(&url, e))?;

        debug!("Response status: {}", response.status());
        Ok(response)
    }

    /// Uploads a file to any multipart upload endpoint of the API
    ///
    /// The file goes in the `attachment` part. A non-blank notify address is
    /// added as a `notifyEmail` text part. A non-success status is logged and
    /// still returned as `Ok`, so the caller can decide what to do with it.
    ///
    /// # Errors
    /// * `AppError::InvalidInput` - if the file name is empty
    /// * `AppError::Network` - on transport failures
    pub async fn upload(
        &self,
        path: &str,
        upload: UploadRequest,
    ) -> Result<UploadResponse, AppError> {
        let UploadRequest {
            file_name,
            content,
            notify_email,
        } = upload;

        if file_name.trim().is_empty() {
            return Err(AppError::InvalidInput("upload file name is empty".to_string()));
        }

        let part = Part::bytes(content).file_name(file_name.clone());
        let mut form = Form::new().part(ATTACHMENT_FIELD, part);

        if let Some(email) = notify_email.as_deref().map(str::trim).filter(|e| !e.is_empty()) {
            info!("Import job will be set to notify {} upon completion.", email);
            form = form.text(NOTIFY_EMAIL_FIELD, email.to_string());
        }

        info!("Submitting import file {} to the TeamDynamix Web API.", file_name);
        let response = self.post_multipart(path, form).await?;

        let status = response.status();
        let reason = reason_phrase(&response);
        let body = response.text().await?;
        let upload_response = UploadResponse::from_parts(status, reason, body);

        if !upload_response.is_success() {
            error!("Upload of {} to {} failed.", file_name, path);
            error!("Upload: Status Code: {}", status.as_u16());
            error!("Upload: Error Phrase: {}", upload_response.reason);
            error!("Upload: Error message: {}", upload_response.body);
        }

        Ok(upload_response)
    }
}
