/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::application::auth::{Auth, Session};
use crate::application::config::Config;
use crate::application::interfaces::auth::AuthService;
use crate::application::interfaces::import::ImportService;
use crate::constants::PEOPLE_IMPORT_PATH;
use crate::error::AppError;
use crate::model::http::HttpClient;
use crate::model::requests::UploadRequest;
use crate::model::responses::UploadResponse;
use async_trait::async_trait;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

/// High level client for the TDX Web API
///
/// Creating a client does not log in. Call [`AuthService::login`] (or one of
/// the explicit flavours) first; the token is then sent with every upload.
pub struct Client {
    config: Arc<Config>,
    http_client: Arc<HttpClient>,
    auth: Auth,
}

impl Client {
    /// Creates a client for the configured base URL
    ///
    /// # Errors
    /// * `AppError::InvalidInput` - if the base URL is empty or malformed
    pub fn new(config: Config) -> Result<Self, AppError> {
        let config = Arc::new(config);
        let http_client = Arc::new(HttpClient::new(&config)?);
        let auth = Auth::new(config.clone(), http_client.clone());

        Ok(Self {
            config,
            http_client,
            auth,
        })
    }

    /// Configuration the client was built from
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Underlying HTTP client, shared with the auth manager
    pub fn http_client(&self) -> Arc<HttpClient> {
        self.http_client.clone()
    }

    /// Returns the stored session, if any
    pub async fn session(&self) -> Option<Session> {
        self.auth.get_session().await
    }
}

#[async_trait]
impl AuthService for Client {
    async fn login(&self) -> Result<Session, AppError> {
        self.auth.login().await
    }

    async fn login_admin(&self, beid: &str, web_services_key: &str) -> Result<Session, AppError> {
        self.auth.login_admin(beid, web_services_key).await
    }

    async fn login_user(&self, username: &str, password: &str) -> Result<Session, AppError> {
        self.auth.login_user(username, password).await
    }

    async fn logout(&self) {
        self.auth.logout().await
    }

    async fn is_authenticated(&self) -> bool {
        self.http_client.is_authenticated().await
    }
}

#[async_trait]
impl ImportService for Client {
    async fn upload_file(
        &self,
        path: &str,
        upload: UploadRequest,
    ) -> Result<UploadResponse, AppError> {
        self.http_client.upload(path, upload).await
    }

    async fn import_people(&self, upload: UploadRequest) -> Result<UploadResponse, AppError> {
        let response = self.http_client.upload(PEOPLE_IMPORT_PATH, upload).await?;
        if response.is_success() {
            info!("People import accepted with status {}", response.status.as_u16());
        }
        debug!("People import response body: {}", response.body);
        Ok(response)
    }

    async fn import_people_from_path(&self, file: &Path) -> Result<UploadResponse, AppError> {
        let upload = UploadRequest::from_path(file, self.config.notify_email.clone()).await?;
        self.import_people(upload).await
    }
}
