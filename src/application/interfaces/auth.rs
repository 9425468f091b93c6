use crate::application::auth::Session;
use crate::error::AppError;
use async_trait::async_trait;

/// Interface for the authentication service
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Logs in with the configured flavour and credentials
    async fn login(&self) -> Result<Session, AppError>;

    /// Logs in as an admin with the web services BEID and key
    ///
    /// # Arguments
    /// * `beid` - Web services BEID from TDAdmin
    /// * `web_services_key` - Web services key from TDAdmin
    async fn login_admin(&self, beid: &str, web_services_key: &str) -> Result<Session, AppError>;

    /// Logs in as a named user
    async fn login_user(&self, username: &str, password: &str) -> Result<Session, AppError>;

    /// Forgets the current token
    async fn logout(&self);

    /// `true` once a login has succeeded
    async fn is_authenticated(&self) -> bool;
}
