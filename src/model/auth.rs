use serde::{Deserialize, Serialize};
use std::fmt;

/// Body of `POST api/auth/loginadmin`
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AdminLoginRequest {
    /// Web services BEID from TDAdmin
    #[serde(rename = "BEID")]
    pub beid: String,
    /// Web services key from TDAdmin
    #[serde(rename = "WebServicesKey")]
    pub web_services_key: String,
}

impl AdminLoginRequest {
    /// Creates a new admin login body
    pub fn new(beid: impl Into<String>, web_services_key: impl Into<String>) -> Self {
        Self {
            beid: beid.into(),
            web_services_key: web_services_key.into(),
        }
    }
}

impl fmt::Debug for AdminLoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminLoginRequest")
            .field("beid", &self.beid)
            .field("web_services_key", &"***")
            .finish()
    }
}

/// Body of `POST api/auth/login`
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct UserLoginRequest {
    /// Named user account
    #[serde(rename = "UserName")]
    pub username: String,
    /// Password of the account
    #[serde(rename = "Password")]
    pub password: String,
}

impl UserLoginRequest {
    /// Creates a new user login body
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for UserLoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserLoginRequest")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}
