/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # TDX Client Prelude
//!
//! Re-exports the types needed for the usual login-then-upload flow.
//!
//! ```rust
//! use tdx_client::prelude::*;
//!
//! let config = Config::with_base_url("https://example.teamdynamix.com/TDWebApi/");
//! let client = Client::new(config).unwrap();
//! assert!(client.http_client().base_url().as_str().ends_with("/TDWebApi/"));
//! ```

// ============================================================================
// CONFIGURATION
// ============================================================================

pub use crate::application::config::{AuthMode, Config, Credentials, RestApiConfig};

pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

pub use crate::error::AppError;

// ============================================================================
// CLIENT, AUTHENTICATION AND UPLOADS
// ============================================================================

pub use crate::application::auth::{Auth, Session};
pub use crate::application::client::Client;
pub use crate::application::interfaces::auth::AuthService;
pub use crate::application::interfaces::import::ImportService;
pub use crate::model::http::HttpClient;

// ============================================================================
// MODELS
// ============================================================================

pub use crate::model::auth::{AdminLoginRequest, UserLoginRequest};
pub use crate::model::requests::UploadRequest;
pub use crate::model::responses::UploadResponse;

// ============================================================================
// UTILITIES
// ============================================================================

pub use crate::utils::logger::setup_logger;
