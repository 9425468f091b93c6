/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # TDX Client
//!
//! Client for the TeamDynamix Web API (TDWebApi).
//!
//! The crate covers the three steps needed to push a file into TeamDynamix:
//!
//! 1. Build an API client bound to the `TDWebApi` base address
//! 2. Authenticate, either as an admin (BEID + web services key) or as a named user
//! 3. Upload a file as a multipart form post, e.g. a people import sheet
//!
//! # Example
//! ```ignore
//! use tdx_client::prelude::*;
//!
//! setup_logger();
//! let client = Client::new(Config::new())?;
//! client.login().await?;
//!
//! let upload = UploadRequest::from_path("people.xlsx", Some("ops@example.edu".into())).await?;
//! let response = client.import_people(upload).await?;
//! if !response.is_success() {
//!     // try again next run
//! }
//! ```

/// Client construction, authentication and service implementations
pub mod application;
/// Crate-wide constants: endpoints, defaults and headers
pub mod constants;
/// Error type shared by every operation
pub mod error;
/// Request/response models and the low-level HTTP client
pub mod model;
/// Commonly used re-exports
pub mod prelude;
/// Environment and logging helpers
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
