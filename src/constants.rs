/// User agent string used in HTTP requests to identify this client to the TDX Web API
pub const USER_AGENT: &str = concat!("tdx-client/", env!("CARGO_PKG_VERSION"));
/// Default request timeout in seconds (2 minutes)
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;
/// Base URL used when `TDX_BASE_URL` is not configured
pub const DEFAULT_BASE_URL: &str = "https://localhost/TDWebApi/";
/// Media types sent in the `Accept` header of every request
pub const ACCEPT_MEDIA_TYPES: &str = "application/json, text/json";

/// Admin login endpoint (BEID + web services key)
pub const LOGIN_ADMIN_PATH: &str = "api/auth/loginadmin";
/// Named user login endpoint (username + password)
pub const LOGIN_USER_PATH: &str = "api/auth/login";
/// People import endpoint, accepts a multipart upload
pub const PEOPLE_IMPORT_PATH: &str = "api/people/import";

/// Form field carrying the uploaded file
pub const ATTACHMENT_FIELD: &str = "attachment";
/// Optional form field carrying the import notification address
pub const NOTIFY_EMAIL_FIELD: &str = "notifyEmail";
