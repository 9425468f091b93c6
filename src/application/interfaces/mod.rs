/// Authentication service interface
pub mod auth;
/// File upload / import service interface
pub mod import;
