/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
/// Login request bodies
pub mod auth;
/// Low-level HTTP client bound to the API base address
pub mod http;
/// Upload request model
pub mod requests;
/// Upload response model
pub mod responses;
