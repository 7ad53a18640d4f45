pub mod auth_library_service;
pub mod credential_service;

pub use auth_library_service::*;
pub use credential_service::*;
