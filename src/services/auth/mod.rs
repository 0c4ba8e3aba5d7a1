pub mod access_jwt;
pub mod error;
pub mod factory;
pub mod gate;
pub mod identity;
pub mod jwt;
pub mod password;
pub mod token_service;

pub use error::AuthError;
pub use factory::build_auth_service;
pub use identity::UserIdentity;
pub use token_service::AuthService;
