pub mod account;
pub mod auth;
