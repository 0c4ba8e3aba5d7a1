pub mod account;
pub mod health;
pub mod profile;
pub mod settings;
pub mod token;
