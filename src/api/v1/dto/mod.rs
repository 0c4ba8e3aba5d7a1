pub mod account;
pub mod profile;
pub mod settings;
pub mod token;
