//! DriveSafeAI account API.
//!
//! Binary entry point; wiring lives in `app`.
use anyhow::Result;

mod api;
mod app;
mod config;
mod error;
mod middleware;
mod repos;
mod services;
mod state;

#[cfg(test)]
mod tests;

#[tokio::main]
async fn main() -> Result<()> {
    app::run().await
}
