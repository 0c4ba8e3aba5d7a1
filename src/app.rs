/*
 * Responsibility
 * - tracing / panic hook の初期化
 * - Config 読み込み → 依存生成 (stores, AuthService, AccountService) → Router 組み立て
 * - Middleware の適用 (CORS / HTTP)
 * - axum::serve() で起動、Ctrl-C で graceful shutdown
 */
use std::{panic, process, sync::Arc};

use anyhow::Result;
use axum::{Json, Router, routing::get};
use serde_json::{Value, json};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::repos::{
    MemoryStore,
    profile_repo::{ProfileRow, SharedProfileStore},
    seed,
    settings_repo::{SettingsRow, SharedSettingsStore},
    user_repo::{SharedUserStore, UserRow},
};
use crate::services::{
    account::AccountService,
    auth::{build_auth_service, password::hash_password},
};
use crate::state::AppState;
use crate::{api, middleware};

fn init_tracing() {
    // Prefer RUST_LOG if set; otherwise use a sensible default.
    // Ex:
    // RUST_LOG=info,drivesafe_api=debug,tower_http=debug cargo run
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn init_panic_hook(abort_on_panic: bool) {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |info| {
        tracing::error!(?info, "panic");

        // Development: crash the whole process so we notice immediately.
        if abort_on_panic {
            process::abort();
        } else {
            default_hook(info);
        }
    }))
}

pub async fn run() -> Result<()> {
    init_tracing();
    let config = Config::from_env()?;
    init_panic_hook(!config.app_env.is_production());

    tracing::info!(
        "starting API in {:?} mode on {}",
        config.app_env,
        config.addr
    );

    let state = build_state(&config).await?;
    let app = build_router(state, &config);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

async fn build_state(config: &Config) -> Result<AppState> {
    // Process-wide stores. Swap MemoryStore for a persistent KeyValueStore here.
    let profiles: SharedProfileStore = Arc::new(MemoryStore::<ProfileRow>::new());
    let settings: SharedSettingsStore = Arc::new(MemoryStore::<SettingsRow>::new());
    let users: SharedUserStore = Arc::new(MemoryStore::<UserRow>::new());

    if config.seed_demo_data {
        let password = config.demo_user_password.clone();
        let hashed =
            tokio::task::spawn_blocking(move || hash_password(&password, bcrypt::DEFAULT_COST))
                .await??;

        seed::seed_demo_data(&*profiles, &*settings, &*users, &hashed).await?;
        tracing::info!(
            active = seed::DEMO_ACTIVE_USER,
            disabled = seed::DEMO_DISABLED_USER,
            "seeded demo accounts"
        );
    }

    // Random secret nobody knows; only its bcrypt cost matters.
    let absent_user_hash = tokio::task::spawn_blocking(|| {
        hash_password(&uuid::Uuid::new_v4().to_string(), bcrypt::DEFAULT_COST)
    })
    .await??;

    let auth = build_auth_service(config, users.clone(), absent_user_hash);
    let accounts = AccountService::new(profiles, settings);

    Ok(AppState::new(auth, accounts, users))
}

pub(crate) fn build_router(state: AppState, config: &Config) -> Router {
    let router = Router::new()
        .route("/", get(root))
        .nest("/api/v1", api::v1::routes(state.clone()))
        .with_state(state);

    let router = middleware::cors::apply(router, config);
    middleware::http::apply(router, &config.http)
}

async fn root() -> Json<Value> {
    Json(json!({
        "message": "Welcome to DriveSafeAI API",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        return;
    }
    tracing::info!("shutdown signal received");
}
