//! Shared fixtures for router-level tests.
use std::collections::HashMap;
use std::sync::{
    Arc,
    atomic::{AtomicBool, AtomicUsize, Ordering},
};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{HeaderMap, Method, Request, StatusCode, header},
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use crate::app::build_router;
use crate::config::Config;
use crate::repos::{
    MemoryStore, RepoError,
    profile_repo::{ProfileRow, SharedProfileStore},
    seed,
    settings_repo::{SettingsRow, SharedSettingsStore},
    store::{KeyValueStore, RepoResult},
    user_repo::{SharedUserStore, UserRow},
};
use crate::services::account::AccountService;
use crate::services::auth::{build_auth_service, jwt::JwtIssuer, password::hash_password};
use crate::state::AppState;

pub const SECRET: &str = "router-test-secret-router-test-secret";
pub const PASSWORD: &str = "secret";

/// `MemoryStore` that counts every call, to prove a request never reached it.
/// Can be switched to fail every call with a backend error.
pub struct CountingStore<V> {
    inner: MemoryStore<V>,
    calls: AtomicUsize,
    failing: AtomicBool,
}

impl<V> CountingStore<V> {
    pub fn new() -> Self {
        Self {
            inner: MemoryStore::new(),
            calls: AtomicUsize::new(0),
            failing: AtomicBool::new(false),
        }
    }

    pub fn fail_all(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    fn record(&self) -> RepoResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(RepoError::Backend("store offline".to_string()));
        }
        Ok(())
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn reset(&self) {
        self.calls.store(0, Ordering::SeqCst);
    }
}

#[async_trait]
impl<V> KeyValueStore<V> for CountingStore<V>
where
    V: Clone + Send + Sync + 'static,
{
    fn backend_name(&self) -> &'static str {
        "counting"
    }

    async fn get(&self, key: &str) -> RepoResult<Option<V>> {
        self.record()?;
        self.inner.get(key).await
    }

    async fn put(&self, key: &str, value: V) -> RepoResult<V> {
        self.record()?;
        self.inner.put(key, value).await
    }

    async fn delete(&self, key: &str) -> RepoResult<bool> {
        self.record()?;
        self.inner.delete(key).await
    }
}

pub struct TestApp {
    pub router: Router,
    pub issuer: JwtIssuer,
    pub profiles: Arc<CountingStore<ProfileRow>>,
    pub settings: Arc<CountingStore<SettingsRow>>,
    users: Arc<MemoryStore<UserRow>>,
    password_hash: String,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub json: Value,
}

impl TestApp {
    /// Router with the demo accounts seeded (`johndoe` active with records,
    /// `alice` disabled) and store counters reset.
    pub async fn new() -> Self {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("ACCESS_JWT_SECRET", SECRET),
            ("ACCESS_TOKEN_LEEWAY_SECONDS", "0"),
            ("SEED_DEMO_DATA", "false"),
        ]);
        let config = Config::from_lookup(|key| vars.get(key).map(|v| v.to_string())).unwrap();

        let profiles = Arc::new(CountingStore::<ProfileRow>::new());
        let settings = Arc::new(CountingStore::<SettingsRow>::new());
        let users = Arc::new(MemoryStore::<UserRow>::new());
        let password_hash = hash_password(PASSWORD, 4).unwrap();

        seed::seed_demo_data(&*profiles, &*settings, &*users, &password_hash)
            .await
            .unwrap();
        profiles.reset();
        settings.reset();

        let shared_profiles: SharedProfileStore = profiles.clone();
        let shared_settings: SharedSettingsStore = settings.clone();
        let shared_users: SharedUserStore = users.clone();

        let auth = build_auth_service(
            &config,
            shared_users.clone(),
            hash_password("absent-user", 4).unwrap(),
        );
        let accounts = AccountService::new(shared_profiles, shared_settings);
        let router = build_router(AppState::new(auth, accounts, shared_users), &config);

        let issuer = JwtIssuer::new(
            SECRET.as_bytes(),
            config.auth_issuer.clone(),
            config.auth_audience.clone(),
            300,
        );

        Self {
            router,
            issuer,
            profiles,
            settings,
            users,
            password_hash,
        }
    }

    /// Adds an active account with no profile or settings.
    pub async fn add_user(&self, username: &str) {
        self.users
            .put(
                username,
                UserRow {
                    username: username.to_string(),
                    full_name: None,
                    email: None,
                    hashed_password: self.password_hash.clone(),
                    disabled: false,
                },
            )
            .await
            .unwrap();
    }

    pub fn token_for(&self, username: &str) -> String {
        self.issuer.issue_access_token(username).unwrap().access_token
    }

    pub fn store_calls(&self) -> usize {
        self.profiles.calls() + self.settings.calls()
    }

    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        self.send_request(builder.body(body).unwrap()).await
    }

    pub async fn send_request(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        TestResponse {
            status,
            headers,
            json,
        }
    }
}
