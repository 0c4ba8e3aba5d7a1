/*
 * Responsibility
 * - 環境変数 (.env 含む) から設定を読み込む
 * - 設定値のバリデーション (不足・不正なら起動失敗)
 * - from_lookup で env に触らずにテストできるようにする
 */
use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

const MIN_PRODUCTION_SECRET_LEN: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    fn parse(value: Option<&str>) -> Self {
        match value
            .unwrap_or("development")
            .to_ascii_lowercase()
            .as_str()
        {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(key) => write!(f, "missing configuration: {}", key),
            ConfigError::Invalid(key) => write!(f, "invalid configuration: {}", key),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Transport limits applied by `middleware::http`.
#[derive(Debug, Clone, Copy)]
pub struct HttpLimits {
    pub request_timeout: Duration,
    pub body_limit_bytes: usize,
}

#[derive(Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub app_env: AppEnv,
    pub cors_allowed_origins: Vec<String>,

    pub auth_issuer: String,
    pub auth_audience: String,
    // HS256 shared secret; signs and verifies access tokens
    pub access_jwt_secret: String,
    pub access_token_ttl_seconds: u64,
    pub access_token_leeway_seconds: u64,

    pub http: HttpLimits,

    pub seed_demo_data: bool,
    pub demo_user_password: String,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Do not print secrets
        f.debug_struct("Config")
            .field("addr", &self.addr)
            .field("app_env", &self.app_env)
            .field("cors_allowed_origins", &self.cors_allowed_origins)
            .field("auth_issuer", &self.auth_issuer)
            .field("auth_audience", &self.auth_audience)
            .field("access_token_ttl_seconds", &self.access_token_ttl_seconds)
            .field("access_token_leeway_seconds", &self.access_token_leeway_seconds)
            .field("http", &self.http)
            .field("seed_demo_data", &self.seed_demo_data)
            .finish_non_exhaustive()
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port: u16 = parse_or(&lookup, "PORT", 3000)?;
        let addr: SocketAddr = SocketAddr::from_str(&format!("0.0.0.0:{}", port))
            .map_err(|_| ConfigError::Invalid("PORT"))?;

        let app_env = AppEnv::parse(lookup("APP_ENV").as_deref());

        let cors_allowed_origins = lookup("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|| "http://localhost:5173".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>();

        let auth_issuer = lookup("AUTH_ISSUER").unwrap_or_else(|| "drivesafe-api".to_string());
        let auth_audience = lookup("AUTH_AUDIENCE").unwrap_or_else(|| "drivesafe-app".to_string());

        let access_jwt_secret =
            lookup("ACCESS_JWT_SECRET").ok_or(ConfigError::Missing("ACCESS_JWT_SECRET"))?;
        if access_jwt_secret.trim().is_empty()
            || (app_env.is_production() && access_jwt_secret.len() < MIN_PRODUCTION_SECRET_LEN)
        {
            return Err(ConfigError::Invalid("ACCESS_JWT_SECRET"));
        }

        let access_token_ttl_seconds: u64 = parse_or(&lookup, "ACCESS_TOKEN_TTL_SECONDS", 1800)?; // 30 min
        if access_token_ttl_seconds == 0 {
            return Err(ConfigError::Invalid("ACCESS_TOKEN_TTL_SECONDS"));
        }
        let access_token_leeway_seconds: u64 = parse_or(&lookup, "ACCESS_TOKEN_LEEWAY_SECONDS", 60)?;

        let request_timeout_seconds: u64 = parse_or(&lookup, "REQUEST_TIMEOUT_SECONDS", 30)?;
        if request_timeout_seconds == 0 {
            return Err(ConfigError::Invalid("REQUEST_TIMEOUT_SECONDS"));
        }
        let body_limit_bytes: usize = parse_or(&lookup, "REQUEST_BODY_LIMIT_BYTES", 1024 * 1024)?;

        let seed_demo_data = match lookup("SEED_DEMO_DATA") {
            Some(v) => parse_bool(&v).ok_or(ConfigError::Invalid("SEED_DEMO_DATA"))?,
            None => !app_env.is_production(),
        };
        let demo_user_password =
            lookup("DEMO_USER_PASSWORD").unwrap_or_else(|| "secret".to_string());

        Ok(Self {
            addr,
            app_env,
            cors_allowed_origins,
            auth_issuer,
            auth_audience,
            access_jwt_secret,
            access_token_ttl_seconds,
            access_token_leeway_seconds,
            http: HttpLimits {
                request_timeout: Duration::from_secs(request_timeout_seconds),
                body_limit_bytes,
            },
            seed_demo_data,
            demo_user_password,
        })
    }
}

// Absent -> default, present but unparsable -> Invalid.
fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid(key)),
        None => Ok(default),
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
