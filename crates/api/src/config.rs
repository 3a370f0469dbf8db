use pokevote_core::visitor::{CookieSettings, DEFAULT_COOKIE_MAX_AGE_SECS, DEFAULT_COOKIE_NAME};

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `5000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Attributes of the anonymous visitor cookie.
    pub visitor_cookie: CookieSettings,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                       | Default                    |
    /// |-------------------------------|----------------------------|
    /// | `HOST`                        | `0.0.0.0`                  |
    /// | `PORT`                        | `5000`                     |
    /// | `CORS_ORIGINS`                | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS`        | `30`                       |
    /// | `VISITOR_COOKIE_NAME`         | `visitor_id`               |
    /// | `VISITOR_COOKIE_MAX_AGE_SECS` | `31536000` (one year)      |
    /// | `VISITOR_COOKIE_SECURE`       | `false`                    |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "5000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let cookie_name =
            std::env::var("VISITOR_COOKIE_NAME").unwrap_or_else(|_| DEFAULT_COOKIE_NAME.into());
        assert!(
            is_cookie_name(&cookie_name),
            "VISITOR_COOKIE_NAME must be a non-empty cookie token, got '{cookie_name}'"
        );

        let cookie_max_age_secs: u64 = std::env::var("VISITOR_COOKIE_MAX_AGE_SECS")
            .map(|v| {
                v.parse()
                    .expect("VISITOR_COOKIE_MAX_AGE_SECS must be a valid u64")
            })
            .unwrap_or(DEFAULT_COOKIE_MAX_AGE_SECS);

        let cookie_secure: bool = std::env::var("VISITOR_COOKIE_SECURE")
            .unwrap_or_else(|_| "false".into())
            .parse()
            .expect("VISITOR_COOKIE_SECURE must be true or false");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            visitor_cookie: CookieSettings {
                name: cookie_name,
                max_age_secs: cookie_max_age_secs,
                secure: cookie_secure,
            },
        }
    }
}

/// RFC 6265 cookie-name: visible ASCII without separators.
fn is_cookie_name(name: &str) -> bool {
    !name.is_empty()
        && name.bytes().all(|b| {
            b.is_ascii_graphic() && !b"()<>@,;:\\\"/[]?={}".contains(&b)
        })
}
