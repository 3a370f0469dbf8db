//! Anonymous visitor identity.
//!
//! A visitor is identified by an opaque token the server mints once and the
//! browser sends back in a long-lived HTTP-only cookie. The token is not
//! signed or checked against any server-side record: whatever a client
//! presents is taken as its identity. This keeps one vote per browser in the
//! common case and is not an authentication mechanism; forging or clearing
//! the cookie yields a different identity.

use std::fmt;

use uuid::Uuid;

/// Cookie name used when none is configured.
pub const DEFAULT_COOKIE_NAME: &str = "visitor_id";

/// One year, in seconds.
pub const DEFAULT_COOKIE_MAX_AGE_SECS: u64 = 365 * 24 * 60 * 60;

/// Longest token accepted from a client. Matches the `votes.visitor_id` check.
pub const MAX_TOKEN_LEN: usize = 100;

/// An opaque visitor identity token.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VisitorToken(String);

impl VisitorToken {
    /// Mint a fresh 128-bit random token (UUID v4, hyphenated).
    pub fn mint() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Accept a client-presented token.
    ///
    /// Any non-empty value up to [`MAX_TOKEN_LEN`] characters is accepted as
    /// is; surrounding double quotes allowed by the cookie grammar are
    /// removed. Returns `None` for values that cannot be stored.
    pub fn parse(raw: &str) -> Option<Self> {
        let value = raw.trim();
        let value = value
            .strip_prefix('"')
            .and_then(|v| v.strip_suffix('"'))
            .unwrap_or(value);

        if value.is_empty() || value.chars().count() > MAX_TOKEN_LEN {
            return None;
        }
        if value.chars().any(|c| c.is_control() || c == ';') {
            return None;
        }
        Some(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VisitorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Outcome of resolving a request's visitor identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The request carried a usable token; it is returned unchanged.
    Presented(VisitorToken),
    /// No usable token was present; a new one was minted and must be sent
    /// back to the client.
    Issued(VisitorToken),
}

impl Resolution {
    pub fn token(&self) -> &VisitorToken {
        match self {
            Resolution::Presented(token) | Resolution::Issued(token) => token,
        }
    }

    pub fn is_issued(&self) -> bool {
        matches!(self, Resolution::Issued(_))
    }
}

/// Resolve the visitor identity from the request's `Cookie` header values.
///
/// The first cookie named `cookie_name` with a usable value wins. If none is
/// found a fresh token is minted.
pub fn resolve<'a, I>(cookie_headers: I, cookie_name: &str) -> Resolution
where
    I: IntoIterator<Item = &'a str>,
{
    cookie_headers
        .into_iter()
        .find_map(|header| find_cookie(header, cookie_name))
        .map(Resolution::Presented)
        .unwrap_or_else(|| Resolution::Issued(VisitorToken::mint()))
}

/// Look up `name` in a single `Cookie` header value (`a=1; b=2`).
fn find_cookie(header: &str, name: &str) -> Option<VisitorToken> {
    header
        .split(';')
        .filter_map(|pair| pair.split_once('='))
        .filter(|(key, _)| key.trim() == name)
        .find_map(|(_, value)| VisitorToken::parse(value))
}

/// Attributes of the visitor cookie sent to clients.
#[derive(Debug, Clone)]
pub struct CookieSettings {
    pub name: String,
    pub max_age_secs: u64,
    /// Adds the `Secure` attribute; enable when served over HTTPS.
    pub secure: bool,
}

impl Default for CookieSettings {
    fn default() -> Self {
        Self {
            name: DEFAULT_COOKIE_NAME.to_string(),
            max_age_secs: DEFAULT_COOKIE_MAX_AGE_SECS,
            secure: false,
        }
    }
}

impl CookieSettings {
    /// Render the `Set-Cookie` header value persisting `token`.
    pub fn set_cookie_value(&self, token: &VisitorToken) -> String {
        let mut value = format!(
            "{}={}; Max-Age={}; Path=/; HttpOnly; SameSite=Lax",
            self.name, token, self.max_age_secs
        );
        if self.secure {
            value.push_str("; Secure");
        }
        value
    }
}
