//! Anonymous visitor identity middleware and extractor.
//!
//! Every request under `/api` passes through [`resolve_visitor`], which reads
//! the visitor cookie or mints a new token, makes it available to handlers as
//! a [`Visitor`], and sets the cookie on the response when a token was minted.
//!
//! The cookie is trusted as presented. See [`pokevote_core::visitor`] for why
//! this is identification, not authentication.

use axum::extract::{FromRequestParts, Request, State};
use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::request::Parts;
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::Response;
use pokevote_core::error::CoreError;
use pokevote_core::visitor::{self, Resolution, VisitorToken};

use crate::error::AppError;
use crate::state::AppState;

/// The visitor behind the current request.
///
/// Use this as an extractor parameter in any handler mounted behind
/// [`resolve_visitor`]:
///
/// ```ignore
/// async fn my_handler(visitor: Visitor) -> AppResult<Json<()>> {
///     tracing::info!(issued = visitor.issued, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Visitor {
    /// The visitor's opaque identity token.
    pub token: VisitorToken,
    /// Whether the token was minted for this request.
    pub issued: bool,
}

impl From<Resolution> for Visitor {
    fn from(resolution: Resolution) -> Self {
        match resolution {
            Resolution::Presented(token) => Visitor {
                token,
                issued: false,
            },
            Resolution::Issued(token) => Visitor {
                token,
                issued: true,
            },
        }
    }
}

/// Resolve the visitor identity and persist newly minted tokens.
///
/// Mount with `axum::middleware::from_fn_with_state`. The cookie is set even
/// when the handler fails, so a client that first hits an unknown id still
/// keeps the identity it was given.
pub async fn resolve_visitor(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let settings = &state.config.visitor_cookie;

    let resolution = visitor::resolve(
        request
            .headers()
            .get_all(COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok()),
        &settings.name,
    );

    let set_cookie = resolution
        .is_issued()
        .then(|| settings.set_cookie_value(resolution.token()));
    if set_cookie.is_some() {
        tracing::debug!("Issued new visitor token");
    }

    request.extensions_mut().insert(Visitor::from(resolution));
    let mut response = next.run(request).await;

    if let Some(cookie) = set_cookie {
        match HeaderValue::from_str(&cookie) {
            Ok(value) => {
                response.headers_mut().append(SET_COOKIE, value);
            }
            Err(e) => tracing::error!(error = %e, "Visitor cookie is not a valid header value"),
        }
    }

    response
}

impl<S> FromRequestParts<S> for Visitor
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts.extensions.get::<Visitor>().cloned().ok_or_else(|| {
            AppError::Core(CoreError::Internal(
                "Visitor extractor used on a route without resolve_visitor".into(),
            ))
        })
    }
}
