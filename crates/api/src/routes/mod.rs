pub mod health;
pub mod pokemon;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /pokemon                                         list (page, limit, search)
/// /pokemon/{id}                                    detail with caller's vote state
/// /pokemon/{id}/vote                               toggle caller's vote (POST)
/// ```
///
/// The visitor middleware is applied by the router builder, which owns the
/// state it needs.
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/pokemon", pokemon::router())
}
