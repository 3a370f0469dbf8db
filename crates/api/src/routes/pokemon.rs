//! Route definitions for the pokemon catalog and vote ledger.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::pokemon;
use crate::state::AppState;

/// Catalog routes mounted at `/pokemon`.
///
/// ```text
/// GET    /                  -> list_pokemon
/// GET    /{id}              -> get_pokemon
/// POST   /{id}/vote         -> toggle_vote
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(pokemon::list_pokemon))
        .route("/{id}", get(pokemon::get_pokemon))
        .route("/{id}/vote", post(pokemon::toggle_vote))
}
