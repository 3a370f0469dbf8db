//! Handlers for catalog browsing and vote toggling.
//!
//! All endpoints sit behind the visitor middleware; the detail and vote
//! endpoints read the resolved [`Visitor`].

use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use pokevote_core::error::CoreError;
use pokevote_core::paging::{PageMeta, PageRequest};
use pokevote_core::search::substring_pattern;
use pokevote_core::types::DbId;
use pokevote_db::models::pokemon::PokemonListParams;
use pokevote_db::repositories::{PokemonRepo, VoteRepo};
use serde::Serialize;

use crate::error::AppResult;
use crate::middleware::visitor::Visitor;
use crate::response::PageResponse;
use crate::state::AppState;

/// Body of `POST /api/pokemon/{id}/vote`.
#[derive(Debug, Serialize)]
pub struct VoteResponse {
    pub message: &'static str,
    pub is_voted: bool,
    /// Count read in the same transaction as the toggle.
    pub vote_count: i64,
}

fn not_found(id: DbId) -> CoreError {
    CoreError::NotFound {
        entity: "Pokemon",
        id,
    }
}

/// GET /api/pokemon?page=&limit=&search=
///
/// One page of the catalog with vote counts, ordered by id. `search` is a
/// case-insensitive substring filter on name.
pub async fn list_pokemon(
    State(state): State<AppState>,
    query: Result<Query<PokemonListParams>, QueryRejection>,
) -> AppResult<impl IntoResponse> {
    let Query(params) = query?;
    let page = PageRequest::new(params.page, params.limit);
    let pattern = substring_pattern(&params.search);

    let data = PokemonRepo::list(&state.pool, &page, pattern.as_deref()).await?;
    let total_items = PokemonRepo::count(&state.pool, pattern.as_deref()).await?;

    Ok(Json(PageResponse {
        data,
        meta: PageMeta::new(page, total_items),
    }))
}

/// GET /api/pokemon/{id}
///
/// Full entry with `vote_count` and `is_voted` for the calling visitor.
pub async fn get_pokemon(
    visitor: Visitor,
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
) -> AppResult<impl IntoResponse> {
    let Path(id) = path?;

    let detail = PokemonRepo::find_detail(&state.pool, id, visitor.token.as_str())
        .await?
        .ok_or_else(|| not_found(id))?;

    Ok(Json(detail))
}

/// POST /api/pokemon/{id}/vote
///
/// Toggle the calling visitor's vote and return the new state with the
/// authoritative count.
pub async fn toggle_vote(
    visitor: Visitor,
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
) -> AppResult<impl IntoResponse> {
    let Path(id) = path?;

    let outcome = VoteRepo::toggle(&state.pool, id, visitor.token.as_str())
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(
        pokemon_id = id,
        is_voted = outcome.is_voted,
        vote_count = outcome.vote_count,
        new_visitor = visitor.issued,
        "Vote toggled",
    );

    Ok(Json(VoteResponse {
        message: if outcome.is_voted { "Voted" } else { "Unvoted" },
        is_voted: outcome.is_voted,
        vote_count: outcome.vote_count,
    }))
}
