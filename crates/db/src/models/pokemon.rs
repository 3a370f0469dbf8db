//! Catalog entry models, projections, and DTOs.

use pokevote_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `pokemon` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Pokemon {
    pub id: DbId,
    pub name: String,
    pub type_1: String,
    pub type_2: Option<String>,
    pub hp: i32,
    pub attack: i32,
    pub defense: i32,
    pub special_attack: i32,
    pub special_defense: i32,
    pub speed: i32,
    pub sprite_front: Option<String>,
    pub artwork: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// List projection: the fields a catalog grid needs plus the derived count.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PokemonSummary {
    pub id: DbId,
    pub name: String,
    pub type_1: String,
    pub type_2: Option<String>,
    pub sprite_front: Option<String>,
    pub artwork: Option<String>,
    pub vote_count: i64,
}

/// Detail projection: the full row, its vote count, and whether the
/// requesting visitor has voted for it.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PokemonDetail {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub pokemon: Pokemon,
    pub vote_count: i64,
    pub is_voted: bool,
}

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

/// DTO for inserting a catalog entry (seed time only).
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePokemon {
    #[validate(range(min = 1))]
    pub id: DbId,
    #[validate(length(min = 1, max = 50))]
    pub name: String,
    #[validate(length(min = 1, max = 20))]
    pub type_1: String,
    #[validate(length(min = 1, max = 20))]
    pub type_2: Option<String>,
    #[validate(range(min = 0))]
    pub hp: i32,
    #[validate(range(min = 0))]
    pub attack: i32,
    #[validate(range(min = 0))]
    pub defense: i32,
    #[validate(range(min = 0))]
    pub special_attack: i32,
    #[validate(range(min = 0))]
    pub special_defense: i32,
    #[validate(range(min = 0))]
    pub speed: i32,
    pub sprite_front: Option<String>,
    pub artwork: Option<String>,
}

/// Query parameters for `GET /api/pokemon`.
#[derive(Debug, Default, Deserialize)]
pub struct PokemonListParams {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    #[serde(default)]
    pub search: String,
}
