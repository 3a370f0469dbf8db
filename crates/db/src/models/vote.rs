//! Vote ledger models.

use pokevote_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `votes` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Vote {
    pub id: DbId,
    pub pokemon_id: DbId,
    pub visitor_id: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Result of toggling a vote: the visitor's new state and the entry's vote
/// count, both read inside the toggle transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VoteToggle {
    pub is_voted: bool,
    pub vote_count: i64,
}
