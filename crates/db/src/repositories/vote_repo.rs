//! Repository for the `votes` ledger.
//!
//! A vote is the pair (pokemon, visitor). The `uq_votes_pokemon_visitor`
//! constraint guarantees at most one row per pair no matter how many toggles
//! race each other.

use pokevote_core::types::DbId;
use sqlx::PgPool;

use crate::models::vote::{Vote, VoteToggle};

/// Column list for `votes` queries.
const VOTE_COLUMNS: &str = "id, pokemon_id, visitor_id, created_at, updated_at";

/// Provides the vote toggle and vote lookups.
pub struct VoteRepo;

impl VoteRepo {
    /// Flip the visitor's vote for a pokemon and return the new state together
    /// with the pokemon's vote count, all inside one transaction.
    ///
    /// Returns `None` if no pokemon with the given id exists.
    ///
    /// An existing vote is deleted; otherwise one is inserted. When a
    /// concurrent toggle for the same pair inserts first, the insert becomes a
    /// no-op and the result is "voted" rather than a constraint error.
    pub async fn toggle(
        pool: &PgPool,
        pokemon_id: DbId,
        visitor_id: &str,
    ) -> Result<Option<VoteToggle>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let exists: Option<DbId> = sqlx::query_scalar("SELECT id FROM pokemon WHERE id = $1")
            .bind(pokemon_id)
            .fetch_optional(&mut *tx)
            .await?;
        if exists.is_none() {
            return Ok(None);
        }

        let removed = sqlx::query("DELETE FROM votes WHERE pokemon_id = $1 AND visitor_id = $2")
            .bind(pokemon_id)
            .bind(visitor_id)
            .execute(&mut *tx)
            .await?
            .rows_affected()
            > 0;

        if !removed {
            let inserted = sqlx::query(
                "INSERT INTO votes (pokemon_id, visitor_id) VALUES ($1, $2) \
                 ON CONFLICT ON CONSTRAINT uq_votes_pokemon_visitor DO NOTHING",
            )
            .bind(pokemon_id)
            .bind(visitor_id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

            if inserted == 0 {
                tracing::debug!(pokemon_id, "Concurrent vote already recorded");
            }
        }

        let vote_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM votes WHERE pokemon_id = $1")
            .bind(pokemon_id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(Some(VoteToggle {
            is_voted: !removed,
            vote_count,
        }))
    }

    /// Whether the visitor currently has a vote for the pokemon.
    pub async fn has_voted(
        pool: &PgPool,
        pokemon_id: DbId,
        visitor_id: &str,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT EXISTS (SELECT 1 FROM votes WHERE pokemon_id = $1 AND visitor_id = $2)",
        )
        .bind(pokemon_id)
        .bind(visitor_id)
        .fetch_one(pool)
        .await
    }

    /// Number of votes for a pokemon.
    pub async fn count_for_pokemon(pool: &PgPool, pokemon_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM votes WHERE pokemon_id = $1")
            .bind(pokemon_id)
            .fetch_one(pool)
            .await
    }

    /// All votes for a pokemon, oldest first.
    pub async fn list_for_pokemon(pool: &PgPool, pokemon_id: DbId) -> Result<Vec<Vote>, sqlx::Error> {
        let query = format!(
            "SELECT {VOTE_COLUMNS} FROM votes WHERE pokemon_id = $1 ORDER BY created_at, id"
        );
        sqlx::query_as::<_, Vote>(&query)
            .bind(pokemon_id)
            .fetch_all(pool)
            .await
    }
}
