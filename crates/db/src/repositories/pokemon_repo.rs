//! Repository for the `pokemon` catalog table.
//!
//! Catalog rows are immutable reference data. Every read projection derives
//! `vote_count` from the `votes` table at query time.

use pokevote_core::paging::PageRequest;
use pokevote_core::types::DbId;
use sqlx::PgPool;

use crate::models::pokemon::{CreatePokemon, Pokemon, PokemonDetail, PokemonSummary};

/// Column list for full `pokemon` rows.
const COLUMNS: &str = "\
    p.id, p.name, p.type_1, p.type_2, \
    p.hp, p.attack, p.defense, p.special_attack, p.special_defense, p.speed, \
    p.sprite_front, p.artwork, p.created_at, p.updated_at";

/// Provides read access to the catalog and the seed-time insert.
pub struct PokemonRepo;

impl PokemonRepo {
    /// Find a catalog entry by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Pokemon>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM pokemon p WHERE p.id = $1");
        sqlx::query_as::<_, Pokemon>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// One page of entries with their vote counts, ordered by id.
    ///
    /// `pattern` is an `ILIKE` pattern (see
    /// [`pokevote_core::search::substring_pattern`]); `None` lists everything.
    pub async fn list(
        pool: &PgPool,
        page: &PageRequest,
        pattern: Option<&str>,
    ) -> Result<Vec<PokemonSummary>, sqlx::Error> {
        sqlx::query_as::<_, PokemonSummary>(
            "SELECT p.id, p.name, p.type_1, p.type_2, p.sprite_front, p.artwork, \
                    COUNT(v.id) AS vote_count \
             FROM pokemon p \
             LEFT JOIN votes v ON v.pokemon_id = p.id \
             WHERE ($3::text IS NULL OR p.name ILIKE $3) \
             GROUP BY p.id \
             ORDER BY p.id ASC \
             LIMIT $1 OFFSET $2",
        )
        .bind(page.limit)
        .bind(page.offset())
        .bind(pattern)
        .fetch_all(pool)
        .await
    }

    /// Number of entries matching `pattern` (all entries when `None`).
    pub async fn count(pool: &PgPool, pattern: Option<&str>) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM pokemon p \
             WHERE ($1::text IS NULL OR p.name ILIKE $1)",
        )
        .bind(pattern)
        .fetch_one(pool)
        .await
    }

    /// Full entry with vote count and the given visitor's vote state.
    ///
    /// Returns `None` if no entry with the given id exists.
    pub async fn find_detail(
        pool: &PgPool,
        id: DbId,
        visitor_id: &str,
    ) -> Result<Option<PokemonDetail>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS}, \
                    (SELECT COUNT(*) FROM votes v WHERE v.pokemon_id = p.id) AS vote_count, \
                    EXISTS ( \
                        SELECT 1 FROM votes v \
                        WHERE v.pokemon_id = p.id AND v.visitor_id = $2 \
                    ) AS is_voted \
             FROM pokemon p \
             WHERE p.id = $1"
        );
        sqlx::query_as::<_, PokemonDetail>(&query)
            .bind(id)
            .bind(visitor_id)
            .fetch_optional(pool)
            .await
    }

    /// Insert catalog entries in one transaction, skipping ids that already
    /// exist. Returns the number of rows actually inserted.
    pub async fn insert_many(pool: &PgPool, entries: &[CreatePokemon]) -> Result<u64, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let mut inserted = 0;

        for entry in entries {
            let result = sqlx::query(
                "INSERT INTO pokemon \
                     (id, name, type_1, type_2, hp, attack, defense, \
                      special_attack, special_defense, speed, sprite_front, artwork) \
                 VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12) \
                 ON CONFLICT (id) DO NOTHING",
            )
            .bind(entry.id)
            .bind(&entry.name)
            .bind(&entry.type_1)
            .bind(entry.type_2.as_deref())
            .bind(entry.hp)
            .bind(entry.attack)
            .bind(entry.defense)
            .bind(entry.special_attack)
            .bind(entry.special_defense)
            .bind(entry.speed)
            .bind(entry.sprite_front.as_deref())
            .bind(entry.artwork.as_deref())
            .execute(&mut *tx)
            .await?;
            inserted += result.rows_affected();
        }

        tx.commit().await?;
        Ok(inserted)
    }
}
