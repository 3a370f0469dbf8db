//! Catalog seeding from a JSON export.
//!
//! The input is a JSON array of objects with the `pokemon` column names.
//! Entries are validated up front so a bad file inserts nothing.

use std::collections::HashSet;

use pokevote_core::types::DbId;
use sqlx::PgPool;
use validator::Validate;

use crate::models::pokemon::CreatePokemon;
use crate::repositories::PokemonRepo;

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("Invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid catalog entry {id}: {errors}")]
    Invalid {
        id: DbId,
        errors: validator::ValidationErrors,
    },

    #[error("Duplicate catalog id {0}")]
    DuplicateId(DbId),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Outcome of a seeding run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    /// Entries read from the input.
    pub total: usize,
    /// Entries newly inserted; the rest already existed.
    pub inserted: u64,
}

impl SeedReport {
    pub fn skipped(&self) -> u64 {
        (self.total as u64).saturating_sub(self.inserted)
    }
}

/// Parse and validate a catalog export.
///
/// An empty `type_2` is treated as absent.
pub fn parse_catalog(json: &str) -> Result<Vec<CreatePokemon>, SeedError> {
    let mut entries: Vec<CreatePokemon> = serde_json::from_str(json)?;
    let mut seen = HashSet::with_capacity(entries.len());

    for entry in &mut entries {
        if entry.type_2.as_deref().is_some_and(|t| t.trim().is_empty()) {
            entry.type_2 = None;
        }
        entry
            .validate()
            .map_err(|errors| SeedError::Invalid {
                id: entry.id,
                errors,
            })?;
        if !seen.insert(entry.id) {
            return Err(SeedError::DuplicateId(entry.id));
        }
    }

    Ok(entries)
}

/// Parse `json` and insert its entries, leaving existing ids untouched.
pub async fn seed_catalog(pool: &PgPool, json: &str) -> Result<SeedReport, SeedError> {
    let entries = parse_catalog(json)?;
    let inserted = PokemonRepo::insert_many(pool, &entries).await?;

    let report = SeedReport {
        total: entries.len(),
        inserted,
    };
    tracing::info!(
        total = report.total,
        inserted = report.inserted,
        skipped = report.skipped(),
        "Catalog seeded",
    );
    Ok(report)
}
