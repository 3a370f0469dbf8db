//! Load the pokemon catalog from a JSON export.
//!
//! ```text
//! pokevote-seed [path/to/pokemon.json]
//! ```
//!
//! The path defaults to `$SEED_FILE`, then `pokemon.json`. Migrations are
//! applied first, and entries whose id already exists are left untouched, so
//! the tool can be re-run safely.

use std::process::ExitCode;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokevote_seed=info,pokevote_db=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("SEED_FILE").ok())
        .unwrap_or_else(|| "pokemon.json".into());

    let json = match tokio::fs::read_to_string(&path).await {
        Ok(json) => json,
        Err(e) => {
            tracing::error!(%path, error = %e, "Failed to read catalog file");
            return ExitCode::FAILURE;
        }
    };

    let Ok(database_url) = std::env::var("DATABASE_URL") else {
        tracing::error!("DATABASE_URL must be set");
        return ExitCode::FAILURE;
    };

    let pool = match pokevote_db::create_pool(&database_url).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!(error = %e, "Failed to connect to database");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = pokevote_db::run_migrations(&pool).await {
        tracing::error!(error = %e, "Failed to run database migrations");
        return ExitCode::FAILURE;
    }

    let code = match pokevote_db::seed::seed_catalog(&pool, &json).await {
        Ok(report) => {
            tracing::info!(
                %path,
                inserted = report.inserted,
                skipped = report.skipped(),
                "Seeding complete",
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(%path, error = %e, "Seeding failed");
            ExitCode::FAILURE
        }
    };

    pool.close().await;
    code
}
