//! Integration tests for the vote ledger.
//!
//! Exercises `VoteRepo::toggle` against a real database:
//! - toggle pairs return to the starting state
//! - counts track distinct visitors
//! - unknown pokemon ids
//! - concurrent toggles never produce duplicate rows

use pokevote_db::models::pokemon::CreatePokemon;
use pokevote_db::models::vote::VoteToggle;
use pokevote_db::repositories::{PokemonRepo, VoteRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_pokemon(id: i64, name: &str) -> CreatePokemon {
    CreatePokemon {
        id,
        name: name.to_string(),
        type_1: "normal".to_string(),
        type_2: None,
        hp: 50,
        attack: 50,
        defense: 50,
        special_attack: 50,
        special_defense: 50,
        speed: 50,
        sprite_front: None,
        artwork: None,
    }
}

async fn seed(pool: &PgPool, entries: &[(i64, &str)]) {
    let entries: Vec<_> = entries.iter().map(|(id, n)| new_pokemon(*id, n)).collect();
    PokemonRepo::insert_many(pool, &entries).await.unwrap();
}

async fn stored_rows(pool: &PgPool, pokemon_id: i64) -> i64 {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM votes WHERE pokemon_id = $1")
        .bind(pokemon_id)
        .fetch_one(pool)
        .await
        .unwrap();
    count
}

// ---------------------------------------------------------------------------
// Test: toggle on, toggle off
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_toggle_twice_restores_state(pool: PgPool) {
    seed(&pool, &[(25, "pikachu")]).await;

    let first = VoteRepo::toggle(&pool, 25, "visitor-a").await.unwrap().unwrap();
    assert_eq!(
        first,
        VoteToggle {
            is_voted: true,
            vote_count: 1
        }
    );
    assert!(VoteRepo::has_voted(&pool, 25, "visitor-a").await.unwrap());

    let second = VoteRepo::toggle(&pool, 25, "visitor-a").await.unwrap().unwrap();
    assert_eq!(
        second,
        VoteToggle {
            is_voted: false,
            vote_count: 0
        }
    );
    assert!(!VoteRepo::has_voted(&pool, 25, "visitor-a").await.unwrap());
    assert_eq!(stored_rows(&pool, 25).await, 0);
}

// ---------------------------------------------------------------------------
// Test: the A/B walkthrough
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_two_visitors_walkthrough(pool: PgPool) {
    seed(&pool, &[(25, "pikachu")]).await;

    let a = VoteRepo::toggle(&pool, 25, "visitor-a").await.unwrap().unwrap();
    assert!(a.is_voted);
    assert_eq!(a.vote_count, 1);

    let b = VoteRepo::toggle(&pool, 25, "visitor-b").await.unwrap().unwrap();
    assert!(b.is_voted);
    assert_eq!(b.vote_count, 2);

    let a_again = VoteRepo::toggle(&pool, 25, "visitor-a").await.unwrap().unwrap();
    assert!(!a_again.is_voted);
    assert_eq!(a_again.vote_count, 1);

    // Visitor B's vote is unaffected.
    assert!(VoteRepo::has_voted(&pool, 25, "visitor-b").await.unwrap());
    let votes = VoteRepo::list_for_pokemon(&pool, 25).await.unwrap();
    assert_eq!(votes.len(), 1);
    assert_eq!(votes[0].visitor_id, "visitor-b");
}

// ---------------------------------------------------------------------------
// Test: N visitors, partial unvote
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_count_tracks_distinct_visitors(pool: PgPool) {
    seed(&pool, &[(1, "bulbasaur"), (4, "charmander")]).await;

    let visitors: Vec<String> = (0..7).map(|i| format!("visitor-{i}")).collect();
    for v in &visitors {
        VoteRepo::toggle(&pool, 1, v).await.unwrap().unwrap();
    }
    assert_eq!(VoteRepo::count_for_pokemon(&pool, 1).await.unwrap(), 7);

    for v in visitors.iter().take(3) {
        VoteRepo::toggle(&pool, 1, v).await.unwrap().unwrap();
    }
    assert_eq!(VoteRepo::count_for_pokemon(&pool, 1).await.unwrap(), 4);
    assert_eq!(stored_rows(&pool, 1).await, 4);

    // Votes do not leak to other entries.
    assert_eq!(VoteRepo::count_for_pokemon(&pool, 4).await.unwrap(), 0);
}

// ---------------------------------------------------------------------------
// Test: unknown pokemon
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_toggle_unknown_pokemon_returns_none(pool: PgPool) {
    seed(&pool, &[(25, "pikachu")]).await;

    let result = VoteRepo::toggle(&pool, 9999, "visitor-a").await.unwrap();
    assert!(result.is_none());

    let (total,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM votes")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(total, 0);
}

// ---------------------------------------------------------------------------
// Test: uniqueness enforced by storage
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_insert_rejected_by_constraint(pool: PgPool) {
    seed(&pool, &[(25, "pikachu")]).await;
    VoteRepo::toggle(&pool, 25, "visitor-a").await.unwrap().unwrap();

    let err = sqlx::query("INSERT INTO votes (pokemon_id, visitor_id) VALUES ($1, $2)")
        .bind(25_i64)
        .bind("visitor-a")
        .execute(&pool)
        .await
        .expect_err("second row for the same pair must be rejected");

    let db_err = err.as_database_error().expect("should be a database error");
    assert_eq!(db_err.code().as_deref(), Some("23505"));
    assert_eq!(db_err.constraint(), Some("uq_votes_pokemon_visitor"));
}

// ---------------------------------------------------------------------------
// Test: concurrent toggles
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_concurrent_toggles_never_duplicate(pool: PgPool) {
    seed(&pool, &[(25, "pikachu")]).await;

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let pool = pool.clone();
            tokio::spawn(async move { VoteRepo::toggle(&pool, 25, "visitor-a").await })
        })
        .collect();

    for handle in handles {
        let outcome = handle.await.unwrap().unwrap().unwrap();
        assert!(outcome.vote_count <= 1, "count must never exceed one: {outcome:?}");
    }

    let rows = stored_rows(&pool, 25).await;
    assert!(rows <= 1, "at most one row per pair, got {rows}");

    let voted = VoteRepo::has_voted(&pool, 25, "visitor-a").await.unwrap();
    assert_eq!(rows == 1, voted);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_concurrent_distinct_visitors_all_counted(pool: PgPool) {
    seed(&pool, &[(25, "pikachu")]).await;

    let handles: Vec<_> = (0..10)
        .map(|i| {
            let pool = pool.clone();
            tokio::spawn(async move { VoteRepo::toggle(&pool, 25, &format!("v-{i}")).await })
        })
        .collect();

    for handle in handles {
        let outcome = handle.await.unwrap().unwrap().unwrap();
        assert!(outcome.is_voted);
    }

    assert_eq!(VoteRepo::count_for_pokemon(&pool, 25).await.unwrap(), 10);
}
