//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument.

pub mod pokemon_repo;
pub mod vote_repo;

pub use pokemon_repo::PokemonRepo;
pub use vote_repo::VoteRepo;
