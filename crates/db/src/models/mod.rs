//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - `FromRow` + `Serialize` structs matching the rows or projections read
//! - `Deserialize` DTOs for inserts and query parameters

pub mod pokemon;
pub mod vote;
