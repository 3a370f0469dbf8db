//! Domain rules for the Pokevote service.
//!
//! This crate has no database or HTTP dependencies so the rules for visitor
//! identity, paging, and search can be unit tested in isolation and shared by
//! the repository and API layers.

pub mod error;
pub mod paging;
pub mod search;
pub mod types;
pub mod visitor;
