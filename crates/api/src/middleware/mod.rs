//! Request middleware and the extractors that read what it resolves.
//!
//! - [`visitor::resolve_visitor`] -- Resolves or issues the anonymous visitor cookie.
//! - [`visitor::Visitor`] -- Extracts the resolved visitor in handlers.

pub mod visitor;
