//! Domains module containing business logic organized by bounded contexts.
//!
//! - `identifiers`: the pure validation and generation engine
//! - `tools`: MCP tools exposing the engine
//! - `resources`: read-only reference tables

pub mod identifiers;
pub mod resources;
pub mod tools;
