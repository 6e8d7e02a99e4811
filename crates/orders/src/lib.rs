//! Burger assembly domain module.
//!
//! This crate contains business rules for assembling a burger (one bun plus
//! an ordered ingredient sequence), implemented purely as deterministic
//! domain logic (no IO, no HTTP, no storage).

pub mod burger;

pub use burger::Burger;
