//! Catalog domain module (buns and ingredients).
//!
//! This crate contains the capability interfaces a burger consumes plus the
//! stock menu of items available for assembly, implemented purely as
//! deterministic domain logic (no IO, no HTTP, no storage).

pub mod bun;
pub mod ingredient;
pub mod menu;

pub use bun::{Bun, BunRef, MenuBun};
pub use ingredient::{Ingredient, IngredientKind, IngredientRef, MenuIngredient};
pub use menu::Menu;
