//! Buns: the capability interface and the menu-listed implementation.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use grillhouse_core::{DomainError, DomainResult, Money, ValueObject};

/// Capability interface for the bread component of a burger.
///
/// A burger charges a bun's price twice (top and bottom halves) and prints
/// its name on the receipt frame lines.
pub trait Bun: fmt::Debug {
    fn name(&self) -> &str;
    fn price(&self) -> Money;
}

/// Shared bun handle. Buns are held by reference: the same bun may back
/// several burgers at once.
pub type BunRef = Arc<dyn Bun>;

/// A bun as listed on the menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuBun {
    name: String,
    price: Money,
}

impl MenuBun {
    /// Create a menu bun. The name must not be blank.
    pub fn new(name: impl Into<String>, price: Money) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("bun name cannot be empty"));
        }
        Ok(Self { name, price })
    }

    /// Menu-internal constructor; `name` must be non-blank.
    pub(crate) fn from_parts(name: &str, price: Money) -> Self {
        Self { name: name.to_string(), price }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Money {
        self.price
    }
}

impl ValueObject for MenuBun {}

impl Bun for MenuBun {
    fn name(&self) -> &str {
        &self.name
    }

    fn price(&self) -> Money {
        self.price
    }
}
