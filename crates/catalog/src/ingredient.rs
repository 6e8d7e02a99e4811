//! Ingredients: the capability interface, categories, and the menu-listed
//! implementation.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use grillhouse_core::{DomainError, DomainResult, Money, ValueObject};

/// Capability interface for a single sauce or filling inside a burger.
pub trait Ingredient: fmt::Debug {
    /// Category label, printed lowercased on receipt lines.
    fn kind(&self) -> &str;
    fn name(&self) -> &str;
    fn price(&self) -> Money;
}

/// Shared ingredient handle. The same ingredient may appear in several
/// burgers, or more than once in one.
pub type IngredientRef = Arc<dyn Ingredient>;

/// Ingredient category.
///
/// Canonical labels are uppercase (`SAUCE`, `FILLING`); receipts lowercase
/// them at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IngredientKind {
    Sauce,
    Filling,
}

impl IngredientKind {
    pub fn as_str(self) -> &'static str {
        match self {
            IngredientKind::Sauce => "SAUCE",
            IngredientKind::Filling => "FILLING",
        }
    }
}

impl ValueObject for IngredientKind {}

impl fmt::Display for IngredientKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An ingredient as listed on the menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuIngredient {
    pub(crate) kind: IngredientKind,
    name: String,
    price: Money,
}

impl MenuIngredient {
    /// Create a menu ingredient. The name must not be blank.
    pub fn new(
        kind: IngredientKind,
        name: impl Into<String>,
        price: Money,
    ) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("ingredient name cannot be empty"));
        }
        Ok(Self { kind, name, price })
    }

    /// Menu-internal constructor; `name` must be non-blank.
    pub(crate) fn from_parts(kind: IngredientKind, name: &str, price: Money) -> Self {
        Self { kind, name: name.to_string(), price }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Money {
        self.price
    }
}

impl ValueObject for MenuIngredient {}

impl Ingredient for MenuIngredient {
    fn kind(&self) -> &str {
        self.kind.as_str()
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn price(&self) -> Money {
        self.price
    }
}
