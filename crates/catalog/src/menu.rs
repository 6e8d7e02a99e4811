//! The menu: fixed lists of buns and ingredients available for assembly.

use serde::{Deserialize, Serialize};

use grillhouse_core::Money;

use crate::bun::MenuBun;
use crate::ingredient::{IngredientKind, MenuIngredient};

/// The lists a burger is assembled from.
///
/// Plain in-memory data, not a storage layer: the composing application
/// decides where menus ultimately come from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Menu {
    buns: Vec<MenuBun>,
    ingredients: Vec<MenuIngredient>,
}

impl Menu {
    /// The standard menu.
    pub fn standard() -> Self {
        let buns = vec![
            MenuBun::from_parts("black bun", Money::from_major(100)),
            MenuBun::from_parts("white bun", Money::from_major(200)),
            MenuBun::from_parts("red bun", Money::from_major(300)),
        ];
        let ingredients = vec![
            MenuIngredient::from_parts(IngredientKind::Sauce, "hot sauce", Money::from_major(100)),
            MenuIngredient::from_parts(IngredientKind::Sauce, "sour cream", Money::from_major(200)),
            MenuIngredient::from_parts(
                IngredientKind::Sauce,
                "chili sauce",
                Money::from_major(300),
            ),
            MenuIngredient::from_parts(IngredientKind::Filling, "cutlet", Money::from_major(100)),
            MenuIngredient::from_parts(IngredientKind::Filling, "dinosaur", Money::from_major(200)),
            MenuIngredient::from_parts(IngredientKind::Filling, "sausage", Money::from_major(300)),
        ];
        Self { buns, ingredients }
    }

    /// Buns available for assembly, in menu order.
    pub fn buns(&self) -> &[MenuBun] {
        &self.buns
    }

    /// Ingredients available for assembly, in menu order.
    pub fn ingredients(&self) -> &[MenuIngredient] {
        &self.ingredients
    }

    /// Look up a bun by exact name.
    pub fn bun(&self, name: &str) -> Option<&MenuBun> {
        self.buns.iter().find(|b| b.name() == name)
    }

    /// Look up an ingredient by exact name.
    pub fn ingredient(&self, name: &str) -> Option<&MenuIngredient> {
        self.ingredients.iter().find(|i| i.name() == name)
    }

    /// Ingredients of one category, in menu order.
    pub fn ingredients_of_kind(
        &self,
        kind: IngredientKind,
    ) -> impl Iterator<Item = &MenuIngredient> {
        self.ingredients.iter().filter(move |i| i.kind == kind)
    }
}
