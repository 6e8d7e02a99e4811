//! Burger aggregate: assembly operations, pricing, and the receipt.

use grillhouse_catalog::{Bun, BunRef, Ingredient, IngredientRef};
use grillhouse_core::{DomainError, DomainResult, Money};

/// Aggregate root: one burger being assembled for one order.
///
/// Holds at most one bun and an ordered, index-addressable sequence of
/// ingredients. Duplicates are allowed and insertion order is significant:
/// the sequence is the burger's layer structure, printed top to bottom on
/// the receipt. Intended for a single caller; the composing application
/// keeps one `Burger` per in-flight order.
#[derive(Debug, Default, Clone)]
pub struct Burger {
    bun: Option<BunRef>,
    ingredients: Vec<IngredientRef>,
}

impl Burger {
    /// An empty burger: no bun, no ingredients.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bun(&self) -> Option<&BunRef> {
        self.bun.as_ref()
    }

    pub fn ingredients(&self) -> &[IngredientRef] {
        &self.ingredients
    }

    pub fn ingredient_count(&self) -> usize {
        self.ingredients.len()
    }

    /// Whether nothing has been assembled yet.
    pub fn is_empty(&self) -> bool {
        self.bun.is_none() && self.ingredients.is_empty()
    }

    /// Replace the held bun unconditionally.
    ///
    /// The previous bun (if any) is dropped without further checks; later
    /// price and receipt calls use the new one.
    pub fn set_buns(&mut self, bun: BunRef) {
        self.bun = Some(bun);
    }

    /// Append an ingredient to the end of the sequence.
    pub fn add_ingredient(&mut self, ingredient: IngredientRef) {
        self.ingredients.push(ingredient);
    }

    /// Remove and return the ingredient at `index`.
    ///
    /// Later ingredients shift down by one. Fails when `index` is outside
    /// the current sequence.
    pub fn remove_ingredient(&mut self, index: usize) -> DomainResult<IngredientRef> {
        self.check_index(index)?;
        Ok(self.ingredients.remove(index))
    }

    /// Relocate the ingredient at `from_index` to `to_index`.
    ///
    /// Remove-then-insert, not a swap: the element is taken out at
    /// `from_index` and reinserted at `to_index` of the shortened sequence,
    /// shifting everything in between. Both indices are validated against
    /// the sequence as it was before the call, so a failed move never
    /// changes anything.
    pub fn move_ingredient(&mut self, from_index: usize, to_index: usize) -> DomainResult<()> {
        self.check_index(from_index)?;
        self.check_index(to_index)?;
        let ingredient = self.ingredients.remove(from_index);
        self.ingredients.insert(to_index, ingredient);
        Ok(())
    }

    /// Total price: the bun charged twice (top and bottom halves) plus every
    /// ingredient in the sequence.
    ///
    /// Fails with [`DomainError::MissingBun`] when no bun is set.
    pub fn price(&self) -> DomainResult<Money> {
        let bun = self.bun.as_ref().ok_or(DomainError::MissingBun)?;
        let bun_total = bun
            .price()
            .checked_mul(2)
            .ok_or_else(|| DomainError::invariant("burger price overflow"))?;
        self.ingredients
            .iter()
            .try_fold(bun_total, |total, ingredient| {
                total
                    .checked_add(ingredient.price())
                    .ok_or_else(|| DomainError::invariant("burger price overflow"))
            })
    }

    /// Printable receipt: a bun frame line, one line per ingredient in
    /// sequence order, the frame line again, then a blank line and the
    /// total. No trailing newline.
    ///
    /// Fails with [`DomainError::MissingBun`] when no bun is set.
    pub fn receipt(&self) -> DomainResult<String> {
        let bun = self.bun.as_ref().ok_or(DomainError::MissingBun)?;
        let total = self.price()?;

        let frame = format!("(==== {} ====)", bun.name());
        let mut receipt = format!("{frame}\n");
        for ingredient in &self.ingredients {
            receipt.push_str(&format!(
                "= {} {} =\n",
                ingredient.kind().to_lowercase(),
                ingredient.name()
            ));
        }
        receipt.push_str(&frame);
        receipt.push_str(&format!("\n\nPrice: {total}"));
        Ok(receipt)
    }

    fn check_index(&self, index: usize) -> DomainResult<()> {
        let len = self.ingredients.len();
        if index >= len {
            return Err(DomainError::index_out_of_range(index, len));
        }
        Ok(())
    }
}
