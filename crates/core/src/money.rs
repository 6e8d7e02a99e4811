//! Money value object.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::value_object::ValueObject;

/// An amount of money in the smallest currency unit (cents).
///
/// Prices are kept as integer cents so totals stay exact under addition.
/// `Display` renders major units with the shortest fraction that still
/// round-trips, keeping at least one digit: `12_500` cents prints as
/// `125.0`, `12_550` as `125.5`, `12_525` as `125.25`. Receipts rely on
/// this rendering.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    pub const ZERO: Money = Money(0);

    /// Amount from cents.
    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// Amount from whole major units, e.g. `from_major(50)` is `50.0`.
    pub const fn from_major(major: u64) -> Self {
        Self(major * 100)
    }

    /// Amount in cents.
    pub const fn cents(self) -> u64 {
        self.0
    }

    /// Checked addition; `None` on overflow.
    pub fn checked_add(self, rhs: Money) -> Option<Money> {
        self.0.checked_add(rhs.0).map(Money)
    }

    /// Checked multiplication by a plain factor; `None` on overflow.
    pub fn checked_mul(self, factor: u64) -> Option<Money> {
        self.0.checked_mul(factor).map(Money)
    }

    /// Checked sum over any iterator of amounts; `None` on overflow.
    pub fn checked_sum<I>(amounts: I) -> Option<Money>
    where
        I: IntoIterator<Item = Money>,
    {
        amounts.into_iter().try_fold(Money::ZERO, Money::checked_add)
    }
}

impl ValueObject for Money {}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let major = self.0 / 100;
        let frac = self.0 % 100;
        if frac == 0 {
            write!(f, "{major}.0")
        } else if frac % 10 == 0 {
            write!(f, "{major}.{}", frac / 10)
        } else {
            write!(f, "{major}.{frac:02}")
        }
    }
}
