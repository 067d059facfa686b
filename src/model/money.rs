use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::iter::Sum;
use std::ops::{Add, Sub};

/// An amount in the shop's single currency.
///
/// Travels over the wire as a plain JSON number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);

    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Whole currency units, e.g. `Money::from_units(14)` for "14$".
    pub fn from_units(units: u32) -> Self {
        Self(Decimal::from(units))
    }

    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// `self * count`, used for per-ingredient surcharges.
    pub fn times(self, count: usize) -> Self {
        Self(self.0 * Decimal::from(count))
    }
}

impl From<u32> for Money {
    fn from(units: u32) -> Self {
        Self::from_units(units)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Money {
        Money(self.0 - rhs.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Money {
        iter.copied().sum()
    }
}

impl Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}$", self.0.normalize())
    }
}

/// Pricing applied to every pizza: a fixed base plus a flat surcharge per
/// ingredient. Catalog entries carry no price of their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingRule {
    pub base: Money,
    pub per_ingredient: Money,
}

impl PricingRule {
    /// Base 10, plus 2 per ingredient.
    pub const STANDARD: PricingRule = PricingRule {
        base: Money::new(Decimal::TEN),
        per_ingredient: Money::new(Decimal::TWO),
    };

    /// Price of a pizza carrying `count` ingredients.
    pub fn price_for(&self, count: usize) -> Money {
        self.base + self.per_ingredient.times(count)
    }
}

impl Default for PricingRule {
    fn default() -> Self {
        Self::STANDARD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_rule_is_ten_plus_two_per_ingredient() {
        let rule = PricingRule::STANDARD;
        assert_eq!(rule.price_for(0), Money::from_units(10));
        assert_eq!(rule.price_for(2), Money::from_units(14));
        assert_eq!(rule.price_for(4), Money::from_units(18));
    }

    #[test]
    fn sums_and_displays() {
        let total: Money = [14u32, 18].into_iter().map(Money::from_units).sum();
        assert_eq!(total, Money::from_units(32));
        assert_eq!(total.to_string(), "32$");
        assert_eq!(Vec::<Money>::new().iter().sum::<Money>(), Money::ZERO);
    }

    #[test]
    fn serializes_as_json_number() {
        let json = serde_json::to_string(&Money::from_units(14)).unwrap();
        let back: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Money::from_units(14));

        // The backend stores prices as doubles.
        let from_float: Money = serde_json::from_str("16.0").unwrap();
        assert_eq!(from_float, Money::from_units(16));
    }
}
