use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Named rule for quantizing a decimal to a target precision.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundingRule {
    /// Round half to even (banker's rounding): 2.5 → 2, 3.5 → 4.
    #[default]
    HalfEven,
    /// Round half away from zero (commercial rounding): 2.5 → 3.
    HalfUp,
    /// Round half toward zero: 2.5 → 2.
    HalfDown,
    /// Truncate toward zero.
    Down,
    /// Round away from zero.
    Up,
    /// Round toward negative infinity.
    Floor,
    /// Round toward positive infinity.
    Ceiling,
}

impl RoundingRule {
    /// The equivalent `rust_decimal` strategy.
    pub fn strategy(&self) -> RoundingStrategy {
        match self {
            Self::HalfEven => RoundingStrategy::MidpointNearestEven,
            Self::HalfUp => RoundingStrategy::MidpointAwayFromZero,
            Self::HalfDown => RoundingStrategy::MidpointTowardZero,
            Self::Down => RoundingStrategy::ToZero,
            Self::Up => RoundingStrategy::AwayFromZero,
            Self::Floor => RoundingStrategy::ToNegativeInfinity,
            Self::Ceiling => RoundingStrategy::ToPositiveInfinity,
        }
    }
}

impl From<RoundingRule> for RoundingStrategy {
    fn from(rule: RoundingRule) -> Self {
        rule.strategy()
    }
}

/// How invoice result totals are rounded.
///
/// Only the invoice-level sums are ever rounded; per-item amounts stay exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundingConfig {
    /// Whether `price()` / `price_tax()` return rounded values.
    pub rounding_result: bool,
    /// Rule used for rounding and for the rounding difference.
    pub strategy: RoundingRule,
    /// Target decimal places (0 = whole currency units).
    pub decimal_places: u32,
}

impl Default for RoundingConfig {
    fn default() -> Self {
        Self {
            rounding_result: false,
            strategy: RoundingRule::HalfEven,
            decimal_places: 0,
        }
    }
}

impl RoundingConfig {
    /// Round unconditionally with the configured rule and precision.
    pub fn round(&self, value: Decimal) -> Decimal {
        value.round_dp_with_strategy(self.decimal_places, self.strategy.strategy())
    }

    /// Round only if `rounding_result` is set.
    pub fn apply(&self, value: Decimal) -> Decimal {
        if self.rounding_result {
            self.round(value)
        } else {
            value
        }
    }
}
