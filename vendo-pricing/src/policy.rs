use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use vendo_core::money;

/// Value thresholds and rates for the progressive tiers.
const FIRST_TIER: Decimal = dec!(100.00);
const SECOND_TIER: Decimal = dec!(500.00);
const FIRST_RATE: Decimal = dec!(0.05);
const SECOND_RATE: Decimal = dec!(0.10);
const THIRD_RATE: Decimal = dec!(0.15);

/// A discount algorithm, closed over its parameters at construction time.
///
/// Invalid parameters are rejected by the constructors, so a held policy is
/// always usable: every runtime call is total over its domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", tag = "kind", content = "value")]
pub enum DiscountPolicy {
    /// No discount. The default wherever a policy is absent.
    None,
    /// Flat amount off, capped at the original price.
    Fixed(Decimal),
    /// Fraction of the original price, in [0, 1].
    Percentage(Decimal),
    /// Rate grows with the purchase value: 5% up to 100.00, 10% up to
    /// 500.00, 15% above. Tier upper bounds are inclusive.
    Progressive,
}

#[derive(Debug, thiserror::Error)]
pub enum PolicyError {
    #[error("Fixed discount amount must not be negative: {0}")]
    NegativeFixedAmount(Decimal),

    #[error("Percentage fraction must be between 0 and 1: {0}")]
    FractionOutOfRange(Decimal),

    #[error("Unsupported discount policy kind: {0}")]
    UnsupportedKind(String),
}

impl DiscountPolicy {
    pub fn fixed(amount: Decimal) -> Result<Self, PolicyError> {
        if amount < Decimal::ZERO {
            return Err(PolicyError::NegativeFixedAmount(amount));
        }
        Ok(Self::Fixed(amount))
    }

    pub fn percentage(fraction: Decimal) -> Result<Self, PolicyError> {
        if fraction < Decimal::ZERO || fraction > Decimal::ONE {
            return Err(PolicyError::FractionOutOfRange(fraction));
        }
        Ok(Self::Percentage(fraction))
    }

    pub fn progressive() -> Self {
        Self::Progressive
    }

    /// Builds a policy from the boundary's selector string plus an optional
    /// numeric parameter (a percent for "percentage", an amount for
    /// "fixed"). Unknown selectors are a caller error.
    pub fn from_selector(kind: &str, value: Option<Decimal>) -> Result<Self, PolicyError> {
        match kind.to_lowercase().as_str() {
            "percentage" => {
                let percent = value.unwrap_or(dec!(10));
                Self::percentage(percent / dec!(100))
            }
            "fixed" => Self::fixed(value.unwrap_or(dec!(50.00))),
            "progressive" => Ok(Self::progressive()),
            other => Err(PolicyError::UnsupportedKind(other.to_string())),
        }
    }

    /// Discount owed for an original amount, rounded to two digits half-up.
    /// A non-positive amount yields zero for every policy, and the result
    /// never exceeds the amount itself.
    pub fn discount_for(&self, original: Decimal) -> Decimal {
        if original <= Decimal::ZERO {
            return Decimal::ZERO;
        }

        let raw = match self {
            Self::None => Decimal::ZERO,
            Self::Fixed(amount) => (*amount).min(original),
            Self::Percentage(fraction) => original * fraction,
            Self::Progressive => original * Self::progressive_rate(original),
        };

        money::round(raw.min(original))
    }

    fn progressive_rate(amount: Decimal) -> Decimal {
        if amount <= FIRST_TIER {
            FIRST_RATE
        } else if amount <= SECOND_TIER {
            SECOND_RATE
        } else {
            THIRD_RATE
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            Self::None => "No discount",
            Self::Fixed(_) => "Fixed discount",
            Self::Percentage(_) => "Percentage discount",
            Self::Progressive => "Progressive discount",
        }
    }

    /// Human-readable parameter summary, e.g. "15.0%" or "R$ 50.00".
    pub fn info(&self) -> String {
        match self {
            Self::None => "0%".to_string(),
            Self::Fixed(amount) => money::display(*amount),
            Self::Percentage(fraction) => format!("{:.1}%", fraction * dec!(100)),
            Self::Progressive => {
                "5% up to R$ 100, 10% up to R$ 500, 15% above R$ 500".to_string()
            }
        }
    }
}

impl Default for DiscountPolicy {
    fn default() -> Self {
        Self::None
    }
}
