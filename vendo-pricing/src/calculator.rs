use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use vendo_core::money;

use crate::policy::DiscountPolicy;

/// Discount owed under a policy for an original price.
pub fn discount_amount(policy: &DiscountPolicy, original: Decimal) -> Decimal {
    policy.discount_for(original)
}

/// Final price after the policy's discount, never below zero.
pub fn final_price(policy: &DiscountPolicy, original: Decimal) -> Decimal {
    if original <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    money::round(original - policy.discount_for(original))
}

/// A complete priced answer for one policy applied to one amount.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceQuote {
    pub original_price: Decimal,
    pub discount: Decimal,
    pub final_price: Decimal,
    pub policy: String,
    pub policy_info: String,
}

pub fn quote(policy: &DiscountPolicy, original: Decimal) -> PriceQuote {
    PriceQuote {
        original_price: money::round(original),
        discount: discount_amount(policy, original),
        final_price: final_price(policy, original),
        policy: policy.describe().to_string(),
        policy_info: policy.info(),
    }
}

/// One formatted line combining the policy and the computed amounts.
pub fn calculation_details(policy: &DiscountPolicy, original: Decimal) -> String {
    if original <= Decimal::ZERO {
        return "invalid price".to_string();
    }

    format!(
        "Type: {} ({}) | Original: {} | Discount: {} | Final: {}",
        policy.describe(),
        policy.info(),
        money::display(original),
        money::display(discount_amount(policy, original)),
        money::display(final_price(policy, original)),
    )
}

/// The three showcase policies applied to one price, one line each.
pub fn compare_policies(original: Decimal) -> Vec<String> {
    let showcase = [
        DiscountPolicy::Percentage(dec!(0.10)),
        DiscountPolicy::Fixed(dec!(50.00)),
        DiscountPolicy::Progressive,
    ];

    showcase
        .iter()
        .map(|policy| calculation_details(policy, original))
        .collect()
}

/// Imperative adapter over the stateless functions for callers that want a
/// "current policy" API. Each instance owns its policy; sharing one across
/// concurrent set-then-read sequences is the caller's hazard to manage, so
/// prefer one instance per logical calculation.
#[derive(Debug, Default)]
pub struct PriceCalculator {
    policy: DiscountPolicy,
}

impl PriceCalculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: DiscountPolicy) -> Self {
        Self { policy }
    }

    /// Replaces the bound policy. An absent policy means no discount.
    pub fn set_policy(&mut self, policy: Option<DiscountPolicy>) {
        self.policy = policy.unwrap_or_default();
    }

    pub fn policy(&self) -> &DiscountPolicy {
        &self.policy
    }

    pub fn discount_amount(&self, original: Decimal) -> Decimal {
        discount_amount(&self.policy, original)
    }

    pub fn final_price(&self, original: Decimal) -> Decimal {
        final_price(&self.policy, original)
    }

    pub fn calculation_details(&self, original: Decimal) -> String {
        calculation_details(&self.policy, original)
    }
}
