pub mod calculator;
pub mod policy;

pub use calculator::{
    calculation_details, compare_policies, discount_amount, final_price, quote, PriceCalculator,
    PriceQuote,
};
pub use policy::{DiscountPolicy, PolicyError};
