//! Domain primitives shared by every row generator (§4.4): calendar dates,
//! fixed-point pricing decimals, addresses, grammar-driven text and pricing
//! build-up.

pub mod address;
pub mod date;
pub mod decimal;
pub mod pricing;
pub mod text;

pub use address::{generate_address, Address};
pub use date::Date;
pub use decimal::Decimal;
pub use pricing::{set_pricing, set_return_pricing, Pricing, PricingLimits, ReturnPricing};
pub use text::generate_text;
