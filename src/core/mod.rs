//! Core invoice types and totals.
//!
//! Items, invoices and corrections with exact-decimal arithmetic, the
//! rounding policy and the VAT breakdown.

mod builder;
pub mod currencies;
mod decimal;
mod error;
mod invoice;
mod item;
mod party;
mod rounding;

pub use builder::*;
pub use decimal::DecimalInput;
pub use error::*;
pub use invoice::*;
pub use item::*;
pub use party::*;
pub use rounding::*;
