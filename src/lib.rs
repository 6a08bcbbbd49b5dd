//! # fakturace
//!
//! Invoice arithmetic for commercial invoices and their corrections:
//! line totals, tax-inclusive totals, rounding with a disclosed rounding
//! difference, a breakdown by tax rate, and Czech "QR Platba" payment codes.
//!
//! All monetary values use [`rust_decimal::Decimal`], never floating point.
//!
//! ## Quick Start
//!
//! ```rust
//! use fakturace::*;
//! use rust_decimal_macros::dec;
//!
//! let mut invoice = InvoiceBuilder::new(
//!     AddressBuilder::client("Kupec a.s.").build(),
//!     AddressBuilder::provider("Dodavatel s.r.o.").build(),
//!     Creator::new("Jan Novák"),
//! )
//! .build()
//! .unwrap();
//!
//! invoice.add_item(Item::new(2, 100).unwrap().with_tax(21).unwrap());
//! invoice.add_item(Item::new(1, 50).unwrap());
//!
//! assert_eq!(invoice.price(), dec!(250));
//! assert_eq!(invoice.price_tax(), dec!(292));
//! assert_eq!(
//!     invoice.generate_breakdown_vat_table(),
//!     vec![
//!         (dec!(21), dec!(200), dec!(242), dec!(42)),
//!         (dec!(0), dec!(50), dec!(50), dec!(0)),
//!     ]
//! );
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Items, invoices, rounding, VAT breakdown, payment payload text |
//! | `qr` (default) | PNG rendering of the payment QR code |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "core")]
pub mod payment;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
