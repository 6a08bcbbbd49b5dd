//! Payment QR codes ("QR Platba") derived from invoice totals.
//!
//! [`PaymentPayload`] builds the SPAYD text and is always available. With the
//! `qr` feature, [`PaymentCodeBuilder`] renders it to a PNG in a temporary
//! file.

mod iban;
#[cfg(feature = "qr")]
mod qr;
mod spayd;

pub use iban::{domestic_to_iban, normalize_iban};
#[cfg(feature = "qr")]
pub use qr::PaymentCodeBuilder;
pub use spayd::PaymentPayload;
