//! Coercion of caller input into exact decimals.
//!
//! Quantities, prices and tax rates accept integers, strings, floats and
//! [`Decimal`] alike. Everything is converted once, at the boundary, so the
//! rest of the crate only ever sees [`Decimal`].

use std::str::FromStr;

use rust_decimal::Decimal;

use super::error::InvoiceError;

/// A value that can be turned into an exact decimal.
///
/// ```
/// use fakturace::DecimalInput;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(2_i32.into_decimal(), Some(dec!(2)));
/// assert_eq!(" 19.90 ".into_decimal(), Some(dec!(19.90)));
/// assert_eq!(0.1_f64.into_decimal(), Some(dec!(0.1)));
/// assert_eq!("abc".into_decimal(), None);
/// ```
pub trait DecimalInput {
    /// Convert to a decimal, or `None` if the value is not a finite number.
    fn into_decimal(self) -> Option<Decimal>;

    /// True when the value represents "no value at all" (`None`).
    fn is_absent(&self) -> bool {
        false
    }

    /// Rendering of the raw input for error messages.
    fn describe(&self) -> String;
}

impl DecimalInput for Decimal {
    fn into_decimal(self) -> Option<Decimal> {
        Some(self)
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}

impl DecimalInput for &Decimal {
    fn into_decimal(self) -> Option<Decimal> {
        Some(*self)
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}

macro_rules! impl_integer_input {
    ($($t:ty),* $(,)?) => {
        $(
            impl DecimalInput for $t {
                fn into_decimal(self) -> Option<Decimal> {
                    Some(Decimal::from(self))
                }

                fn describe(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

impl_integer_input!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl DecimalInput for f64 {
    // Goes through the shortest round-trip representation, so 0.1 becomes
    // exactly 0.1 rather than the binary expansion of the nearest double.
    fn into_decimal(self) -> Option<Decimal> {
        if !self.is_finite() {
            return None;
        }
        parse_decimal(&self.to_string())
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}

impl DecimalInput for f32 {
    fn into_decimal(self) -> Option<Decimal> {
        if !self.is_finite() {
            return None;
        }
        parse_decimal(&self.to_string())
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}

impl DecimalInput for &str {
    fn into_decimal(self) -> Option<Decimal> {
        parse_decimal(self)
    }

    fn describe(&self) -> String {
        format!("{self:?}")
    }
}

impl DecimalInput for String {
    fn into_decimal(self) -> Option<Decimal> {
        parse_decimal(&self)
    }

    fn describe(&self) -> String {
        format!("{self:?}")
    }
}

impl DecimalInput for &String {
    fn into_decimal(self) -> Option<Decimal> {
        parse_decimal(self)
    }

    fn describe(&self) -> String {
        format!("{self:?}")
    }
}

impl<T: DecimalInput> DecimalInput for Option<T> {
    fn into_decimal(self) -> Option<Decimal> {
        match self {
            Some(value) => value.into_decimal(),
            None => Some(Decimal::ZERO),
        }
    }

    fn is_absent(&self) -> bool {
        self.is_none()
    }

    fn describe(&self) -> String {
        match self {
            Some(value) => value.describe(),
            None => "None".into(),
        }
    }
}

/// Parse decimal text in plain (`"12.50"`) or scientific (`"1.25e1"`) notation.
fn parse_decimal(text: &str) -> Option<Decimal> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    if let Some(pos) = text.find(['e', 'E']) {
        // Anything beyond a three-digit exponent cannot fit in 28 digits anyway.
        let exponent = text[pos + 1..].trim_start_matches(['+', '-']);
        if exponent.is_empty()
            || exponent.len() > 3
            || !exponent.bytes().all(|b| b.is_ascii_digit())
        {
            return None;
        }
        return Decimal::from_scientific(text).ok();
    }
    Decimal::from_str(text).ok()
}

/// Coerce a required numeric field. Absent values are rejected.
pub(crate) fn coerce_required<T: DecimalInput>(
    field: &str,
    value: T,
) -> Result<Decimal, InvoiceError> {
    if value.is_absent() {
        return Err(InvoiceError::Value(format!("{field} is required")));
    }
    coerce(field, value)
}

/// Coerce a numeric field; `None` becomes zero.
pub(crate) fn coerce<T: DecimalInput>(field: &str, value: T) -> Result<Decimal, InvoiceError> {
    let raw = value.describe();
    value.into_decimal().ok_or_else(|| {
        tracing::debug!(field, input = %raw, "rejected non-decimal input");
        InvoiceError::Value(format!("{field} must be a decimal number, got {raw}"))
    })
}
