use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::decimal::{DecimalInput, coerce, coerce_required};
use super::error::InvoiceError;

/// Largest net or gross line total accepted (10^20). Sums of such lines stay
/// inside the range of [`Decimal`] for any invoice that fits in memory.
pub const MAX_LINE_TOTAL: Decimal = Decimal::from_parts(0x6310_0000, 0x6BC7_5E2D, 0x5, false, 0);

/// One invoice line: quantity × unit price, taxed at a percentage rate.
///
/// Numeric fields are always exact decimals. Every constructor and setter
/// coerces its input, so `Item::new(2, "100")` and
/// `Item::new(dec!(2), dec!(100))` are indistinguishable.
///
/// ```
/// use fakturace::Item;
/// use rust_decimal_macros::dec;
///
/// let item = Item::new(2, "100").unwrap().with_tax(21).unwrap();
/// assert_eq!(item.total(), dec!(200));
/// assert_eq!(item.total_tax(), dec!(242));
/// assert_eq!(item.tax_amount(), dec!(42));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ItemFields")]
pub struct Item {
    count: Decimal,
    price: Decimal,
    description: String,
    unit: String,
    tax: Decimal,
}

impl Item {
    /// Create a line with no description, no unit and zero tax.
    ///
    /// Fails with [`InvoiceError::Value`] when `count × price` exceeds
    /// [`MAX_LINE_TOTAL`].
    pub fn new(count: impl DecimalInput, price: impl DecimalInput) -> Result<Self, InvoiceError> {
        let count = coerce_required("count", count)?;
        let price = coerce_required("price", price)?;
        check_line_range(count, price, Decimal::ZERO)?;
        Ok(Self {
            count,
            price,
            description: String::new(),
            unit: String::new(),
            tax: Decimal::ZERO,
        })
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    pub fn with_tax(mut self, tax: impl DecimalInput) -> Result<Self, InvoiceError> {
        self.set_tax(tax)?;
        Ok(self)
    }

    pub fn count(&self) -> Decimal {
        self.count
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    /// Tax rate in percent (e.g. `21` for 21 %).
    pub fn tax(&self) -> Decimal {
        self.tax
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }

    pub fn set_count(&mut self, count: impl DecimalInput) -> Result<(), InvoiceError> {
        let count = coerce_required("count", count)?;
        check_line_range(count, self.price, self.tax)?;
        self.count = count;
        Ok(())
    }

    pub fn set_price(&mut self, price: impl DecimalInput) -> Result<(), InvoiceError> {
        let price = coerce_required("price", price)?;
        check_line_range(self.count, price, self.tax)?;
        self.price = price;
        Ok(())
    }

    /// Set the tax rate. `None` means untaxed and is stored as zero.
    /// Negative rates, and rates that push the gross total past
    /// [`MAX_LINE_TOTAL`], are rejected; the previous rate is kept on error.
    pub fn set_tax(&mut self, tax: impl DecimalInput) -> Result<(), InvoiceError> {
        let tax = coerce("tax", tax)?;
        if tax.is_sign_negative() && !tax.is_zero() {
            return Err(InvoiceError::Value(format!(
                "tax must not be negative, got {tax}"
            )));
        }
        check_line_range(self.count, self.price, tax)?;
        self.tax = if tax.is_zero() { Decimal::ZERO } else { tax };
        Ok(())
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn set_unit(&mut self, unit: impl Into<String>) {
        self.unit = unit.into();
    }

    /// Net line total: `price × count`, unrounded.
    pub fn total(&self) -> Decimal {
        self.price * self.count
    }

    /// Gross line total: `price × count × (1 + tax/100)`, unrounded.
    ///
    /// Computed from price and count directly rather than from [`total`](Self::total)
    /// plus a separately rounded tax amount.
    pub fn total_tax(&self) -> Decimal {
        self.price * self.count * (Decimal::ONE + self.tax / Decimal::ONE_HUNDRED)
    }

    /// Tax portion of the line: `total_tax() − total()`.
    pub fn tax_amount(&self) -> Decimal {
        self.total_tax() - self.total()
    }
}

/// Reject lines whose net or gross total would leave `±MAX_LINE_TOTAL`.
/// `total()` and `total_tax()` evaluate the same products, so they cannot
/// overflow once this passes.
fn check_line_range(count: Decimal, price: Decimal, tax: Decimal) -> Result<(), InvoiceError> {
    let factor = Decimal::ONE + tax / Decimal::ONE_HUNDRED;
    let in_range = |d: &Decimal| d.abs() <= MAX_LINE_TOTAL;
    let gross = price
        .checked_mul(count)
        .filter(in_range)
        .and_then(|net| net.checked_mul(factor))
        .filter(in_range);
    if gross.is_none() {
        tracing::debug!(%count, %price, %tax, "rejected out-of-range line");
        return Err(InvoiceError::Value(format!(
            "line total out of range: {count} × {price} at {tax} % exceeds {MAX_LINE_TOTAL}"
        )));
    }
    Ok(())
}

/// Wire shape of [`Item`]; validated through the normal setters on the way in.
#[derive(Deserialize)]
struct ItemFields {
    count: Decimal,
    price: Decimal,
    #[serde(default)]
    description: String,
    #[serde(default)]
    unit: String,
    #[serde(default)]
    tax: Option<Decimal>,
}

impl TryFrom<ItemFields> for Item {
    type Error = InvoiceError;

    fn try_from(fields: ItemFields) -> Result<Self, Self::Error> {
        let mut item = Item::new(fields.count, fields.price)?
            .with_description(fields.description)
            .with_unit(fields.unit);
        item.set_tax(fields.tax)?;
        Ok(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn negative_tax_rejected_and_previous_kept() {
        let mut item = Item::new(1, 10).unwrap().with_tax(15).unwrap();
        let err = item.set_tax(-5).unwrap_err();
        assert!(matches!(err, InvoiceError::Value(_)));
        assert_eq!(item.tax(), dec!(15));
    }

    #[test]
    fn negative_zero_tax_is_zero() {
        let item = Item::new(1, 10).unwrap().with_tax("-0").unwrap();
        assert!(item.tax().is_zero());
        assert!(!item.tax().is_sign_negative());
    }

    #[test]
    fn absent_tax_is_zero() {
        let mut item = Item::new(1, 10).unwrap().with_tax(21).unwrap();
        item.set_tax(None::<Decimal>).unwrap();
        assert_eq!(item.tax(), Decimal::ZERO);
        assert_eq!(item.total_tax(), item.total());
    }

    #[test]
    fn gross_not_built_from_rounded_net() {
        // 3 × 0.333 at 21 %: 0.999 × 1.21 = 1.20879
        let item = Item::new(3, dec!(0.333)).unwrap().with_tax(21).unwrap();
        assert_eq!(item.total(), dec!(0.999));
        assert_eq!(item.total_tax(), dec!(1.20879));
        assert_eq!(item.tax_amount(), dec!(0.20979));
    }

    #[test]
    fn line_limit_is_ten_to_the_twentieth() {
        assert_eq!(MAX_LINE_TOTAL, dec!(100000000000000000000));
    }

    #[test]
    fn huge_product_rejected_without_panic() {
        let err = Item::new("1e20", "1e20").unwrap_err();
        assert!(matches!(err, InvoiceError::Value(_)));
        assert!(Item::new(Decimal::MAX, Decimal::MAX).is_err());
    }

    #[test]
    fn limit_itself_is_accepted() {
        let item = Item::new(1, MAX_LINE_TOTAL).unwrap();
        assert_eq!(item.total_tax(), MAX_LINE_TOTAL);
        assert!(Item::new(-1, MAX_LINE_TOTAL).is_ok());
    }

    #[test]
    fn setters_keep_previous_value_when_out_of_range() {
        let mut item = Item::new(2, "1e19").unwrap().with_tax(21).unwrap();
        assert!(matches!(item.set_count(1000), Err(InvoiceError::Value(_))));
        assert_eq!(item.count(), dec!(2));
        assert!(matches!(item.set_price("1e26"), Err(InvoiceError::Value(_))));
        assert_eq!(item.price(), dec!(10000000000000000000));

        // 2e19 net fits, but 2e19 × 6 does not.
        assert!(matches!(item.set_tax(500), Err(InvoiceError::Value(_))));
        assert_eq!(item.tax(), dec!(21));
        assert_eq!(item.total_tax(), dec!(24200000000000000000));
    }
}
