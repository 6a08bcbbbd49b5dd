//! Short Payment Descriptor (SPAYD, "QR Platba") text payload.
//!
//! Format: `SPD*1.0*KEY:value*KEY:value…`. Keys emitted here:
//!
//! | Key    | Source                                   |
//! |--------|------------------------------------------|
//! | `ACC`  | IBAN, with `+BIC` when SWIFT is set      |
//! | `AM`   | invoice gross total, two decimals        |
//! | `CC`   | ISO 4217 code resolved from the currency |
//! | `X-VS` | variable symbol                          |
//! | `X-SS` | specific symbol                          |
//! | `DT`   | due date as `YYYYMMDD`                   |
//!
//! Only non-empty fields are written.
//!
//! `ACC` is the invoice's own IBAN when one is set. Otherwise the provider's
//! domestic `prefix-number/bank` account is converted to a Czech IBAN.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::core::currencies::iso_currency_code;
use super::iban::{domestic_to_iban, normalize_iban};
use crate::core::{Invoice, InvoiceError};

const HEADER: &str = "SPD*1.0";
const MAX_AMOUNT_LEN: usize = 10;
const MAX_SYMBOL_LEN: usize = 10;
const BIC_LENS: [usize; 2] = [8, 11];

/// Payment instruction derived from an invoice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentPayload {
    /// IBAN, optionally followed by `+BIC`.
    pub account: String,
    /// Amount to pay; `None` leaves it to the payer.
    pub amount: Option<Decimal>,
    /// ISO 4217 currency code.
    pub currency: Option<String>,
    pub variable_symbol: Option<String>,
    pub specific_symbol: Option<String>,
    pub due_date: Option<NaiveDate>,
}

impl PaymentPayload {
    /// Collect payment fields from a populated invoice.
    ///
    /// The amount is [`Invoice::price_tax`] rounded to cents. Empty symbols,
    /// an amount that rounds to zero, an unset due date and an unrecognized
    /// currency are left out. The result is checked for encodability before
    /// it is returned.
    pub fn from_invoice(invoice: &Invoice) -> Result<Self, InvoiceError> {
        let account = payment_account(invoice)?;
        let amount = Some(round_amount(invoice.price_tax())).filter(|a| !a.is_zero());

        let payload = Self {
            account,
            amount,
            currency: iso_currency_code(&invoice.currency).map(String::from),
            variable_symbol: non_empty(&invoice.variable_symbol),
            specific_symbol: non_empty(&invoice.specific_symbol),
            due_date: invoice.due_date,
        };
        payload.encode()?;
        Ok(payload)
    }

    /// Render the SPAYD text.
    pub fn encode(&self) -> Result<String, InvoiceError> {
        if self.account.is_empty() {
            return Err(InvoiceError::PaymentCode("account must not be empty".into()));
        }

        let mut fields = vec![format!("ACC:{}", escape(&self.account))];

        if let Some(amount) = self.amount {
            fields.push(format!("AM:{}", format_amount(amount)?));
        }
        if let Some(currency) = &self.currency {
            fields.push(format!("CC:{}", escape(currency)));
        }
        if let Some(vs) = &self.variable_symbol {
            fields.push(format!("X-VS:{}", check_symbol("variable symbol", vs)?));
        }
        if let Some(ss) = &self.specific_symbol {
            fields.push(format!("X-SS:{}", check_symbol("specific symbol", ss)?));
        }
        if let Some(date) = self.due_date {
            fields.push(format!("DT:{}", date.format("%Y%m%d")));
        }

        Ok(format!("{HEADER}*{}", fields.join("*")))
    }
}

/// Resolve the `ACC` value for an invoice.
fn payment_account(invoice: &Invoice) -> Result<String, InvoiceError> {
    let iban = invoice.iban().unwrap_or_default().trim();
    if !iban.is_empty() {
        let iban = normalize_iban(iban)?;
        let swift = invoice.swift().unwrap_or_default().trim();
        if swift.is_empty() {
            return Ok(iban);
        }
        return Ok(format!("{iban}+{}", check_bic(swift)?));
    }

    let provider = invoice.provider();
    let account = provider.bank_account.trim();
    let bank_code = provider.bank_code.trim();
    if account.is_empty() {
        return Err(InvoiceError::Contract(
            "an IBAN or provider bank account is required for a payment code".into(),
        ));
    }
    if bank_code.is_empty() {
        // Already an IBAN, or `number/bank` typed into one field.
        if account.starts_with(|c: char| c.is_ascii_alphabetic()) {
            return normalize_iban(account);
        }
        return domestic_to_iban(account);
    }
    domestic_to_iban(&format!("{account}/{bank_code}"))
}

fn check_bic(bic: &str) -> Result<String, InvoiceError> {
    let bic = bic.to_ascii_uppercase();
    if !BIC_LENS.contains(&bic.len()) || !bic.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return Err(InvoiceError::PaymentCode(format!(
            "SWIFT code must be 8 or 11 letters or digits, got {bic:?}"
        )));
    }
    Ok(bic)
}

fn round_amount(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven)
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Two decimal places, at most ten characters, never negative.
fn format_amount(amount: Decimal) -> Result<String, InvoiceError> {
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(InvoiceError::PaymentCode(format!(
            "amount must not be negative, got {amount}"
        )));
    }
    let mut rounded = round_amount(amount);
    rounded.rescale(2);
    let text = rounded.abs().to_string();
    if text.len() > MAX_AMOUNT_LEN {
        return Err(InvoiceError::PaymentCode(format!(
            "amount {text} exceeds {MAX_AMOUNT_LEN} characters"
        )));
    }
    Ok(text)
}

fn check_symbol<'a>(name: &str, symbol: &'a str) -> Result<&'a str, InvoiceError> {
    if symbol.is_empty()
        || symbol.len() > MAX_SYMBOL_LEN
        || !symbol.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(InvoiceError::PaymentCode(format!(
            "{name} must be 1-{MAX_SYMBOL_LEN} digits, got {symbol:?}"
        )));
    }
    Ok(symbol)
}

/// `*` separates fields, so it must not appear raw inside a value.
fn escape(value: &str) -> String {
    value.replace('*', "%2A")
}
