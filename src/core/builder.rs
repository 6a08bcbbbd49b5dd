use chrono::NaiveDate;

use super::error::InvoiceError;
use super::invoice::{DocumentKind, Invoice};
use super::item::Item;
use super::party::{Address, Creator, PartyRole};
use super::rounding::{RoundingConfig, RoundingRule};

/// Builder for invoices and corrections.
///
/// ```
/// use fakturace::*;
/// use chrono::NaiveDate;
/// use rust_decimal_macros::dec;
///
/// let invoice = InvoiceBuilder::new(
///     AddressBuilder::client("Kupec a.s.").city("Brno").build(),
///     AddressBuilder::provider("Dodavatel s.r.o.").bank_account("2600000000", "2010").build(),
///     Creator::new("Jan Novák"),
/// )
/// .number("2024-0001")
/// .variable_symbol("20240001")
/// .due_date(NaiveDate::from_ymd_opt(2024, 7, 15).unwrap())
/// .rounding_result(true)
/// .add_item(Item::new(1, "99.60").unwrap().with_tax(21).unwrap())
/// .build()
/// .unwrap();
///
/// assert_eq!(invoice.price_tax(), dec!(121));
/// assert_eq!(invoice.difference_in_rounding(), dec!(0.484));
/// ```
pub struct InvoiceBuilder {
    client: Address,
    provider: Address,
    creator: Creator,
    reason: Option<String>,
    iban: Option<String>,
    swift: Option<String>,
    items: Vec<Item>,
    title: String,
    number: String,
    variable_symbol: String,
    specific_symbol: String,
    paytype: String,
    currency: String,
    currency_locale: String,
    issue_date: Option<NaiveDate>,
    due_date: Option<NaiveDate>,
    taxable_date: Option<NaiveDate>,
    use_tax: bool,
    rounding: RoundingConfig,
}

impl InvoiceBuilder {
    pub fn new(client: Address, provider: Address, creator: Creator) -> Self {
        Self {
            client,
            provider,
            creator,
            reason: None,
            iban: None,
            swift: None,
            items: Vec::new(),
            title: String::new(),
            number: String::new(),
            variable_symbol: String::new(),
            specific_symbol: String::new(),
            paytype: String::new(),
            currency: String::new(),
            currency_locale: String::new(),
            issue_date: None,
            due_date: None,
            taxable_date: None,
            use_tax: false,
            rounding: RoundingConfig::default(),
        }
    }

    /// Start a correction document instead of a standard invoice.
    pub fn correction(
        client: Address,
        provider: Address,
        creator: Creator,
        reason: impl Into<String>,
    ) -> Self {
        let mut builder = Self::new(client, provider, creator);
        builder.reason = Some(reason.into());
        builder
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn number(mut self, number: impl Into<String>) -> Self {
        self.number = number.into();
        self
    }

    pub fn variable_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.variable_symbol = symbol.into();
        self
    }

    pub fn specific_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.specific_symbol = symbol.into();
        self
    }

    pub fn paytype(mut self, paytype: impl Into<String>) -> Self {
        self.paytype = paytype.into();
        self
    }

    pub fn iban(mut self, iban: impl Into<String>) -> Self {
        self.iban = Some(iban.into());
        self
    }

    pub fn swift(mut self, swift: impl Into<String>) -> Self {
        self.swift = Some(swift.into());
        self
    }

    pub fn currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    pub fn currency_locale(mut self, locale: impl Into<String>) -> Self {
        self.currency_locale = locale.into();
        self
    }

    pub fn issue_date(mut self, date: NaiveDate) -> Self {
        self.issue_date = Some(date);
        self
    }

    pub fn due_date(mut self, date: NaiveDate) -> Self {
        self.due_date = Some(date);
        self
    }

    pub fn taxable_date(mut self, date: NaiveDate) -> Self {
        self.taxable_date = Some(date);
        self
    }

    pub fn use_tax(mut self, use_tax: bool) -> Self {
        self.use_tax = use_tax;
        self
    }

    pub fn rounding_result(mut self, enabled: bool) -> Self {
        self.rounding.rounding_result = enabled;
        self
    }

    pub fn rounding_strategy(mut self, rule: RoundingRule) -> Self {
        self.rounding.strategy = rule;
        self
    }

    pub fn rounding_decimal_places(mut self, places: u32) -> Self {
        self.rounding.decimal_places = places;
        self
    }

    pub fn rounding(mut self, config: RoundingConfig) -> Self {
        self.rounding = config;
        self
    }

    pub fn add_item(mut self, item: Item) -> Self {
        self.items.push(item);
        self
    }

    /// Build the document, checking party roles and bank routing.
    pub fn build(self) -> Result<Invoice, InvoiceError> {
        let kind = match self.reason {
            Some(reason) => {
                if self.iban.is_some() || self.swift.is_some() {
                    return Err(InvoiceError::Contract(
                        "a correction carries no IBAN or SWIFT".into(),
                    ));
                }
                DocumentKind::Correction { reason }
            }
            None => DocumentKind::Invoice {
                iban: self.iban.unwrap_or_default(),
                swift: self.swift.unwrap_or_default(),
            },
        };

        let mut invoice = Invoice::with_kind(self.client, self.provider, self.creator, kind)?;
        invoice.title = self.title;
        invoice.number = self.number;
        invoice.variable_symbol = self.variable_symbol;
        invoice.specific_symbol = self.specific_symbol;
        invoice.paytype = self.paytype;
        invoice.currency = self.currency;
        invoice.currency_locale = self.currency_locale;
        invoice.issue_date = self.issue_date;
        invoice.due_date = self.due_date;
        invoice.taxable_date = self.taxable_date;
        invoice.use_tax = self.use_tax;
        invoice.rounding = self.rounding;
        for item in self.items {
            invoice.add_item(item);
        }
        Ok(invoice)
    }
}

/// Builder for client and provider addresses.
pub struct AddressBuilder {
    address: Address,
}

impl AddressBuilder {
    pub fn new(role: PartyRole, summary: impl Into<String>) -> Self {
        Self {
            address: Address::new(role, summary),
        }
    }

    pub fn client(summary: impl Into<String>) -> Self {
        Self::new(PartyRole::Client, summary)
    }

    pub fn provider(summary: impl Into<String>) -> Self {
        Self::new(PartyRole::Provider, summary)
    }

    pub fn street(mut self, street: impl Into<String>) -> Self {
        self.address.address = street.into();
        self
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.address.city = city.into();
        self
    }

    pub fn zip(mut self, zip: impl Into<String>) -> Self {
        self.address.zip = zip.into();
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.address.phone = phone.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.address.email = email.into();
        self
    }

    pub fn bank_name(mut self, name: impl Into<String>) -> Self {
        self.address.bank_name = name.into();
        self
    }

    /// Account number and bank code (code may be empty).
    pub fn bank_account(mut self, account: impl Into<String>, code: impl Into<String>) -> Self {
        self.address.bank_account = account.into();
        self.address.bank_code = code.into();
        self
    }

    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.address.note = note.into();
        self
    }

    pub fn vat_id(mut self, vat_id: impl Into<String>) -> Self {
        self.address.vat_id = vat_id.into();
        self
    }

    pub fn vat_note(mut self, note: impl Into<String>) -> Self {
        self.address.vat_note = note.into();
        self
    }

    /// Company registration number.
    pub fn ir(mut self, ir: impl Into<String>) -> Self {
        self.address.ir = ir.into();
        self
    }

    pub fn logo_filename(mut self, filename: impl Into<String>) -> Self {
        self.address.logo_filename = filename.into();
        self
    }

    pub fn build(self) -> Address {
        self.address
    }
}
