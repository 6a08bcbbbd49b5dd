use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use super::error::InvoiceError;
use super::item::Item;
use super::party::{Address, Creator, Labels, PartyRole, labels_for_locale};
use super::rounding::RoundingConfig;

/// Invoice or correction document with its line items.
///
/// Totals are recomputed from the items on every read. Nothing is cached,
/// so items changed through [`items_mut`](Self::items_mut) show up in the
/// next call to [`price`](Self::price).
///
/// ```
/// use fakturace::*;
/// use rust_decimal_macros::dec;
///
/// let mut invoice = Invoice::new(
///     Address::client("Kupec a.s."),
///     Address::provider("Dodavatel s.r.o."),
///     Creator::new("Jan Novák"),
/// ).unwrap();
/// invoice.add_item(Item::new(2, 100).unwrap().with_tax(21).unwrap());
/// invoice.add_item(Item::new(1, 50).unwrap());
///
/// assert_eq!(invoice.price(), dec!(250));
/// assert_eq!(invoice.price_tax(), dec!(292));
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct Invoice {
    client: Address,
    provider: Address,
    creator: Creator,
    items: Vec<Item>,
    kind: DocumentKind,
    pub title: String,
    pub number: String,
    pub variable_symbol: String,
    pub specific_symbol: String,
    /// Payment type code (e.g. "bank transfer", "cash").
    pub paytype: String,
    /// Currency as printed on the document, e.g. "CZK" or "Kč".
    pub currency: String,
    /// Locale tag used for number formatting and labels, e.g. "cs_CZ.UTF-8".
    pub currency_locale: String,
    pub issue_date: Option<NaiveDate>,
    /// Payback (due) date.
    pub due_date: Option<NaiveDate>,
    /// Date of taxable supply.
    pub taxable_date: Option<NaiveDate>,
    /// Whether tax-inclusive figures are the authoritative ones.
    pub use_tax: bool,
    pub rounding: RoundingConfig,
}

/// Standard invoice or correction; decides which header fields exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum DocumentKind {
    /// Regular invoice carrying bank routing details.
    Invoice { iban: String, swift: String },
    /// Credit or debit note correcting an earlier invoice.
    Correction { reason: String },
}

impl Invoice {
    /// Create an empty standard invoice.
    ///
    /// Fails with [`InvoiceError::Contract`] if `client` or `provider` carries
    /// the wrong [`PartyRole`].
    pub fn new(client: Address, provider: Address, creator: Creator) -> Result<Self, InvoiceError> {
        Self::with_kind(
            client,
            provider,
            creator,
            DocumentKind::Invoice {
                iban: String::new(),
                swift: String::new(),
            },
        )
    }

    /// Create an empty correction document.
    pub fn correction(
        client: Address,
        provider: Address,
        creator: Creator,
        reason: impl Into<String>,
    ) -> Result<Self, InvoiceError> {
        Self::with_kind(
            client,
            provider,
            creator,
            DocumentKind::Correction {
                reason: reason.into(),
            },
        )
    }

    pub(crate) fn with_kind(
        client: Address,
        provider: Address,
        creator: Creator,
        kind: DocumentKind,
    ) -> Result<Self, InvoiceError> {
        expect_role(&client, PartyRole::Client)?;
        expect_role(&provider, PartyRole::Provider)?;

        Ok(Self {
            client,
            provider,
            creator,
            items: Vec::new(),
            kind,
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
        })
    }

    pub fn client(&self) -> &Address {
        &self.client
    }

    pub fn provider(&self) -> &Address {
        &self.provider
    }

    pub fn creator(&self) -> &Creator {
        &self.creator
    }

    pub fn kind(&self) -> &DocumentKind {
        &self.kind
    }

    pub fn kind_mut(&mut self) -> &mut DocumentKind {
        &mut self.kind
    }

    pub fn is_correction(&self) -> bool {
        matches!(self.kind, DocumentKind::Correction { .. })
    }

    /// IBAN of a standard invoice; `None` for corrections.
    pub fn iban(&self) -> Option<&str> {
        match &self.kind {
            DocumentKind::Invoice { iban, .. } => Some(iban),
            DocumentKind::Correction { .. } => None,
        }
    }

    /// SWIFT/BIC of a standard invoice; `None` for corrections.
    pub fn swift(&self) -> Option<&str> {
        match &self.kind {
            DocumentKind::Invoice { swift, .. } => Some(swift),
            DocumentKind::Correction { .. } => None,
        }
    }

    /// Correction reason; `None` for standard invoices.
    pub fn reason(&self) -> Option<&str> {
        match &self.kind {
            DocumentKind::Correction { reason } => Some(reason),
            DocumentKind::Invoice { .. } => None,
        }
    }

    /// Labels matching `currency_locale`.
    pub fn labels(&self) -> &'static dyn Labels {
        labels_for_locale(&self.currency_locale)
    }

    /// Append a line. Order is preserved; duplicates are allowed.
    pub fn add_item(&mut self, item: Item) {
        self.items.push(item);
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn items_mut(&mut self) -> &mut [Item] {
        &mut self.items
    }

    /// Net total, rounded if `rounding.rounding_result` is set.
    pub fn price(&self) -> Decimal {
        self.rounding.apply(self.price_unrounded())
    }

    /// Gross total, rounded if `rounding.rounding_result` is set.
    pub fn price_tax(&self) -> Decimal {
        self.rounding.apply(self.price_tax_unrounded())
    }

    /// Exact sum of all item net totals.
    pub fn price_unrounded(&self) -> Decimal {
        self.items.iter().map(Item::total).sum()
    }

    /// Exact sum of all item gross totals.
    pub fn price_tax_unrounded(&self) -> Decimal {
        self.items.iter().map(Item::total_tax).sum()
    }

    /// `round(gross) − gross` on the unrounded gross total.
    ///
    /// Available whether or not `rounding_result` is set, so the document can
    /// disclose the difference either way.
    pub fn difference_in_rounding(&self) -> Decimal {
        let price = self.price_tax_unrounded();
        self.rounding.round(price) - price
    }

    /// Total tax over all items, unrounded.
    pub fn tax_total(&self) -> Decimal {
        self.price_tax_unrounded() - self.price_unrounded()
    }

    /// The total the customer pays: gross when `use_tax`, net otherwise.
    pub fn amount_due(&self) -> Decimal {
        if self.use_tax {
            self.price_tax()
        } else {
            self.price()
        }
    }

    /// Group items by tax rate.
    ///
    /// Rates are compared numerically (`21` and `21.00` share a group). Groups
    /// appear in the order their rate first occurs among the items.
    pub fn generate_breakdown_vat(&self) -> VatBreakdown {
        let mut groups: Vec<VatGroup> = Vec::new();
        for item in &self.items {
            match groups.iter_mut().find(|g| g.rate == item.tax()) {
                Some(group) => {
                    group.total += item.total();
                    group.total_tax += item.total_tax();
                    group.tax += item.tax_amount();
                }
                None => groups.push(VatGroup {
                    rate: item.tax(),
                    total: item.total(),
                    total_tax: item.total_tax(),
                    tax: item.tax_amount(),
                }),
            }
        }
        VatBreakdown { groups }
    }

    /// Breakdown as `(rate, net, gross, tax)` rows in first-occurrence order.
    pub fn generate_breakdown_vat_table(&self) -> Vec<(Decimal, Decimal, Decimal, Decimal)> {
        self.generate_breakdown_vat().into_table()
    }
}

fn expect_role(party: &Address, role: PartyRole) -> Result<(), InvoiceError> {
    if party.role() != role {
        return Err(InvoiceError::Contract(format!(
            "expected a {role} address, got {} '{}'",
            party.role(),
            party.summary
        )));
    }
    Ok(())
}

/// Subtotals of all items sharing one tax rate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VatGroup {
    /// Tax rate in percent.
    pub rate: Decimal,
    /// Summed net totals.
    pub total: Decimal,
    /// Summed gross totals.
    pub total_tax: Decimal,
    /// Summed tax amounts.
    pub tax: Decimal,
}

/// Tax-rate breakdown of an invoice, ordered by first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VatBreakdown {
    groups: Vec<VatGroup>,
}

impl VatBreakdown {
    /// Look up the group for a rate (numeric comparison).
    pub fn get(&self, rate: Decimal) -> Option<&VatGroup> {
        self.groups.iter().find(|g| g.rate == rate)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, VatGroup> {
        self.groups.iter()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Distinct rates in breakdown order.
    pub fn rates(&self) -> Vec<Decimal> {
        self.groups.iter().map(|g| g.rate).collect()
    }

    pub fn into_table(self) -> Vec<(Decimal, Decimal, Decimal, Decimal)> {
        self.groups
            .into_iter()
            .map(|g| (g.rate, g.total, g.total_tax, g.tax))
            .collect()
    }
}

impl<'a> IntoIterator for &'a VatBreakdown {
    type Item = &'a VatGroup;
    type IntoIter = std::slice::Iter<'a, VatGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

impl IntoIterator for VatBreakdown {
    type Item = VatGroup;
    type IntoIter = std::vec::IntoIter<VatGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}
