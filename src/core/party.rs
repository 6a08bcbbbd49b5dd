//! Parties on the invoice: client, provider and the person issuing it.

use serde::{Deserialize, Serialize};

/// Which side of the transaction an [`Address`] stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PartyRole {
    /// The buyer.
    Client,
    /// The seller.
    Provider,
}

impl std::fmt::Display for PartyRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Client => f.write_str("client"),
            Self::Provider => f.write_str("provider"),
        }
    }
}

/// Client or provider details. Both roles share this one shape.
///
/// Build one with [`AddressBuilder`](super::AddressBuilder) or
/// [`Address::client`] / [`Address::provider`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    role: PartyRole,
    /// Company or person name.
    pub summary: String,
    /// Street and house number.
    pub address: String,
    pub city: String,
    pub zip: String,
    pub phone: String,
    pub email: String,
    pub bank_name: String,
    pub bank_account: String,
    pub bank_code: String,
    pub note: String,
    /// VAT identifier (DIČ).
    pub vat_id: String,
    pub vat_note: String,
    /// Company registration number (IČ).
    pub ir: String,
    pub logo_filename: String,
}

impl Address {
    /// Blank address with the given role; only `summary` is set.
    pub fn new(role: PartyRole, summary: impl Into<String>) -> Self {
        Self {
            role,
            summary: summary.into(),
            address: String::new(),
            city: String::new(),
            zip: String::new(),
            phone: String::new(),
            email: String::new(),
            bank_name: String::new(),
            bank_account: String::new(),
            bank_code: String::new(),
            note: String::new(),
            vat_id: String::new(),
            vat_note: String::new(),
            ir: String::new(),
            logo_filename: String::new(),
        }
    }

    pub fn client(summary: impl Into<String>) -> Self {
        Self::new(PartyRole::Client, summary)
    }

    pub fn provider(summary: impl Into<String>) -> Self {
        Self::new(PartyRole::Provider, summary)
    }

    pub fn role(&self) -> PartyRole {
        self.role
    }

    /// Bank account in domestic notation: `account/code`, or just the
    /// account when no bank code is set.
    pub fn bank_account_str(&self) -> String {
        if self.bank_code.is_empty() {
            self.bank_account.clone()
        } else {
            format!("{}/{}", self.bank_account, self.bank_code)
        }
    }

    /// Lines of the postal block as printed on the document.
    ///
    /// Always name, street and `"zip city"`; VAT and registration ids follow
    /// only when set, labelled through `labels`.
    pub fn address_lines(&self, labels: &dyn Labels) -> Vec<String> {
        let mut lines = vec![
            self.summary.clone(),
            self.address.clone(),
            format!("{} {}", self.zip, self.city),
        ];
        if !self.vat_id.is_empty() {
            lines.push(labels.vat_id(&self.vat_id));
        }
        if !self.ir.is_empty() {
            lines.push(labels.registration_id(&self.ir));
        }
        lines
    }

    pub fn contact_lines(&self) -> Vec<String> {
        vec![self.phone.clone(), self.email.clone()]
    }
}

/// The person issuing the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Creator {
    pub name: String,
    /// Signature or stamp image shown next to the name.
    #[serde(default)]
    pub stamp_filename: String,
}

impl Creator {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            stamp_filename: String::new(),
        }
    }

    pub fn with_stamp(mut self, stamp_filename: impl Into<String>) -> Self {
        self.stamp_filename = stamp_filename.into();
        self
    }
}

/// Localized labels used when formatting party details.
pub trait Labels {
    /// Line showing a VAT identifier.
    fn vat_id(&self, vat_id: &str) -> String;
    /// Line showing a company registration number.
    fn registration_id(&self, ir: &str) -> String;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishLabels;

impl Labels for EnglishLabels {
    fn vat_id(&self, vat_id: &str) -> String {
        format!("Vat in: {vat_id}")
    }

    fn registration_id(&self, ir: &str) -> String {
        format!("IR: {ir}")
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CzechLabels;

impl Labels for CzechLabels {
    fn vat_id(&self, vat_id: &str) -> String {
        format!("DIČ: {vat_id}")
    }

    fn registration_id(&self, ir: &str) -> String {
        format!("IČ: {ir}")
    }
}

/// Pick labels for a locale tag such as `"cs_CZ.UTF-8"` or `"en-US"`.
/// Unknown or empty tags fall back to English.
pub fn labels_for_locale(locale: &str) -> &'static dyn Labels {
    let language = locale
        .split(['_', '-', '.'])
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase();
    match language.as_str() {
        "cs" => &CzechLabels as &dyn Labels,
        _ => &EnglishLabels,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locale_selection() {
        assert_eq!(labels_for_locale("cs_CZ.UTF-8").vat_id("CZ1"), "DIČ: CZ1");
        assert_eq!(labels_for_locale("CS").registration_id("1"), "IČ: 1");
        assert_eq!(labels_for_locale("en_US").vat_id("CZ1"), "Vat in: CZ1");
        assert_eq!(labels_for_locale("").vat_id("CZ1"), "Vat in: CZ1");
    }

    #[test]
    fn bank_account_with_and_without_code() {
        let mut provider = Address::provider("ACME s.r.o.");
        provider.bank_account = "2600000000".into();
        assert_eq!(provider.bank_account_str(), "2600000000");
        provider.bank_code = "2010".into();
        assert_eq!(provider.bank_account_str(), "2600000000/2010");
    }
}
