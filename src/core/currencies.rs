//! Mapping of printed currency names to ISO 4217 codes.
//!
//! Invoices often carry the currency the way it is printed ("Kč", "€").
//! Payment payloads need the ISO 4217 code, so both spellings resolve here.

/// Resolve an ISO 4217 code from a code or a common currency symbol.
///
/// ```
/// use fakturace::core::currencies::iso_currency_code;
///
/// assert_eq!(iso_currency_code("Kč"), Some("CZK"));
/// assert_eq!(iso_currency_code("eur"), Some("EUR"));
/// assert_eq!(iso_currency_code("dollars"), None);
/// ```
pub fn iso_currency_code(currency: &str) -> Option<&'static str> {
    let currency = currency.trim();
    if let Some(code) = symbol_to_code(currency) {
        return Some(code);
    }
    let upper = currency.to_ascii_uppercase();
    CURRENCY_CODES
        .binary_search(&upper.as_str())
        .ok()
        .map(|i| CURRENCY_CODES[i])
}

fn symbol_to_code(symbol: &str) -> Option<&'static str> {
    match symbol {
        "Kč" | "Kc" | "kč" => Some("CZK"),
        "€" => Some("EUR"),
        "$" | "US$" => Some("USD"),
        "£" => Some("GBP"),
        "zł" => Some("PLN"),
        "Ft" => Some("HUF"),
        "Fr." | "CHF" => Some("CHF"),
        _ => None,
    }
}

/// Sorted for binary search.
static CURRENCY_CODES: &[&str] = &[
    "AUD", // Australian Dollar
    "BGN", // Bulgarian Lev
    "CAD", // Canadian Dollar
    "CHF", // Swiss Franc
    "CNY", // Chinese Yuan
    "CZK", // Czech Koruna
    "DKK", // Danish Krone
    "EUR", // Euro
    "GBP", // Pound Sterling
    "HUF", // Hungarian Forint
    "JPY", // Japanese Yen
    "NOK", // Norwegian Krone
    "PLN", // Polish Zloty
    "RON", // Romanian Leu
    "SEK", // Swedish Krona
    "UAH", // Ukrainian Hryvnia
    "USD", // US Dollar
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_sorted() {
        let mut sorted = CURRENCY_CODES.to_vec();
        sorted.sort_unstable();
        assert_eq!(sorted, CURRENCY_CODES);
    }

    #[test]
    fn blank_is_unknown() {
        assert_eq!(iso_currency_code(""), None);
        assert_eq!(iso_currency_code("  "), None);
    }

    #[test]
    fn symbols_and_codes() {
        assert_eq!(iso_currency_code(" CZK "), Some("CZK"));
        assert_eq!(iso_currency_code("€"), Some("EUR"));
        assert_eq!(iso_currency_code("zł"), Some("PLN"));
    }
}
