//! IBAN checks and conversion of Czech domestic account numbers.
//!
//! A domestic number reads `prefix-number/bank`, with up to 6 prefix digits,
//! up to 10 number digits and a 4-digit bank code. The matching IBAN is
//! `CZkk` + bank + prefix (zero-padded to 6) + number (zero-padded to 10),
//! where `kk` are the ISO 7064 mod 97-10 check digits.

use crate::core::InvoiceError;

const COUNTRY: &str = "CZ";
const PREFIX_LEN: usize = 6;
const NUMBER_LEN: usize = 10;
const BANK_CODE_LEN: usize = 4;
const MAX_IBAN_LEN: usize = 34;

/// Normalize and verify an IBAN: spaces removed, letters uppercased, check
/// digits validated.
pub fn normalize_iban(iban: &str) -> Result<String, InvoiceError> {
    let iban: String = iban
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_uppercase())
        .collect();

    let bytes = iban.as_bytes();
    let well_formed = (5..=MAX_IBAN_LEN).contains(&bytes.len())
        && bytes[..2].iter().all(u8::is_ascii_uppercase)
        && bytes[2..4].iter().all(u8::is_ascii_digit)
        && bytes[4..].iter().all(u8::is_ascii_alphanumeric);
    if !well_formed {
        return Err(InvoiceError::PaymentCode(format!("malformed IBAN {iban:?}")));
    }

    let rearranged = format!("{}{}", &iban[4..], &iban[..4]);
    if mod97(&rearranged) != Some(1) {
        return Err(InvoiceError::PaymentCode(format!(
            "IBAN {iban:?} has wrong check digits"
        )));
    }
    Ok(iban)
}

/// Convert `prefix-number/bank` (prefix optional) into a Czech IBAN.
///
/// ```
/// use fakturace::payment::domestic_to_iban;
///
/// assert_eq!(
///     domestic_to_iban("19-2000145399/0800").unwrap(),
///     "CZ6508000000192000145399"
/// );
/// ```
pub fn domestic_to_iban(account: &str) -> Result<String, InvoiceError> {
    let invalid = || {
        InvoiceError::PaymentCode(format!(
            "{account:?} is neither an IBAN nor a domestic prefix-number/bank account"
        ))
    };

    let (account_part, bank) = account.trim().split_once('/').ok_or_else(invalid)?;
    let (prefix, number) = match account_part.split_once('-') {
        Some((prefix, number)) => (prefix, number),
        None => ("", account_part),
    };

    if !digits(bank, BANK_CODE_LEN, BANK_CODE_LEN)
        || !digits(prefix, 0, PREFIX_LEN)
        || !digits(number, 1, NUMBER_LEN)
        || number.bytes().all(|b| b == b'0')
    {
        return Err(invalid());
    }

    let bban = format!("{bank}{prefix:0>PREFIX_LEN$}{number:0>NUMBER_LEN$}");
    let check = mod97(&format!("{bban}{COUNTRY}00")).ok_or_else(invalid)?;
    Ok(format!("{COUNTRY}{:02}{bban}", 98 - check))
}

fn digits(text: &str, min: usize, max: usize) -> bool {
    (min..=max).contains(&text.len()) && text.bytes().all(|b| b.is_ascii_digit())
}

/// Remainder mod 97 of an alphanumeric string with letters read as 10..=35.
fn mod97(text: &str) -> Option<u32> {
    text.chars().try_fold(0u32, |acc, c| {
        let value = c.to_digit(36)?;
        Some(if value < 10 {
            (acc * 10 + value) % 97
        } else {
            (acc * 100 + value) % 97
        })
    })
}
