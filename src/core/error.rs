use thiserror::Error;

/// Errors that can occur while building invoices or payment codes.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum InvoiceError {
    /// A party, item or field was used in a role it cannot fill.
    #[error("contract violation: {0}")]
    Contract(String),

    /// A numeric field received a value that is not an exact decimal.
    #[error("invalid value: {0}")]
    Value(String),

    /// The payment payload or its QR image could not be encoded.
    #[error("payment code error: {0}")]
    PaymentCode(String),

    /// Temporary file creation or removal failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
