use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while configuring or running praxis components.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PraxisError {
    /// Configuration value missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// Invoice number sequencing error.
    #[error("numbering error: {0}")]
    Numbering(String),

    /// A candidate invoice number was rejected.
    #[error("invalid invoice number: {0}")]
    InvoiceNumber(#[from] InvoiceNumberError),

    /// Calendar slot generation received invalid input.
    #[error("schedule error: {0}")]
    Schedule(String),

    /// Audit event could not be captured.
    #[error("audit error: {0}")]
    Audit(String),
}

/// Why an invoice number was rejected.
///
/// The `Display` form and the serialized form are the stable reason codes
/// handed to the translation layer, e.g. `invoice_number_duplicate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
pub enum InvoiceNumberError {
    /// Candidate was empty or whitespace only.
    #[serde(rename = "invoice_number_required")]
    #[error("invoice_number_required")]
    Required,

    /// Candidate is not exactly 10 ASCII digits, or its sequence part is zero.
    #[serde(rename = "invoice_number_invalid_format")]
    #[error("invoice_number_invalid_format")]
    InvalidFormat,

    /// Sequence part is already used by an existing number.
    #[serde(rename = "invoice_number_duplicate")]
    #[error("invoice_number_duplicate")]
    Duplicate,

    /// Sequence part skips ahead of the next free number.
    #[serde(rename = "invoice_number_out_of_sequence")]
    #[error("invoice_number_out_of_sequence")]
    OutOfSequence,
}

impl InvoiceNumberError {
    /// All reason codes, in the order the validator checks them.
    pub const ALL: [InvoiceNumberError; 4] = [
        InvoiceNumberError::Required,
        InvoiceNumberError::InvalidFormat,
        InvoiceNumberError::Duplicate,
        InvoiceNumberError::OutOfSequence,
    ];

    /// Stable identifier for lookup in a translation catalogue.
    pub fn code(&self) -> &'static str {
        match self {
            InvoiceNumberError::Required => "invoice_number_required",
            InvoiceNumberError::InvalidFormat => "invoice_number_invalid_format",
            InvoiceNumberError::Duplicate => "invoice_number_duplicate",
            InvoiceNumberError::OutOfSequence => "invoice_number_out_of_sequence",
        }
    }

    /// Look up a reason from its code.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.code() == code)
    }
}
