use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::InvoiceNumberError;

/// Number of digits in a stored invoice number.
pub const INVOICE_NUMBER_LEN: usize = 10;

/// Digits reserved for the year part (the leading digits).
pub const YEAR_DIGITS: usize = 4;

/// Largest sequence that fits the six trailing digits.
pub const MAX_SEQUENCE: u32 = 999_999;

/// A stored invoice number: `{year:4}{sequence:6}`, e.g. `2025000001`.
///
/// The display prefix (see [`InvoiceFormatter`](super::InvoiceFormatter)) is
/// never part of this value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct InvoiceNumber(String);

impl InvoiceNumber {
    /// Parse a stored invoice number.
    ///
    /// Surrounding whitespace is not tolerated: `" 2025000001"` is a format
    /// error, while a blank string is reported as missing.
    pub fn parse(value: &str) -> Result<Self, InvoiceNumberError> {
        if value.trim().is_empty() {
            return Err(InvoiceNumberError::Required);
        }
        match sequence_of(value) {
            Some(_) => Ok(Self(value.to_string())),
            None => Err(InvoiceNumberError::InvalidFormat),
        }
    }

    /// Build a number from its parts.
    pub fn new(year: u16, sequence: u32) -> Result<Self, InvoiceNumberError> {
        if year > 9999 || sequence == 0 || sequence > MAX_SEQUENCE {
            return Err(InvoiceNumberError::InvalidFormat);
        }
        Ok(Self(format!("{year:04}{sequence:06}")))
    }

    /// The leading four digits, nominally the issue year.
    pub fn year(&self) -> u16 {
        digits_value(&self.0[..YEAR_DIGITS]) as u16
    }

    /// The trailing six digits as an integer, always positive.
    pub fn sequence(&self) -> u32 {
        digits_value(&self.0[YEAR_DIGITS..])
    }

    /// The stored 10-digit form.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume into the stored 10-digit string.
    pub fn into_string(self) -> String {
        self.0
    }
}

/// Sequence part of `value` if it is a well-formed invoice number.
///
/// Returns `None` unless `value` is exactly 10 ASCII digits with a non-zero
/// sequence part. No trimming is done here.
pub fn sequence_of(value: &str) -> Option<u32> {
    if !is_ten_digits(value) {
        return None;
    }
    let sequence = digits_value(&value[YEAR_DIGITS..]);
    (sequence > 0).then_some(sequence)
}

fn is_ten_digits(value: &str) -> bool {
    value.len() == INVOICE_NUMBER_LEN && value.bytes().all(|b| b.is_ascii_digit())
}

// Caller guarantees ASCII digits only, at most 6 of them.
fn digits_value(digits: &str) -> u32 {
    digits
        .bytes()
        .fold(0u32, |acc, b| acc * 10 + u32::from(b - b'0'))
}

impl fmt::Display for InvoiceNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for InvoiceNumber {
    type Err = InvoiceNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for InvoiceNumber {
    type Error = InvoiceNumberError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<String> for InvoiceNumber {
    type Error = InvoiceNumberError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<InvoiceNumber> for String {
    fn from(value: InvoiceNumber) -> Self {
        value.0
    }
}

impl AsRef<str> for InvoiceNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
