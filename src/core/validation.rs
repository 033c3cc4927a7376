use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::error::InvoiceNumberError;
use super::number::sequence_of;

/// Outcome of validating a candidate invoice number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "reason", rename_all = "snake_case")]
pub enum ValidationResult {
    Valid,
    Invalid(InvoiceNumberError),
}

impl ValidationResult {
    /// Whether the candidate was accepted.
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }

    /// The rejection reason, `None` when valid.
    pub fn reason(&self) -> Option<InvoiceNumberError> {
        match self {
            ValidationResult::Valid => None,
            ValidationResult::Invalid(reason) => Some(*reason),
        }
    }

    /// Convert to a `Result` for use with `?`.
    pub fn into_result(self) -> Result<(), InvoiceNumberError> {
        match self {
            ValidationResult::Valid => Ok(()),
            ValidationResult::Invalid(reason) => Err(reason),
        }
    }
}

/// Validates candidate invoice numbers against the numbers already issued.
///
/// Only the six trailing digits take part in sequencing. Numbers from
/// different years therefore share one sequence: `2024000003` collides with
/// `2025000003`.
///
/// ```
/// use praxis::core::*;
///
/// let validator = InvoiceNumberValidator::from_existing(["2025000001", "2025000002"]);
/// assert!(validator.validate("2025000003"));
/// assert_eq!(
///     validator.validate_with_reason("2025000009"),
///     ValidationResult::Invalid(InvoiceNumberError::OutOfSequence)
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct InvoiceNumberValidator {
    sequences: BTreeSet<u32>,
}

impl InvoiceNumberValidator {
    /// Collect the used sequences from already persisted numbers.
    ///
    /// Entries are trimmed; blank, malformed and zero-sequence entries are
    /// skipped silently.
    pub fn from_existing<I, S>(existing: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let sequences = existing
            .into_iter()
            .filter_map(|n| sequence_of(n.as_ref().trim()))
            .collect();
        Self { sequences }
    }

    /// Highest used sequence, `0` when nothing has been issued.
    pub fn max_sequence(&self) -> u32 {
        self.sequences.last().copied().unwrap_or(0)
    }

    /// The sequence a strictly gapless issuer would use next.
    pub fn next_sequence(&self) -> u32 {
        self.max_sequence() + 1
    }

    /// Whether `sequence` is already used by an existing number.
    pub fn contains(&self, sequence: u32) -> bool {
        self.sequences.contains(&sequence)
    }

    /// Unused sequences below the current maximum, ascending.
    pub fn missing_sequences(&self) -> Vec<u32> {
        (1..self.max_sequence())
            .filter(|s| !self.sequences.contains(s))
            .collect()
    }

    /// Check `candidate` against the collected sequences, reporting the rejection reason.
    pub fn validate_with_reason(&self, candidate: &str) -> ValidationResult {
        let result = self.check(candidate);
        if let ValidationResult::Invalid(reason) = result {
            tracing::debug!(
                candidate,
                reason = reason.code(),
                max_sequence = self.max_sequence(),
                "invoice number rejected"
            );
        }
        result
    }

    /// `true` iff [`validate_with_reason`](Self::validate_with_reason) accepts `candidate`.
    pub fn validate(&self, candidate: &str) -> bool {
        self.validate_with_reason(candidate).is_valid()
    }

    fn check(&self, candidate: &str) -> ValidationResult {
        if candidate.trim().is_empty() {
            return ValidationResult::Invalid(InvoiceNumberError::Required);
        }
        let Some(sequence) = sequence_of(candidate) else {
            return ValidationResult::Invalid(InvoiceNumberError::InvalidFormat);
        };
        if self.sequences.contains(&sequence) {
            return ValidationResult::Invalid(InvoiceNumberError::Duplicate);
        }

        let max = self.max_sequence();
        if sequence == max + 1 {
            return ValidationResult::Valid;
        }
        // Any unused sequence below the maximum may be backfilled.
        if sequence <= max {
            return ValidationResult::Valid;
        }
        ValidationResult::Invalid(InvoiceNumberError::OutOfSequence)
    }
}

/// Validate `candidate` against `existing`, reporting the rejection reason.
pub fn validate_with_reason<I, S>(candidate: &str, existing: I) -> ValidationResult
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    InvoiceNumberValidator::from_existing(existing).validate_with_reason(candidate)
}

/// `true` iff [`validate_with_reason`] returns [`ValidationResult::Valid`].
pub fn validate<I, S>(candidate: &str, existing: I) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    validate_with_reason(candidate, existing).is_valid()
}

/// Unused sequences below the highest used one in `existing`.
pub fn missing_sequences<I, S>(existing: I) -> Vec<u32>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    InvoiceNumberValidator::from_existing(existing).missing_sequences()
}
