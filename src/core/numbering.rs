use chrono::{Datelike, NaiveDate};

use super::error::PraxisError;
use super::number::{InvoiceNumber, MAX_SEQUENCE};
use super::validation::InvoiceNumberValidator;

/// Issues the next stored invoice number, `{year:4}{sequence:6}`.
///
/// The sequence is shared across years: advancing the year keeps counting,
/// because [`InvoiceNumberValidator`] compares only the trailing six digits
/// and a reset would collide with last year's numbers.
#[derive(Debug, Clone)]
pub struct InvoiceNumberSequence {
    year: u16,
    next_sequence: u32,
}

impl InvoiceNumberSequence {
    /// Create a new sequence starting at 1.
    pub fn new(year: u16) -> Self {
        Self {
            year,
            next_sequence: 1,
        }
    }

    /// Create a sequence continuing from a given sequence value.
    pub fn starting_at(year: u16, next_sequence: u32) -> Self {
        Self {
            year,
            next_sequence,
        }
    }

    /// Continue after the highest sequence among already issued numbers.
    pub fn from_existing<I, S>(year: u16, existing: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let validator = InvoiceNumberValidator::from_existing(existing);
        Self::starting_at(year, validator.next_sequence())
    }

    /// Generate the next invoice number.
    pub fn next_number(&mut self) -> Result<InvoiceNumber, PraxisError> {
        let number = self.peek()?;
        self.next_sequence += 1;
        Ok(number)
    }

    /// Preview the next number without consuming it.
    pub fn peek(&self) -> Result<InvoiceNumber, PraxisError> {
        if self.next_sequence > MAX_SEQUENCE {
            return Err(PraxisError::Numbering(format!(
                "sequence exhausted: {} exceeds {MAX_SEQUENCE}",
                self.next_sequence
            )));
        }
        Ok(InvoiceNumber::new(self.year, self.next_sequence)?)
    }

    /// Get the current year of the sequence.
    pub fn year(&self) -> u16 {
        self.year
    }

    /// The sequence value that will be issued next.
    pub fn next_raw(&self) -> u32 {
        self.next_sequence
    }

    /// Move to a later year. The sequence keeps counting.
    pub fn advance_year(&mut self, new_year: u16) -> Result<(), PraxisError> {
        if new_year <= self.year {
            return Err(PraxisError::Numbering(format!(
                "new year {new_year} must be greater than current year {}",
                self.year
            )));
        }
        if new_year > 9999 {
            return Err(PraxisError::Numbering(format!(
                "year {new_year} does not fit four digits"
            )));
        }
        self.year = new_year;
        Ok(())
    }

    /// Auto-advance year if the given date is in a later year.
    /// Returns true if the year was advanced.
    pub fn auto_advance(&mut self, date: NaiveDate) -> bool {
        match u16::try_from(date.year()) {
            Ok(year) if year > self.year => self.advance_year(year).is_ok(),
            _ => false,
        }
    }
}
