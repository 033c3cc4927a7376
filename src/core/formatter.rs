use super::config::{DEFAULT_PREFIX, InvoicingConfig};

/// Converts between stored invoice numbers and their prefixed display form.
///
/// ```
/// use praxis::core::InvoiceFormatter;
///
/// let fmt = InvoiceFormatter::new("F");
/// assert_eq!(fmt.format_number("2025000001"), "F2025000001");
/// assert_eq!(fmt.strip_prefix("F2025000001"), "2025000001");
/// assert_eq!(fmt.strip_prefix("2025000001"), "2025000001");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceFormatter {
    prefix: String,
}

impl InvoiceFormatter {
    /// Create a formatter for the given display prefix.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Create a formatter using the configured prefix.
    pub fn from_config(config: &InvoicingConfig) -> Self {
        Self::new(config.prefix.clone())
    }

    /// Prepend the prefix. No validation of `number` is done.
    pub fn format_number(&self, number: &str) -> String {
        let mut out = String::with_capacity(self.prefix.len() + number.len());
        out.push_str(&self.prefix);
        out.push_str(number);
        out
    }

    /// Remove one leading prefix, or return the input unchanged.
    pub fn strip_prefix(&self, formatted: &str) -> String {
        formatted
            .strip_prefix(self.prefix.as_str())
            .unwrap_or(formatted)
            .to_string()
    }

    /// The configured display prefix.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl Default for InvoiceFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_PREFIX)
    }
}
