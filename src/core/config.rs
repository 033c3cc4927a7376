//! Invoicing configuration, pulled from structured environment variables.

use std::collections::HashMap;

use serde::Deserialize;

use super::error::PraxisError;

/// Display prefix used when none is configured.
pub const DEFAULT_PREFIX: &str = "F";

/// Environment variable holding the display prefix.
pub const PREFIX_ENV: &str = "INVOICE__PREFIX";

/// Settings for invoice number presentation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct InvoicingConfig {
    /// Prepended to stored numbers for display, e.g. `"F"` → `F2025000001`.
    pub prefix: String,
}

impl Default for InvoicingConfig {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
        }
    }
}

impl InvoicingConfig {
    /// Load from a map of environment variables (`INVOICE__PREFIX`).
    ///
    /// A missing variable falls back to [`DEFAULT_PREFIX`]; an empty value is
    /// kept and means "no prefix".
    ///
    /// # Errors
    /// Returns [`PraxisError::Config`] if the prefix contains ASCII digits.
    pub fn from_env(env: &HashMap<String, String>) -> Result<Self, PraxisError> {
        let config = match env.get(PREFIX_ENV) {
            Some(prefix) => Self {
                prefix: prefix.clone(),
            },
            None => Self::default(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Load from the process environment.
    pub fn from_process_env() -> Result<Self, PraxisError> {
        let env: HashMap<String, String> = std::env::vars().collect();
        Self::from_env(&env)
    }

    /// Check that the prefix cannot be confused with number digits.
    pub fn validate(&self) -> Result<(), PraxisError> {
        if self.prefix.bytes().any(|b| b.is_ascii_digit()) {
            return Err(PraxisError::Config(format!(
                "{PREFIX_ENV} must not contain digits, got '{}'",
                self.prefix
            )));
        }
        Ok(())
    }
}
