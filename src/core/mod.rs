//! Invoice numbers: validation, display formatting, and issuing.
//!
//! Stored numbers are 10 digits, `{year:4}{sequence:6}`. Sequencing looks at
//! the trailing six digits only.

mod config;
mod error;
mod formatter;
mod number;
mod numbering;
mod validation;

pub use config::*;
pub use error::*;
pub use formatter::*;
pub use number::*;
pub use numbering::*;
pub use validation::*;
