//! # praxis
//!
//! Back-office building blocks for a small physiotherapy practice:
//! invoice number validation and issuing, calendar gap and slot generation,
//! and an entity-change audit trail.
//!
//! Stored invoice numbers are 10 digits, `{year:4}{sequence:6}`. Only the
//! trailing six digits take part in sequencing, so numbers from different
//! years share one sequence.
//!
//! ## Quick Start
//!
//! ```rust
//! use praxis::core::*;
//!
//! let existing = ["2025000001", "2025000002"];
//! assert_eq!(validate_with_reason("2025000003", existing), ValidationResult::Valid);
//! assert_eq!(
//!     validate_with_reason("2025000002", existing),
//!     ValidationResult::Invalid(InvoiceNumberError::Duplicate)
//! );
//!
//! let fmt = InvoiceFormatter::new("F");
//! assert_eq!(fmt.format_number("2025000003"), "F2025000003");
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Invoice number validation, formatting, sequence, config |
//! | `schedule` | Free gaps and empty appointment slots |
//! | `audit` | Entity diff audit log |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "schedule")]
pub mod schedule;

#[cfg(feature = "audit")]
pub mod audit;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
