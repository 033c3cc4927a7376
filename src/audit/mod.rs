//! Audit trail of entity changes.
//!
//! Entities are captured as JSON snapshots through `serde`. Each create,
//! update or delete becomes an [`AuditEvent`] carrying the field-level
//! [`FieldChange`]s between the snapshots.

mod diff;
mod log;

pub use self::diff::{FieldChange, SCALAR_FIELD, diff};
pub use self::log::*;
