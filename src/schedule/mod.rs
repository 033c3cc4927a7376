//! Calendar gaps and empty appointment slots.
//!
//! Given a practitioner's working hours and the appointments already booked
//! for a day, compute the free gaps and lay out fixed-length bookable slots
//! inside them.
//!
//! ```rust
//! use chrono::{NaiveDate, NaiveTime};
//! use praxis::schedule::*;
//!
//! let day = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
//! let t = |h, m| NaiveTime::from_hms_opt(h, m, 0).unwrap();
//!
//! let hours = WorkingHours::new(t(8, 0), t(12, 0)).unwrap();
//! let booked = Interval::new(day.and_time(t(9, 0)), day.and_time(t(10, 0))).unwrap();
//!
//! let slots = empty_slots(day, &SlotRequest::new(hours, 60), &[booked]).unwrap();
//! assert_eq!(slots.len(), 3);
//! ```

mod slots;
mod types;

pub use slots::*;
pub use types::*;
