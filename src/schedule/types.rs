use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use serde::{Deserialize, Serialize};

use crate::core::PraxisError;

/// A half-open span of calendar time, `[start, end)`.
///
/// Used for booked appointments as well as for the gaps and slots produced
/// by the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Interval {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

/// A free span between bookings.
pub type Gap = Interval;

/// A bookable slot inside a gap.
pub type Slot = Interval;

impl Interval {
    /// Create an interval; `start` must be before `end`.
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Result<Self, PraxisError> {
        if start >= end {
            return Err(PraxisError::Schedule(format!(
                "interval start {start} must be before end {end}"
            )));
        }
        Ok(Self { start, end })
    }

    /// Length of the interval.
    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }

    /// Whether the interval covers no time.
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Whether the two half-open intervals share any instant.
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// The part of `self` inside `bounds`, if any.
    pub fn clip(&self, bounds: &Interval) -> Option<Interval> {
        let clipped = Interval {
            start: self.start.max(bounds.start),
            end: self.end.min(bounds.end),
        };
        (!clipped.is_empty()).then_some(clipped)
    }
}

/// A time-of-day span, e.g. a lunch break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl TimeRange {
    /// Create a range; `start` must be before `end`.
    pub fn new(start: NaiveTime, end: NaiveTime) -> Result<Self, PraxisError> {
        if start >= end {
            return Err(PraxisError::Schedule(format!(
                "time range start {start} must be before end {end}"
            )));
        }
        Ok(Self { start, end })
    }

    /// This range placed on `date`.
    pub fn on(&self, date: NaiveDate) -> Interval {
        Interval {
            start: date.and_time(self.start),
            end: date.and_time(self.end),
        }
    }
}

/// Daily opening hours of a practitioner, with optional breaks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingHours {
    pub start: NaiveTime,
    pub end: NaiveTime,
    #[serde(default)]
    pub breaks: Vec<TimeRange>,
}

impl WorkingHours {
    /// Opening hours without breaks; `start` must be before `end`.
    pub fn new(start: NaiveTime, end: NaiveTime) -> Result<Self, PraxisError> {
        let hours = Self {
            start,
            end,
            breaks: Vec::new(),
        };
        hours.validate()?;
        Ok(hours)
    }

    /// Add a break; it must lie inside the working hours.
    pub fn with_break(mut self, start: NaiveTime, end: NaiveTime) -> Result<Self, PraxisError> {
        let range = TimeRange::new(start, end)?;
        if range.start < self.start || range.end > self.end {
            return Err(PraxisError::Schedule(format!(
                "break {start}-{end} lies outside working hours {}-{}",
                self.start, self.end
            )));
        }
        self.breaks.push(range);
        Ok(self)
    }

    /// Checks hours deserialized from configuration.
    pub fn validate(&self) -> Result<(), PraxisError> {
        if self.start >= self.end {
            return Err(PraxisError::Schedule(format!(
                "working hours start {} must be before end {}",
                self.start, self.end
            )));
        }
        for b in &self.breaks {
            if b.start >= b.end {
                return Err(PraxisError::Schedule(format!(
                    "break start {} must be before end {}",
                    b.start, b.end
                )));
            }
        }
        Ok(())
    }

    /// The working window on `date`.
    pub fn window(&self, date: NaiveDate) -> Interval {
        Interval {
            start: date.and_time(self.start),
            end: date.and_time(self.end),
        }
    }
}

/// Parameters for slot generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotRequest {
    pub hours: WorkingHours,
    /// Length of each slot.
    pub slot_minutes: u32,
    /// Distance between consecutive slot starts; defaults to `slot_minutes`.
    #[serde(default)]
    pub step_minutes: Option<u32>,
}

impl SlotRequest {
    /// Slots of `slot_minutes`, placed back to back.
    pub fn new(hours: WorkingHours, slot_minutes: u32) -> Self {
        Self {
            hours,
            slot_minutes,
            step_minutes: None,
        }
    }

    /// Set the distance between consecutive slot starts.
    pub fn step(mut self, minutes: u32) -> Self {
        self.step_minutes = Some(minutes);
        self
    }

    /// Check the hours and that slot length and step are positive.
    pub fn validate(&self) -> Result<(), PraxisError> {
        self.hours.validate()?;
        if self.slot_minutes == 0 {
            return Err(PraxisError::Schedule("slot length must be positive".into()));
        }
        if self.step_minutes == Some(0) {
            return Err(PraxisError::Schedule("slot step must be positive".into()));
        }
        Ok(())
    }

    pub(crate) fn slot_len(&self) -> TimeDelta {
        TimeDelta::minutes(i64::from(self.slot_minutes))
    }

    pub(crate) fn step_len(&self) -> TimeDelta {
        TimeDelta::minutes(i64::from(self.step_minutes.unwrap_or(self.slot_minutes)))
    }
}
