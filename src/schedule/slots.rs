use chrono::{Datelike, NaiveDate, Weekday};

use super::types::*;
use crate::core::PraxisError;

/// Free spans of `date` within `hours`, after removing bookings and breaks.
///
/// Bookings may overlap each other or extend past the working window; they
/// are clipped. Empty or reversed bookings are ignored. Gaps are returned in
/// ascending order and never touch each other.
pub fn free_gaps(
    date: NaiveDate,
    hours: &WorkingHours,
    bookings: &[Interval],
) -> Result<Vec<Gap>, PraxisError> {
    hours.validate()?;
    let window = hours.window(date);

    let mut blocked: Vec<Interval> = bookings
        .iter()
        .copied()
        .chain(hours.breaks.iter().map(|b| b.on(date)))
        .filter_map(|b| b.clip(&window))
        .collect();
    blocked.sort_unstable();

    let mut gaps = Vec::new();
    let mut cursor = window.start;
    for b in blocked {
        if b.start > cursor {
            gaps.push(Interval {
                start: cursor,
                end: b.start,
            });
        }
        cursor = cursor.max(b.end);
    }
    if cursor < window.end {
        gaps.push(Interval {
            start: cursor,
            end: window.end,
        });
    }
    Ok(gaps)
}

/// Bookable slots of `date`: fixed-length slots laid out inside each gap.
///
/// Each gap starts a fresh run of slots at its own start, so a slot never
/// straddles a booking.
pub fn empty_slots(
    date: NaiveDate,
    request: &SlotRequest,
    bookings: &[Interval],
) -> Result<Vec<Slot>, PraxisError> {
    request.validate()?;
    let len = request.slot_len();
    let step = request.step_len();

    let mut slots = Vec::new();
    for gap in free_gaps(date, &request.hours, bookings)? {
        let mut start = gap.start;
        // Stop at the end of the gap or of the representable calendar.
        while let Some(end) = start.checked_add_signed(len) {
            if end > gap.end {
                break;
            }
            slots.push(Interval { start, end });
            match start.checked_add_signed(step) {
                Some(next) => start = next,
                None => break,
            }
        }
    }
    tracing::trace!(%date, slots = slots.len(), "generated empty slots");
    Ok(slots)
}

/// [`empty_slots`] for every day in `from..=to`.
pub fn empty_slots_between(
    from: NaiveDate,
    to: NaiveDate,
    request: &SlotRequest,
    bookings: &[Interval],
    skip_weekends: bool,
) -> Result<Vec<Slot>, PraxisError> {
    if from > to {
        return Err(PraxisError::Schedule(format!(
            "range start {from} is after end {to}"
        )));
    }
    let mut slots = Vec::new();
    for date in from.iter_days().take_while(|d| *d <= to) {
        if skip_weekends && is_weekend(date) {
            continue;
        }
        slots.extend(empty_slots(date, request, bookings)?);
    }
    Ok(slots)
}

fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}
