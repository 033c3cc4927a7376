use chrono::{NaiveDate, NaiveTime};
use praxis::schedule::*;

fn main() -> Result<(), praxis::PraxisError> {
    let day = NaiveDate::from_ymd_opt(2025, 3, 11).unwrap_or_default();
    let t = |h, m| NaiveTime::from_hms_opt(h, m, 0).unwrap_or_default();

    let hours = WorkingHours::new(t(8, 0), t(18, 0))?.with_break(t(13, 0), t(14, 0))?;
    let bookings = [
        Interval::new(day.and_time(t(8, 30)), day.and_time(t(9, 30)))?,
        Interval::new(day.and_time(t(11, 0)), day.and_time(t(12, 15)))?,
        Interval::new(day.and_time(t(16, 0)), day.and_time(t(17, 0)))?,
    ];

    println!("=== Gaps on {day} ===");
    for gap in free_gaps(day, &hours, &bookings)? {
        println!(
            "  {} - {} ({} min)",
            gap.start.time(),
            gap.end.time(),
            gap.duration().num_minutes()
        );
    }

    println!("\n=== 45 minute slots ===");
    for slot in empty_slots(day, &SlotRequest::new(hours, 45), &bookings)? {
        println!("  {} - {}", slot.start.time(), slot.end.time());
    }
    Ok(())
}
