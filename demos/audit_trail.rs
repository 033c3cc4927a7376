use praxis::audit::*;
use serde_json::json;

fn main() -> Result<(), praxis::PraxisError> {
    let mut log = AuditLog::new();

    let created = json!({"name": "Anna Berger", "phone": "0301234", "insurance": null});
    log.record_create("patient", "17", &created, Some("reception"))?;

    let updated = json!({"name": "Anna Berger", "phone": "0309876", "insurance": "AOK"});
    log.record_update("patient", "17", &created, &updated, Some("reception"))?;

    // Saving the same data again is not an event.
    log.record_update("patient", "17", &updated, &updated, Some("reception"))?;

    for event in log.events_for("patient", "17") {
        println!(
            "#{} {} {} {}/{} by {}",
            event.id,
            event.occurred_at.format("%Y-%m-%d %H:%M:%S"),
            event.action,
            event.entity_type,
            event.entity_id,
            event.actor.as_deref().unwrap_or("-")
        );
        for change in &event.changes {
            println!("    {}: {:?} -> {:?}", change.field, change.old, change.new);
        }
    }
    Ok(())
}
