use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::diff::{FieldChange, diff_fields, fields};
use crate::core::PraxisError;

/// What happened to the entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditAction {
    Create,
    Update,
    Delete,
}

impl fmt::Display for AuditAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AuditAction::Create => "create",
            AuditAction::Update => "update",
            AuditAction::Delete => "delete",
        })
    }
}

/// One recorded change of one entity, with its field-level changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEvent {
    /// Sequential id, starting at 1.
    pub id: u64,
    /// Entity kind, e.g. `"patient"` or `"invoice"`.
    pub entity_type: String,
    pub entity_id: String,
    pub action: AuditAction,
    /// Authenticated user that made the change, if known.
    pub actor: Option<String>,
    pub occurred_at: DateTime<Utc>,
    pub changes: Vec<FieldChange>,
}

/// Source of event timestamps.
pub trait Clock: Send + Sync {
    /// Current instant.
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always returns the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Append-only in-memory audit log.
///
/// Mirrors a two-table layout: [`events`](Self::events) is the event table,
/// [`changes`](Self::changes) yields the rows of the per-field change table
/// keyed by event id.
///
/// ```rust
/// use praxis::audit::AuditLog;
/// use serde_json::json;
///
/// let mut log = AuditLog::new();
/// log.record_create("patient", "7", &json!({"name": "Anna"}), Some("admin")).unwrap();
/// let updated = log
///     .record_update("patient", "7", &json!({"name": "Anna"}), &json!({"name": "Anne"}), None)
///     .unwrap();
/// assert!(updated.is_some());
/// assert_eq!(log.events_for("patient", "7").count(), 2);
/// ```
#[derive(Debug)]
pub struct AuditLog<C = SystemClock> {
    events: Vec<AuditEvent>,
    next_id: u64,
    clock: C,
}

impl AuditLog<SystemClock> {
    /// Create an empty log stamped with wall-clock time.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for AuditLog<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> AuditLog<C> {
    /// Create an empty log taking timestamps from `clock`.
    pub fn with_clock(clock: C) -> Self {
        Self {
            events: Vec::new(),
            next_id: 1,
            clock,
        }
    }

    /// Record a new entity; every field is captured with no previous value.
    pub fn record_create<T: Serialize + ?Sized>(
        &mut self,
        entity_type: &str,
        entity_id: impl Into<String>,
        entity: &T,
        actor: Option<&str>,
    ) -> Result<&AuditEvent, PraxisError> {
        let after = snapshot(entity)?;
        let changes = diff_fields(&Default::default(), &fields(&after));
        self.push(entity_type, entity_id.into(), AuditAction::Create, actor, changes)
    }

    /// Record an update; only changed fields are kept.
    ///
    /// Returns `Ok(None)` and records nothing if no field changed.
    pub fn record_update<T: Serialize + ?Sized>(
        &mut self,
        entity_type: &str,
        entity_id: impl Into<String>,
        before: &T,
        after: &T,
        actor: Option<&str>,
    ) -> Result<Option<&AuditEvent>, PraxisError> {
        let before = snapshot(before)?;
        let after = snapshot(after)?;
        let changes = diff_fields(&fields(&before), &fields(&after));
        if changes.is_empty() {
            return Ok(None);
        }
        self.push(entity_type, entity_id.into(), AuditAction::Update, actor, changes)
            .map(Some)
    }

    /// Record a removed entity; every field is captured with no new value.
    pub fn record_delete<T: Serialize + ?Sized>(
        &mut self,
        entity_type: &str,
        entity_id: impl Into<String>,
        entity: &T,
        actor: Option<&str>,
    ) -> Result<&AuditEvent, PraxisError> {
        let before = snapshot(entity)?;
        let changes = diff_fields(&fields(&before), &Default::default());
        self.push(entity_type, entity_id.into(), AuditAction::Delete, actor, changes)
    }

    /// All events in recording order.
    pub fn events(&self) -> &[AuditEvent] {
        &self.events
    }

    /// History of one entity, oldest first.
    pub fn events_for<'a>(
        &'a self,
        entity_type: &'a str,
        entity_id: &'a str,
    ) -> impl Iterator<Item = &'a AuditEvent> + 'a {
        self.events
            .iter()
            .filter(move |e| e.entity_type == entity_type && e.entity_id == entity_id)
    }

    /// Flattened field changes as `(event_id, change)` rows.
    pub fn changes(&self) -> impl Iterator<Item = (u64, &FieldChange)> {
        self.events
            .iter()
            .flat_map(|e| e.changes.iter().map(move |c| (e.id, c)))
    }

    /// Number of recorded events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether no event has been recorded.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    fn push(
        &mut self,
        entity_type: &str,
        entity_id: String,
        action: AuditAction,
        actor: Option<&str>,
        changes: Vec<FieldChange>,
    ) -> Result<&AuditEvent, PraxisError> {
        let id = self.next_id;
        self.next_id += 1;
        tracing::trace!(
            id,
            entity_type,
            entity_id = entity_id.as_str(),
            %action,
            changes = changes.len(),
            "audit event recorded"
        );
        self.events.push(AuditEvent {
            id,
            entity_type: entity_type.to_string(),
            entity_id,
            action,
            actor: actor.map(str::to_string),
            occurred_at: self.clock.now(),
            changes,
        });
        self.events
            .last()
            .ok_or_else(|| PraxisError::Audit(format!("event {id} was not stored")))
    }
}

fn snapshot<T: Serialize + ?Sized>(entity: &T) -> Result<Value, PraxisError> {
    serde_json::to_value(entity)
        .map_err(|e| PraxisError::Audit(format!("cannot serialize entity: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn fixed() -> AuditLog<FixedClock> {
        AuditLog::with_clock(FixedClock(Utc.with_ymd_and_hms(2025, 3, 10, 9, 0, 0).unwrap()))
    }

    #[test]
    fn create_captures_all_fields() {
        let mut log = fixed();
        let event = log
            .record_create("patient", "1", &json!({"name": "Anna", "age": 40}), Some("admin"))
            .unwrap();
        assert_eq!(event.id, 1);
        assert_eq!(event.action, AuditAction::Create);
        assert_eq!(event.actor.as_deref(), Some("admin"));
        assert_eq!(event.changes.len(), 2);
        assert!(event.changes.iter().all(|c| c.old.is_none() && c.new.is_some()));
    }

    #[test]
    fn update_without_changes_records_nothing() {
        let mut log = fixed();
        let v = json!({"name": "Anna"});
        assert!(log.record_update("patient", "1", &v, &v, None).unwrap().is_none());
        assert!(log.is_empty());
    }

    #[test]
    fn delete_captures_previous_values() {
        let mut log = fixed();
        let event = log
            .record_delete("invoice", "2025000001", &json!({"total": "80.00"}), None)
            .unwrap();
        assert_eq!(event.action, AuditAction::Delete);
        assert_eq!(event.changes[0].old, Some(json!("80.00")));
        assert_eq!(event.changes[0].new, None);
    }

    #[test]
    fn ids_are_sequential_and_history_filtered() {
        let mut log = fixed();
        log.record_create("patient", "1", &json!({"a": 1}), None).unwrap();
        log.record_create("patient", "2", &json!({"a": 1}), None).unwrap();
        log.record_update("patient", "1", &json!({"a": 1}), &json!({"a": 2}), None)
            .unwrap();

        let ids: Vec<u64> = log.events().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);

        let history: Vec<AuditAction> = log.events_for("patient", "1").map(|e| e.action).collect();
        assert_eq!(history, vec![AuditAction::Create, AuditAction::Update]);
        assert_eq!(log.events_for("customer", "1").count(), 0);
    }

    #[test]
    fn change_rows_reference_events() {
        let mut log = fixed();
        log.record_create("patient", "1", &json!({"a": 1, "b": 2}), None).unwrap();
        log.record_update("patient", "1", &json!({"a": 1, "b": 2}), &json!({"a": 5, "b": 2}), None)
            .unwrap();
        let rows: Vec<(u64, &str)> = log.changes().map(|(id, c)| (id, c.field.as_str())).collect();
        assert_eq!(rows, vec![(1, "a"), (1, "b"), (2, "a")]);
    }

    #[test]
    fn serialization_failure_is_audit_error() {
        use std::collections::HashMap;

        // Non-string map keys cannot become JSON object keys.
        let mut bad = HashMap::new();
        bad.insert(vec![1u8], 1);
        let mut log = fixed();
        let err = log.record_create("patient", "1", &bad, None).unwrap_err();
        assert!(matches!(err, PraxisError::Audit(_)));
    }

    #[test]
    fn returned_event_is_the_stored_one() {
        let mut log = fixed();
        let created = log
            .record_create("patient", "1", &json!({"a": 1}), None)
            .unwrap()
            .clone();
        let updated = log
            .record_update("patient", "1", &json!({"a": 1}), &json!({"a": 2}), None)
            .unwrap()
            .cloned()
            .unwrap();
        assert_eq!(log.events(), &[created, updated]);
    }

    #[test]
    fn action_display() {
        assert_eq!(AuditAction::Update.to_string(), "update");
    }
}
