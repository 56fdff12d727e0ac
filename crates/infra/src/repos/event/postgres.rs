use super::IEventRepo;
use attendance_reminders_domain::{parse_instant, ChecklistItem, Event, EventStart, ID};
use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use serde_json::Value;
use sqlx::{FromRow, PgPool};
use tracing::{error, warn};

pub struct PostgresEventRepo {
    pool: PgPool,
}

impl PostgresEventRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct EventRaw {
    id: i64,
    date: NaiveDate,
    start_time: Option<String>,
    type_id: Option<i64>,
    tenant_id: i64,
    checklist: Option<Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChecklistItemRaw {
    #[serde(default)]
    id: Value,
    #[serde(default)]
    text: String,
    #[serde(default)]
    due_date: Option<String>,
    #[serde(default)]
    deadline_hours: Option<f64>,
    #[serde(default)]
    completed: bool,
}

impl From<ChecklistItemRaw> for ChecklistItem {
    fn from(e: ChecklistItemRaw) -> Self {
        let id = match e.id {
            Value::String(id) => id,
            Value::Null => String::new(),
            other => other.to_string(),
        };
        let due_date = e.due_date.as_deref().and_then(|due| {
            let parsed = parse_instant(due);
            if parsed.is_none() {
                warn!("Checklist item: {:?} has an invalid due date: {}", id, due);
            }
            parsed
        });
        Self {
            id,
            text: e.text,
            due_date,
            deadline_hours: e
                .deadline_hours
                .filter(|hours| hours.is_finite() && *hours >= 0.0)
                .map(|hours| hours.round() as u32),
            completed: e.completed,
        }
    }
}

/// A malformed checklist only disqualifies the event it belongs to
fn parse_checklist(event_id: &ID, checklist: Option<Value>) -> Vec<ChecklistItem> {
    let checklist = match checklist {
        Some(Value::Null) | None => return Vec::new(),
        Some(checklist) => checklist,
    };
    match serde_json::from_value::<Vec<ChecklistItemRaw>>(checklist) {
        Ok(items) => items.into_iter().map(|item| item.into()).collect(),
        Err(e) => {
            warn!("Event: {} has a malformed checklist: {:?}", event_id, e);
            Vec::new()
        }
    }
}

impl From<EventRaw> for Event {
    fn from(e: EventRaw) -> Self {
        let id = ID::from(e.id);
        let start_time = e.start_time.as_deref().and_then(|start| {
            start
                .parse::<EventStart>()
                .map_err(|err| warn!("Event: {} will be skipped: {}", id, err))
                .ok()
        });
        Self {
            id,
            tenant_id: e.tenant_id.into(),
            date: e.date,
            start_time,
            type_id: e.type_id.map(ID::from),
            checklist: parse_checklist(&id, e.checklist),
        }
    }
}

#[async_trait::async_trait]
impl IEventRepo for PostgresEventRepo {
    async fn find_upcoming_by_types(
        &self,
        type_ids: &[ID],
        now: DateTime<Utc>,
        limit: i64,
    ) -> anyhow::Result<Vec<Event>> {
        let type_ids = type_ids.iter().map(|id| *id.inner_ref()).collect::<Vec<_>>();
        // Bare times and offset free timestamps are UTC, the same way `Event::start` reads them
        let events: Vec<EventRaw> = sqlx::query_as(
            r#"
            SELECT id, date, start_time, type_id, tenant_id, checklist FROM attendances
            WHERE type_id = ANY($1) AND date >= $2 AND CASE
                WHEN start_time ~ '^([01]?[0-9]|2[0-3]):[0-5][0-9](:[0-5][0-9](\.[0-9]+)?)?$'
                    THEN (date + start_time::time) > $3
                WHEN start_time ~ '^[0-9]{4}-[0-9]{2}-[0-9]{2}[ T][0-9]{2}:[0-9]{2}.*(Z|[+-][0-9]{2}(:?[0-9]{2})?)$'
                    THEN start_time::timestamptz > $4
                WHEN start_time ~ '^[0-9]{4}-[0-9]{2}-[0-9]{2}[ T][0-9]{2}:[0-9]{2}'
                    THEN start_time::timestamp > $3
                ELSE false
            END
            ORDER BY date, id
            LIMIT $5
            "#,
        )
        .bind(&type_ids[..])
        .bind(now.date_naive())
        .bind(now.naive_utc())
        .bind(now)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Unable to load upcoming events for types: {:?}. DB returned error: {:?}",
                type_ids, e
            );
            e
        })?;
        Ok(events.into_iter().map(|e| e.into()).collect())
    }

    async fn find_with_checklist(
        &self,
        from_date: NaiveDate,
        limit: i64,
    ) -> anyhow::Result<Vec<Event>> {
        let events: Vec<EventRaw> = sqlx::query_as(
            r#"
            SELECT id, date, start_time, type_id, tenant_id, checklist FROM attendances
            WHERE date >= $1 AND checklist IS NOT NULL AND checklist <> '[]'::jsonb
            ORDER BY date, id
            LIMIT $2
            "#,
        )
        .bind(from_date)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Unable to load events with checklists. DB returned error: {:?}",
                e
            );
            e
        })?;
        Ok(events.into_iter().map(|e| e.into()).collect())
    }
}
