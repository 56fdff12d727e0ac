use super::IEventTypeRepo;
use attendance_reminders_domain::EventType;
use sqlx::{FromRow, PgPool};
use tracing::error;

pub struct PostgresEventTypeRepo {
    pool: PgPool,
}

impl PostgresEventTypeRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct EventTypeRaw {
    id: i64,
    name: Option<String>,
    tenant_id: i64,
    notification: Option<bool>,
    reminders: Option<Vec<i32>>,
}

impl From<EventTypeRaw> for EventType {
    fn from(e: EventTypeRaw) -> Self {
        Self {
            id: e.id.into(),
            name: e.name.unwrap_or_default(),
            tenant_id: e.tenant_id.into(),
            notification: e.notification.unwrap_or(false),
            // Negative offsets can never be reached by a future event
            reminders: e
                .reminders
                .unwrap_or_default()
                .into_iter()
                .filter_map(|offset| u32::try_from(offset).ok())
                .collect(),
        }
    }
}

#[async_trait::async_trait]
impl IEventTypeRepo for PostgresEventTypeRepo {
    async fn find_all(&self) -> anyhow::Result<Vec<EventType>> {
        let event_types: Vec<EventTypeRaw> = sqlx::query_as(
            r#"
            SELECT id, name, tenant_id, notification, reminders FROM event_types
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!("Unable to load event types. DB returned error: {:?}", e);
            e
        })?;
        Ok(event_types.into_iter().map(|e| e.into()).collect())
    }

    async fn find_with_reminders(&self) -> anyhow::Result<Vec<EventType>> {
        let event_types: Vec<EventTypeRaw> = sqlx::query_as(
            r#"
            SELECT id, name, tenant_id, notification, reminders FROM event_types
            WHERE notification = true AND reminders IS NOT NULL
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Unable to load event types with reminders. DB returned error: {:?}",
                e
            );
            e
        })?;
        Ok(event_types
            .into_iter()
            .map(EventType::from)
            .filter(|event_type| event_type.has_reminders())
            .collect())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn it_drops_negative_offsets() {
        let event_type: EventType = EventTypeRaw {
            id: 1,
            name: Some("Rehearsal".into()),
            tenant_id: 2,
            notification: Some(true),
            reminders: Some(vec![24, -1, 2]),
        }
        .into();
        assert_eq!(event_type.reminders, vec![24, 2]);
    }

    #[test]
    fn it_treats_missing_columns_as_disabled() {
        let event_type: EventType = EventTypeRaw {
            id: 1,
            name: None,
            tenant_id: 2,
            notification: None,
            reminders: None,
        }
        .into();
        assert!(!event_type.has_reminders());
        assert_eq!(event_type.name, "");
    }
}
