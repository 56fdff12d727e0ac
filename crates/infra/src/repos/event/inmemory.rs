use super::IEventRepo;
use crate::repos::shared::inmemory_repo::find_by_limited;
use attendance_reminders_domain::{Event, ID};
use chrono::{DateTime, NaiveDate, Utc};

pub struct InMemoryEventRepo {
    events: Vec<Event>,
}

impl InMemoryEventRepo {
    pub fn new(events: Vec<Event>) -> Self {
        Self { events }
    }
}

#[async_trait::async_trait]
impl IEventRepo for InMemoryEventRepo {
    async fn find_upcoming_by_types(
        &self,
        type_ids: &[ID],
        now: DateTime<Utc>,
        limit: i64,
    ) -> anyhow::Result<Vec<Event>> {
        Ok(find_by_limited(&self.events, limit, |event| {
            event.start().map(|start| start > now).unwrap_or(false)
                && event
                    .type_id
                    .map(|type_id| type_ids.contains(&type_id))
                    .unwrap_or(false)
        }))
    }

    async fn find_with_checklist(
        &self,
        from_date: NaiveDate,
        limit: i64,
    ) -> anyhow::Result<Vec<Event>> {
        Ok(find_by_limited(&self.events, limit, |event| {
            event.date >= from_date && !event.checklist.is_empty()
        }))
    }
}
