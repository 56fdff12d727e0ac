use super::IEventTypeRepo;
use crate::repos::shared::inmemory_repo::find_by;
use attendance_reminders_domain::EventType;

pub struct InMemoryEventTypeRepo {
    event_types: Vec<EventType>,
}

impl InMemoryEventTypeRepo {
    pub fn new(event_types: Vec<EventType>) -> Self {
        Self { event_types }
    }
}

#[async_trait::async_trait]
impl IEventTypeRepo for InMemoryEventTypeRepo {
    async fn find_all(&self) -> anyhow::Result<Vec<EventType>> {
        Ok(self.event_types.clone())
    }

    async fn find_with_reminders(&self) -> anyhow::Result<Vec<EventType>> {
        Ok(find_by(&self.event_types, |event_type| {
            event_type.has_reminders()
        }))
    }
}
