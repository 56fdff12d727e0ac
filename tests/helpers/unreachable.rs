use attendance_reminders_domain::{EventType, Tenant};
use attendance_reminders_infra::{IEventTypeRepo, ITenantRepo};

/// Event type repo of a data store that refuses every connection
pub struct UnreachableEventTypeRepo {}

#[async_trait::async_trait]
impl IEventTypeRepo for UnreachableEventTypeRepo {
    async fn find_all(&self) -> anyhow::Result<Vec<EventType>> {
        Err(anyhow::anyhow!("connection refused"))
    }

    async fn find_with_reminders(&self) -> anyhow::Result<Vec<EventType>> {
        Err(anyhow::anyhow!("connection refused"))
    }
}

pub struct UnreachableTenantRepo {}

#[async_trait::async_trait]
impl ITenantRepo for UnreachableTenantRepo {
    async fn find_all(&self) -> anyhow::Result<Vec<Tenant>> {
        Err(anyhow::anyhow!("connection refused"))
    }
}
