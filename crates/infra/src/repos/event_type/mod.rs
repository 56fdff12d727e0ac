mod inmemory;
mod postgres;

use attendance_reminders_domain::EventType;
pub use inmemory::InMemoryEventTypeRepo;
pub use postgres::PostgresEventTypeRepo;

#[async_trait::async_trait]
pub trait IEventTypeRepo: Send + Sync {
    async fn find_all(&self) -> anyhow::Result<Vec<EventType>>;
    /// Event types with notifications enabled and reminder offsets set
    async fn find_with_reminders(&self) -> anyhow::Result<Vec<EventType>>;
}
