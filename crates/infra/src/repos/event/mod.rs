mod inmemory;
mod postgres;

use attendance_reminders_domain::{Event, ID};
use chrono::{DateTime, NaiveDate, Utc};
pub use inmemory::InMemoryEventRepo;
pub use postgres::PostgresEventRepo;

#[async_trait::async_trait]
pub trait IEventRepo: Send + Sync {
    /// Events of the given types that start after `now`, earliest date first.
    /// Events without a readable start are never returned.
    async fn find_upcoming_by_types(
        &self,
        type_ids: &[ID],
        now: DateTime<Utc>,
        limit: i64,
    ) -> anyhow::Result<Vec<Event>>;
    /// Events on or after `from_date` with a non empty checklist
    async fn find_with_checklist(
        &self,
        from_date: NaiveDate,
        limit: i64,
    ) -> anyhow::Result<Vec<Event>>;
}
