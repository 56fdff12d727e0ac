mod inmemory;
mod postgres;

use attendance_reminders_domain::{RecipientConfig, ReminderCategory};
pub use inmemory::InMemoryRecipientRepo;
pub use postgres::PostgresRecipientRepo;

#[async_trait::async_trait]
pub trait IRecipientRepo: Send + Sync {
    /// Enabled subscriptions that opted in to `category`
    async fn find_subscribed(
        &self,
        category: ReminderCategory,
    ) -> anyhow::Result<Vec<RecipientConfig>>;
}
