mod inmemory;
mod postgres;

use attendance_reminders_domain::Tenant;
pub use inmemory::InMemoryTenantRepo;
pub use postgres::PostgresTenantRepo;

#[async_trait::async_trait]
pub trait ITenantRepo: Send + Sync {
    async fn find_all(&self) -> anyhow::Result<Vec<Tenant>>;
}
