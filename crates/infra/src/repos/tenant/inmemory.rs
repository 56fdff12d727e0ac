use super::ITenantRepo;
use attendance_reminders_domain::Tenant;

pub struct InMemoryTenantRepo {
    tenants: Vec<Tenant>,
}

impl InMemoryTenantRepo {
    pub fn new(tenants: Vec<Tenant>) -> Self {
        Self { tenants }
    }
}

#[async_trait::async_trait]
impl ITenantRepo for InMemoryTenantRepo {
    async fn find_all(&self) -> anyhow::Result<Vec<Tenant>> {
        Ok(self.tenants.clone())
    }
}
