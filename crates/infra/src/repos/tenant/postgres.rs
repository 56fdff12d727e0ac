use super::ITenantRepo;
use attendance_reminders_domain::Tenant;
use sqlx::{FromRow, PgPool};
use tracing::{error, warn};

pub struct PostgresTenantRepo {
    pool: PgPool,
}

impl PostgresTenantRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct TenantRaw {
    id: i64,
    timezone: Option<String>,
}

impl From<TenantRaw> for Tenant {
    fn from(e: TenantRaw) -> Self {
        let mut tenant = Tenant::new(e.id.into());
        if let Some(timezone) = e.timezone.as_deref().filter(|tz| !tz.is_empty()) {
            if !tenant.set_timezone(timezone) {
                warn!(
                    "Tenant: {} has an unknown timezone: {}, the default is used instead",
                    tenant.id, timezone
                );
            }
        }
        tenant
    }
}

#[async_trait::async_trait]
impl ITenantRepo for PostgresTenantRepo {
    async fn find_all(&self) -> anyhow::Result<Vec<Tenant>> {
        let tenants: Vec<TenantRaw> = sqlx::query_as(
            r#"
            SELECT id, timezone FROM tenants
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!("Unable to load tenants. DB returned error: {:?}", e);
            e
        })?;
        Ok(tenants.into_iter().map(|t| t.into()).collect())
    }
}
