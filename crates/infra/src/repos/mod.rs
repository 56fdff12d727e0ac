mod event;
mod event_type;
mod recipient;
mod shared;
mod tenant;

use crate::config::Secrets;
use attendance_reminders_domain::{Event, EventType, RecipientConfig, Tenant};
pub use event::{IEventRepo, InMemoryEventRepo, PostgresEventRepo};
pub use event_type::{IEventTypeRepo, InMemoryEventTypeRepo, PostgresEventTypeRepo};
pub use recipient::{IRecipientRepo, InMemoryRecipientRepo, PostgresRecipientRepo};
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use std::{str::FromStr, sync::Arc};
pub use tenant::{ITenantRepo, InMemoryTenantRepo, PostgresTenantRepo};
use tracing::info;

/// Read only access to the data the reminder jobs work on
#[derive(Clone)]
pub struct Repos {
    pub tenants: Arc<dyn ITenantRepo>,
    pub event_types: Arc<dyn IEventTypeRepo>,
    pub events: Arc<dyn IEventRepo>,
    pub recipients: Arc<dyn IRecipientRepo>,
}

/// Rows backing the inmemory repositories
#[derive(Debug, Clone, Default)]
pub struct InMemoryDataset {
    pub tenants: Vec<Tenant>,
    pub event_types: Vec<EventType>,
    pub events: Vec<Event>,
    pub recipients: Vec<RecipientConfig>,
}

impl Repos {
    /// Connections are opened on first use, so creating the repos does no I/O
    pub fn create_postgres(secrets: &Secrets) -> anyhow::Result<Self> {
        let options = PgConnectOptions::from_str(secrets.database_url)?.password(secrets.database_key);
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect_lazy_with(options);
        info!("Postgres connection pool configured");

        Ok(Self {
            tenants: Arc::new(PostgresTenantRepo::new(pool.clone())),
            event_types: Arc::new(PostgresEventTypeRepo::new(pool.clone())),
            events: Arc::new(PostgresEventRepo::new(pool.clone())),
            recipients: Arc::new(PostgresRecipientRepo::new(pool)),
        })
    }

    pub fn create_inmemory(dataset: InMemoryDataset) -> Self {
        Self {
            tenants: Arc::new(InMemoryTenantRepo::new(dataset.tenants)),
            event_types: Arc::new(InMemoryEventTypeRepo::new(dataset.event_types)),
            events: Arc::new(InMemoryEventRepo::new(dataset.events)),
            recipients: Arc::new(InMemoryRecipientRepo::new(dataset.recipients)),
        }
    }
}
