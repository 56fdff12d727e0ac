mod config;
mod repos;
mod services;
mod system;

pub use config::{Config, ConfigError, Secrets};
pub use repos::{
    IEventRepo, IEventTypeRepo, IRecipientRepo, ITenantRepo, InMemoryDataset, Repos,
};
pub use services::*;
use std::sync::Arc;
pub use system::{ISys, RealSys, StaticSys};
use tracing::{error, warn};

#[derive(Clone)]
pub struct ReminderContext {
    pub repos: Repos,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
    pub messenger: Arc<dyn IMessenger>,
    /// Set when the data store could not be configured from `config`
    setup_error: Option<ConfigError>,
}

impl ReminderContext {
    /// Context backed by the real data store and messaging api. An incomplete
    /// or invalid config still yields a context, every invocation then fails
    /// in `check_config`.
    pub fn create(config: Config) -> Self {
        let (repos, setup_error) = match config.secrets() {
            Ok(secrets) => match Repos::create_postgres(&secrets) {
                Ok(repos) => (repos, None),
                Err(e) => {
                    error!("Invalid data store configuration: {:?}", e);
                    (
                        Repos::create_inmemory(Default::default()),
                        Some(ConfigError::Invalid("SUPABASE_URL")),
                    )
                }
            },
            Err(e) => {
                warn!("{}. Reminder invocations will fail until it is set.", e);
                (Repos::create_inmemory(Default::default()), None)
            }
        };
        let messenger = TelegramApi::new(config.telegram_api_url.clone(), config.bot_token.clone());

        Self {
            repos,
            config,
            sys: Arc::new(RealSys {}),
            messenger: Arc::new(messenger),
            setup_error,
        }
    }

    /// Context backed by the given rows and messenger instead of the real
    /// data store and messaging api
    pub fn create_inmemory(
        config: Config,
        dataset: InMemoryDataset,
        messenger: Arc<dyn IMessenger>,
    ) -> Self {
        Self {
            repos: Repos::create_inmemory(dataset),
            config,
            sys: Arc::new(RealSys {}),
            messenger,
            setup_error: None,
        }
    }

    /// Fails with the first configuration problem. Must be checked at the
    /// start of every invocation, before any I/O.
    pub fn check_config(&self) -> Result<Secrets<'_>, ConfigError> {
        if let Some(e) = &self.setup_error {
            return Err(e.clone());
        }
        self.config.secrets()
    }
}

/// Will setup the infrastructure context given the environment
pub fn setup_context() -> ReminderContext {
    ReminderContext::create(Config::new())
}
