use attendance_reminders_domain::{Tz, DEFAULT_TIMEZONE};
use thiserror::Error;
use tracing::{info, warn};

const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Missing required configuration value: {0}")]
    Missing(&'static str),
    #[error("Invalid configuration value: {0}")]
    Invalid(&'static str),
}

/// Credentials every invocation needs before it is allowed to do any I/O
#[derive(Debug, Clone, Copy)]
pub struct Secrets<'a> {
    pub database_url: &'a str,
    pub database_key: &'a str,
    pub bot_token: &'a str,
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the application to run on
    pub port: usize,
    /// Connection url of the data store
    pub database_url: Option<String>,
    /// Service credential of the data store, used as the connection password
    pub database_key: Option<String>,
    /// Credential of the messaging bot
    pub bot_token: Option<String>,
    /// Base url of the messaging api
    pub telegram_api_url: String,
    /// Zone used for tenants without a configured zone
    pub default_timezone: Tz,
    /// Run both reminder jobs every hour from within the server
    pub run_job_scheduler: bool,
    /// Maximum number of events evaluated per attendance reminder invocation
    pub attendance_events_limit: i64,
    /// Maximum number of events evaluated per checklist reminder invocation
    pub checklist_events_limit: i64,
}

impl Config {
    pub fn new() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key value source, e.g. the environment
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let default_port = 5000;
        let port = match lookup("PORT") {
            Some(port) => match port.parse::<usize>() {
                Ok(port) => port,
                Err(_) => {
                    warn!(
                        "The given PORT: {} is not valid, falling back to the default port: {}.",
                        port, default_port
                    );
                    default_port
                }
            },
            None => default_port,
        };

        let default_timezone = match lookup("DEFAULT_TIMEZONE") {
            Some(timezone) => timezone.parse::<Tz>().unwrap_or_else(|_| {
                warn!(
                    "The given DEFAULT_TIMEZONE: {} is not valid, falling back to: {}.",
                    timezone, DEFAULT_TIMEZONE
                );
                DEFAULT_TIMEZONE
            }),
            None => DEFAULT_TIMEZONE,
        };

        let run_job_scheduler = matches!(
            lookup("REMINDER_JOB_SCHEDULER").as_deref(),
            Some("1") | Some("true") | Some("TRUE") | Some("yes")
        );
        if run_job_scheduler {
            info!("Hourly reminder job scheduler is enabled");
        }

        Self {
            port,
            database_url: lookup("SUPABASE_URL").or_else(|| lookup("DATABASE_URL")),
            database_key: lookup("SUPABASE_SERVICE_ROLE_KEY"),
            bot_token: lookup("TELEGRAM_BOT_TOKEN"),
            telegram_api_url: lookup("TELEGRAM_API_URL")
                .unwrap_or_else(|| DEFAULT_TELEGRAM_API_URL.to_string()),
            default_timezone,
            run_job_scheduler,
            attendance_events_limit: 100,
            checklist_events_limit: 500,
        }
    }

    /// Fails with the first missing credential. Must be checked at the start
    /// of every invocation.
    pub fn secrets(&self) -> Result<Secrets<'_>, ConfigError> {
        let database_url = self
            .database_url
            .as_deref()
            .ok_or(ConfigError::Missing("SUPABASE_URL"))?;
        let database_key = self
            .database_key
            .as_deref()
            .ok_or(ConfigError::Missing("SUPABASE_SERVICE_ROLE_KEY"))?;
        let bot_token = self
            .bot_token
            .as_deref()
            .ok_or(ConfigError::Missing("TELEGRAM_BOT_TOKEN"))?;

        Ok(Secrets {
            database_url,
            database_key,
            bot_token,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
