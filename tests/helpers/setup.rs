use attendance_reminders_api::Application;
use attendance_reminders_infra::{
    Config, InMemoryDataset, InMemoryMessenger, ReminderContext, StaticSys,
};
use attendance_reminders_sdk::ReminderSDK;
use chrono::{DateTime, Utc};
use std::sync::Arc;

pub struct TestApp {
    pub address: String,
    pub messenger: Arc<InMemoryMessenger>,
}

pub fn config_with_secrets() -> Config {
    Config::from_lookup(|key| match key {
        "SUPABASE_URL" => Some("postgres://localhost:5432/reminders".to_string()),
        "SUPABASE_SERVICE_ROLE_KEY" => Some("service-role".to_string()),
        "TELEGRAM_BOT_TOKEN" => Some("123:abc".to_string()),
        _ => None,
    })
}

/// In-memory context with a fixed clock, delivering into `messenger`
pub fn inmemory_context(
    config: Config,
    dataset: InMemoryDataset,
    messenger: Arc<InMemoryMessenger>,
    now: DateTime<Utc>,
) -> ReminderContext {
    let mut ctx = ReminderContext::create_inmemory(config, dataset, messenger);
    ctx.sys = Arc::new(StaticSys::new(now));
    ctx
}

pub async fn spawn_app(
    config: Config,
    dataset: InMemoryDataset,
    messenger: InMemoryMessenger,
    now: DateTime<Utc>,
) -> (TestApp, ReminderSDK) {
    let messenger = Arc::new(messenger);
    let ctx = inmemory_context(config, dataset, messenger.clone(), now);
    spawn_app_with_context(ctx, messenger).await
}

// Launch the application as a background task
pub async fn spawn_app_with_context(
    mut ctx: ReminderContext,
    messenger: Arc<InMemoryMessenger>,
) -> (TestApp, ReminderSDK) {
    ctx.config.port = 0; // Random port
    ctx.messenger = messenger.clone();

    let application = Application::new(ctx)
        .await
        .expect("Failed to build application.");

    let address = format!("http://localhost:{}/api/v1", application.port());
    let _ = actix_web::rt::spawn(async move {
        application
            .start()
            .await
            .expect("Expected application to start");
    });

    let sdk = ReminderSDK::new(address.clone());
    let app = TestApp { address, messenger };
    (app, sdk)
}
