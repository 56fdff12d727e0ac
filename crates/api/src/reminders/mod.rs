mod dispatch;
pub mod send_attendance_reminders;
pub mod send_checklist_reminders;

use actix_web::web;
use send_attendance_reminders::send_attendance_reminders_controller;
use send_checklist_reminders::send_checklist_reminders_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/send-attendance-reminders",
        web::route().to(send_attendance_reminders_controller),
    );
    cfg.route(
        "/send-checklist-reminders",
        web::route().to(send_checklist_reminders_controller),
    );
}

#[cfg(test)]
mod testing {
    use attendance_reminders_infra::{
        Config, IMessenger, InMemoryDataset, ReminderContext, StaticSys,
    };
    use chrono::{DateTime, Utc};
    use std::sync::Arc;

    pub fn config_with_secrets() -> Config {
        Config::from_lookup(|key| match key {
            "SUPABASE_URL" => Some("postgres://localhost:5432/reminders".to_string()),
            "SUPABASE_SERVICE_ROLE_KEY" => Some("service-role".to_string()),
            "TELEGRAM_BOT_TOKEN" => Some("123:abc".to_string()),
            _ => None,
        })
    }

    pub fn context(
        config: Config,
        dataset: InMemoryDataset,
        messenger: Arc<dyn IMessenger>,
        now: DateTime<Utc>,
    ) -> ReminderContext {
        let mut ctx = ReminderContext::create_inmemory(config, dataset, messenger);
        ctx.sys = Arc::new(StaticSys::new(now));
        ctx
    }
}
