use super::dispatch::{dispatch, DeliveryReport};
use crate::{
    error::ReminderError,
    shared::{
        auth::protect_trigger_route,
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpRequest, HttpResponse};
use attendance_reminders_api_structs::send_reminders::APIResponse;
use attendance_reminders_domain::{
    hours_until_start, resolve_recipients, AttendanceReminder, EventType, ReminderCategory,
    TenantTimezones, ID,
};
use attendance_reminders_infra::{ConfigError, ReminderContext};
use std::collections::HashMap;
use tracing::{info, warn};

fn handle_error(e: UseCaseErrors) -> ReminderError {
    match e {
        UseCaseErrors::Configuration(e) => ReminderError::InternalError(e.to_string()),
        UseCaseErrors::StorageError(e) => {
            ReminderError::InternalError(format!("Failed to load reminder data: {}", e))
        }
    }
}

pub async fn send_attendance_reminders_controller(
    http_req: HttpRequest,
    ctx: web::Data<ReminderContext>,
) -> Result<HttpResponse, ReminderError> {
    protect_trigger_route(&http_req)?;

    let usecase = SendAttendanceRemindersUseCase {};

    execute(usecase, &ctx)
        .await
        .map(|report| HttpResponse::Ok().json(APIResponse::new(report.sent, ctx.sys.now())))
        .map_err(handle_error)
}

/// Sends a reminder for every upcoming event whose start is exactly one of
/// its event type's reminder offsets away
#[derive(Debug)]
pub struct SendAttendanceRemindersUseCase {}

#[derive(Debug)]
pub enum UseCaseErrors {
    Configuration(ConfigError),
    StorageError(anyhow::Error),
}

#[async_trait::async_trait(?Send)]
impl UseCase for SendAttendanceRemindersUseCase {
    type Response = DeliveryReport;

    type Errors = UseCaseErrors;

    const NAME: &'static str = "SendAttendanceReminders";

    async fn execute(&mut self, ctx: &ReminderContext) -> Result<Self::Response, Self::Errors> {
        ctx.check_config().map_err(UseCaseErrors::Configuration)?;
        let now = ctx.sys.now();

        let event_types = ctx
            .repos
            .event_types
            .find_with_reminders()
            .await
            .map_err(UseCaseErrors::StorageError)?;
        if event_types.is_empty() {
            info!("No event types have reminders configured");
            return Ok(DeliveryReport::default());
        }
        let event_types = event_types
            .iter()
            .map(|event_type| (event_type.id, event_type))
            .collect::<HashMap<ID, &EventType>>();
        let type_ids = event_types.keys().copied().collect::<Vec<_>>();

        let events = ctx
            .repos
            .events
            .find_upcoming_by_types(&type_ids, now, ctx.config.attendance_events_limit)
            .await
            .map_err(UseCaseErrors::StorageError)?;
        if events.is_empty() {
            info!("No upcoming events");
            return Ok(DeliveryReport::default());
        }

        let tenants = ctx
            .repos
            .tenants
            .find_all()
            .await
            .map_err(UseCaseErrors::StorageError)?;
        let timezones = TenantTimezones::new(&tenants, ctx.config.default_timezone);

        let subscriptions = ctx
            .repos
            .recipients
            .find_subscribed(ReminderCategory::Attendance)
            .await
            .map_err(UseCaseErrors::StorageError)?;
        if subscriptions.is_empty() {
            info!("Nobody is subscribed to attendance reminders");
            return Ok(DeliveryReport::default());
        }

        let mut report = DeliveryReport::default();
        for event in &events {
            let event_type = match event.type_id.as_ref().and_then(|id| event_types.get(id)) {
                Some(event_type) => event_type,
                None => continue,
            };
            let start = match event.start() {
                Some(start) => start,
                None => {
                    warn!(event_id = %event.id, "Event has no usable start time, skipping it");
                    continue;
                }
            };
            let hours = hours_until_start(start, now);
            if !event_type.reminder_due(hours) {
                continue;
            }

            let recipients =
                resolve_recipients(&subscriptions, ReminderCategory::Attendance, &event.tenant_id);
            if recipients.is_empty() {
                continue;
            }

            let text = AttendanceReminder {
                event_type: &event_type.name,
                start: event
                    .local_start(timezones.get(&event.tenant_id))
                    .unwrap_or_else(|| start.naive_utc()),
                hours_until_start: hours,
            }
            .format();
            report += dispatch(ctx.messenger.as_ref(), &recipients, &text).await;
        }

        info!(
            sent = report.sent,
            failed = report.failed,
            "Attendance reminders dispatched"
        );
        Ok(report)
    }
}

#[cfg(test)]
mod test {
    use super::super::testing::{config_with_secrets, context};
    use super::*;
    use attendance_reminders_domain::{Event, EventStart, RecipientConfig, Tenant};
    use attendance_reminders_infra::{
        Config, IEventTypeRepo, InMemoryDataset, InMemoryMessenger,
    };
    use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};
    use std::sync::Arc;

    fn event_type(id: i64, reminders: Vec<u32>) -> EventType {
        EventType {
            id: ID::from(id),
            name: "Rehearsal".into(),
            tenant_id: ID::from(1),
            notification: true,
            reminders,
        }
    }

    fn event(id: i64, day: u32, hour: u32, minute: u32) -> Event {
        let mut event = Event::new(
            ID::from(id),
            ID::from(1),
            NaiveDate::from_ymd_opt(2026, 3, day).unwrap(),
        );
        event.type_id = Some(ID::from(10));
        event.start_time = Some(EventStart::TimeOfDay(
            NaiveTime::from_hms_opt(hour, minute, 0).unwrap(),
        ));
        event
    }

    fn subscription(id: i64, chat_id: Option<&str>, tenant_ids: Vec<i64>) -> RecipientConfig {
        RecipientConfig {
            id: ID::from(id),
            enabled: true,
            chat_id: chat_id.map(String::from),
            reminders: true,
            checklist: false,
            tenant_ids: tenant_ids.into_iter().map(ID::from).collect(),
        }
    }

    fn dataset() -> InMemoryDataset {
        let mut disabled = subscription(2, Some("200"), vec![]);
        disabled.enabled = false;

        InMemoryDataset {
            event_types: vec![event_type(10, vec![24, 2])],
            events: vec![event(1, 10, 12, 0)],
            recipients: vec![
                subscription(1, Some("100"), vec![]),
                disabled,
                subscription(3, None, vec![]),
                subscription(4, Some("400"), vec![2]),
                subscription(5, Some("500"), vec![2, 1]),
            ],
            ..Default::default()
        }
    }

    fn now() -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 10, 10, 0, 0).unwrap()
    }

    #[actix_web::test]
    async fn it_notifies_eligible_recipients_at_a_reminder_offset() {
        let messenger = Arc::new(InMemoryMessenger::new());
        let ctx = context(config_with_secrets(), dataset(), messenger.clone(), now());

        let report = execute(SendAttendanceRemindersUseCase {}, &ctx).await.unwrap();

        assert_eq!(report, DeliveryReport { sent: 2, failed: 0 });
        let sent = messenger.sent();
        assert_eq!(sent[0].chat_id, "100");
        assert_eq!(sent[1].chat_id, "500");
        assert_eq!(
            sent[0].text,
            "🔔 *Reminder: Rehearsal*\n\n📅 10.03.2026\n🕐 12:00\n⏳ Starts in 2 hours"
        );
    }

    #[actix_web::test]
    async fn it_only_fires_on_exact_offsets() {
        let mut dataset = dataset();
        dataset.events = vec![
            // already started
            event(1, 10, 9, 0),
            // 3 hours
            event(2, 10, 13, 0),
            // 1.5 hours rounds up to 2
            event(3, 10, 11, 30),
            // 24 hours
            event(4, 11, 10, 0),
            // 24.5 hours rounds up to 25
            event(5, 11, 10, 30),
        ];
        dataset.recipients = vec![subscription(1, Some("100"), vec![])];
        let messenger = Arc::new(InMemoryMessenger::new());
        let ctx = context(config_with_secrets(), dataset, messenger.clone(), now());

        let report = execute(SendAttendanceRemindersUseCase {}, &ctx).await.unwrap();

        assert_eq!(report.sent, 2);
        let sent = messenger.sent();
        assert!(sent[0].text.ends_with("Starts in 2 hours"));
        assert!(sent[1].text.contains("📅 11.03.2026"));
        assert!(sent[1].text.ends_with("Starts in 1 day"));
    }

    #[actix_web::test]
    async fn started_events_do_not_crowd_out_due_ones() {
        let mut dataset = dataset();
        dataset.events = (1..=100).map(|id| event(id, 10, 9, 0)).collect();
        dataset.events.push(event(101, 10, 12, 0));
        dataset.recipients = vec![subscription(1, Some("100"), vec![])];
        let messenger = Arc::new(InMemoryMessenger::new());
        let ctx = context(config_with_secrets(), dataset, messenger.clone(), now());

        let report = execute(SendAttendanceRemindersUseCase {}, &ctx).await.unwrap();

        assert_eq!(report, DeliveryReport { sent: 1, failed: 0 });
        assert!(messenger.sent()[0].text.ends_with("Starts in 2 hours"));
    }

    #[actix_web::test]
    async fn it_shows_timestamps_in_the_tenant_timezone() {
        let mut tenant = Tenant::new(ID::from(1));
        assert!(tenant.set_timezone("America/New_York"));
        let mut dataset = dataset();
        dataset.tenants = vec![tenant];
        dataset.events[0].start_time = Some(EventStart::Timestamp(
            Utc.with_ymd_and_hms(2026, 3, 10, 12, 0, 0).unwrap(),
        ));
        dataset.recipients = vec![subscription(1, Some("100"), vec![])];
        let messenger = Arc::new(InMemoryMessenger::new());
        let ctx = context(config_with_secrets(), dataset, messenger.clone(), now());

        let report = execute(SendAttendanceRemindersUseCase {}, &ctx).await.unwrap();

        assert_eq!(report.sent, 1);
        assert_eq!(
            messenger.sent()[0].text,
            "🔔 *Reminder: Rehearsal*\n\n📅 10.03.2026\n🕐 08:00\n⏳ Starts in 2 hours"
        );
    }

    #[actix_web::test]
    async fn it_skips_events_without_start_time() {
        let mut dataset = dataset();
        dataset.events[0].start_time = None;
        let messenger = Arc::new(InMemoryMessenger::new());
        let ctx = context(config_with_secrets(), dataset, messenger.clone(), now());

        let report = execute(SendAttendanceRemindersUseCase {}, &ctx).await.unwrap();

        assert_eq!(report, DeliveryReport::default());
        assert!(messenger.sent().is_empty());
    }

    #[actix_web::test]
    async fn it_does_nothing_without_enabled_event_types() {
        let mut dataset = dataset();
        dataset.event_types[0].notification = false;
        let messenger = Arc::new(InMemoryMessenger::new());
        let ctx = context(config_with_secrets(), dataset, messenger.clone(), now());

        let report = execute(SendAttendanceRemindersUseCase {}, &ctx).await.unwrap();

        assert_eq!(report, DeliveryReport::default());
        assert!(messenger.sent().is_empty());
    }

    #[actix_web::test]
    async fn it_counts_only_confirmed_deliveries() {
        let mut dataset = dataset();
        dataset.recipients = vec![
            subscription(1, Some("100"), vec![]),
            subscription(2, Some("200"), vec![]),
            subscription(3, Some("300"), vec![]),
        ];
        let messenger = Arc::new(InMemoryMessenger::rejecting(vec!["200".into()]));
        let ctx = context(config_with_secrets(), dataset, messenger.clone(), now());

        let report = execute(SendAttendanceRemindersUseCase {}, &ctx).await.unwrap();

        assert_eq!(report, DeliveryReport { sent: 2, failed: 1 });
    }

    #[actix_web::test]
    async fn it_fails_before_any_io_without_secrets() {
        let config = Config::from_lookup(|key| match key {
            "SUPABASE_URL" => Some("postgres://localhost:5432/reminders".to_string()),
            "SUPABASE_SERVICE_ROLE_KEY" => Some("service-role".to_string()),
            _ => None,
        });
        let messenger = Arc::new(InMemoryMessenger::new());
        let ctx = context(config, dataset(), messenger.clone(), now());

        let res = execute(SendAttendanceRemindersUseCase {}, &ctx).await;

        assert!(matches!(
            res,
            Err(UseCaseErrors::Configuration(ConfigError::Missing(
                "TELEGRAM_BOT_TOKEN"
            )))
        ));
        assert!(messenger.sent().is_empty());
    }

    struct UnreachableEventTypeRepo {}

    #[async_trait::async_trait]
    impl IEventTypeRepo for UnreachableEventTypeRepo {
        async fn find_all(&self) -> anyhow::Result<Vec<EventType>> {
            Err(anyhow::anyhow!("connection refused"))
        }

        async fn find_with_reminders(&self) -> anyhow::Result<Vec<EventType>> {
            Err(anyhow::anyhow!("connection refused"))
        }
    }

    #[actix_web::test]
    async fn it_aborts_when_event_types_cannot_be_read() {
        let messenger = Arc::new(InMemoryMessenger::new());
        let mut ctx = context(config_with_secrets(), dataset(), messenger.clone(), now());
        ctx.repos.event_types = Arc::new(UnreachableEventTypeRepo {});

        let res = execute(SendAttendanceRemindersUseCase {}, &ctx).await;

        assert!(matches!(res, Err(UseCaseErrors::StorageError(_))));
        assert!(messenger.sent().is_empty());
    }
}
