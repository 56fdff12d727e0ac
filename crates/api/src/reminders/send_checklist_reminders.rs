use super::dispatch::{dispatch, DeliveryReport};
use crate::{
    error::ReminderError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use attendance_reminders_api_structs::send_reminders::APIResponse;
use attendance_reminders_domain::{
    checklist_item_due, hours_until_due, resolve_recipients, ChecklistReminder, LocalMinute,
    ReminderCategory, TenantTimezones, ID,
};
use attendance_reminders_infra::{ConfigError, ReminderContext};
use std::collections::HashMap;
use tracing::info;

const UNKNOWN_EVENT_TYPE: &str = "Event";

fn handle_error(e: UseCaseErrors) -> ReminderError {
    match e {
        UseCaseErrors::Configuration(e) => ReminderError::InternalError(e.to_string()),
        UseCaseErrors::StorageError(e) => {
            ReminderError::InternalError(format!("Failed to load checklist data: {}", e))
        }
    }
}

pub async fn send_checklist_reminders_controller(
    ctx: web::Data<ReminderContext>,
) -> Result<HttpResponse, ReminderError> {
    let usecase = SendChecklistRemindersUseCase {};

    execute(usecase, &ctx)
        .await
        .map(|report| HttpResponse::Ok().json(APIResponse::new(report.sent, ctx.sys.now())))
        .map_err(handle_error)
}

/// Sends a reminder for every open checklist item that is due within the
/// current or the previous hour, measured in the tenant's local time
#[derive(Debug)]
pub struct SendChecklistRemindersUseCase {}

#[derive(Debug)]
pub enum UseCaseErrors {
    Configuration(ConfigError),
    StorageError(anyhow::Error),
}

#[async_trait::async_trait(?Send)]
impl UseCase for SendChecklistRemindersUseCase {
    type Response = DeliveryReport;

    type Errors = UseCaseErrors;

    const NAME: &'static str = "SendChecklistReminders";

    async fn execute(&mut self, ctx: &ReminderContext) -> Result<Self::Response, Self::Errors> {
        ctx.check_config().map_err(UseCaseErrors::Configuration)?;
        let now = ctx.sys.now();

        let tenants = ctx
            .repos
            .tenants
            .find_all()
            .await
            .map_err(UseCaseErrors::StorageError)?;
        let timezones = TenantTimezones::new(&tenants, ctx.config.default_timezone);

        let event_types = ctx
            .repos
            .event_types
            .find_all()
            .await
            .map_err(UseCaseErrors::StorageError)?;
        let event_type_names = event_types
            .iter()
            .map(|event_type| (event_type.id, event_type.name.as_str()))
            .collect::<HashMap<ID, &str>>();

        let events = ctx
            .repos
            .events
            .find_with_checklist(now.date_naive(), ctx.config.checklist_events_limit)
            .await
            .map_err(UseCaseErrors::StorageError)?;
        if events.is_empty() {
            info!("No upcoming events with checklist items");
            return Ok(DeliveryReport::default());
        }

        let subscriptions = ctx
            .repos
            .recipients
            .find_subscribed(ReminderCategory::Checklist)
            .await
            .map_err(UseCaseErrors::StorageError)?;
        if subscriptions.is_empty() {
            info!("Nobody is subscribed to checklist reminders");
            return Ok(DeliveryReport::default());
        }

        let mut report = DeliveryReport::default();
        for event in &events {
            let tz = timezones.get(&event.tenant_id);
            let event_type = event
                .type_id
                .as_ref()
                .and_then(|id| event_type_names.get(id))
                .copied()
                .unwrap_or(UNKNOWN_EVENT_TYPE);

            for (item, due) in event.pending_checklist() {
                let hours = hours_until_due(due, now, tz);
                if !checklist_item_due(hours) {
                    continue;
                }

                let recipients =
                    resolve_recipients(&subscriptions, ReminderCategory::Checklist, &event.tenant_id);
                if recipients.is_empty() {
                    continue;
                }

                let text = ChecklistReminder {
                    item: &item.text,
                    event_type,
                    event_date: event.date,
                    due: LocalMinute::project(due, tz).naive(),
                    hours_until_due: hours,
                }
                .format();
                report += dispatch(ctx.messenger.as_ref(), &recipients, &text).await;
            }
        }

        info!(
            sent = report.sent,
            failed = report.failed,
            "Checklist reminders dispatched"
        );
        Ok(report)
    }
}
