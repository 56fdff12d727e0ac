use crate::{
    reminders::{
        send_attendance_reminders::SendAttendanceRemindersUseCase,
        send_checklist_reminders::SendChecklistRemindersUseCase,
    },
    shared::usecase::execute,
};
use actix_web::rt::time::{interval, sleep_until, Instant};
use attendance_reminders_infra::ReminderContext;
use std::time::Duration;
use tracing::info;

const SECS_PER_HOUR: u64 = 60 * 60;

/// Seconds from `now_ts` (millis) until the next full hour
pub fn get_start_delay(now_ts: u64) -> u64 {
    SECS_PER_HOUR - (now_ts / 1000) % SECS_PER_HOUR
}

/// Runs both reminder jobs at the top of every hour. A missed hour is not
/// caught up on.
pub fn start_send_reminders_job(ctx: ReminderContext) {
    actix_web::rt::spawn(async move {
        let now = ctx.sys.get_timestamp_millis();
        let secs_to_next_run = get_start_delay(now.max(0) as u64);
        info!(
            "Hourly reminder job starts in {} seconds",
            secs_to_next_run
        );
        let start = Instant::now() + Duration::from_secs(secs_to_next_run);

        sleep_until(start).await;
        let mut hourly_interval = interval(Duration::from_secs(SECS_PER_HOUR));
        loop {
            hourly_interval.tick().await;
            let context = ctx.clone();
            actix_web::rt::spawn(send_reminders(context));
        }
    });
}

async fn send_reminders(context: ReminderContext) {
    // Errors are logged by the use case span
    let _ = execute(SendAttendanceRemindersUseCase {}, &context).await;
    let _ = execute(SendChecklistRemindersUseCase {}, &context).await;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_delay_works() {
        assert_eq!(get_start_delay(0), 3600);
        assert_eq!(get_start_delay(59 * 1000), 3541);
        assert_eq!(get_start_delay(3599 * 1000), 1);
        assert_eq!(get_start_delay(3600 * 1000), 3600);
        assert_eq!(get_start_delay(1_773_136_800_000 + 90 * 60 * 1000), 1800);
    }
}
