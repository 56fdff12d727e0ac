use attendance_reminders_domain::Recipient;
use attendance_reminders_infra::IMessenger;
use std::ops::AddAssign;
use tracing::warn;

/// Tally of delivery attempts
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DeliveryReport {
    pub sent: usize,
    pub failed: usize,
}

impl AddAssign for DeliveryReport {
    fn add_assign(&mut self, other: Self) {
        self.sent += other.sent;
        self.failed += other.failed;
    }
}

/// Sends `text` to every recipient in order. A failed attempt is logged and
/// counted, it never stops the remaining deliveries. Nothing is retried.
pub async fn dispatch(
    messenger: &dyn IMessenger,
    recipients: &[Recipient<'_>],
    text: &str,
) -> DeliveryReport {
    let mut report = DeliveryReport::default();

    for recipient in recipients {
        match messenger.send_message(recipient.chat_id, text).await {
            Ok(()) => report.sent += 1,
            Err(e) => {
                report.failed += 1;
                warn!(
                    recipient_id = %recipient.id,
                    "Failed to deliver reminder: {}", e
                );
            }
        }
    }

    report
}
