use super::IRecipientRepo;
use crate::repos::shared::inmemory_repo::find_by;
use attendance_reminders_domain::{RecipientConfig, ReminderCategory};

pub struct InMemoryRecipientRepo {
    recipients: Vec<RecipientConfig>,
}

impl InMemoryRecipientRepo {
    pub fn new(recipients: Vec<RecipientConfig>) -> Self {
        Self { recipients }
    }
}

#[async_trait::async_trait]
impl IRecipientRepo for InMemoryRecipientRepo {
    async fn find_subscribed(
        &self,
        category: ReminderCategory,
    ) -> anyhow::Result<Vec<RecipientConfig>> {
        Ok(find_by(&self.recipients, |recipient| {
            recipient.enabled && recipient.subscribes_to(category)
        }))
    }
}
