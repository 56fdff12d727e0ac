use super::IRecipientRepo;
use attendance_reminders_domain::{RecipientConfig, ReminderCategory, ID};
use sqlx::{FromRow, PgPool};
use tracing::error;

pub struct PostgresRecipientRepo {
    pool: PgPool,
}

impl PostgresRecipientRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct RecipientConfigRaw {
    id: i64,
    enabled: bool,
    telegram_chat_id: Option<String>,
    reminders: Option<bool>,
    checklist: Option<bool>,
    orgs: Option<Vec<i64>>,
}

impl From<RecipientConfigRaw> for RecipientConfig {
    fn from(e: RecipientConfigRaw) -> Self {
        Self {
            id: e.id.into(),
            enabled: e.enabled,
            chat_id: e.telegram_chat_id,
            reminders: e.reminders.unwrap_or(false),
            checklist: e.checklist.unwrap_or(false),
            tenant_ids: e
                .orgs
                .unwrap_or_default()
                .into_iter()
                .map(ID::from)
                .collect(),
        }
    }
}

#[async_trait::async_trait]
impl IRecipientRepo for PostgresRecipientRepo {
    async fn find_subscribed(
        &self,
        category: ReminderCategory,
    ) -> anyhow::Result<Vec<RecipientConfig>> {
        let query = match category {
            ReminderCategory::Attendance => {
                r#"
                SELECT id, enabled, telegram_chat_id, reminders, checklist, orgs FROM notifications
                WHERE enabled = true AND reminders = true
                ORDER BY id
                "#
            }
            ReminderCategory::Checklist => {
                r#"
                SELECT id, enabled, telegram_chat_id, reminders, checklist, orgs FROM notifications
                WHERE enabled = true AND checklist = true
                ORDER BY id
                "#
            }
        };
        let recipients: Vec<RecipientConfigRaw> = sqlx::query_as(query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                error!(
                    "Unable to load recipients subscribed to {:?}. DB returned error: {:?}",
                    category, e
                );
                e
            })?;
        Ok(recipients.into_iter().map(|r| r.into()).collect())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn it_treats_missing_allow_list_as_all_tenants() {
        let config: RecipientConfig = RecipientConfigRaw {
            id: 1,
            enabled: true,
            telegram_chat_id: Some("42".into()),
            reminders: Some(true),
            checklist: None,
            orgs: None,
        }
        .into();
        assert!(config.tenant_ids.is_empty());
        assert!(config.accepts_tenant(&ID::from(99)));
        assert!(!config.subscribes_to(ReminderCategory::Checklist));
    }
}
