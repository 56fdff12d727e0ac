use crate::shared::entity::ID;

/// The kinds of reminders a subscriber can opt in to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReminderCategory {
    /// Reminders about upcoming events
    Attendance,
    /// Reminders about checklist items that are due
    Checklist,
}

/// A subscription to reminders delivered through the messaging channel
#[derive(Debug, Clone, PartialEq)]
pub struct RecipientConfig {
    pub id: ID,
    pub enabled: bool,
    /// Chat the messages are delivered to
    pub chat_id: Option<String>,
    pub reminders: bool,
    pub checklist: bool,
    /// Tenants this subscriber wants reminders for. Empty means all tenants.
    pub tenant_ids: Vec<ID>,
}

/// A subscriber that passed every filter for a candidate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Recipient<'a> {
    pub id: &'a ID,
    pub chat_id: &'a str,
}

impl RecipientConfig {
    pub fn subscribes_to(&self, category: ReminderCategory) -> bool {
        match category {
            ReminderCategory::Attendance => self.reminders,
            ReminderCategory::Checklist => self.checklist,
        }
    }

    pub fn accepts_tenant(&self, tenant_id: &ID) -> bool {
        self.tenant_ids.is_empty() || self.tenant_ids.contains(tenant_id)
    }

    fn delivery_address(&self) -> Option<&str> {
        self.chat_id
            .as_deref()
            .map(str::trim)
            .filter(|chat_id| !chat_id.is_empty())
    }

    pub fn as_recipient(&self, category: ReminderCategory, tenant_id: &ID) -> Option<Recipient<'_>> {
        if !self.enabled || !self.subscribes_to(category) || !self.accepts_tenant(tenant_id) {
            return None;
        }
        self.delivery_address().map(|chat_id| Recipient {
            id: &self.id,
            chat_id,
        })
    }
}

/// Subscribers that should receive a reminder of `category` for a candidate
/// owned by `tenant_id`, in the order they were given
pub fn resolve_recipients<'a>(
    configs: &'a [RecipientConfig],
    category: ReminderCategory,
    tenant_id: &ID,
) -> Vec<Recipient<'a>> {
    configs
        .iter()
        .filter_map(|config| config.as_recipient(category, tenant_id))
        .collect()
}
