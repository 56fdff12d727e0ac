use crate::shared::entity::ID;
use chrono_tz::Tz;
use std::collections::HashMap;

/// Zone used for every `Tenant` that has not configured one
pub const DEFAULT_TIMEZONE: Tz = chrono_tz::Europe::Berlin;

/// An organisation owning its own events, time zone and subscribers
#[derive(Debug, Clone, PartialEq)]
pub struct Tenant {
    pub id: ID,
    /// `None` when the tenant has not configured a zone or the stored
    /// zone name is not a known IANA identifier
    pub timezone: Option<Tz>,
}

impl Tenant {
    pub fn new(id: ID) -> Self {
        Self { id, timezone: None }
    }

    pub fn set_timezone(&mut self, timezone: &str) -> bool {
        match timezone.parse::<Tz>() {
            Ok(tzid) => {
                self.timezone = Some(tzid);
                true
            }
            Err(_) => false,
        }
    }

    pub fn timezone_or(&self, default: Tz) -> Tz {
        self.timezone.unwrap_or(default)
    }
}

/// Lookup from tenant to the zone its local time is computed in
#[derive(Debug, Clone)]
pub struct TenantTimezones {
    zones: HashMap<ID, Tz>,
    default: Tz,
}

impl TenantTimezones {
    pub fn new(tenants: &[Tenant], default: Tz) -> Self {
        let zones = tenants
            .iter()
            .map(|tenant| (tenant.id, tenant.timezone_or(default)))
            .collect();
        Self { zones, default }
    }

    pub fn get(&self, tenant_id: &ID) -> Tz {
        self.zones.get(tenant_id).copied().unwrap_or(self.default)
    }
}
