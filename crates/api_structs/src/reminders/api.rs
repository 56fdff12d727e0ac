use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod send_reminders {
    use super::*;

    /// Outcome of one reminder invocation
    #[derive(Debug, Deserialize, Serialize)]
    pub struct APIResponse {
        pub success: bool,
        /// Number of messages that were delivered
        pub processed: usize,
        pub timestamp: DateTime<Utc>,
    }

    impl APIResponse {
        pub fn new(processed: usize, timestamp: DateTime<Utc>) -> Self {
            Self {
                success: true,
                processed,
                timestamp,
            }
        }
    }
}

pub mod failed_invocation {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    pub struct APIResponse {
        pub success: bool,
        pub error: String,
    }

    impl APIResponse {
        pub fn new(error: String) -> Self {
            Self {
                success: false,
                error,
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn it_serializes_the_invocation_result() {
        let timestamp = Utc.with_ymd_and_hms(2026, 3, 10, 10, 0, 0).unwrap();
        let body = serde_json::to_value(send_reminders::APIResponse::new(3, timestamp)).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "success": true,
                "processed": 3,
                "timestamp": "2026-03-10T10:00:00Z"
            })
        );

        let body =
            serde_json::to_value(failed_invocation::APIResponse::new("boom".into())).unwrap();
        assert_eq!(body, serde_json::json!({ "success": false, "error": "boom" }));
    }
}
