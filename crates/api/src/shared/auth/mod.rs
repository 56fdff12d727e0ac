use crate::error::ReminderError;
use actix_web::{http::header, http::Method, HttpRequest};

/// Scheduled triggers either carry a credential or are sent as a POST.
/// Anything else is rejected before any configuration or data is touched.
pub fn protect_trigger_route(http_req: &HttpRequest) -> Result<(), ReminderError> {
    let has_credential = http_req.headers().contains_key(header::AUTHORIZATION);
    if !has_credential && http_req.method() != Method::POST {
        return Err(ReminderError::Unauthorized);
    }
    Ok(())
}
