use actix_web::{
    http::{header, StatusCode},
    HttpResponse,
};
use attendance_reminders_api_structs::failed_invocation::APIResponse;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReminderError {
    #[error("Unauthorized")]
    Unauthorized,
    #[error("{0}")]
    InternalError(String),
}

impl actix_web::error::ResponseError for ReminderError {
    fn status_code(&self) -> StatusCode {
        match *self {
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            Self::Unauthorized => HttpResponse::build(self.status_code())
                .insert_header((header::CONTENT_TYPE, "text/plain; charset=utf-8"))
                .body(self.to_string()),
            Self::InternalError(message) => {
                HttpResponse::build(self.status_code()).json(APIResponse::new(message.clone()))
            }
        }
    }
}
