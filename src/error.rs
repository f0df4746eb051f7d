use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use chrono::NaiveDate;
use thiserror::Error;

use crate::model::leave::LeaveStatus;

/// Typed outcomes for store operations. None of these poison the store;
/// every failing operation leaves the record lists untouched.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LeaveError {
    #[error("Invalid date format: '{0}'. Expected YYYY-MM-DD")]
    InvalidDateFormat(String),

    #[error("A leave request already exists for student '{student_id}' on {date}")]
    DuplicateLeaveDate { student_id: String, date: NaiveDate },

    #[error("Invalid status: '{}'. Allowed: {}", .0, LeaveStatus::ALLOWED.join(", "))]
    InvalidStatus(String),

    #[error("No leave record found for student '{student_id}' on {date}")]
    RecordNotFound { student_id: String, date: NaiveDate },
}

impl ResponseError for LeaveError {
    fn status_code(&self) -> StatusCode {
        match self {
            LeaveError::RecordNotFound { .. } => StatusCode::NOT_FOUND,
            _ => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "message": self.to_string()
        }))
    }
}
