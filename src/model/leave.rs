use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;

/// Lifecycle state of a leave record. Every record starts out pending.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LeaveStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl LeaveStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeaveStatus::Pending => "pending",
            LeaveStatus::Approved => "approved",
            LeaveStatus::Rejected => "rejected",
        }
    }

    /// Accepted wire values, in the order they are reported in errors.
    pub const ALLOWED: [&'static str; 3] = ["pending", "approved", "rejected"];
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "date": "2025-06-01",
    "reason": "Fever",
    "status": "pending",
    "created_at": "2025-06-01T08:30:00Z"
}))]
pub struct LeaveRecord {
    #[schema(example = "2025-06-01", format = "date", value_type = String)]
    /// day the leave is requested for
    pub date: NaiveDate,

    #[schema(example = "Fever")]
    /// free-text reason, may be empty
    pub reason: String,

    #[schema(example = "pending", value_type = String)]
    pub status: LeaveStatus,

    #[schema(example = "2025-06-01T08:30:00Z", format = "date-time", value_type = String)]
    /// set once at submission, never changed afterwards
    pub created_at: DateTime<Utc>,
}

impl LeaveRecord {
    pub fn new(date: NaiveDate, reason: String) -> Self {
        Self {
            date,
            reason,
            status: LeaveStatus::Pending,
            created_at: Utc::now(),
        }
    }
}
