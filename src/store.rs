use std::collections::HashMap;
use std::str::FromStr;
use std::sync::{PoisonError, RwLock};

use chrono::NaiveDate;
use tracing::debug;

use crate::error::LeaveError;
use crate::model::leave::{LeaveRecord, LeaveStatus};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// In-memory leave request store. One instance is built at startup and shared
/// with every handler through `web::Data`; there is no ambient global state.
///
/// Per-student record lists keep insertion order. The registry is an
/// independent mapping: a student may hold leave records without ever being
/// registered, and registering never touches the leave side.
pub struct LeaveStore {
    leaves: RwLock<HashMap<String, Vec<LeaveRecord>>>,
    registry: RwLock<HashMap<String, String>>,
}

impl LeaveStore {
    pub fn new() -> Self {
        Self {
            leaves: RwLock::new(HashMap::new()),
            registry: RwLock::new(HashMap::new()),
        }
    }

    /// Upsert into the student registry. Returns the previous display name if
    /// the student was already registered.
    pub fn register_student(&self, student_id: &str, student_name: &str) -> Option<String> {
        self.registry
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(student_id.to_string(), student_name.to_string())
    }

    pub fn student_name(&self, student_id: &str) -> Option<String> {
        self.registry
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(student_id)
            .cloned()
    }

    /// Submit a leave request for one day. The date string is validated before
    /// any lookup; at most one record may exist per (student, date), so a
    /// second submission for the same day is rejected and the stored record
    /// stays exactly as it was.
    pub fn submit_leave(
        &self,
        student_id: &str,
        date: &str,
        reason: &str,
    ) -> Result<LeaveRecord, LeaveError> {
        let date = parse_date(date)?;

        // Duplicate check and append under one write guard, so two racing
        // submissions for the same day cannot both pass the check.
        let mut leaves = self.leaves.write().unwrap_or_else(PoisonError::into_inner);
        let records = leaves.entry(student_id.to_string()).or_default();

        if records.iter().any(|r| r.date == date) {
            return Err(LeaveError::DuplicateLeaveDate {
                student_id: student_id.to_string(),
                date,
            });
        }

        let record = LeaveRecord::new(date, reason.to_string());
        records.push(record.clone());
        debug!(student_id, date = %date, "leave request recorded");
        Ok(record)
    }

    /// Leave records for one student, in submission order. Unknown students
    /// yield an empty list, not an error. The status filter is matched
    /// literally against the serialized status, so an unrecognized filter
    /// value simply matches nothing.
    pub fn get_leave_history(&self, student_id: &str, status: Option<&str>) -> Vec<LeaveRecord> {
        let leaves = self.leaves.read().unwrap_or_else(PoisonError::into_inner);
        let Some(records) = leaves.get(student_id) else {
            return Vec::new();
        };
        match status {
            Some(filter) => records
                .iter()
                .filter(|r| r.status.as_str() == filter)
                .cloned()
                .collect(),
            None => records.clone(),
        }
    }

    /// Full snapshot of every student's record list.
    pub fn get_all_leave_requests(&self) -> HashMap<String, Vec<LeaveRecord>> {
        self.leaves
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Flip the status of an existing (student, date) record. Structural
    /// inputs are validated before the lookup: a bad status string fails with
    /// `InvalidStatus` and a bad date string with `InvalidDateFormat`, in both
    /// cases without touching any record.
    pub fn update_leave_status(
        &self,
        student_id: &str,
        date: &str,
        new_status: &str,
    ) -> Result<LeaveRecord, LeaveError> {
        let status = LeaveStatus::from_str(new_status)
            .map_err(|_| LeaveError::InvalidStatus(new_status.to_string()))?;
        let date = parse_date(date)?;

        let mut leaves = self.leaves.write().unwrap_or_else(PoisonError::into_inner);
        let record = leaves
            .get_mut(student_id)
            .and_then(|records| records.iter_mut().find(|r| r.date == date))
            .ok_or_else(|| LeaveError::RecordNotFound {
                student_id: student_id.to_string(),
                date,
            })?;

        record.status = status;
        debug!(student_id, date = %date, status = %status, "leave status updated");
        Ok(record.clone())
    }
}

impl Default for LeaveStore {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_date(date: &str) -> Result<NaiveDate, LeaveError> {
    NaiveDate::parse_from_str(date, DATE_FORMAT)
        .map_err(|_| LeaveError::InvalidDateFormat(date.to_string()))
}
