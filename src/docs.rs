use crate::api::leave::{StatusFilter, SubmitLeave, UpdateLeaveStatus};
use crate::api::student::RegisterStudent;
use crate::model::leave::{LeaveRecord, LeaveStatus};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Leave Management System API",
        version = "1.0.0",
        description = r#"
## Student Leave Management System

This API powers a small **Leave Management System** for tracking student leave
requests.

### 🔹 Key Features
- **Student Registration**
  - Register students with a display name (optional, never a precondition)
- **Leave Submission**
  - Submit one leave request per student per day, with duplicate-date rejection
- **Leave History**
  - Per-student history with optional status filter, plus a full snapshot
- **Status Transitions**
  - Move requests between pending, approved and rejected

### 📦 Response Format
- JSON-based RESTful responses
- Mutations confirm with a `message` field; failures carry a `message` too

### 🚀 Usage
Use this API to build:
- Leave submission forms
- Approval dashboards
- Agent/automation tooling over the same operations

---
Built with **Rust**, **Actix Web**, and **Utoipa**.
"#,
    ),
    paths(
        crate::api::student::register_student,
        crate::api::leave::submit_leave,
        crate::api::leave::leave_history,
        crate::api::leave::all_leave_requests,
        crate::api::leave::update_leave_status,
    ),
    components(
        schemas(
            RegisterStudent,
            SubmitLeave,
            UpdateLeaveStatus,
            StatusFilter,
            LeaveRecord,
            LeaveStatus,
        )
    ),
    tags(
        (name = "Student", description = "Student registry APIs"),
        (name = "Leave", description = "Leave request APIs"),
    )
)]
pub struct ApiDoc;
