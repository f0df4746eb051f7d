use actix_web::{HttpResponse, Responder, web};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use crate::model::leave::LeaveRecord;
use crate::store::LeaveStore;

#[derive(Deserialize, ToSchema)]
pub struct SubmitLeave {
    #[schema(example = "stu001")]
    pub student_id: String,
    /// Leave day, YYYY-MM-DD
    #[schema(example = "2025-06-01", format = "date")]
    pub date: String,
    #[schema(example = "Fever")]
    pub reason: String,
}

#[derive(Deserialize, ToSchema)]
pub struct UpdateLeaveStatus {
    #[schema(example = "stu001")]
    pub student_id: String,
    #[schema(example = "2025-06-01", format = "date")]
    pub date: String,
    /// One of: pending, approved, rejected
    #[schema(example = "approved")]
    pub status: String,
}

#[derive(Deserialize, IntoParams, ToSchema)]
pub struct StatusFilter {
    #[schema(example = "pending")]
    /// Filter by leave status; unrecognized values match nothing
    pub status: Option<String>,
}

/* =========================
Submit leave request
========================= */
#[utoipa::path(
    post,
    path = "/submit_leave",
    request_body(
        content = SubmitLeave,
        description = "Leave request payload",
        content_type = "application/json"
    ),
    responses(
        (status = 200, description = "Leave request submitted",
         body = Object,
         example = json!({
            "message": "Leave request submitted for student 'stu001' on 2025-06-01",
            "status": "pending"
         })
        ),
        (status = 400, description = "Malformed date or duplicate leave date")
    ),
    tag = "Leave"
)]
pub async fn submit_leave(
    store: web::Data<LeaveStore>,
    payload: web::Json<SubmitLeave>,
) -> actix_web::Result<impl Responder> {
    if payload.student_id.is_empty() {
        return Ok(HttpResponse::BadRequest().json(serde_json::json!({
            "message": "student_id must not be empty"
        })));
    }

    let record = store
        .submit_leave(&payload.student_id, &payload.date, &payload.reason)
        .map_err(|e| {
            tracing::warn!(error = %e, student_id = %payload.student_id, "Leave submission rejected");
            e
        })?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": format!(
            "Leave request submitted for student '{}' on {}",
            payload.student_id, record.date
        ),
        "status": record.status
    })))
}

/* =========================
Leave history per student
========================= */
#[utoipa::path(
    get,
    path = "/get_leave_history/{student_id}",
    params(
        ("student_id" = String, Path, description = "Student identifier"),
        StatusFilter
    ),
    responses(
        (status = 200, description = "Leave records in submission order", body = [LeaveRecord])
    ),
    tag = "Leave"
)]
pub async fn leave_history(
    store: web::Data<LeaveStore>,
    path: web::Path<String>,
    query: web::Query<StatusFilter>,
) -> actix_web::Result<impl Responder> {
    let student_id = path.into_inner();
    let history = store.get_leave_history(&student_id, query.status.as_deref());
    Ok(HttpResponse::Ok().json(history))
}

/* =========================
Full store snapshot
========================= */
#[utoipa::path(
    get,
    path = "/get_all_leave_requests",
    responses(
        (status = 200, description = "All leave records, keyed by student id",
         body = Object,
         example = json!({
            "stu001": [{
                "date": "2025-06-01",
                "reason": "Fever",
                "status": "pending",
                "created_at": "2025-06-01T08:30:00Z"
            }]
         })
        )
    ),
    tag = "Leave"
)]
pub async fn all_leave_requests(store: web::Data<LeaveStore>) -> actix_web::Result<impl Responder> {
    Ok(HttpResponse::Ok().json(store.get_all_leave_requests()))
}

/* =========================
Update leave status
========================= */
#[utoipa::path(
    post,
    path = "/update_leave_status",
    request_body(
        content = UpdateLeaveStatus,
        description = "Status transition payload",
        content_type = "application/json"
    ),
    responses(
        (status = 200, description = "Status updated",
         body = Object,
         example = json!({
            "message": "Leave on 2025-06-01 for student 'stu001' is now approved"
         })
        ),
        (status = 400, description = "Unrecognized status value"),
        (status = 404, description = "No record for that student and date")
    ),
    tag = "Leave"
)]
pub async fn update_leave_status(
    store: web::Data<LeaveStore>,
    payload: web::Json<UpdateLeaveStatus>,
) -> actix_web::Result<impl Responder> {
    let record = store
        .update_leave_status(&payload.student_id, &payload.date, &payload.status)
        .map_err(|e| {
            tracing::warn!(error = %e, student_id = %payload.student_id, "Status update failed");
            e
        })?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": format!(
            "Leave on {} for student '{}' is now {}",
            record.date, payload.student_id, record.status
        )
    })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, test};

    use crate::model::leave::LeaveStatus;

    fn routes(cfg: &mut web::ServiceConfig) {
        cfg.route("/submit_leave", web::post().to(submit_leave))
            .route("/get_leave_history/{student_id}", web::get().to(leave_history))
            .route("/get_all_leave_requests", web::get().to(all_leave_requests))
            .route("/update_leave_status", web::post().to(update_leave_status));
    }

    #[actix_web::test]
    async fn submit_then_history_round_trip() {
        let store = web::Data::new(LeaveStore::new());
        let app =
            test::init_service(App::new().app_data(store.clone()).configure(routes)).await;

        let req = test::TestRequest::post()
            .uri("/submit_leave")
            .set_json(serde_json::json!({
                "student_id": "stu001",
                "date": "2025-06-01",
                "reason": "Fever"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let req = test::TestRequest::get()
            .uri("/get_leave_history/stu001?status=pending")
            .to_request();
        let resp = test::call_service(&app, req).await;
        let body: Vec<LeaveRecord> = test::read_body_json(resp).await;
        assert_eq!(body.len(), 1);
        assert_eq!(body[0].reason, "Fever");
        assert_eq!(body[0].status, LeaveStatus::Pending);
    }

    #[actix_web::test]
    async fn duplicate_submission_returns_400() {
        let store = web::Data::new(LeaveStore::new());
        let app =
            test::init_service(App::new().app_data(store.clone()).configure(routes)).await;

        let payload = serde_json::json!({
            "student_id": "stu001",
            "date": "2025-06-01",
            "reason": "Fever"
        });

        let req = test::TestRequest::post()
            .uri("/submit_leave")
            .set_json(&payload)
            .to_request();
        assert!(test::call_service(&app, req).await.status().is_success());

        let req = test::TestRequest::post()
            .uri("/submit_leave")
            .set_json(&payload)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn update_missing_record_returns_404() {
        let store = web::Data::new(LeaveStore::new());
        let app =
            test::init_service(App::new().app_data(store.clone()).configure(routes)).await;

        let req = test::TestRequest::post()
            .uri("/update_leave_status")
            .set_json(serde_json::json!({
                "student_id": "ghost",
                "date": "2025-06-01",
                "status": "approved"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::NOT_FOUND);
    }
}
