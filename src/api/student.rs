use actix_web::{HttpResponse, Responder, web};
use serde::Deserialize;
use tracing::debug;
use utoipa::ToSchema;

use crate::store::LeaveStore;

#[derive(Deserialize, ToSchema)]
pub struct RegisterStudent {
    #[schema(example = "stu001")]
    pub student_id: String,
    #[schema(example = "Rahim Uddin")]
    pub student_name: String,
}

/// Register (or re-register) a student in the display-name registry.
/// Registration is never a precondition for submitting leave.
#[utoipa::path(
    post,
    path = "/register_student",
    request_body = RegisterStudent,
    responses(
        (status = 200, description = "Student registered",
         body = Object,
         example = json!({
            "message": "Student 'stu001' registered successfully"
         })
        ),
        (status = 400, description = "Missing student id or name")
    ),
    tag = "Student"
)]
pub async fn register_student(
    store: web::Data<LeaveStore>,
    payload: web::Json<RegisterStudent>,
) -> actix_web::Result<impl Responder> {
    if payload.student_id.is_empty() || payload.student_name.is_empty() {
        return Ok(HttpResponse::BadRequest().json(serde_json::json!({
            "message": "Both student_id and student_name are required"
        })));
    }

    let previous = store.register_student(&payload.student_id, &payload.student_name);
    if let Some(old_name) = previous {
        debug!(student_id = %payload.student_id, %old_name, "student re-registered");
    }

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": format!("Student '{}' registered successfully", payload.student_id)
    })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, test};

    #[actix_web::test]
    async fn register_requires_both_fields() {
        let store = web::Data::new(LeaveStore::new());
        let app = test::init_service(
            App::new()
                .app_data(store.clone())
                .route("/register_student", web::post().to(register_student)),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/register_student")
            .set_json(serde_json::json!({"student_id": "stu001", "student_name": ""}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);

        let req = test::TestRequest::post()
            .uri("/register_student")
            .set_json(serde_json::json!({"student_id": "stu001", "student_name": "Rahim Uddin"}))
            .to_request();
        assert!(test::call_service(&app, req).await.status().is_success());
        assert_eq!(store.student_name("stu001").as_deref(), Some("Rahim Uddin"));
    }
}
