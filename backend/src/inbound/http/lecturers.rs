//! Lecturer HTTP handlers.
//!
//! ```text
//! POST /lecturers {"name":"Dr. X","department":"CS"}
//! GET /lecturers
//! ```

use actix_web::{get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Error, Lecturer};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Request body for `POST /lecturers`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct LecturerRequest {
    /// Lecturer name.
    #[schema(example = "Dr. X")]
    pub name: String,
    /// Department the lecturer belongs to.
    #[schema(example = "CS")]
    pub department: String,
}

/// Response body for a successful lecturer creation.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LecturerCreatedResponse {
    /// Assigned sequential identifier.
    #[schema(example = "L0001")]
    pub lecturer_id: String,
    /// Confirmation message.
    #[schema(example = "Lecturer added successfully")]
    pub message: String,
}

/// Add a lecturer and assign the next sequential identifier.
#[utoipa::path(
    post,
    path = "/lecturers",
    request_body = LecturerRequest,
    responses(
        (status = 200, description = "Lecturer added", body = LecturerCreatedResponse),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["lecturers"],
    operation_id = "addLecturer"
)]
#[post("/lecturers")]
pub async fn add_lecturer(
    state: web::Data<HttpState>,
    payload: web::Json<LecturerRequest>,
) -> ApiResult<web::Json<LecturerCreatedResponse>> {
    let request = payload.into_inner();
    let lecturer = state
        .records
        .add_lecturer(&request.name, &request.department)
        .await?;
    Ok(web::Json(LecturerCreatedResponse {
        lecturer_id: lecturer.id.to_string(),
        message: "Lecturer added successfully".to_owned(),
    }))
}

/// List lecturers in creation order.
#[utoipa::path(
    get,
    path = "/lecturers",
    responses(
        (status = 200, description = "Lecturers", body = [Lecturer]),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["lecturers"],
    operation_id = "listLecturers"
)]
#[get("/lecturers")]
pub async fn list_lecturers(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Lecturer>>> {
    let lecturers = state.records.list_lecturers().await?;
    Ok(web::Json(lecturers))
}
