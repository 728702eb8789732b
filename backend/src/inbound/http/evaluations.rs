//! Evaluation HTTP handlers.
//!
//! ```text
//! POST /evaluate {"user_index":"0001","lecturer_id":"L0001","rating":5}
//! GET /evaluations
//! ```

use actix_web::{get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Error, Evaluation, NewEvaluation};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Request body for `POST /evaluate`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct EvaluationRequest {
    /// Index of the submitting user.
    #[schema(example = "0001")]
    pub user_index: String,
    /// Identifier of the evaluated lecturer.
    #[schema(example = "L0001")]
    pub lecturer_id: String,
    /// Rating in `[1, 5]`.
    #[schema(value_type = i64, example = 5)]
    pub rating: i64,
    /// Optional free-form remarks.
    #[serde(default)]
    pub comments: Option<String>,
}

/// Confirmation body returned by mutations without further payload.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    /// Confirmation message.
    #[schema(example = "Evaluation submitted successfully")]
    pub message: String,
}

/// Submit an evaluation for an existing user and lecturer.
#[utoipa::path(
    post,
    path = "/evaluate",
    request_body = EvaluationRequest,
    responses(
        (status = 200, description = "Evaluation submitted", body = MessageResponse),
        (status = 400, description = "Rating outside [1, 5]", body = Error),
        (status = 404, description = "Unknown user or lecturer", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["evaluations"],
    operation_id = "submitEvaluation"
)]
#[post("/evaluate")]
pub async fn submit_evaluation(
    state: web::Data<HttpState>,
    payload: web::Json<EvaluationRequest>,
) -> ApiResult<web::Json<MessageResponse>> {
    let request = payload.into_inner();
    state
        .records
        .submit_evaluation(NewEvaluation {
            user_index: request.user_index,
            lecturer_id: request.lecturer_id,
            rating: request.rating,
            comments: request.comments,
        })
        .await?;
    Ok(web::Json(MessageResponse {
        message: "Evaluation submitted successfully".to_owned(),
    }))
}

/// List evaluations in submission order.
#[utoipa::path(
    get,
    path = "/evaluations",
    responses(
        (status = 200, description = "Evaluations", body = [Evaluation]),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["evaluations"],
    operation_id = "listEvaluations"
)]
#[get("/evaluations")]
pub async fn list_evaluations(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<Evaluation>>> {
    let evaluations = state.records.list_evaluations().await?;
    Ok(web::Json(evaluations))
}
