//! User registration HTTP handlers.
//!
//! ```text
//! POST /register {"name":"Alice","email":"a@x.com"}
//! ```

use actix_web::{post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::Error;
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Request body for `POST /register`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct RegisterRequest {
    /// Name of the registering user.
    #[schema(example = "Alice")]
    pub name: String,
    /// Contact address; must be unique and syntactically valid.
    #[schema(example = "a@x.com")]
    pub email: String,
}

/// Response body for a successful registration.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RegisterResponse {
    /// Assigned sequential index.
    #[schema(example = "0001")]
    pub index: String,
    /// Confirmation message.
    #[schema(example = "User registered successfully")]
    pub message: String,
}

/// Register a user and assign the next sequential index.
#[utoipa::path(
    post,
    path = "/register",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "User registered", body = RegisterResponse),
        (status = 400, description = "Invalid email or duplicate registration", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "registerUser"
)]
#[post("/register")]
pub async fn register_user(
    state: web::Data<HttpState>,
    payload: web::Json<RegisterRequest>,
) -> ApiResult<web::Json<RegisterResponse>> {
    let request = payload.into_inner();
    let user = state
        .records
        .register_user(&request.name, &request.email)
        .await?;
    Ok(web::Json(RegisterResponse {
        index: user.index.to_string(),
        message: "User registered successfully".to_owned(),
    }))
}
