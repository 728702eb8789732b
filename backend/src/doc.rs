//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] generates the OpenAPI specification for the REST API. The
//! generated document backs Swagger UI in debug builds and external
//! tooling.

use utoipa::OpenApi;

use crate::domain::{Error, ErrorCode, Evaluation, Lecturer, User};
use crate::inbound::http::evaluations::{EvaluationRequest, MessageResponse};
use crate::inbound::http::health::Greeting;
use crate::inbound::http::lecturers::{LecturerCreatedResponse, LecturerRequest};
use crate::inbound::http::users::{RegisterRequest, RegisterResponse};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Lectern records API",
        description = "HTTP interface for user registration, lecturer records, and lecturer evaluations.",
        license(name = "MIT")
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::register_user,
        crate::inbound::http::lecturers::add_lecturer,
        crate::inbound::http::lecturers::list_lecturers,
        crate::inbound::http::evaluations::submit_evaluation,
        crate::inbound::http::evaluations::list_evaluations,
        crate::inbound::http::health::greet,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        RegisterRequest,
        RegisterResponse,
        LecturerRequest,
        LecturerCreatedResponse,
        EvaluationRequest,
        MessageResponse,
        Greeting,
        User,
        Lecturer,
        Evaluation,
        Error,
        ErrorCode,
    )),
    tags(
        (name = "users", description = "User registration"),
        (name = "lecturers", description = "Lecturer records"),
        (name = "evaluations", description = "Lecturer evaluations"),
        (name = "meta", description = "Greeting and health probes")
    )
)]
pub struct ApiDoc;
