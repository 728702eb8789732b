//! HTTP inbound adapter exposing REST endpoints.

pub mod error;
pub mod evaluations;
pub mod health;
pub mod lecturers;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;

pub use error::ApiResult;

use actix_web::web;

use crate::domain::Error;

/// JSON extractor configuration mapping malformed bodies to the shared
/// error envelope instead of actix's default plain-text response.
pub fn json_error_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        Error::invalid_input(format!("invalid request body: {err}")).into()
    })
}
