//! Lectern backend library modules.
//!
//! Record-keeping service for students, lecturers, and lecturer
//! evaluations. The domain layer owns validation and identifier
//! assignment, inbound adapters expose the HTTP surface, and outbound
//! adapters persist collections to flat JSON files.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
/// Request-scoped tracing middleware attached by the server and tests.
pub use middleware::trace::Trace;
