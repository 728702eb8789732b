//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};

use lectern::Trace;
#[cfg(debug_assertions)]
use lectern::doc::ApiDoc;
use lectern::domain::RecordsService;
use lectern::inbound::http::evaluations::{list_evaluations, submit_evaluation};
use lectern::inbound::http::health::{HealthState, greet, live, ready};
use lectern::inbound::http::json_error_config;
use lectern::inbound::http::lecturers::{add_lecturer, list_lecturers};
use lectern::inbound::http::state::HttpState;
use lectern::inbound::http::users::register_user;
use lectern::outbound::persistence::JsonFileStore;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[derive(Clone)]
struct AppDependencies {
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
}

fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
    } = deps;

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .app_data(json_error_config())
        .wrap(Trace)
        .service(register_user)
        .service(add_lecturer)
        .service(list_lecturers)
        .service(submit_evaluation)
        .service(list_evaluations)
        .service(greet)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(
        SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    );

    app
}

/// Construct an Actix HTTP server using the provided health state and
/// configuration.
///
/// Opens the file-backed store under the configured data directory and
/// wires it into the records service shared by all workers.
///
/// # Errors
/// Propagates [`std::io::Error`] when the data directory or socket cannot
/// be prepared.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let store =
        JsonFileStore::open(config.data_dir()).map_err(|err| std::io::Error::other(err.to_string()))?;
    let records = Arc::new(RecordsService::new(Arc::new(store)));
    let http_state = web::Data::new(HttpState::new(records));

    let server_health_state = health_state.clone();
    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
        })
    })
    .bind(config.bind_addr())?
    .run();

    health_state.mark_ready();
    Ok(server)
}
