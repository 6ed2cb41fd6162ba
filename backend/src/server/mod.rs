//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::info;

use users_api::Trace;
#[cfg(debug_assertions)]
use users_api::doc::ApiDoc;
use users_api::domain::UserDirectoryService;
use users_api::inbound::http::health::{HealthState, live, ready};
use users_api::inbound::http::json_error_handler;
use users_api::inbound::http::state::HttpState;
use users_api::inbound::http::users::{create_user, list_users};
use users_api::outbound::persistence::{DbPool, DieselUserRepository};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

/// Wire the Diesel repository into the user service and expose it through
/// the HTTP driving ports.
fn build_http_state(pool: DbPool) -> web::Data<HttpState> {
    let repository = Arc::new(DieselUserRepository::new(pool));
    let service = Arc::new(UserDirectoryService::new(repository));
    web::Data::new(HttpState::new(service.clone(), service))
}

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .wrap(Trace)
        .service(list_users)
        .service(create_user)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// # Returns
/// A spawned [`Server`] that must be awaited to drive the listener.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let ServerConfig { bind_addr, db_pool } = config;
    let http_state = build_http_state(db_pool);
    let server_health_state = health_state.clone();

    let server = HttpServer::new(move || build_app(server_health_state.clone(), http_state.clone()))
        .bind(bind_addr)?
        .run();

    info!(%bind_addr, "users api listening");
    health_state.mark_ready();
    Ok(server)
}
