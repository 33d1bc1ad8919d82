//! Server construction and startup wiring.
//!
//! The advice registry is assembled here, once, and injected into every
//! component that participates in the interception pipeline.

mod config;

pub use config::{ServerConfig, BIND_VAR};

use std::sync::Arc;

use actix_web::{web, HttpRequest};

use crate::domain::ports::EmployeeService;
use crate::domain::{EmployeeServiceImpl, Error};
use crate::inbound::http::employees::{create_employee, get_employee_by_id};
use crate::inbound::http::{ApiError, HttpState};
use crate::intercept::logging_registry;
use crate::outbound::persistence::InMemoryEmployeeRepository;

/// Wire the default dependency graph: logging advice registry, in-memory
/// store, employee service.
#[must_use]
pub fn build_state() -> web::Data<HttpState> {
    let advice = Arc::new(logging_registry());
    let repository = Arc::new(InMemoryEmployeeRepository::new());
    let employees: Arc<dyn EmployeeService> =
        Arc::new(EmployeeServiceImpl::new(repository, Arc::clone(&advice)));
    web::Data::new(HttpState::new(employees, advice))
}

fn json_error_handler(
    err: actix_web::error::JsonPayloadError,
    _req: &HttpRequest,
) -> actix_web::Error {
    ApiError::from(Error::invalid_request(format!(
        "request body is missing or malformed: {err}"
    )))
    .into()
}

fn path_error_handler(err: actix_web::error::PathError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::from(Error::invalid_request(format!(
        "path identifier is missing or malformed: {err}"
    )))
    .into()
}

/// Register routes, extractor error handling, and shared state on an app.
///
/// Extractor failures (null/absent body, non-numeric id) become
/// `invalid_request` responses before any handler, and therefore any store
/// access, runs.
pub fn configure(config: &mut web::ServiceConfig, state: web::Data<HttpState>) {
    config
        .app_data(state)
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        .service(
            web::scope("/api")
                .service(create_employee)
                .service(get_employee_by_id),
        );

    #[cfg(debug_assertions)]
    config.route("/api-docs/openapi.json", web::get().to(openapi_json));
}

#[cfg(debug_assertions)]
async fn openapi_json() -> web::Json<utoipa::openapi::OpenApi> {
    use utoipa::OpenApi;

    web::Json(crate::doc::ApiDoc::openapi())
}
