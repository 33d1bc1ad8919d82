//! Employee API handlers.
//!
//! ```text
//! POST /api/employee {"name":"Samir","surname":"Samirov","salary":null}
//! GET /api/employee/{id}
//! ```
//!
//! Handler bodies dispatch through the advice registry, forming the
//! controller frame of the interception pipeline; the service call inside
//! re-enters the pipeline with its own frame.

use actix_web::{get, post, web, HttpResponse};

use crate::domain::{Employee, EmployeeId, EmployeeRecord};
use crate::inbound::http::error::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::intercept::{JoinPoint, UnitName};

/// Unit name of the create-employee handler.
pub const CREATE_EMPLOYEE: UnitName =
    UnitName::new("inbound::http::employees", "create_employee");

/// Unit name of the lookup handler.
pub const GET_EMPLOYEE_BY_ID: UnitName =
    UnitName::new("inbound::http::employees", "get_employee_by_id");

/// Create an employee from the transfer record in the request body.
///
/// A missing or `null` body is rejected as `invalid_request` by the JSON
/// extractor before this handler runs, so no store write happens for
/// invalid input.
#[utoipa::path(
    post,
    path = "/api/employee",
    request_body = EmployeeRecord,
    responses(
        (status = 200, description = "Employee created", body = Employee),
        (status = 400, description = "Missing or malformed body", body = super::error::ApiError),
        (status = 500, description = "Entity store failure", body = super::error::ApiError)
    ),
    tags = ["employees"],
    operation_id = "createEmployee"
)]
#[post("/employee")]
pub async fn create_employee(
    state: web::Data<HttpState>,
    payload: web::Json<EmployeeRecord>,
) -> ApiResult<web::Json<Employee>> {
    let record = payload.into_inner();
    let join_point = JoinPoint::with_args(CREATE_EMPLOYEE, &record);
    let employee = state
        .advice
        .dispatch(&join_point, || state.employees.create_employee(record))
        .await?;
    Ok(web::Json(employee))
}

/// Look an employee up by path identifier.
///
/// A non-numeric identifier is rejected as `invalid_request` by the path
/// extractor before this handler runs, so no store read happens for
/// invalid input. An unknown identifier yields 404 with an empty body.
#[utoipa::path(
    get,
    path = "/api/employee/{id}",
    params(("id" = i64, Path, description = "Employee identifier")),
    responses(
        (status = 200, description = "Employee found", body = EmployeeRecord),
        (status = 400, description = "Malformed identifier", body = super::error::ApiError),
        (status = 404, description = "No employee with this identifier"),
        (status = 500, description = "Entity store failure", body = super::error::ApiError)
    ),
    tags = ["employees"],
    operation_id = "getEmployeeById"
)]
#[get("/employee/{id}")]
pub async fn get_employee_by_id(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    let id = EmployeeId::new(path.into_inner());
    let join_point = JoinPoint::with_args(GET_EMPLOYEE_BY_ID, &id);
    let found = state
        .advice
        .dispatch(&join_point, || state.employees.find_employee_by_id(id))
        .await?;
    Ok(match found {
        Some(employee) => HttpResponse::Ok().json(EmployeeRecord::from(&employee)),
        None => HttpResponse::NotFound().finish(),
    })
}
