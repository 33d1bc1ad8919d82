//! OpenAPI document for the REST surface.

use utoipa::OpenApi;

use crate::domain::{Employee, EmployeeRecord};
use crate::inbound::http::employees;
use crate::inbound::http::ApiError;

/// Public OpenAPI surface served in debug builds.
#[derive(OpenApi)]
#[openapi(
    paths(employees::create_employee, employees::get_employee_by_id),
    components(schemas(Employee, EmployeeRecord, ApiError)),
    tags((name = "employees", description = "Employee CRUD endpoints"))
)]
pub struct ApiDoc;
