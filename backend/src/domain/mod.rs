//! Domain model, errors, services, and ports.

mod employee;
mod employee_service;
mod error;
pub mod ports;

pub use employee::{Employee, EmployeeDraft, EmployeeId, EmployeeRecord};
pub use employee_service::EmployeeServiceImpl;
pub use error::{Error, ErrorCode};
