//! Ports connecting the domain to its adapters.

mod employee_repository;
mod employee_service;

pub use employee_repository::{
    EmployeeRepository, EmployeeRepositoryError, FixtureEmployeeRepository,
};
pub use employee_service::EmployeeService;

#[cfg(test)]
pub use employee_repository::MockEmployeeRepository;
#[cfg(test)]
pub use employee_service::MockEmployeeService;
