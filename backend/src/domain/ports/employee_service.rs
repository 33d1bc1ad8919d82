//! Driving port for employee use-cases exposed to inbound adapters.

use async_trait::async_trait;

use crate::domain::{Employee, EmployeeId, EmployeeRecord, Error};

/// Use-cases the request handlers depend on.
///
/// Store-level failures surface as [`crate::domain::ErrorCode::StoreFailure`]
/// and propagate; this system defines no retry or fallback policy.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeService: Send + Sync {
    /// Build an employee from the record's non-id fields, persist it, and
    /// return the persisted, id-bearing entity.
    async fn create_employee(&self, record: EmployeeRecord) -> Result<Employee, Error>;

    /// Look an employee up by identifier; `Ok(None)` when absent.
    async fn find_employee_by_id(&self, id: EmployeeId) -> Result<Option<Employee>, Error>;
}
