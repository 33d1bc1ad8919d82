//! Employee domain service implementing the driving port.
//!
//! Orchestrates create and lookup-by-id against the entity store port.
//! Both operations run through the injected advice registry, so the
//! service tier forms the middle frame of the interception pipeline.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ports::{EmployeeRepository, EmployeeRepositoryError, EmployeeService};
use crate::domain::{Employee, EmployeeDraft, EmployeeId, EmployeeRecord, Error};
use crate::intercept::{AdviceRegistry, JoinPoint, UnitName};

const CREATE_EMPLOYEE: UnitName = UnitName::new("domain::employee_service", "create_employee");
const FIND_EMPLOYEE_BY_ID: UnitName =
    UnitName::new("domain::employee_service", "find_employee_by_id");

fn map_repository_error(error: EmployeeRepositoryError) -> Error {
    match error {
        EmployeeRepositoryError::Connection { message } => {
            Error::store_failure(format!("employee store unavailable: {message}"))
        }
        EmployeeRepositoryError::Query { message } => {
            Error::store_failure(format!("employee store error: {message}"))
        }
    }
}

/// Employee service over an entity store port.
#[derive(Clone)]
pub struct EmployeeServiceImpl<R> {
    repository: Arc<R>,
    advice: Arc<AdviceRegistry>,
}

impl<R> EmployeeServiceImpl<R> {
    /// Create a service with its store and observability handle.
    pub fn new(repository: Arc<R>, advice: Arc<AdviceRegistry>) -> Self {
        Self { repository, advice }
    }
}

#[async_trait]
impl<R> EmployeeService for EmployeeServiceImpl<R>
where
    R: EmployeeRepository,
{
    async fn create_employee(&self, record: EmployeeRecord) -> Result<Employee, Error> {
        let join_point = JoinPoint::with_args(CREATE_EMPLOYEE, &record);
        self.advice
            .dispatch(&join_point, || async {
                let draft = EmployeeDraft::from(&record);
                let employee = self
                    .repository
                    .save(&draft)
                    .await
                    .map_err(map_repository_error)?;
                debug!(id = %employee.id(), "saved employee");
                Ok(employee)
            })
            .await
    }

    async fn find_employee_by_id(&self, id: EmployeeId) -> Result<Option<Employee>, Error> {
        let join_point = JoinPoint::with_args(FIND_EMPLOYEE_BY_ID, &id);
        self.advice
            .dispatch(&join_point, || async {
                self.repository
                    .find_by_id(id)
                    .await
                    .map_err(map_repository_error)
            })
            .await
    }
}
