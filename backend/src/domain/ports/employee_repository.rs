//! Driven port for the entity store holding employee records.

use async_trait::async_trait;

use crate::domain::{Employee, EmployeeDraft, EmployeeId};

/// Persistence errors raised by employee store adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EmployeeRepositoryError {
    /// Store connection could not be established.
    #[error("employee store connection failed: {message}")]
    Connection { message: String },
    /// Query or mutation failed during execution.
    #[error("employee store query failed: {message}")]
    Query { message: String },
}

impl EmployeeRepositoryError {
    /// Build a [`EmployeeRepositoryError::Connection`] error.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Build a [`EmployeeRepositoryError::Query`] error.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Port for persisting and retrieving employees by identifier.
///
/// The store owns the canonical record and generates identifiers on save.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Persist a draft and return the stored, id-bearing entity.
    async fn save(&self, draft: &EmployeeDraft) -> Result<Employee, EmployeeRepositoryError>;

    /// Fetch an employee by identifier.
    async fn find_by_id(
        &self,
        id: EmployeeId,
    ) -> Result<Option<Employee>, EmployeeRepositoryError>;
}

/// Fixture implementation for tests that do not exercise persistence.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureEmployeeRepository;

#[async_trait]
impl EmployeeRepository for FixtureEmployeeRepository {
    async fn save(&self, draft: &EmployeeDraft) -> Result<Employee, EmployeeRepositoryError> {
        Ok(Employee::from_draft(EmployeeId::new(1), draft))
    }

    async fn find_by_id(
        &self,
        _id: EmployeeId,
    ) -> Result<Option<Employee>, EmployeeRepositoryError> {
        Ok(None)
    }
}
