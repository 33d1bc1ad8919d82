//! In-memory entity store adapter.
//!
//! Default adapter wired at startup; the repository port keeps a real
//! store swappable without touching the domain. Identifiers come from a
//! process-local monotonic sequence, mirroring a store-side sequence
//! generator.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::RwLock;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ports::{EmployeeRepository, EmployeeRepositoryError};
use crate::domain::{Employee, EmployeeDraft, EmployeeId};

/// In-memory employee store keyed by generated id.
#[derive(Debug, Default)]
pub struct InMemoryEmployeeRepository {
    records: RwLock<HashMap<i64, Employee>>,
    sequence: AtomicI64,
}

impl InMemoryEmployeeRepository {
    /// Empty store; the first saved employee receives id 1.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the store holds no records.
    #[cfg(test)]
    fn is_empty(&self) -> bool {
        self.records
            .read()
            .map(|records| records.is_empty())
            .unwrap_or(false)
    }
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn save(&self, draft: &EmployeeDraft) -> Result<Employee, EmployeeRepositoryError> {
        let id = self.sequence.fetch_add(1, Ordering::SeqCst) + 1;
        let employee = Employee::from_draft(EmployeeId::new(id), draft);

        let mut records = self
            .records
            .write()
            .map_err(|_| EmployeeRepositoryError::query("store lock poisoned"))?;
        records.insert(id, employee.clone());

        debug!(unit = "outbound::persistence::in_memory::save", %id, "stored employee");
        Ok(employee)
    }

    async fn find_by_id(
        &self,
        id: EmployeeId,
    ) -> Result<Option<Employee>, EmployeeRepositoryError> {
        let records = self
            .records
            .read()
            .map_err(|_| EmployeeRepositoryError::query("store lock poisoned"))?;
        debug!(unit = "outbound::persistence::in_memory::find_by_id", %id, "lookup");
        Ok(records.get(&id.value()).cloned())
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for the in-memory adapter.

    use super::*;

    fn draft(name: &str) -> EmployeeDraft {
        EmployeeDraft {
            name: name.to_owned(),
            surname: format!("{name}ov"),
            salary: None,
        }
    }

    #[tokio::test]
    async fn ids_are_assigned_monotonically_from_one() {
        let repo = InMemoryEmployeeRepository::new();
        let first = repo.save(&draft("Samir")).await.expect("first save");
        let second = repo.save(&draft("Ada")).await.expect("second save");

        assert_eq!(first.id(), EmployeeId::new(1));
        assert_eq!(second.id(), EmployeeId::new(2));
    }

    #[tokio::test]
    async fn saved_employees_are_found_by_id() {
        let repo = InMemoryEmployeeRepository::new();
        let saved = repo.save(&draft("Samir")).await.expect("save");

        let found = repo
            .find_by_id(saved.id())
            .await
            .expect("lookup")
            .expect("stored employee");
        assert_eq!(found, saved);
    }

    #[tokio::test]
    async fn unknown_ids_read_empty() {
        let repo = InMemoryEmployeeRepository::new();
        let found = repo
            .find_by_id(EmployeeId::new(999_999))
            .await
            .expect("lookup");
        assert!(found.is_none());
        assert!(repo.is_empty());
    }
}
