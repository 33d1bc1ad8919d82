//! Employee entity, its pre-persistence draft, and the boundary transfer
//! record.
//!
//! The store owns the canonical record and assigns identifiers. An
//! [`Employee`] therefore always carries an id; the "not yet persisted"
//! state is a separate type, [`EmployeeDraft`], rather than an optional id
//! field.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Opaque store-assigned employee identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct EmployeeId(i64);

impl EmployeeId {
    /// Wrap a raw identifier value.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Raw identifier value.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Persisted employee entity.
///
/// ## Invariants
/// - `id` is assigned by the store on first persist and never changes.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    id: EmployeeId,
    name: String,
    surname: String,
    salary: Option<f64>,
}

impl Employee {
    /// Materialise a persisted entity from a draft and its assigned id.
    ///
    /// Only store adapters should call this; everything else obtains
    /// employees from the store.
    #[must_use]
    pub fn from_draft(id: EmployeeId, draft: &EmployeeDraft) -> Self {
        Self {
            id,
            name: draft.name.clone(),
            surname: draft.surname.clone(),
            salary: draft.salary,
        }
    }

    /// Store-assigned identifier.
    #[must_use]
    pub const fn id(&self) -> EmployeeId {
        self.id
    }

    /// Given name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Family name.
    #[must_use]
    pub fn surname(&self) -> &str {
        self.surname.as_str()
    }

    /// Salary, unset when not yet negotiated.
    #[must_use]
    pub const fn salary(&self) -> Option<f64> {
        self.salary
    }
}

/// Employee fields the store needs to create a record.
///
/// Carries no id; the store generates one on save.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeDraft {
    pub name: String,
    pub surname: String,
    pub salary: Option<f64>,
}

/// Transfer record exchanged at the API boundary.
///
/// A structural copy of [`Employee`] with every field optional enough to
/// accept inbound requests: absent `name`/`surname` default to empty
/// strings, and `id` is ignored on the way in since the store assigns it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct EmployeeRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub surname: String,
    pub salary: Option<f64>,
}

impl From<&Employee> for EmployeeRecord {
    fn from(employee: &Employee) -> Self {
        Self {
            id: Some(employee.id().value()),
            name: employee.name().to_owned(),
            surname: employee.surname().to_owned(),
            salary: employee.salary(),
        }
    }
}

impl From<&EmployeeRecord> for EmployeeDraft {
    fn from(record: &EmployeeRecord) -> Self {
        Self {
            name: record.name.clone(),
            surname: record.surname.clone(),
            salary: record.salary,
        }
    }
}
