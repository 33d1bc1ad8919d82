//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they depend
//! only on the driving port and the explicitly injected advice registry,
//! and stay testable without I/O.

use std::sync::Arc;

use crate::domain::ports::EmployeeService;
use crate::intercept::AdviceRegistry;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Employee use-cases.
    pub employees: Arc<dyn EmployeeService>,
    /// Interception pipeline rule table, built at startup.
    pub advice: Arc<AdviceRegistry>,
}

impl HttpState {
    /// Bundle the handler dependencies.
    #[must_use]
    pub fn new(employees: Arc<dyn EmployeeService>, advice: Arc<AdviceRegistry>) -> Self {
        Self { employees, advice }
    }
}
