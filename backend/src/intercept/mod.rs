//! Cross-cutting interception pipeline.
//!
//! A rule-based dispatcher decoupling observability from business logic:
//! pointcut predicates select units of work by qualifying name, advice
//! bindings attach before/after/after-throwing/around behaviour, and the
//! registry interprets the table around each instrumented invocation.
//! The table is assembled once at startup (see [`logging_registry`]) and
//! handed to components as an explicit dependency.

pub mod advice;
pub mod logging;
pub mod pointcut;
pub mod registry;

pub use advice::{Advice, AroundAdvice, JoinPoint};
pub use logging::logging_registry;
pub use pointcut::{Pointcut, UnitName};
pub use registry::AdviceRegistry;
