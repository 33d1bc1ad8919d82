//! Advice behaviours bound to pointcuts.
//!
//! Advice observes unit invocations but never controls them: the registry
//! owns the call, so no advice can skip it, alter its arguments, suppress
//! its error, or substitute its result.

use std::fmt;
use std::sync::Arc;

use crate::domain::Error;

use super::pointcut::UnitName;

/// A matched invocation handed to advice: the unit's qualifying name plus
/// its Debug-rendered arguments, when the call site traced them.
#[derive(Debug, Clone)]
pub struct JoinPoint {
    unit: UnitName,
    args: Option<String>,
}

impl JoinPoint {
    /// Join point without argument tracing.
    #[must_use]
    pub const fn new(unit: UnitName) -> Self {
        Self { unit, args: None }
    }

    /// Join point with arguments rendered for logging.
    #[must_use]
    pub fn with_args(unit: UnitName, args: &dyn fmt::Debug) -> Self {
        Self {
            unit,
            args: Some(format!("{args:?}")),
        }
    }

    /// Qualifying name of the invoked unit.
    #[must_use]
    pub const fn unit(&self) -> &UnitName {
        &self.unit
    }

    /// Rendered arguments, when traced at the call site.
    #[must_use]
    pub fn args(&self) -> Option<&str> {
        self.args.as_deref()
    }
}

/// Side-effect-only advice observing a join point.
pub type ObserveFn = Arc<dyn Fn(&JoinPoint) + Send + Sync>;

/// Advice observing a join point that terminated abnormally.
pub type ObserveErrorFn = Arc<dyn Fn(&JoinPoint, &Error) + Send + Sync>;

/// Around advice hooks at the innermost wrapping point of a call.
///
/// `on_enter` fires before the underlying invocation, `on_exit` after a
/// successful return with the Debug-rendered value, and `on_error` when the
/// invocation fails. The error always propagates to the caller unchanged.
pub trait AroundAdvice: Send + Sync {
    /// Called before the underlying invocation; typically logs arguments.
    fn on_enter(&self, join_point: &JoinPoint);

    /// Called after a successful return with the returned value.
    fn on_exit(&self, join_point: &JoinPoint, returned: &dyn fmt::Debug);

    /// Called when the invocation fails, before the error propagates.
    fn on_error(&self, join_point: &JoinPoint, error: &Error);
}

/// A behaviour bound to a pointcut.
#[derive(Clone)]
pub enum Advice {
    /// Runs prior to the call; cannot prevent it or alter arguments.
    Before(ObserveFn),
    /// Runs immediately after a successful return.
    After(ObserveFn),
    /// Runs only when the call terminates abnormally.
    AfterThrowing(ObserveErrorFn),
    /// Wraps the call boundary itself.
    Around(Arc<dyn AroundAdvice>),
}

impl Advice {
    /// Bind a closure as before advice.
    pub fn before(f: impl Fn(&JoinPoint) + Send + Sync + 'static) -> Self {
        Self::Before(Arc::new(f))
    }

    /// Bind a closure as after advice.
    pub fn after(f: impl Fn(&JoinPoint) + Send + Sync + 'static) -> Self {
        Self::After(Arc::new(f))
    }

    /// Bind a closure as after-throwing advice.
    pub fn after_throwing(f: impl Fn(&JoinPoint, &Error) + Send + Sync + 'static) -> Self {
        Self::AfterThrowing(Arc::new(f))
    }

    /// Bind an around advice implementation.
    pub fn around(advice: impl AroundAdvice + 'static) -> Self {
        Self::Around(Arc::new(advice))
    }
}

impl fmt::Debug for Advice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            Self::Before(_) => "Before",
            Self::After(_) => "After",
            Self::AfterThrowing(_) => "AfterThrowing",
            Self::Around(_) => "Around",
        };
        f.debug_tuple(kind).finish()
    }
}
