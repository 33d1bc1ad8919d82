//! The logging advice set wired into the registry at startup.
//!
//! This is the system's only consumer of the interception pipeline: every
//! rule here observes instrumented units and logs through `tracing`. New
//! units automatically become subject to whichever rules match their
//! qualifying name.

use std::fmt;

use tracing::{debug, error, info, warn};

use crate::domain::{Error, ErrorCode};
use crate::inbound::http::employees::CREATE_EMPLOYEE;

use super::advice::{Advice, AroundAdvice, JoinPoint};
use super::pointcut::Pointcut;
use super::registry::AdviceRegistry;

/// Pointcut selecting entity accessor units (`get*`/`set*` on the
/// employee entity module).
fn accessors() -> Pointcut {
    Pointcut::InModule("domain::employee")
        & (Pointcut::NamePrefix("get") | Pointcut::NamePrefix("set"))
}

/// Build the advice registry used by the running service.
///
/// Bindings are evaluated in registration order; the trace advice is
/// registered last so it logs at the innermost wrapping point relative to
/// the underlying call.
#[must_use]
pub fn logging_registry() -> AdviceRegistry {
    let mut registry = AdviceRegistry::new();

    // Entry/exit pair on the create-employee endpoint specifically.
    registry.bind(
        Pointcut::Unit(CREATE_EMPLOYEE),
        Advice::before(|join_point| {
            info!(unit = %join_point.unit(), "about to create an employee");
        }),
    );
    registry.bind(
        Pointcut::Unit(CREATE_EMPLOYEE),
        Advice::after(|join_point| {
            info!(unit = %join_point.unit(), "employee creation handler returned");
        }),
    );

    // Every request handler logs its invocation.
    registry.bind(
        Pointcut::InModule("inbound::http"),
        Advice::before(|join_point| {
            info!(unit = %join_point.unit(), "handler invoked");
        }),
    );

    // Every instrumented unit except entity accessors.
    registry.bind(
        Pointcut::Any & !accessors(),
        Advice::before(|join_point| {
            debug!(unit = %join_point.unit(), "unit entered");
        }),
    );

    // Errors surfaced by handlers are logged and re-raised unchanged.
    registry.bind(
        Pointcut::InModule("inbound::http"),
        Advice::after_throwing(|join_point, error| {
            warn!(
                unit = %join_point.unit(),
                code = ?error.code(),
                error = %error,
                "handler failed"
            );
        }),
    );

    // Argument and return-value tracing across all three tiers.
    registry.bind(
        (Pointcut::InModule("inbound::http")
            | Pointcut::InModule("domain")
            | Pointcut::InModule("outbound::persistence"))
            & !accessors(),
        Advice::around(CallTrace),
    );

    registry
}

/// Around advice logging argument values on entry, the return value on
/// exit, and an extra diagnostic for invalid-argument failures. Errors
/// always propagate to the caller unchanged.
struct CallTrace;

impl AroundAdvice for CallTrace {
    fn on_enter(&self, join_point: &JoinPoint) {
        debug!(
            unit = %join_point.unit(),
            args = join_point.args().unwrap_or("()"),
            "invoking"
        );
    }

    fn on_exit(&self, join_point: &JoinPoint, returned: &dyn fmt::Debug) {
        debug!(unit = %join_point.unit(), returned = ?returned, "returned");
    }

    fn on_error(&self, join_point: &JoinPoint, error: &Error) {
        error!(unit = %join_point.unit(), error = %error, "unit failed");
        if error.code() == ErrorCode::InvalidRequest {
            warn!(
                unit = %join_point.unit(),
                args = join_point.args().unwrap_or("()"),
                "invalid argument rejected by instrumented unit"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for the startup rule set.

    use std::io;
    use std::sync::{Arc, Mutex};

    use tracing_subscriber::fmt::MakeWriter;

    use crate::intercept::pointcut::UnitName;

    use super::*;

    /// Shared in-memory sink for capturing formatted log output in tests.
    #[derive(Clone, Default)]
    struct LogSink(Arc<Mutex<Vec<u8>>>);

    impl LogSink {
        fn contents(&self) -> String {
            let bytes = self.0.lock().expect("log sink lock poisoned");
            String::from_utf8_lossy(&bytes).into_owned()
        }
    }

    impl io::Write for LogSink {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0
                .lock()
                .expect("log sink lock poisoned")
                .extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for LogSink {
        type Writer = Self;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    #[tokio::test]
    async fn registry_carries_the_full_rule_set() {
        let registry = logging_registry();
        assert_eq!(registry.len(), 6);
    }

    #[tokio::test]
    async fn handler_failure_propagates_through_the_rules() {
        let sink = LogSink::default();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_writer(sink.clone())
            .with_ansi(false)
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let registry = logging_registry();
        let unit = UnitName::new("inbound::http::employees", "get_employee_by_id");
        let join_point = JoinPoint::with_args(unit, &42_i64);

        let result: Result<(), Error> = registry
            .dispatch(&join_point, || async {
                Err(Error::invalid_request("id must be numeric"))
            })
            .await;

        assert_eq!(result, Err(Error::invalid_request("id must be numeric")));
        let output = sink.contents();
        assert!(
            output.contains("invalid argument rejected by instrumented unit"),
            "expected the invalid-argument diagnostic in: {output}"
        );
        assert!(output.contains("handler failed"));
    }

    #[tokio::test]
    async fn accessor_units_stay_untraced_but_still_run() {
        let registry = logging_registry();
        let unit = UnitName::new("domain::employee", "get_salary");

        let result = registry
            .dispatch(&JoinPoint::new(unit), || async { Ok(Some(12.5_f64)) })
            .await;

        assert_eq!(result, Ok(Some(12.5)));
    }
}
