//! The advice registry: a statically registered table of
//! (pointcut, advice) bindings and the interpreter that evaluates it
//! around unit-of-work invocations.
//!
//! The registry is built once at startup, shared behind an `Arc`, and
//! never mutated afterwards, so dispatch takes no locks and advice runs
//! synchronously inline with the call it wraps.

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use crate::domain::Error;

use super::advice::{Advice, AroundAdvice, JoinPoint};
use super::pointcut::Pointcut;

/// One registered (pointcut, advice) pair.
#[derive(Debug, Clone)]
struct Binding {
    pointcut: Pointcut,
    advice: Advice,
}

/// Registry of advice bindings evaluated in registration order.
#[derive(Debug, Default)]
pub struct AdviceRegistry {
    bindings: Vec<Binding>,
}

impl AdviceRegistry {
    /// Empty registry.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            bindings: Vec::new(),
        }
    }

    /// Register advice for every unit the pointcut matches.
    pub fn bind(&mut self, pointcut: Pointcut, advice: Advice) {
        self.bindings.push(Binding { pointcut, advice });
    }

    /// Number of registered bindings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether the registry has no bindings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Run a unit of work through every matching binding.
    ///
    /// Ordering: before advice fires in registration order prior to the
    /// call; around hooks enter in registration order and unwind in
    /// reverse, so the last-registered around sits innermost against the
    /// call; after (or after-throwing) advice fires in registration order
    /// once the call has returned (or failed). The call's result is
    /// returned unchanged either way.
    pub async fn dispatch<T, F, Fut>(&self, join_point: &JoinPoint, call: F) -> Result<T, Error>
    where
        T: fmt::Debug,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, Error>>,
    {
        let matched: Vec<&Advice> = self
            .bindings
            .iter()
            .filter(|binding| binding.pointcut.matches(join_point.unit()))
            .map(|binding| &binding.advice)
            .collect();

        for advice in &matched {
            if let Advice::Before(observe) = advice {
                observe(join_point);
            }
        }

        let arounds: Vec<&Arc<dyn AroundAdvice>> = matched
            .iter()
            .filter_map(|advice| match advice {
                Advice::Around(around) => Some(around),
                _ => None,
            })
            .collect();
        for around in &arounds {
            around.on_enter(join_point);
        }

        let result = call().await;

        match &result {
            Ok(value) => {
                for around in arounds.iter().rev() {
                    around.on_exit(join_point, value);
                }
                for advice in &matched {
                    if let Advice::After(observe) = advice {
                        observe(join_point);
                    }
                }
            }
            Err(error) => {
                for around in arounds.iter().rev() {
                    around.on_error(join_point, error);
                }
                for advice in &matched {
                    if let Advice::AfterThrowing(observe) = advice {
                        observe(join_point, error);
                    }
                }
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for dispatch ordering and error propagation.

    use std::sync::Mutex;

    use super::super::pointcut::UnitName;
    use super::*;

    const UNIT: UnitName = UnitName::new("domain::employee_service", "create_employee");
    const OTHER: UnitName = UnitName::new("domain::employee", "get_salary");

    /// Shared log of advice firings, in order.
    #[derive(Default)]
    struct Recorder(Arc<Mutex<Vec<String>>>);

    impl Recorder {
        fn sink(&self) -> Arc<Mutex<Vec<String>>> {
            Arc::clone(&self.0)
        }

        fn entries(&self) -> Vec<String> {
            self.0.lock().expect("recorder lock").clone()
        }
    }

    fn record(sink: &Arc<Mutex<Vec<String>>>, entry: impl Into<String>) {
        sink.lock().expect("recorder lock").push(entry.into());
    }

    struct RecordingAround {
        label: &'static str,
        sink: Arc<Mutex<Vec<String>>>,
    }

    impl AroundAdvice for RecordingAround {
        fn on_enter(&self, _join_point: &JoinPoint) {
            record(&self.sink, format!("{}:enter", self.label));
        }

        fn on_exit(&self, _join_point: &JoinPoint, _returned: &dyn std::fmt::Debug) {
            record(&self.sink, format!("{}:exit", self.label));
        }

        fn on_error(&self, _join_point: &JoinPoint, error: &Error) {
            record(&self.sink, format!("{}:error:{}", self.label, error.message()));
        }
    }

    fn observing(sink: &Arc<Mutex<Vec<String>>>, entry: &'static str) -> Advice {
        let sink = Arc::clone(sink);
        Advice::before(move |_| record(&sink, entry))
    }

    #[tokio::test]
    async fn before_and_after_fire_in_registration_order() {
        let recorder = Recorder::default();
        let mut registry = AdviceRegistry::new();
        registry.bind(Pointcut::Any, observing(&recorder.sink(), "before-1"));
        registry.bind(Pointcut::Unit(UNIT), observing(&recorder.sink(), "before-2"));
        let sink = recorder.sink();
        registry.bind(
            Pointcut::Any,
            Advice::after(move |_| record(&sink, "after-1")),
        );
        let sink = recorder.sink();
        registry.bind(
            Pointcut::Any,
            Advice::after(move |_| record(&sink, "after-2")),
        );

        let result = registry
            .dispatch(&JoinPoint::new(UNIT), || async { Ok(7_i64) })
            .await;

        assert_eq!(result, Ok(7));
        assert_eq!(
            recorder.entries(),
            vec!["before-1", "before-2", "after-1", "after-2"]
        );
    }

    #[tokio::test]
    async fn around_hooks_unwind_in_reverse_order() {
        let recorder = Recorder::default();
        let mut registry = AdviceRegistry::new();
        registry.bind(
            Pointcut::Any,
            Advice::around(RecordingAround {
                label: "outer",
                sink: recorder.sink(),
            }),
        );
        registry.bind(
            Pointcut::Any,
            Advice::around(RecordingAround {
                label: "inner",
                sink: recorder.sink(),
            }),
        );

        let result = registry
            .dispatch(&JoinPoint::new(UNIT), || async { Ok("done") })
            .await;

        assert_eq!(result, Ok("done"));
        assert_eq!(
            recorder.entries(),
            vec!["outer:enter", "inner:enter", "inner:exit", "outer:exit"]
        );
    }

    #[tokio::test]
    async fn failure_runs_after_throwing_and_propagates_unchanged() {
        let recorder = Recorder::default();
        let mut registry = AdviceRegistry::new();
        registry.bind(
            Pointcut::Any,
            Advice::around(RecordingAround {
                label: "trace",
                sink: recorder.sink(),
            }),
        );
        let sink = recorder.sink();
        registry.bind(
            Pointcut::Any,
            Advice::after_throwing(move |_, error| {
                record(&sink, format!("throwing:{}", error.message()));
            }),
        );
        let sink = recorder.sink();
        registry.bind(
            Pointcut::Any,
            Advice::after(move |_| record(&sink, "after")),
        );

        let result: Result<i64, Error> = registry
            .dispatch(&JoinPoint::new(UNIT), || async {
                Err(Error::invalid_request("boom"))
            })
            .await;

        assert_eq!(result, Err(Error::invalid_request("boom")));
        // After advice never fires on failure; around unwinds through
        // on_error before after-throwing advice observes the error.
        assert_eq!(
            recorder.entries(),
            vec!["trace:enter", "trace:error:boom", "throwing:boom"]
        );
    }

    #[tokio::test]
    async fn non_matching_bindings_are_skipped() {
        let recorder = Recorder::default();
        let mut registry = AdviceRegistry::new();
        registry.bind(Pointcut::Unit(OTHER), observing(&recorder.sink(), "skipped"));

        let result = registry
            .dispatch(&JoinPoint::new(UNIT), || async { Ok(()) })
            .await;

        assert_eq!(result, Ok(()));
        assert!(recorder.entries().is_empty());
    }

    #[tokio::test]
    async fn empty_registry_is_a_transparent_wrapper() {
        let registry = AdviceRegistry::new();
        assert!(registry.is_empty());

        let result = registry
            .dispatch(&JoinPoint::new(UNIT), || async { Ok(41_i64 + 1) })
            .await;

        assert_eq!(result, Ok(42));
    }
}
