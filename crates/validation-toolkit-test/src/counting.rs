//! Call-counting stubs.
//!
//! Used to observe whether a predicate or an error builder ran at all,
//! e.g. to check that guarded predicates are skipped and that error
//! builders are resolved lazily.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use validation_toolkit_core::{FnPredicate, Predicate};

/// Shared call counter. Clones observe the same count.
#[derive(Debug, Clone, Default)]
pub struct CallCounter {
    calls: Arc<AtomicUsize>,
}

impl CallCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of recorded calls.
    pub fn count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn reset(&self) {
        self.calls.store(0, Ordering::SeqCst);
    }

    fn record(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

/// Wraps a predicate and counts how often it is evaluated.
pub struct CountingPredicate<P> {
    inner: P,
    counter: CallCounter,
}

impl<P> CountingPredicate<P> {
    /// Wraps `inner` with a fresh counter.
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            counter: CallCounter::new(),
        }
    }

    /// Returns a handle to this predicate's counter.
    pub fn counter(&self) -> CallCounter {
        self.counter.clone()
    }
}

impl<F> CountingPredicate<FnPredicate<F>> {
    /// Wraps a closure with a fresh counter.
    pub fn from_fn(f: F) -> Self {
        Self::new(FnPredicate::new(f))
    }
}

impl<T: ?Sized, P: Predicate<T>> Predicate<T> for CountingPredicate<P> {
    fn evaluate(&self, input: &T) -> bool {
        self.counter.record();
        self.inner.evaluate(input)
    }
}

/// Returns an error builder that yields `error` and records each call on `counter`.
pub fn counting_error_builder<T, E>(
    error: E,
    counter: &CallCounter,
) -> impl Fn(&T) -> E + Send + Sync + 'static
where
    T: ?Sized + 'static,
    E: Clone + Send + Sync + 'static,
{
    let counter = counter.clone();
    move |_: &T| {
        counter.record();
        error.clone()
    }
}
