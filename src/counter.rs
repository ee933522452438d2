//! Counter module: the sealed singleton counter.

// IMPORTANT: Do not call assert_invariant or any PPT logging here. Steps must stay lock-free.

#![forbid(unsafe_code)]

use std::sync::atomic::{AtomicI64, Ordering};

/// A process-wide signed counter.
///
/// Only the crate constructs it, and callers only ever hold `&'static`
/// references to it, so its fields can be neither reached nor reassigned:
///
/// ```compile_fail
/// let counter = singleton_counter::counter();
/// counter.value = std::sync::atomic::AtomicI64::new(100);
/// ```
///
/// ```compile_fail
/// let fresh = singleton_counter::SingletonCounter::new();
/// ```
///
/// ```compile_fail
/// let copy: singleton_counter::SingletonCounter = singleton_counter::counter().clone();
/// ```
///
/// ```compile_fail
/// let counter = singleton_counter::counter();
/// counter.get_count = || 0;
/// ```
///
/// The value itself only moves through [`increment`](Self::increment) and
/// [`decrement`](Self::decrement). Arithmetic wraps at the `i64` bounds.
#[derive(Debug)]
pub struct SingletonCounter {
    value: AtomicI64,
}

impl SingletonCounter {
    pub(crate) const fn new() -> Self {
        Self {
            value: AtomicI64::new(0),
        }
    }

    /// Returns this instance.
    pub fn get_instance(&self) -> &Self {
        self
    }

    /// Current counter value.
    pub fn get_count(&self) -> i64 {
        self.value.load(Ordering::SeqCst)
    }

    /// Add one and return the new value.
    pub fn increment(&self) -> i64 {
        let current = self.value.fetch_add(1, Ordering::SeqCst).wrapping_add(1);
        tracing::trace!(current, "counter incremented");
        current
    }

    /// Subtract one and return the new value. There is no floor.
    pub fn decrement(&self) -> i64 {
        let current = self.value.fetch_sub(1, Ordering::SeqCst).wrapping_sub(1);
        tracing::trace!(current, "counter decremented");
        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn counter_starts_at_zero() {
        let counter = SingletonCounter::new();
        assert_eq!(counter.get_count(), 0);
    }

    #[test]
    fn counter_increment_returns_new_value() {
        let counter = SingletonCounter::new();
        assert_eq!(counter.increment(), 1);
        assert_eq!(counter.increment(), 2);
        assert_eq!(counter.get_count(), 2);
    }

    #[test]
    fn counter_decrement_has_no_floor() {
        let counter = SingletonCounter::new();
        assert_eq!(counter.decrement(), -1);
        assert_eq!(counter.get_count(), -1);
    }

    #[test]
    fn counter_round_trip_restores_value() {
        let counter = SingletonCounter::new();
        counter.increment();
        counter.increment();
        let before = counter.get_count();
        counter.increment();
        counter.decrement();
        assert_eq!(counter.get_count(), before);
        counter.decrement();
        counter.increment();
        assert_eq!(counter.get_count(), before);
    }

    #[test]
    fn counter_wraps_at_bounds() {
        let counter = SingletonCounter::new();
        counter.value.store(i64::MAX, Ordering::SeqCst);
        assert_eq!(counter.increment(), i64::MIN);
        assert_eq!(counter.decrement(), i64::MAX);
    }

    #[test]
    fn counter_get_instance_is_identity() {
        let counter = SingletonCounter::new();
        assert!(std::ptr::eq(counter.get_instance(), &counter));
        assert!(std::ptr::eq(counter.get_instance().get_instance(), &counter));
    }

    #[test]
    fn counter_concurrent_steps_balance() {
        const THREADS: usize = 8;
        const STEPS: usize = 1000;
        let counter = SingletonCounter::new();

        thread::scope(|s| {
            for i in 0..THREADS {
                let counter = &counter;
                s.spawn(move || {
                    for _ in 0..STEPS {
                        if i % 2 == 0 {
                            counter.increment();
                        } else {
                            counter.decrement();
                        }
                    }
                });
            }
        });

        assert_eq!(counter.get_count(), 0);
    }
}
