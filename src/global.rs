//! The process-wide counter and its accessors.
//!
//! The slot is empty until the first call to [`create`] or [`counter`]. From then
//! on it holds the one [`SingletonCounter`] until the process exits.

use crate::counter::SingletonCounter;
use crate::error::Result;
use crate::slot::{InstanceSlot, SlotState};
use lazy_static::lazy_static;

lazy_static! {
    static ref COUNTER: InstanceSlot<SingletonCounter> = InstanceSlot::new();
}

/// Construct the process-wide counter.
///
/// Succeeds once per process. Every later call returns
/// [`SingletonError::InstanceAlreadyExists`](crate::SingletonError::InstanceAlreadyExists)
/// and leaves the existing counter as it was.
pub fn create() -> Result<&'static SingletonCounter> {
    COUNTER.create(SingletonCounter::new)
}

/// The process-wide counter, constructed on first use.
///
/// ```
/// let counter = singleton_counter::counter();
/// let before = counter.get_count();
/// assert_eq!(counter.increment(), before + 1);
/// assert!(std::ptr::eq(counter, singleton_counter::counter()));
/// ```
pub fn counter() -> &'static SingletonCounter {
    COUNTER.get_or_create(SingletonCounter::new)
}

/// Whether the process-wide counter has been constructed.
pub fn state() -> SlotState {
    COUNTER.state()
}
