//! Slot module: one-time construction guarded by an instance marker.
//!
//! An [`InstanceSlot`] starts empty and can be filled exactly once. The filled
//! value is leaked into `'static` and lives for the rest of the process; there is
//! no reset. The marker check and the store run under one lock, so racing
//! constructors see exactly one winner.

#![forbid(unsafe_code)]

use crate::error::{Result, SingletonError};
use crate::invariant_ppt::{assert_invariant, REJECTED_CREATE_UNCHANGED, SINGLE_INSTANCE};
use std::any::type_name;
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Lifecycle of a slot. `Created` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotState {
    /// Nothing has been constructed yet.
    Uncreated,
    /// The instance exists and will for the rest of the process.
    Created,
}

/// Holds at most one instance of `T` for the lifetime of the process.
pub struct InstanceSlot<T: 'static> {
    instance: Mutex<Option<&'static T>>,
    constructions: AtomicUsize,
}

impl<T: Sync + 'static> InstanceSlot<T> {
    /// Create an empty slot.
    pub const fn new() -> Self {
        Self {
            instance: Mutex::new(None),
            constructions: AtomicUsize::new(0),
        }
    }

    /// Construct the instance. Fails if one already exists; `init` is not run then.
    ///
    /// `init` runs with the slot locked. It must not touch this slot again, or it
    /// deadlocks.
    pub fn create(&self, init: impl FnOnce() -> T) -> Result<&'static T> {
        let mut slot = self.lock();
        if slot.is_some() {
            tracing::warn!(
                instance = type_name::<T>(),
                "rejected construction: an instance already exists"
            );
            // The marker and the construction count are tracked apart; an
            // occupied slot must account for exactly one finished construction.
            assert_invariant(
                REJECTED_CREATE_UNCHANGED,
                self.constructions.load(Ordering::SeqCst) == 1,
                "occupied slot disagrees with its construction count",
                Some(type_name::<T>()),
            );
            return Err(SingletonError::InstanceAlreadyExists);
        }
        Ok(self.install(&mut slot, init))
    }

    /// The instance, if it has been constructed.
    pub fn get(&self) -> Option<&'static T> {
        *self.lock()
    }

    /// The instance, constructing it first if the slot is still empty.
    ///
    /// Same locking rule as [`create`](Self::create): `init` must not call back
    /// into this slot.
    pub fn get_or_create(&self, init: impl FnOnce() -> T) -> &'static T {
        let mut slot = self.lock();
        match *slot {
            Some(existing) => existing,
            None => self.install(&mut slot, init),
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SlotState {
        if self.lock().is_some() {
            SlotState::Created
        } else {
            SlotState::Uncreated
        }
    }

    fn install(
        &self,
        slot: &mut MutexGuard<'_, Option<&'static T>>,
        init: impl FnOnce() -> T,
    ) -> &'static T {
        let instance: &'static T = Box::leak(Box::new(init()));
        **slot = Some(instance);
        let constructions = self.constructions.fetch_add(1, Ordering::SeqCst) + 1;
        assert_invariant(
            SINGLE_INSTANCE,
            constructions == 1,
            "slot constructed more than once",
            Some(type_name::<T>()),
        );
        tracing::debug!(instance = type_name::<T>(), "instance constructed");
        instance
    }

    fn lock(&self) -> MutexGuard<'_, Option<&'static T>> {
        // The guarded write is a single assignment; a panic in `init` leaves it None.
        self.instance.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T: Sync + 'static> Default for InstanceSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Sync + 'static> fmt::Debug for InstanceSlot<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InstanceSlot")
            .field("instance", &type_name::<T>())
            .field("state", &self.state())
            .finish()
    }
}
