//! PPT Invariant System: runtime invariant enforcement with contract tracking.
//!
//! Guarded operations call [`assert_invariant`] with the ID of the property they
//! uphold. Tests then call [`contract_test`] to prove the property was actually
//! checked on the path they drove, not just that the outcome looked right.

#[cfg(feature = "ppt")]
use lazy_static::lazy_static;
#[cfg(feature = "ppt")]
use std::collections::HashSet;
#[cfg(feature = "ppt")]
use std::sync::{Mutex, PoisonError};

/// At most one instance exists in a slot.
pub const SINGLE_INSTANCE: u32 = 1;
/// A rejected construction found an occupied slot backed by exactly one construction.
pub const REJECTED_CREATE_UNCHANGED: u32 = 2;

#[cfg(feature = "ppt")]
lazy_static! {
    static ref INVARIANT_LOG: Mutex<HashSet<u32>> = Mutex::new(HashSet::new());
}

#[cfg(feature = "ppt")]
fn invariant_log() -> std::sync::MutexGuard<'static, HashSet<u32>> {
    // A panicking assertion never holds the lock, so the set is always whole.
    INVARIANT_LOG.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(feature = "ppt")]
/// Assert an invariant: logs it and panics on failure.
pub fn assert_invariant(id: u32, condition: bool, message: &str, context: Option<&str>) {
    if !condition {
        let name = invariant_name(id);
        let full_message = if let Some(ctx) = context {
            format!("Invariant {} ({}) failed: {} (context: {})", id, name, message, ctx)
        } else {
            format!("Invariant {} ({}) failed: {}", id, name, message)
        };
        eprintln!("{}", full_message);
        panic!("{}", full_message);
    }
    invariant_log().insert(id);
}

#[cfg(not(feature = "ppt"))]
/// Assert an invariant: checks condition and panics on failure.
pub fn assert_invariant(_id: u32, condition: bool, message: &str, _context: Option<&str>) {
    if !condition {
        panic!("Invariant failed: {}", message);
    }
}

#[cfg(feature = "ppt")]
/// Contract test: checks that specified invariants were asserted.
pub fn contract_test(test_name: &str, required_invariants: &[u32]) {
    let log = invariant_log();
    let missing: Vec<&str> = required_invariants
        .iter()
        .filter(|id| !log.contains(id))
        .map(|&id| invariant_name(id))
        .collect();
    drop(log); // Drop the lock before panicking
    if !missing.is_empty() {
        panic!(
            "Contract test '{}' failed: invariants not enforced: {:?}",
            test_name, missing
        );
    }
}

#[cfg(not(feature = "ppt"))]
/// Contract test: no-op when PPT feature is disabled.
pub fn contract_test(_test_name: &str, _required_invariants: &[u32]) {}

#[cfg(feature = "ppt")]
/// Clear invariant log (for between test runs).
pub fn clear_invariant_log() {
    invariant_log().clear();
}

#[cfg(not(feature = "ppt"))]
/// Clear invariant log: no-op when PPT feature is disabled.
pub fn clear_invariant_log() {}

/// Maps invariant ID to human-readable name (for diagnostics only).
pub const fn invariant_name(id: u32) -> &'static str {
    match id {
        SINGLE_INSTANCE => "SINGLE_INSTANCE",
        REJECTED_CREATE_UNCHANGED => "REJECTED_CREATE_UNCHANGED",
        _ => "UNKNOWN",
    }
}
