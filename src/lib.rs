//! A process-wide counter that can be constructed exactly once.
//!
//! [`counter`] is the shared access point: it returns the one
//! [`SingletonCounter`], building it on first use. [`create`] is the strict
//! constructor and fails with [`SingletonError::InstanceAlreadyExists`] once the
//! counter exists, whoever built it.
//!
//! ```
//! use singleton_counter::{counter, create, SingletonError};
//!
//! let shared = counter();
//! shared.increment();
//! assert_eq!(create().unwrap_err(), SingletonError::InstanceAlreadyExists);
//! assert!(shared.get_count() >= 1);
//! ```

pub mod counter;
pub mod error;
mod global;
#[doc(hidden)]
pub mod invariant_ppt;
pub mod slot;

pub use counter::SingletonCounter;
pub use error::{Result, SingletonError};
pub use global::{counter, create, state};
pub use slot::{InstanceSlot, SlotState};
