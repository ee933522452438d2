//! Properties of the process-wide counter over arbitrary operation sequences.
//!
//! The counter persists across proptest cases, so every property is checked
//! against the value observed at the start of the case. One property only: a
//! second one would run in parallel against the same counter.

use proptest::prelude::*;
use singleton_counter::{counter, create, SingletonError};

#[derive(Debug, Clone, Copy)]
enum Op {
    Increment,
    Decrement,
    Create,
    GetInstance,
    RoundTrip { increment_first: bool },
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::Increment),
        Just(Op::Decrement),
        Just(Op::Create),
        Just(Op::GetInstance),
        any::<bool>().prop_map(|increment_first| Op::RoundTrip { increment_first }),
    ]
}

proptest! {
    #[test]
    fn counter_tracks_model(ops in prop::collection::vec(op(), 0..64)) {
        let shared = counter();
        let mut model = shared.get_count();

        for op in ops {
            match op {
                Op::Increment => {
                    model += 1;
                    prop_assert_eq!(shared.increment(), model);
                }
                Op::Decrement => {
                    model -= 1;
                    prop_assert_eq!(shared.decrement(), model);
                }
                Op::Create => {
                    prop_assert_eq!(create().unwrap_err(), SingletonError::InstanceAlreadyExists);
                }
                Op::GetInstance => {
                    prop_assert!(std::ptr::eq(shared.get_instance(), shared));
                    prop_assert!(std::ptr::eq(counter(), shared));
                }
                Op::RoundTrip { increment_first } => {
                    if increment_first {
                        shared.increment();
                        shared.decrement();
                    } else {
                        shared.decrement();
                        shared.increment();
                    }
                }
            }
            prop_assert_eq!(shared.get_count(), model);
        }
    }
}
