//! Walks the process-wide counter through its lifecycle.
//!
//! Run with `RUST_LOG=singleton_counter=trace` to see every step.

use singleton_counter::{counter, create, state};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(env_filter)
        .init();
}

fn main() {
    init_tracing();

    println!("state before construction: {:?}", state());
    let instance = match create() {
        Ok(instance) => instance,
        Err(e) => {
            eprintln!("construction failed: {e}");
            std::process::exit(1);
        }
    };
    println!("state after construction: {:?}", state());
    println!("count: {}", instance.get_count());

    for _ in 0..3 {
        instance.increment();
    }
    println!("after three increments: {}", instance.get_count());

    instance.decrement();
    println!("after one decrement: {}", instance.get_count());

    match create() {
        Ok(_) => println!("second construction unexpectedly succeeded"),
        Err(e) => println!("second construction rejected: {e}"),
    }
    println!("count is still {}", counter().get_count());
    println!(
        "shared accessor returns the same instance: {}",
        std::ptr::eq(counter(), instance.get_instance())
    );
}
