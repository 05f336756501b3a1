//! Utilities for oru's integration tests.

#![warn(unused_crate_dependencies, unreachable_pub)]

#[macro_use]
extern crate tracing;

// Macros useful for testing.
mod macros;

// Utilities for making it easier to handle tests.
pub mod util;
pub use util::{TestCommand, TestProject};

// re-exports for convenience
pub use snapbox::{self, str};

/// Initializes tracing for tests.
pub fn init_tracing() {
    let _ = tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
