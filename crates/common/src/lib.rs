//! Common utilities for building and using oru's tools.

#![cfg_attr(not(test), warn(unused_crate_dependencies))]

#[macro_use]
extern crate tracing;

pub mod errors;
pub mod fs;
pub mod store;

pub use store::{ContractStore, StoreError};
