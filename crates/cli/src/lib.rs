//! # oru-cli
//!
//! Common CLI utilities.

#![cfg_attr(not(test), warn(unused_crate_dependencies))]

#[macro_use]
extern crate tracing;

pub mod handler;
pub mod opts;
pub mod shell;
pub mod stdin;
pub mod utils;
