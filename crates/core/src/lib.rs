//! # oru-core
//!
//! Turns contract ABIs into categorized cards with ready-to-paste integration snippets for
//! wagmi, ethers.js and viem, and highlights those snippets for display.
//!
//! Everything in this crate is pure: [`generate`] and [`highlight`] have no side effects and
//! return the same output for the same input.

#![cfg_attr(not(test), warn(unused_crate_dependencies))]

#[macro_use]
extern crate tracing;

pub mod abi;
pub mod catalog;
pub mod constants;
pub mod generate;
pub mod highlight;
pub mod library;
pub mod record;

pub use abi::{AbiError, AbiItem, AbiParam, ItemKind, parse_abi};
pub use catalog::{Card, Catalog, Category};
pub use generate::{Classification, UNSUPPORTED_TARGET, generate, generate_named};
pub use highlight::{Fragment, FragmentClass, HighlightedLine, highlight};
pub use library::TargetLibrary;
pub use record::{ContractRecord, NewContract};
