//! Subcommands for `oru`.

pub mod highlight;
pub mod list;
pub mod remove;
pub mod scan;
pub mod snippet;
pub mod view;

use eyre::{OptionExt, Result};
use oru_common::ContractStore;
use oru_config::Config;
use oru_core::ContractRecord;

/// Opens the contract store configured for the project.
pub fn open_store(config: &Config) -> ContractStore {
    ContractStore::new(config.store_path())
}

/// Loads a stored contract, failing if there is none with `id`.
pub fn load_record(config: &Config, id: &str) -> Result<ContractRecord> {
    open_store(config).load(id)?.ok_or_eyre(format!("no contract with id `{id}`"))
}
