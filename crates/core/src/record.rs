use crate::AbiItem;
use serde::{Deserialize, Serialize};

/// A scanned contract as persisted by the store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractRecord {
    /// Opaque identifier assigned when the record is saved.
    pub id: String,
    pub name: String,
    /// The address as entered; never validated.
    pub address: String,
    /// Free-form network label.
    pub network: String,
    pub abi: Vec<AbiItem>,
}

/// A contract that has not been saved yet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewContract {
    pub name: String,
    pub address: String,
    pub network: String,
    pub abi: Vec<AbiItem>,
}

impl NewContract {
    /// Assigns `id`, turning this into a record.
    pub fn into_record(self, id: impl Into<String>) -> ContractRecord {
        let Self { name, address, network, abi } = self;
        ContractRecord { id: id.into(), name, address, network, abi }
    }
}
