use serde::{Deserialize, Serialize};

/// The client libraries snippets can be generated for.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum TargetLibrary {
    /// Declarative React hooks (`useReadContract`, `useWriteContract`, ...).
    #[default]
    Wagmi,
    /// Imperative provider/signer + contract object.
    Ethers,
    /// Public and wallet client objects with a read/write split.
    Viem,
}

impl TargetLibrary {
    /// All supported libraries, in display order.
    pub const ALL: [Self; 3] = [Self::Wagmi, Self::Ethers, Self::Viem];

    /// Returns the identifier used on the command line and in config files.
    pub const fn id(self) -> &'static str {
        match self {
            Self::Wagmi => "wagmi",
            Self::Ethers => "ethers",
            Self::Viem => "viem",
        }
    }

    /// Returns the name shown in tab labels.
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Wagmi => "wagmi",
            Self::Ethers => "ethers.js",
            Self::Viem => "Viem",
        }
    }
}
