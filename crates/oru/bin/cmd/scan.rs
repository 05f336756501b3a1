use alloy_primitives::Address;
use clap::{Parser, ValueHint};
use eyre::{Result, WrapErr};
use oru_cli::{opts::GlobalOpts, sh_note, sh_warn, stdin};
use oru_core::{
    NewContract,
    constants::{self, DEMO_ADDRESS, NETWORKS},
    parse_abi,
};
use std::path::PathBuf;

/// CLI arguments for `oru scan`.
#[derive(Clone, Debug, Parser)]
pub struct ScanArgs {
    /// The contract address. Stored as entered.
    #[arg(long, short, required_unless_present = "demo")]
    address: Option<String>,

    /// Path to the ABI JSON, either a bare array or an artifact with an `abi` field.
    ///
    /// Reads from stdin when absent or `-`.
    #[arg(long, value_hint = ValueHint::FilePath, value_name = "PATH")]
    abi: Option<PathBuf>,

    /// The network label. Defaults to the configured network.
    #[arg(long, short)]
    network: Option<String>,

    /// The display name. Defaults to the configured name.
    #[arg(long)]
    name: Option<String>,

    /// Store the bundled ERC-20 demo contract instead of reading an ABI.
    #[arg(long, conflicts_with_all = ["abi", "address"])]
    demo: bool,
}

impl ScanArgs {
    pub fn run(self, global: &GlobalOpts) -> Result<()> {
        let config = global.load_config()?;
        let Self { address, abi, network, name, demo } = self;

        let (address, abi) = if demo {
            (DEMO_ADDRESS.to_string(), constants::demo_abi())
        } else {
            let json = stdin::read_path_or_stdin(abi.as_deref())?;
            let abi = parse_abi(&json).wrap_err("could not scan contract")?;
            (address.unwrap_or_default(), abi)
        };

        if address.parse::<Address>().is_err() {
            warn!(%address, "not a 20-byte hex address");
            sh_warn!("`{address}` is not a valid address, storing it as entered");
        }

        let network = network.unwrap_or_else(|| config.network.clone());
        if !NETWORKS.contains(&network.as_str()) {
            sh_note!("`{network}` is not a known network label");
        }

        let draft = NewContract {
            name: name.unwrap_or_else(|| config.name.clone()),
            address,
            network,
            abi,
        };
        let record = super::open_store(&config).save(draft)?;
        sh_note!("stored {} ({} items)", record.name, record.abi.len());
        println!("{}", record.id);
        Ok(())
    }
}
