use clap::{Parser, ValueHint};
use eyre::{OptionExt, Result};
use oru_cli::{opts::GlobalOpts, stdin};
use oru_core::{AbiItem, Classification, generate_named, parse_abi};
use std::path::PathBuf;

/// CLI arguments for `oru snippet`.
#[derive(Clone, Debug, Parser)]
pub struct SnippetArgs {
    /// The name of the function or event.
    item: String,

    /// A stored contract id.
    #[arg(long, required_unless_present = "abi", conflicts_with_all = ["abi", "address"])]
    id: Option<String>,

    /// Path to an ABI JSON instead of a stored contract, `-` for stdin.
    #[arg(long, value_hint = ValueHint::FilePath, value_name = "PATH", requires = "address")]
    abi: Option<PathBuf>,

    /// The contract address used with `--abi`.
    #[arg(long, short)]
    address: Option<String>,

    /// The library to generate the snippet for: wagmi, ethers or viem.
    ///
    /// Defaults to the configured library.
    #[arg(long, short)]
    library: Option<String>,
}

impl SnippetArgs {
    pub fn run(self, global: &GlobalOpts) -> Result<()> {
        let config = global.load_config()?;
        let library = self.library.unwrap_or_else(|| config.library.id().to_string());

        let (address, abi) = match (self.id, self.abi) {
            (Some(id), _) => {
                let record = super::load_record(&config, &id)?;
                (record.address, record.abi)
            }
            (None, path) => {
                let abi = parse_abi(&stdin::read_path_or_stdin(path.as_deref())?)?;
                (self.address.unwrap_or_default(), abi)
            }
        };

        let item = find_item(&abi, &self.item)
            .ok_or_eyre(format!("no function or event named `{}`", self.item))?;
        println!("{}", generate_named(&library, &address, item));
        Ok(())
    }
}

/// Returns the first function or event called `name`.
fn find_item<'a>(abi: &'a [AbiItem], name: &str) -> Option<&'a AbiItem> {
    abi.iter().find(|item| {
        item.name.as_deref() == Some(name) && Classification::of(item) != Classification::Unsupported
    })
}
