use clap::Parser;
use eyre::Result;
use oru_cli::{opts::GlobalOpts, sh_note};

/// CLI arguments for `oru remove`.
#[derive(Clone, Debug, Parser)]
pub struct RemoveArgs {
    /// The id printed by `oru scan`.
    id: String,
}

impl RemoveArgs {
    pub fn run(self, global: &GlobalOpts) -> Result<()> {
        let config = global.load_config()?;
        if !super::open_store(&config).remove(&self.id)? {
            eyre::bail!("no contract with id `{}`", self.id);
        }
        sh_note!("removed {}", self.id);
        Ok(())
    }
}
