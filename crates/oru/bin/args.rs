use crate::cmd::{
    highlight::HighlightArgs, list::ListArgs, remove::RemoveArgs, scan::ScanArgs,
    snippet::SnippetArgs, view::ViewArgs,
};
use clap::{Parser, Subcommand};
use oru_cli::opts::GlobalOpts;

/// Turn contract ABIs into ready-to-paste wagmi, ethers.js and viem snippets.
#[derive(Debug, Parser)]
#[command(name = "oru", version, next_display_order = None)]
pub struct Oru {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub cmd: OruSubcommand,
}

#[derive(Debug, Subcommand)]
pub enum OruSubcommand {
    /// Parse an ABI and store it as a contract.
    #[command(visible_alias = "s")]
    Scan(ScanArgs),

    /// List stored contracts.
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// Show the functions and events of a stored contract with their snippets.
    #[command(visible_alias = "v")]
    View(ViewArgs),

    /// Print the snippet for a single function or event.
    #[command(visible_alias = "sn")]
    Snippet(SnippetArgs),

    /// Highlight JavaScript or TypeScript source.
    #[command(visible_alias = "hl")]
    Highlight(HighlightArgs),

    /// Print the known network labels.
    Networks,

    /// Delete a stored contract.
    #[command(visible_alias = "rm")]
    Remove(RemoveArgs),

    /// Generate shell completions script.
    #[command(visible_alias = "com")]
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
