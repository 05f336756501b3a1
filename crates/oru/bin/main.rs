#[macro_use]
extern crate tracing;

use clap::{CommandFactory, Parser};
use eyre::Result;
use oru_cli::{handler, shell, utils};

mod args;
mod cmd;

use args::{Oru, OruSubcommand};

fn main() {
    if let Err(err) = run() {
        shell::error(format_args!("{err:?}"));
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    handler::install();
    utils::subscriber();
    utils::enable_paint();

    let args = Oru::parse();
    args.global.init()?;
    trace!(?args, "parsed arguments");

    match args.cmd {
        OruSubcommand::Scan(cmd) => cmd.run(&args.global),
        OruSubcommand::List(cmd) => cmd.run(&args.global),
        OruSubcommand::View(cmd) => cmd.run(&args.global),
        OruSubcommand::Snippet(cmd) => cmd.run(&args.global),
        OruSubcommand::Highlight(cmd) => cmd.run(&args.global),
        OruSubcommand::Networks => {
            for network in oru_core::constants::NETWORKS {
                println!("{network}");
            }
            Ok(())
        }
        OruSubcommand::Remove(cmd) => cmd.run(&args.global),
        OruSubcommand::Completions { shell } => {
            clap_complete::generate(shell, &mut Oru::command(), "oru", &mut std::io::stdout());
            Ok(())
        }
    }
}
