use super::highlight::render_code;
use clap::Parser;
use eyre::Result;
use itertools::Itertools;
use oru_cli::opts::GlobalOpts;
use oru_core::{Card, Catalog, Category, ContractRecord, TargetLibrary, generate_named};
use std::fmt::Write;
use yansi::Paint;

/// CLI arguments for `oru view`.
#[derive(Clone, Debug, Parser)]
pub struct ViewArgs {
    /// The id printed by `oru scan`.
    id: String,

    /// Which items to show.
    #[arg(long, short, default_value = "read", value_parser = parse_category)]
    category: Category,

    /// Only show items whose name contains this text, ignoring case.
    #[arg(long, short)]
    search: Option<String>,

    /// The library to generate snippets for: wagmi, ethers or viem.
    ///
    /// Defaults to the configured library.
    #[arg(long, short)]
    library: Option<String>,

    /// Show integration guidance instead of snippets.
    #[arg(long)]
    guide: bool,
}

impl ViewArgs {
    pub fn run(self, global: &GlobalOpts) -> Result<()> {
        let config = global.load_config()?;
        let record = super::load_record(&config, &self.id)?;
        let library = self.library.unwrap_or_else(|| config.library.id().to_string());
        let search = self.search.unwrap_or_default();

        let catalog = Catalog::new(&record.abi, &search);
        let mut out = header(&record, &library);
        let _ = writeln!(
            out,
            "\n\n{}\n",
            Category::ALL
                .iter()
                .map(|&category| {
                    let tab = format!("{category} ({})", catalog.count(category));
                    if category == self.category { tab.bold().to_string() } else { tab }
                })
                .format(" | ")
        );
        let _ = writeln!(out, "{}", self.category.title().bold());
        let _ = writeln!(out, "{}", self.category.description().dim());

        let items = catalog.get(self.category);
        if items.is_empty() {
            let _ = write!(out, "\nNo results");
        }
        for item in items {
            let card = Card::new(item);
            let _ = write!(out, "\n{}", card_header(&card));
            if self.guide {
                let _ = writeln!(out, "  {}", card.advisory);
            } else {
                let snippet = generate_named(&library, &record.address, item);
                let _ = writeln!(out, "{}", render_code(&snippet, config.line_numbers));
            }
        }

        println!("{}", out.trim_end());
        Ok(())
    }
}

fn parse_category(s: &str) -> Result<Category, String> {
    s.parse().map_err(|_| format!("unknown category `{s}`, expected read, write or events"))
}

fn header(record: &ContractRecord, library: &str) -> String {
    let library = match library.parse::<TargetLibrary>() {
        Ok(known) => known.display_name(),
        Err(_) => library,
    };
    format!(
        "{}\n  Address: {}\n  Network: {}\n  Library: {library}",
        record.name.bold(),
        record.address,
        record.network,
    )
}

fn card_header(card: &Card) -> String {
    let mut out = format!("{} [{}] {}\n", card.title.bold(), card.badge, card.mutability.dim());
    for param in &card.params {
        let _ = writeln!(out, "  {}: {}", param.name, param.ty.cyan());
    }
    let _ = writeln!(out, "  Provider: {} | Execution: {}", card.provider, card.execution);
    out
}
