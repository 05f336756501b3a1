use clap::Parser;
use comfy_table::{Table, modifiers::UTF8_ROUND_CORNERS, presets::ASCII_MARKDOWN};
use eyre::Result;
use oru_cli::opts::GlobalOpts;
use oru_core::{Catalog, Category};

/// CLI arguments for `oru list`.
#[derive(Clone, Debug, Parser)]
pub struct ListArgs {
    /// Print the stored records as JSON.
    #[arg(long, short)]
    json: bool,

    /// Print a markdown table.
    #[arg(long, conflicts_with = "json")]
    markdown: bool,
}

impl ListArgs {
    pub fn run(self, global: &GlobalOpts) -> Result<()> {
        let config = global.load_config()?;
        let records = super::open_store(&config).list()?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&records)?);
            return Ok(());
        }
        if records.is_empty() {
            println!("No contracts stored");
            return Ok(());
        }

        let mut table = Table::new();
        if self.markdown {
            table.load_preset(ASCII_MARKDOWN);
        } else {
            table.apply_modifier(UTF8_ROUND_CORNERS);
        }
        table.set_header(["ID", "Name", "Network", "Address", "Read", "Write", "Events"]);
        for record in &records {
            let catalog = Catalog::new(&record.abi, "");
            table.add_row([
                record.id.clone(),
                record.name.clone(),
                record.network.clone(),
                record.address.clone(),
                catalog.count(Category::Read).to_string(),
                catalog.count(Category::Write).to_string(),
                catalog.count(Category::Events).to_string(),
            ]);
        }
        println!("{table}");
        Ok(())
    }
}
