//! Groups ABI items into read/write/event categories and describes them for display.

use crate::{
    AbiItem,
    abi::mutability_str,
    generate::Classification,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A dashboard category.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Category {
    #[default]
    Read,
    Write,
    Events,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Self; 3] = [Self::Read, Self::Write, Self::Events];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Read => "Read",
            Self::Write => "Write",
            Self::Events => "Events",
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::Read => "Read Functions",
            Self::Write => "Write Functions",
            Self::Events => "Events",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Read => "Query state without gas costs",
            Self::Write => "Transactions requiring gas and signatures",
            Self::Events => "Real-time event listeners",
        }
    }

    /// Returns the category an item belongs to, if any.
    pub fn of(item: &AbiItem) -> Option<Self> {
        match Classification::of(item) {
            Classification::ReadFunction => Some(Self::Read),
            Classification::WriteFunction => Some(Self::Write),
            Classification::Event => Some(Self::Events),
            Classification::Unsupported => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The items of an ABI split by category, optionally narrowed by a name search.
#[derive(Clone, Debug, Default)]
pub struct Catalog<'a> {
    read: Vec<&'a AbiItem>,
    write: Vec<&'a AbiItem>,
    events: Vec<&'a AbiItem>,
}

impl<'a> Catalog<'a> {
    /// Categorizes `abi`, keeping only items whose name contains `search` (ignoring case).
    ///
    /// An empty search keeps everything; unnamed items never match a non-empty search.
    pub fn new(abi: &'a [AbiItem], search: &str) -> Self {
        let needle = search.to_lowercase();
        let mut catalog = Self::default();
        for item in abi.iter().filter(|item| matches_search(item, &needle)) {
            match Category::of(item) {
                Some(Category::Read) => catalog.read.push(item),
                Some(Category::Write) => catalog.write.push(item),
                Some(Category::Events) => catalog.events.push(item),
                None => {}
            }
        }
        catalog
    }

    /// Returns the items of a category, in ABI order.
    pub fn get(&self, category: Category) -> &[&'a AbiItem] {
        match category {
            Category::Read => &self.read,
            Category::Write => &self.write,
            Category::Events => &self.events,
        }
    }

    pub fn count(&self, category: Category) -> usize {
        self.get(category).len()
    }

    /// Returns true if no item matched.
    pub fn is_empty(&self) -> bool {
        Category::ALL.iter().all(|&category| self.get(category).is_empty())
    }
}

fn matches_search(item: &AbiItem, needle: &str) -> bool {
    needle.is_empty()
        || item.name.as_deref().is_some_and(|name| name.to_lowercase().contains(needle))
}

/// A parameter row of a [`Card`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParamRow {
    pub name: String,
    pub ty: String,
}

/// Display metadata for a single ABI item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Card {
    pub title: String,
    /// `Read` or `Write`.
    pub badge: &'static str,
    /// The declared mutability, or `Standard`.
    pub mutability: &'static str,
    pub params: Vec<ParamRow>,
    pub advisory: &'static str,
    pub provider: &'static str,
    pub execution: &'static str,
}

impl Card {
    pub fn new(item: &AbiItem) -> Self {
        let read = item.is_read();
        let advisory = if item.is_event() {
            "Event listeners are essential for UI reactivity. Use 'watchContractEvent' for seamless real-time state synchronization."
        } else if read {
            "Safe, gas-less query. Ideal for component initialization and data validation without user transaction costs."
        } else {
            "Transactional mutation. Requires user signature and gas execution. Always implement robust error handling for user rejections."
        };
        let params = item
            .inputs
            .iter()
            .enumerate()
            .map(|(idx, input)| ParamRow {
                name: if input.name.is_empty() { format!("arg{idx}") } else { input.name.clone() },
                ty: input.canonical_type(),
            })
            .collect();
        Self {
            title: item.display_name().to_string(),
            badge: if read { "Read" } else { "Write" },
            mutability: item.mutability.map(mutability_str).unwrap_or("Standard"),
            params,
            advisory,
            provider: if read { "Global JSON-RPC" } else { "Wallet Injection" },
            execution: if read { "Query" } else { "Consensus Transaction" },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AbiParam, ItemKind, constants::demo_abi};
    use alloy_json_abi::StateMutability;

    fn names<'a>(items: &[&'a AbiItem]) -> Vec<&'a str> {
        items.iter().map(|item| item.display_name()).collect()
    }

    #[test]
    fn categorizes_demo_abi() {
        let abi = demo_abi();
        let catalog = Catalog::new(&abi, "");
        assert_eq!(names(catalog.get(Category::Read)), ["balanceOf"]);
        assert_eq!(names(catalog.get(Category::Write)), ["transfer"]);
        assert_eq!(names(catalog.get(Category::Events)), ["Transfer"]);
    }

    #[test]
    fn skips_unsupported_kinds() {
        let abi = vec![
            AbiItem::new(ItemKind::Constructor),
            AbiItem::new(ItemKind::Error).with_name("Unauthorized"),
            AbiItem::new(ItemKind::Unknown).with_name("onlyOwner"),
            AbiItem::new(ItemKind::Function).with_name("legacy"),
        ];
        let catalog = Catalog::new(&abi, "");
        assert_eq!(catalog.count(Category::Read), 0);
        assert_eq!(names(catalog.get(Category::Write)), ["legacy"]);
        assert_eq!(catalog.count(Category::Events), 0);
    }

    #[test]
    fn search_ignores_case() {
        let abi = demo_abi();
        let catalog = Catalog::new(&abi, "TRANS");
        assert_eq!(catalog.count(Category::Read), 0);
        assert_eq!(names(catalog.get(Category::Write)), ["transfer"]);
        assert_eq!(names(catalog.get(Category::Events)), ["Transfer"]);

        assert!(Catalog::new(&abi, "approve").is_empty());
    }

    #[test]
    fn unnamed_items_never_match_a_search() {
        let abi = vec![AbiItem::new(ItemKind::Function)];
        assert_eq!(Catalog::new(&abi, "").count(Category::Write), 1);
        assert!(Catalog::new(&abi, "anon").is_empty());
    }

    #[test]
    fn parses_categories() {
        assert_eq!("events".parse::<Category>().unwrap(), Category::Events);
        assert_eq!("Read".parse::<Category>().unwrap(), Category::Read);
        assert!("event".parse::<Category>().is_err());
    }

    #[test]
    fn read_card() {
        let card = Card::new(&demo_abi()[0]);
        assert_eq!(card.title, "balanceOf");
        assert_eq!(card.badge, "Read");
        assert_eq!(card.mutability, "view");
        assert_eq!(card.params, vec![ParamRow { name: "account".into(), ty: "address".into() }]);
        assert_eq!(card.provider, "Global JSON-RPC");
        assert_eq!(card.execution, "Query");
        assert!(card.advisory.starts_with("Safe, gas-less query."));
    }

    #[test]
    fn write_card_names_unnamed_params() {
        let item = AbiItem::function("deposit", StateMutability::Payable)
            .input(AbiParam::new("", "uint256"))
            .input(AbiParam::new("to", "address"));
        let card = Card::new(&item);
        assert_eq!(card.badge, "Write");
        assert_eq!(card.mutability, "payable");
        assert_eq!(card.params[0].name, "arg0");
        assert_eq!(card.params[1].name, "to");
        assert_eq!(card.provider, "Wallet Injection");
        assert_eq!(card.execution, "Consensus Transaction");
        assert!(card.advisory.starts_with("Transactional mutation."));
    }

    #[test]
    fn event_card() {
        let card = Card::new(&demo_abi()[2]);
        assert_eq!(card.badge, "Write");
        assert_eq!(card.mutability, "Standard");
        assert_eq!(card.params.len(), 3);
        assert!(card.advisory.starts_with("Event listeners"));
    }
}
