//! Rarity category tables.
//!
//! Four independent documents classify rarity values along cosmetic axes (crew, fruit,
//! ship, weapon). A drawn item's rarity is looked up in each table and every hit adds
//! a labelled line to the reward description.

use std::collections::HashMap;

use serde::Deserialize;

/// Rarity values are matched at this resolution.
///
/// Keys are rounded to thousandths so that `7.5` from a JSON document and `7.5` read
/// back from the database match even if their float representations drift.
const RARITY_KEY_SCALE: f64 = 1000.0;

/// Cosmetic classification axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RarityCategory {
    Crew,
    Fruit,
    Ship,
    Weapon,
}

impl RarityCategory {
    /// All categories in presentation order.
    pub const ALL: [RarityCategory; 4] = [
        RarityCategory::Crew,
        RarityCategory::Fruit,
        RarityCategory::Ship,
        RarityCategory::Weapon,
    ];

    pub fn label(self) -> &'static str {
        match self {
            RarityCategory::Crew => "Crew",
            RarityCategory::Fruit => "Fruit",
            RarityCategory::Ship => "Ship",
            RarityCategory::Weapon => "Weapon",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            RarityCategory::Crew => "👥",
            RarityCategory::Fruit => "🍎",
            RarityCategory::Ship => "🚢",
            RarityCategory::Weapon => "⚔️",
        }
    }

    /// File name of the category document inside the rarity data directory.
    pub fn file_name(self) -> &'static str {
        match self {
            RarityCategory::Crew => "crew.json",
            RarityCategory::Fruit => "rarity_fruits.json",
            RarityCategory::Ship => "ships.json",
            RarityCategory::Weapon => "weapons.json",
        }
    }
}

/// One `{rarity, name}` record from a category document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RarityEntry {
    pub rarity: f64,
    pub name: String,
}

#[derive(Debug, Deserialize)]
struct RarityDocument {
    rarities: Vec<RarityEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct RarityKey(i64);

impl RarityKey {
    fn of(rarity: f64) -> Self {
        Self((rarity * RARITY_KEY_SCALE).round() as i64)
    }
}

/// A category document converted to a map keyed by rarity.
#[derive(Debug, Clone, Default)]
pub struct RarityTable {
    entries: HashMap<RarityKey, RarityEntry>,
}

impl RarityTable {
    /// Builds a table from records; a later record with the same rarity wins.
    pub fn from_entries(entries: impl IntoIterator<Item = RarityEntry>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|entry| (RarityKey::of(entry.rarity), entry))
                .collect(),
        }
    }

    /// Parses a `{"rarities": [...]}` document.
    ///
    /// Fails if the `rarities` key is missing or any record lacks `rarity`/`name`.
    pub fn from_json_str(content: &str) -> Result<Self, serde_json::Error> {
        let document: RarityDocument = serde_json::from_str(content)?;
        Ok(Self::from_entries(document.rarities))
    }

    pub fn get(&self, rarity: f64) -> Option<&RarityEntry> {
        self.entries.get(&RarityKey::of(rarity))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A category table hit for a drawn rarity.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryMatch {
    pub category: RarityCategory,
    pub entry: RarityEntry,
}

/// The four category tables, loaded once at startup and shared read-only.
#[derive(Debug, Clone, Default)]
pub struct RarityTables {
    pub crew: RarityTable,
    pub fruit: RarityTable,
    pub ship: RarityTable,
    pub weapon: RarityTable,
}

impl RarityTables {
    pub fn table(&self, category: RarityCategory) -> &RarityTable {
        match category {
            RarityCategory::Crew => &self.crew,
            RarityCategory::Fruit => &self.fruit,
            RarityCategory::Ship => &self.ship,
            RarityCategory::Weapon => &self.weapon,
        }
    }

    pub fn table_mut(&mut self, category: RarityCategory) -> &mut RarityTable {
        match category {
            RarityCategory::Crew => &mut self.crew,
            RarityCategory::Fruit => &mut self.fruit,
            RarityCategory::Ship => &mut self.ship,
            RarityCategory::Weapon => &mut self.weapon,
        }
    }

    /// Looks a rarity up in every table, in [`RarityCategory::ALL`] order.
    pub fn matches(&self, rarity: f64) -> Vec<CategoryMatch> {
        RarityCategory::ALL
            .into_iter()
            .filter_map(|category| {
                self.table(category).get(rarity).map(|entry| CategoryMatch {
                    category,
                    entry: entry.clone(),
                })
            })
            .collect()
    }
}
