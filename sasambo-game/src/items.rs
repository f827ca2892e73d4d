//! Collectible items and the master catalog.
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Rarity tiers, ascending, named after the traditional Sasak social
/// hierarchy. The declaration order is the tier order and drives both
/// reward weighting and museum grouping.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemRarity {
    /// Rakyat biasa (common).
    Jajarkarang,
    /// Pemimpin sosial (uncommon).
    KetuaKarang,
    /// Pemuka adat/agama (rare).
    Pemangku,
    /// Bangsawan menengah (epic).
    LaluBaiq,
    /// Bangsawan tinggi (legendary); only granted on final-level clears.
    RadenDende,
}

impl ItemRarity {
    /// All tiers in ascending order.
    pub const ASCENDING: [Self; 5] = [
        Self::Jajarkarang,
        Self::KetuaKarang,
        Self::Pemangku,
        Self::LaluBaiq,
        Self::RadenDende,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Jajarkarang => "JAJARKARANG",
            Self::KetuaKarang => "KETUA_KARANG",
            Self::Pemangku => "PEMANGKU",
            Self::LaluBaiq => "LALU_BAIQ",
            Self::RadenDende => "RADEN_DENDE",
        }
    }
}

impl fmt::Display for ItemRarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemRarity {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "JAJARKARANG" => Ok(Self::Jajarkarang),
            "KETUA_KARANG" => Ok(Self::KetuaKarang),
            "PEMANGKU" => Ok(Self::Pemangku),
            "LALU_BAIQ" => Ok(Self::LaluBaiq),
            "RADEN_DENDE" => Ok(Self::RadenDende),
            _ => Err(()),
        }
    }
}

/// Category of a collectible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Clothing,
    Artifact,
    House,
    Food,
    Material,
    Instrument,
}

/// A single collectible item in the museum catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: String,
    pub name: String,
    /// Emoji glyph or asset reference rendered by the client.
    pub image: String,
    #[serde(rename = "type")]
    pub kind: ItemKind,
    pub rarity: ItemRarity,
    #[serde(default)]
    pub description: String,
}

/// The master collectible catalog. Item ids are unique within a catalog;
/// a player's inventory may still hold duplicates through the top-tier
/// re-roll fallback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ItemCatalog {
    pub items: Vec<InventoryItem>,
}

impl ItemCatalog {
    /// Create an empty catalog (useful for tests).
    #[must_use]
    pub fn empty() -> Self {
        Self { items: Vec::new() }
    }

    /// The built-in Sasambo museum catalog.
    #[must_use]
    pub fn master() -> Self {
        Self {
            items: crate::content::master_catalog_items(),
        }
    }

    /// Load a catalog from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed into valid catalog data.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Find an item by ID.
    #[must_use]
    pub fn find_item(&self, item_id: &str) -> Option<&InventoryItem> {
        self.items.iter().find(|item| item.id == item_id)
    }

    /// All items of a given rarity tier.
    #[must_use]
    pub fn of_rarity(&self, rarity: ItemRarity) -> Vec<&InventoryItem> {
        self.items
            .iter()
            .filter(|item| item.rarity == rarity)
            .collect()
    }

    /// Get all items as a flat map by ID.
    #[must_use]
    pub fn items_by_id(&self) -> HashMap<String, &InventoryItem> {
        let mut map = HashMap::new();
        for item in &self.items {
            map.insert(item.id.clone(), item);
        }
        map
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
