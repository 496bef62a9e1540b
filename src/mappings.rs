//! Static lookup tables: plant-name normalization, bed remapping, rotation
//! families.
//!
//! These tables are the heart of the migration. The workbook contains
//! free-text plant names (typos, cultivar names, supplier strings); the app
//! wants canonical plant IDs. Everything here is data lifted from the real
//! workbooks this tool was written against.

use std::collections::HashMap;

/// Free-text plant name (normalized) → canonical plant ID.
///
/// Keys must already be lowercase/trimmed (see [`normalize_plant_name`]).
/// Values are the app's historical plant IDs; the v11 emitter renames the
/// plural ones via [`modern_plant_id`].
const PLANT_MAPPINGS: &[(&str, &str)] = &[
    ("peas", "peas"),
    ("pea", "peas"),
    ("beans", "broad-beans"),
    ("beans & peas", "broad-beans"),
    ("broad bean 'ratio'", "broad-beans"),
    ("french beans", "french-beans"),
    ("french borlotti stokkievitsboon", "french-beans"),
    ("onions", "onion"),
    ("onion", "onion"),
    ("onion electric (red autumn)", "onion"),
    ("onion senshyu (white autumn)", "onion"),
    ("white senshyn", "onion"),
    ("red electric", "onion"),
    ("onion 'centurion'", "onion"),
    ("spring onion 'lilia'", "spring-onions"),
    ("spring onion parade (organic)", "spring-onions"),
    ("onion (spring) keravel pink", "spring-onions"),
    ("potatoes", "potato"),
    ("potato", "potato"),
    ("potatoes (early)", "potato"),
    ("charlotte seed", "potato"),
    ("heidi red seed", "potato"),
    ("organic colleen", "potato"),
    ("organic setanta", "potato"),
    ("garlic", "garlic"),
    ("garlic (autumn) kingsland", "garlic"),
    ("garlic 'flavor'", "garlic"),
    ("caulk wight (hardneck)", "garlic"),
    ("leeks", "leek"),
    ("leek", "leek"),
    ("lancelot", "leek"),
    ("leeks seeds tape", "leek"),
    ("carrots", "carrot"),
    ("carrot", "carrot"),
    ("carrot nantes 2 (organic)", "carrot"),
    ("beetroot", "beetroot"),
    ("courgettes", "courgette"),
    ("courgette", "courgette"),
    ("courguette", "courgette"),
    ("wave climber", "courgette"),
    ("cauliflower", "cauliflower"),
    ("pak choi", "pak-choi"),
    ("pak choi baby", "pak-choi"),
    ("lettuce", "lettuce"),
    ("spinach", "spinach"),
    ("chard", "chard"),
    ("rainbow chard", "chard"),
    ("strawberries", "strawberry"),
    ("strawberry", "strawberry"),
    ("broccoli", "broccoli"),
    ("cornflower", "cornflower"),
    ("cornflower 'blue diadem'", "cornflower"),
    ("cosmos", "cosmos"),
    ("cosmos 'sonata mixed'", "cosmos"),
    ("calendula", "calendula"),
    ("pumpkin", "pumpkin"),
    ("sweetcorn", "sweetcorn"),
    ("spinach 'palco' f1", "spinach"),
    ("sweet pea 'old fashioned mixed'", "sweet-pea"),
    ("sweet pea", "sweet-pea"),
    ("red - marigold (afro-french) 'zenith mixed' f1", "marigold"),
    ("marigold (dwarf french) 'disco'", "marigold"),
    ("marigold", "marigold"),
    ("sunflower 'medium red flower'", "sunflower"),
    ("sunflower", "sunflower"),
    ("zinnia 'dahlia flowered mixed'", "zinnia"),
    ("zinnia", "zinnia"),
    ("lupin", "lupin"),
    ("nasturtium", "nasturtium"),
];

/// Workbook bed label → app bed ID. Labels not listed here are dropped.
const BED_MAPPINGS: &[(&str, &str)] = &[
    ("A", "A"),
    ("C", "C"),
    ("C/B", "C"),
    ("D", "D"),
    ("B", "B1"),
];

/// Historical plural plant IDs → current singular form (v11 schema).
const MODERN_PLANT_IDS: &[(&str, &str)] = &[
    ("peas", "pea"),
    ("broad-beans", "broad-bean"),
    ("french-beans", "french-bean"),
    ("spring-onions", "spring-onion"),
];

/// Normalize a free-text plant name for table lookup.
///
/// Lowercases, trims, and collapses doubled spaces. Returns `None` for
/// empty/whitespace input.
pub fn normalize_plant_name(raw: &str) -> Option<String> {
    let normalized = raw.to_lowercase().trim().replace("  ", " ");
    if normalized.is_empty() {
        None
    } else {
        Some(normalized)
    }
}

/// Plant-name lookup with the two-stage matching rule.
pub struct PlantCatalog {
    map: HashMap<&'static str, &'static str>,
}

impl Default for PlantCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl PlantCatalog {
    pub fn new() -> Self {
        Self {
            map: PLANT_MAPPINGS.iter().copied().collect(),
        }
    }

    /// Map a free-text plant name to its canonical plant ID.
    ///
    /// Two-stage lookup: exact match on the normalized name, then a retry
    /// after stripping a parenthetical suffix ("potatoes (early)" →
    /// "potatoes"). Returns `None` if neither stage matches.
    pub fn plant_id(&self, raw: &str) -> Option<&'static str> {
        let normalized = normalize_plant_name(raw)?;
        if let Some(id) = self.map.get(normalized.as_str()).copied() {
            return Some(id);
        }
        let cleaned = normalized.split('(').next().unwrap_or("").trim();
        self.map.get(cleaned).copied()
    }
}

/// Map a workbook bed label to the app's bed ID. Unmapped labels drop the row.
pub fn map_bed_id(label: &str) -> Option<&'static str> {
    BED_MAPPINGS
        .iter()
        .find(|(from, _)| *from == label.trim())
        .map(|(_, to)| *to)
}

/// Rename a historical (plural) plant ID to its v11 singular form.
pub fn modern_plant_id(id: &str) -> &str {
    MODERN_PLANT_IDS
        .iter()
        .find(|(old, _)| *old == id)
        .map_or(id, |(_, new)| *new)
}

/// Crop-family rotation groups used by the app's rotation planner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotationGroup {
    Legumes,
    Brassicas,
    Roots,
    Alliums,
    Cucurbits,
    Solanaceae,
}

impl RotationGroup {
    pub fn as_str(&self) -> &'static str {
        match self {
            RotationGroup::Legumes => "legumes",
            RotationGroup::Brassicas => "brassicas",
            RotationGroup::Roots => "roots",
            RotationGroup::Alliums => "alliums",
            RotationGroup::Cucurbits => "cucurbits",
            RotationGroup::Solanaceae => "solanaceae",
        }
    }

    /// Classify a plant ID into its rotation family.
    ///
    /// Total: unknown IDs (flowers, leafy crops) land in `Roots`, the app's
    /// catch-all group.
    pub fn classify(plant_id: &str) -> RotationGroup {
        match plant_id {
            "peas" | "broad-beans" | "french-beans" | "runner-beans" => RotationGroup::Legumes,
            "cabbage" | "kale" | "broccoli" | "cauliflower" | "brussels-sprouts" => {
                RotationGroup::Brassicas
            }
            "carrot" | "beetroot" | "parsnip" | "potato" | "turnip" => RotationGroup::Roots,
            "onion" | "garlic" | "leek" | "spring-onions" | "shallot" => RotationGroup::Alliums,
            "courgette" | "pumpkin" | "squash" | "cucumber" | "melon" => RotationGroup::Cucurbits,
            "tomato" | "pepper" | "aubergine" | "chilli" => RotationGroup::Solanaceae,
            _ => RotationGroup::Roots,
        }
    }

    /// Majority vote over a bed-season's plantings. First-seen maximum wins;
    /// no plantings means `Roots`.
    pub fn majority<'a, I>(plant_ids: I) -> RotationGroup
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut counts: HashMap<RotationGroup, usize> = HashMap::new();
        let mut order: Vec<RotationGroup> = Vec::new();
        for id in plant_ids {
            let group = RotationGroup::classify(id);
            let count = counts.entry(group).or_insert(0);
            if *count == 0 {
                order.push(group);
            }
            *count += 1;
        }
        let mut best: Option<(RotationGroup, usize)> = None;
        for group in order {
            let count = counts[&group];
            // Ties keep the earlier-seen group
            if best.map_or(true, |(_, best_count)| count > best_count) {
                best = Some((group, count));
            }
        }
        best.map_or(RotationGroup::Roots, |(group, _)| group)
    }
}
