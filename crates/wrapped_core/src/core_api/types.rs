use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Categories reported in `WrappedMetrics::most_shipped_by_category`, in display order.
pub const CATEGORY_NAMES: [&str; 7] = [
    "Crop", "Artisan", "Fish", "Forage", "Animal", "Cooking", "Fruit",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TopEntry {
    pub id: i32,
    pub name: String,
    pub count: i64,
}

/// Most cooked recipe. `id` is `None` when the recipe label is not a numeric item id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CookedEntry {
    pub id: Option<i32>,
    pub name: String,
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MonsterEntry {
    pub name: String,
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GrossEntry {
    pub id: i32,
    pub name: String,
    pub gross: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FriendEntry {
    pub name: String,
    pub hearts: f64,
}

/// Top shipped item per category, always holding every name in [`CATEGORY_NAMES`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryTops(IndexMap<String, Option<TopEntry>>);

impl CategoryTops {
    pub fn new() -> Self {
        Self(
            CATEGORY_NAMES
                .iter()
                .map(|name| ((*name).to_string(), None))
                .collect(),
        )
    }

    pub fn set(&mut self, category: &str, entry: Option<TopEntry>) {
        self.0.insert(category.to_string(), entry);
    }

    pub fn get(&self, category: &str) -> Option<&TopEntry> {
        self.0.get(category).and_then(Option::as_ref)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&TopEntry>)> {
        self.0
            .iter()
            .map(|(name, entry)| (name.as_str(), entry.as_ref()))
    }
}

impl Default for CategoryTops {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct WrappedMetrics {
    pub farmer_name: String,
    pub farm_name: String,
    pub date: String,
    pub money_earned: Option<i64>,
    pub seeds_sown: Option<i64>,
    pub items_cooked_count: Option<i64>,
    pub times_fished: Option<i64>,
    pub top_monster: Option<MonsterEntry>,
    pub most_shipped: Option<TopEntry>,
    pub most_cooked_recipe: Option<CookedEntry>,
    pub most_caught_fish: Option<TopEntry>,
    pub friends_top: Vec<FriendEntry>,
    pub unique_items_shipped: usize,
    pub unique_recipes_cooked: usize,
    pub fish_types_caught: usize,
    pub top_grossing_item: Option<GrossEntry>,
    pub most_shipped_by_category: CategoryTops,
}
