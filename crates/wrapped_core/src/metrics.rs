//! Metric extractors: pure functions from decoded dictionaries and the item
//! catalog to the values reported in [`WrappedMetrics`](crate::core_api::WrappedMetrics).
//!
//! Every "top" selection keeps the first candidate on ties, so results follow
//! the save's document order.

use std::hash::Hash;

use indexmap::IndexMap;

use crate::core_api::{
    CATEGORY_NAMES, CategoryTops, CookedEntry, FriendEntry, GrossEntry, ItemCatalog, MonsterEntry,
    TopEntry,
};
use crate::save::dictionary::{FishRecord, FriendshipPoints};

pub const MAX_HEARTS: f64 = 14.0;
pub const POINTS_PER_HEART: f64 = 250.0;
pub const FRIENDS_TOP_LIMIT: usize = 10;

/// Entry with the largest value; the first inserted wins ties.
pub fn top_entry<K: Eq + Hash>(map: &IndexMap<K, i64>) -> Option<(&K, i64)> {
    let mut best: Option<(&K, i64)> = None;
    for (key, &value) in map {
        if best.is_none_or(|(_, top)| value > top) {
            best = Some((key, value));
        }
    }
    best
}

pub fn positive_count<K>(map: &IndexMap<K, i64>) -> usize {
    map.values().filter(|&&count| count > 0).count()
}

pub fn most_shipped(shipped: &IndexMap<i32, i64>, catalog: &ItemCatalog) -> Option<TopEntry> {
    top_entry(shipped).map(|(&id, count)| TopEntry {
        id,
        name: catalog.item_name(id, "Item"),
        count,
    })
}

pub fn top_by_category(shipped: &IndexMap<i32, i64>, catalog: &ItemCatalog) -> CategoryTops {
    let mut tops = CategoryTops::new();
    for category in CATEGORY_NAMES {
        let members: IndexMap<i32, i64> = shipped
            .iter()
            .filter(|(id, _)| catalog.category(**id) == Some(category))
            .map(|(id, count)| (*id, *count))
            .collect();
        tops.set(category, most_shipped(&members, catalog));
    }
    tops
}

/// Item with the largest `count × base price`. Unpriced items gross zero but
/// still beat an empty result.
pub fn top_grossing_item(
    shipped: &IndexMap<i32, i64>,
    catalog: &ItemCatalog,
) -> Option<GrossEntry> {
    let mut best: Option<(i32, i64)> = None;
    for (&id, &count) in shipped {
        let gross = count.saturating_mul(catalog.base_price(id));
        if best.is_none_or(|(_, top)| gross > top) {
            best = Some((id, gross));
        }
    }
    best.map(|(id, gross)| GrossEntry {
        id,
        name: catalog.item_name(id, "Item"),
        gross,
    })
}

/// Recipe labels are item ids rendered as strings; labels that are not
/// numeric keep a `None` id and fall back to a `Dish (#label)` name.
pub fn most_cooked_recipe(
    cooked: &IndexMap<String, i64>,
    catalog: &ItemCatalog,
) -> Option<CookedEntry> {
    top_entry(cooked).map(|(label, count)| {
        let id = label.trim().parse::<i32>().ok();
        let name = match id {
            Some(id) => catalog.item_name(id, "Dish"),
            None => format!("Dish (#{label})"),
        };
        CookedEntry { id, name, count }
    })
}

pub fn most_caught_fish(
    fish: &IndexMap<i32, FishRecord>,
    catalog: &ItemCatalog,
) -> Option<TopEntry> {
    let counts: IndexMap<i32, i64> = fish.iter().map(|(id, record)| (*id, record.count)).collect();
    top_entry(&counts).map(|(&id, count)| TopEntry {
        id,
        name: catalog.item_name(id, "Fish"),
        count,
    })
}

pub fn fish_types_caught(fish: &IndexMap<i32, FishRecord>) -> usize {
    fish.values().filter(|record| record.count > 0).count()
}

pub fn top_monster(killed: &IndexMap<String, i64>) -> Option<MonsterEntry> {
    top_entry(killed).map(|(name, count)| MonsterEntry {
        name: name.clone(),
        count,
    })
}

/// `points / 250` rounded to one decimal (halves round up), capped at 14.
pub fn hearts(points: i64) -> f64 {
    let tenths = (points as f64 / POINTS_PER_HEART * 10.0 + 0.5).floor();
    (tenths / 10.0).min(MAX_HEARTS)
}

/// Friends by hearts, highest first. Equal hearts keep document order.
pub fn friends_top(friendships: &[FriendshipPoints]) -> Vec<FriendEntry> {
    let mut friends: Vec<FriendEntry> = friendships
        .iter()
        .map(|f| FriendEntry {
            name: f.npc_name.clone(),
            hearts: hearts(f.points),
        })
        .collect();
    friends.sort_by(|a, b| b.hearts.total_cmp(&a.hearts));
    friends.truncate(FRIENDS_TOP_LIMIT);
    friends
}
