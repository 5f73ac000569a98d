use indexmap::IndexMap;
use roxmltree::Node;

use crate::metrics;
use crate::save::dictionary::{
    decode_fish_caught, decode_friendships, decode_int_int, decode_string_int,
};
use crate::save::{SaveDocument, find_all, find_first, int_of, tag_variants, text_of};

use super::error::{CoreError, CoreErrorCode};
use super::item_catalog::ItemCatalog;
use super::types::WrappedMetrics;

#[derive(Debug, Default, Clone, Copy)]
pub struct Engine;

impl Engine {
    pub fn new() -> Self {
        Self
    }

    pub fn summarize_bytes<B: AsRef<[u8]>>(
        &self,
        bytes: B,
        catalog: &ItemCatalog,
    ) -> Result<WrappedMetrics, CoreError> {
        let text = std::str::from_utf8(bytes.as_ref()).map_err(|e| {
            CoreError::new(
                CoreErrorCode::Parse,
                format!("save is not valid UTF-8: {e}"),
            )
        })?;
        self.summarize_str(text, catalog)
    }

    /// Parses one save and derives its metrics. Only unparseable markup, a
    /// missing `player` section or a malformed dictionary fail the call;
    /// every other gap leaves the corresponding field unknown.
    pub fn summarize_str(
        &self,
        xml: &str,
        catalog: &ItemCatalog,
    ) -> Result<WrappedMetrics, CoreError> {
        let save = SaveDocument::parse(xml)?;
        let root = save.root();

        let player = find_first(root, "player").ok_or_else(|| {
            CoreError::new(
                CoreErrorCode::MissingPlayer,
                format!(
                    "save has no <player> section under <{}>",
                    root.tag_name().name()
                ),
            )
        })?;
        let stats = find_first(player, "stats");
        if stats.is_none() {
            log::debug!("save has no <stats> section; stat totals are unknown");
        }
        let stats_values = decode_string_int(stats.and_then(|s| find_first(s, "Values")))?;
        let stat = |name: &str| stat_value(stats, &stats_values, name);

        let farmer_name = text_of(find_first(player, "name"));
        let farm_name = text_of(find_first(player, "farmName"));
        let date = format_date(
            &text_of(find_first(root, "currentSeason")),
            int_of(find_first(root, "dayOfMonth")),
            int_of(find_first(root, "year")),
        );
        let money_earned = int_of(find_first(player, "totalMoneyEarned"));
        let seeds_sown = stat("seedsSown");
        let items_cooked_count = stat("itemsCooked");
        let times_fished = stat("timesFished");

        let shipped = decode_int_int(find_first(player, "basicShipped"))?;
        let cooked = decode_string_int(find_first(player, "recipesCooked"))?;
        let monsters =
            decode_string_int(stats.and_then(|s| find_first(s, "specificMonstersKilled")))?;
        let fish = decode_fish_caught(first_populated_fish_caught(root))?;
        let friendships = decode_friendships(find_first(player, "friendships"))?;

        Ok(WrappedMetrics {
            farmer_name,
            farm_name,
            date,
            money_earned,
            seeds_sown,
            items_cooked_count,
            times_fished,
            top_monster: metrics::top_monster(&monsters),
            most_shipped: metrics::most_shipped(&shipped, catalog),
            most_cooked_recipe: metrics::most_cooked_recipe(&cooked, catalog),
            most_caught_fish: metrics::most_caught_fish(&fish, catalog),
            friends_top: metrics::friends_top(&friendships),
            unique_items_shipped: metrics::positive_count(&shipped),
            unique_recipes_cooked: metrics::positive_count(&cooked),
            fish_types_caught: metrics::fish_types_caught(&fish),
            top_grossing_item: metrics::top_grossing_item(&shipped, catalog),
            most_shipped_by_category: metrics::top_by_category(&shipped, catalog),
        })
    }
}

pub fn summarize_save(xml: &str, catalog: &ItemCatalog) -> Result<WrappedMetrics, CoreError> {
    Engine::new().summarize_str(xml, catalog)
}

/// A stat is either its own element under `<stats>` or, in newer saves, an
/// entry of the `<stats><Values>` dictionary.
fn stat_value(
    stats: Option<Node<'_, '_>>,
    values: &IndexMap<String, i64>,
    name: &str,
) -> Option<i64> {
    stats
        .and_then(|s| int_of(find_first(s, name)))
        .or_else(|| values.get(name).copied())
}

/// Several `fishCaught` sections may exist (farmhands, legacy copies); the
/// first one holding any entries wins.
fn first_populated_fish_caught<'a, 'input>(root: Node<'a, 'input>) -> Option<Node<'a, 'input>> {
    let found = tag_variants("fishCaught").iter().find_map(|tag| {
        find_all(root, tag).find(|node| find_all(*node, "item").next().is_some())
    });
    if found.is_none() {
        log::debug!("save has no populated <fishCaught> section");
    }
    found
}

fn format_date(season: &str, day: Option<i64>, year: Option<i64>) -> String {
    let mut chars = season.chars();
    let season: String = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    };
    let day = day.map_or_else(|| "?".to_string(), |d| d.to_string());
    let year = year.map_or_else(|| "?".to_string(), |y| y.to_string());
    format!("{season} {day}, Year {year}")
}
