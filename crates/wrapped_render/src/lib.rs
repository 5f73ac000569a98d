use std::fmt::Write as _;

use serde_json::{Map as JsonMap, Value as JsonValue};
use wrapped_core::core_api::{
    CategoryTops, CookedEntry, FriendEntry, GrossEntry, MonsterEntry, TopEntry, WrappedMetrics,
};

const MISSING: &str = "—";
const LABEL_WIDTH: usize = 18;
const CATEGORY_LABEL_WIDTH: usize = 10;
const FRIEND_NAME_WIDTH: usize = 14;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FieldSelection {
    pub farmer: bool,
    pub farm: bool,
    pub date: bool,
    pub money: bool,
    pub totals: bool,
    pub top_monster: bool,
    pub most_shipped: bool,
    pub most_cooked: bool,
    pub most_caught_fish: bool,
    pub friends: bool,
    pub top_grossing: bool,
    pub categories: bool,
}

impl FieldSelection {
    pub fn is_any_selected(&self) -> bool {
        self.farmer
            || self.farm
            || self.date
            || self.money
            || self.totals
            || self.top_monster
            || self.most_shipped
            || self.most_cooked
            || self.most_caught_fish
            || self.friends
            || self.top_grossing
            || self.categories
    }

    fn includes(&self, key: &str) -> bool {
        match key {
            "farmerName" => self.farmer,
            "farmName" => self.farm,
            "date" => self.date,
            "moneyEarned" => self.money,
            "seedsSown" | "itemsCookedCount" | "timesFished" | "uniqueItemsShipped"
            | "uniqueRecipesCooked" | "fishTypesCaught" => self.totals,
            "topMonster" => self.top_monster,
            "mostShipped" => self.most_shipped,
            "mostCookedRecipe" => self.most_cooked,
            "mostCaughtFish" => self.most_caught_fish,
            "friendsTop" => self.friends,
            "topGrossingItem" => self.top_grossing,
            "mostShippedByCategory" => self.categories,
            _ => false,
        }
    }
}

pub fn render_json_full(metrics: &WrappedMetrics) -> JsonValue {
    JsonValue::Object(default_json(metrics))
}

pub fn render_json_selected(metrics: &WrappedMetrics, fields: &FieldSelection) -> JsonValue {
    let mut out = default_json(metrics);
    out.retain(|key, _| fields.includes(key));
    JsonValue::Object(out)
}

pub fn render_text(metrics: &WrappedMetrics) -> String {
    let mut out = String::new();

    writeln!(
        &mut out,
        "{} @ {}",
        or_missing(&metrics.farmer_name),
        or_missing(&metrics.farm_name)
    )
    .expect("writing to String cannot fail");
    writeln!(&mut out, "{}", metrics.date).expect("writing to String cannot fail");
    writeln!(&mut out).expect("writing to String cannot fail");

    let highlights = [
        (
            "Money earned",
            metrics
                .money_earned
                .map(|money| format!("{}g", format_number_with_commas(money))),
        ),
        ("Seeds sown", metrics.seeds_sown.map(format_number_with_commas)),
        (
            "Items cooked",
            metrics.items_cooked_count.map(format_number_with_commas),
        ),
        (
            "Times fished",
            metrics.times_fished.map(format_number_with_commas),
        ),
        (
            "Unique shipped",
            Some(format_count(metrics.unique_items_shipped)),
        ),
        (
            "Recipes cooked",
            Some(format_count(metrics.unique_recipes_cooked)),
        ),
        ("Fish types", Some(format_count(metrics.fish_types_caught))),
    ];
    for (label, value) in highlights {
        write_row(&mut out, label, value.as_deref());
    }
    writeln!(&mut out).expect("writing to String cannot fail");

    let cards = [
        (
            "Most shipped",
            metrics.most_shipped.as_ref().map(top_entry_card),
        ),
        (
            "Top grossing",
            metrics.top_grossing_item.as_ref().map(|entry| {
                format!("{} {}g", entry.name, format_number_with_commas(entry.gross))
            }),
        ),
        (
            "Most cooked",
            metrics
                .most_cooked_recipe
                .as_ref()
                .map(|entry| count_card(&entry.name, entry.count)),
        ),
        (
            "Most caught fish",
            metrics.most_caught_fish.as_ref().map(top_entry_card),
        ),
        (
            "Top monster",
            metrics
                .top_monster
                .as_ref()
                .map(|entry| count_card(&entry.name, entry.count)),
        ),
    ];
    for (label, value) in cards {
        write_row(&mut out, label, value.as_deref());
    }
    writeln!(&mut out).expect("writing to String cannot fail");

    writeln!(&mut out, "By category").expect("writing to String cannot fail");
    for (category, entry) in metrics.most_shipped_by_category.iter() {
        let label = format!("{category}:");
        let value = entry.map_or_else(|| MISSING.to_string(), top_entry_card);
        writeln!(
            &mut out,
            "  {label:<width$}{value}",
            width = CATEGORY_LABEL_WIDTH
        )
        .expect("writing to String cannot fail");
    }
    writeln!(&mut out).expect("writing to String cannot fail");

    writeln!(&mut out, "Besties").expect("writing to String cannot fail");
    if metrics.friends_top.is_empty() {
        writeln!(&mut out, "  No friendships found.").expect("writing to String cannot fail");
    }
    for friend in &metrics.friends_top {
        writeln!(
            &mut out,
            "  {:<width$}{:.1} hearts",
            friend.name,
            friend.hearts,
            width = FRIEND_NAME_WIDTH
        )
        .expect("writing to String cannot fail");
    }

    out
}

fn default_json(metrics: &WrappedMetrics) -> JsonMap<String, JsonValue> {
    let mut out = JsonMap::new();

    out.insert(
        "farmerName".to_string(),
        JsonValue::String(metrics.farmer_name.clone()),
    );
    out.insert(
        "farmName".to_string(),
        JsonValue::String(metrics.farm_name.clone()),
    );
    out.insert("date".to_string(), JsonValue::String(metrics.date.clone()));
    out.insert(
        "moneyEarned".to_string(),
        JsonValue::from(metrics.money_earned),
    );
    out.insert("seedsSown".to_string(), JsonValue::from(metrics.seeds_sown));
    out.insert(
        "itemsCookedCount".to_string(),
        JsonValue::from(metrics.items_cooked_count),
    );
    out.insert(
        "timesFished".to_string(),
        JsonValue::from(metrics.times_fished),
    );
    out.insert(
        "topMonster".to_string(),
        optional_json(metrics.top_monster.as_ref(), monster_entry_to_json),
    );
    out.insert(
        "mostShipped".to_string(),
        optional_json(metrics.most_shipped.as_ref(), top_entry_to_json),
    );
    out.insert(
        "mostCookedRecipe".to_string(),
        optional_json(metrics.most_cooked_recipe.as_ref(), cooked_entry_to_json),
    );
    out.insert(
        "mostCaughtFish".to_string(),
        optional_json(metrics.most_caught_fish.as_ref(), top_entry_to_json),
    );
    out.insert(
        "friendsTop".to_string(),
        friends_to_json(&metrics.friends_top),
    );
    out.insert(
        "uniqueItemsShipped".to_string(),
        JsonValue::from(metrics.unique_items_shipped),
    );
    out.insert(
        "uniqueRecipesCooked".to_string(),
        JsonValue::from(metrics.unique_recipes_cooked),
    );
    out.insert(
        "fishTypesCaught".to_string(),
        JsonValue::from(metrics.fish_types_caught),
    );
    out.insert(
        "topGrossingItem".to_string(),
        optional_json(metrics.top_grossing_item.as_ref(), gross_entry_to_json),
    );
    out.insert(
        "mostShippedByCategory".to_string(),
        category_tops_to_json(&metrics.most_shipped_by_category),
    );

    out
}

fn optional_json<T>(entry: Option<&T>, to_json: fn(&T) -> JsonValue) -> JsonValue {
    entry.map_or(JsonValue::Null, to_json)
}

fn top_entry_to_json(entry: &TopEntry) -> JsonValue {
    let mut m = JsonMap::new();
    m.insert("id".to_string(), JsonValue::from(entry.id));
    m.insert("name".to_string(), JsonValue::String(entry.name.clone()));
    m.insert("count".to_string(), JsonValue::from(entry.count));
    JsonValue::Object(m)
}

fn cooked_entry_to_json(entry: &CookedEntry) -> JsonValue {
    let mut m = JsonMap::new();
    m.insert("id".to_string(), JsonValue::from(entry.id));
    m.insert("name".to_string(), JsonValue::String(entry.name.clone()));
    m.insert("count".to_string(), JsonValue::from(entry.count));
    JsonValue::Object(m)
}

fn monster_entry_to_json(entry: &MonsterEntry) -> JsonValue {
    let mut m = JsonMap::new();
    m.insert("name".to_string(), JsonValue::String(entry.name.clone()));
    m.insert("count".to_string(), JsonValue::from(entry.count));
    JsonValue::Object(m)
}

fn gross_entry_to_json(entry: &GrossEntry) -> JsonValue {
    let mut m = JsonMap::new();
    m.insert("id".to_string(), JsonValue::from(entry.id));
    m.insert("name".to_string(), JsonValue::String(entry.name.clone()));
    m.insert("gross".to_string(), JsonValue::from(entry.gross));
    JsonValue::Object(m)
}

fn friends_to_json(friends: &[FriendEntry]) -> JsonValue {
    JsonValue::Array(
        friends
            .iter()
            .map(|f| {
                let mut m = JsonMap::new();
                m.insert("name".to_string(), JsonValue::String(f.name.clone()));
                m.insert("hearts".to_string(), JsonValue::from(f.hearts));
                JsonValue::Object(m)
            })
            .collect(),
    )
}

fn category_tops_to_json(tops: &CategoryTops) -> JsonValue {
    let mut m = JsonMap::new();
    for (category, entry) in tops.iter() {
        m.insert(category.to_string(), optional_json(entry, top_entry_to_json));
    }
    JsonValue::Object(m)
}

fn write_row(out: &mut String, label: &str, value: Option<&str>) {
    let label = format!("{label}:");
    writeln!(
        out,
        "  {label:<width$}{}",
        value.unwrap_or(MISSING),
        width = LABEL_WIDTH
    )
    .expect("writing to String cannot fail");
}

fn top_entry_card(entry: &TopEntry) -> String {
    count_card(&entry.name, entry.count)
}

fn count_card(name: &str, count: i64) -> String {
    format!("{name} x{}", format_number_with_commas(count))
}

fn or_missing(value: &str) -> &str {
    if value.is_empty() { MISSING } else { value }
}

fn format_count(n: usize) -> String {
    format_number_with_commas(i64::try_from(n).unwrap_or(i64::MAX))
}

fn format_number_with_commas(n: i64) -> String {
    let s = n.unsigned_abs().to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3 + 1);
    if n < 0 {
        result.push('-');
    }
    for (i, c) in s.chars().enumerate() {
        if i > 0 && (s.len() - i).is_multiple_of(3) {
            result.push(',');
        }
        result.push(c);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::format_number_with_commas;

    #[test]
    fn thousands_separators() {
        assert_eq!(format_number_with_commas(0), "0");
        assert_eq!(format_number_with_commas(999), "999");
        assert_eq!(format_number_with_commas(1000), "1,000");
        assert_eq!(format_number_with_commas(123456), "123,456");
        assert_eq!(format_number_with_commas(-1234567), "-1,234,567");
        assert_eq!(
            format_number_with_commas(i64::MIN),
            "-9,223,372,036,854,775,808"
        );
    }
}
