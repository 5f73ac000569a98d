use std::path::PathBuf;

use serde_json::Value;
use wrapped_core::core_api::{Engine, ItemCatalog, WrappedMetrics};
use wrapped_render::{FieldSelection, render_json_full, render_json_selected, render_text};

fn workspace_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../..")
}

fn fixture_path(name: &str) -> PathBuf {
    workspace_root().join("tests/fixtures").join(name)
}

fn metrics_from_fixture(name: &str) -> WrappedMetrics {
    let catalog = ItemCatalog::load_from_path(&fixture_path("object_map.json"))
        .expect("dataset fixture should load");
    let xml = std::fs::read_to_string(fixture_path(name)).expect("fixture should be readable");
    Engine::new()
        .summarize_str(&xml, &catalog)
        .expect("fixture should parse")
}

#[test]
fn full_json_uses_canonical_top_level_order() {
    let metrics = metrics_from_fixture("full_save.xml");
    let value = render_json_full(&metrics);
    let keys: Vec<&str> = value
        .as_object()
        .expect("json should be an object")
        .keys()
        .map(String::as_str)
        .collect();

    assert_eq!(
        keys,
        vec![
            "farmerName",
            "farmName",
            "date",
            "moneyEarned",
            "seedsSown",
            "itemsCookedCount",
            "timesFished",
            "topMonster",
            "mostShipped",
            "mostCookedRecipe",
            "mostCaughtFish",
            "friendsTop",
            "uniqueItemsShipped",
            "uniqueRecipesCooked",
            "fishTypesCaught",
            "topGrossingItem",
            "mostShippedByCategory",
        ]
    );
}

#[test]
fn full_json_matches_record_serialization() {
    let metrics = metrics_from_fixture("full_save.xml");
    let rendered = render_json_full(&metrics);
    let serialized = serde_json::to_value(&metrics).expect("metrics should serialize");
    assert_eq!(rendered, serialized);

    let back: WrappedMetrics =
        serde_json::from_value(rendered).expect("rendered json should deserialize");
    assert_eq!(back, metrics);
}

#[test]
fn full_json_uses_null_for_missing_values() {
    let metrics = metrics_from_fixture("minimal_save.xml");
    let value = render_json_full(&metrics);

    assert_eq!(value["moneyEarned"], Value::Null);
    assert_eq!(value["mostCaughtFish"], Value::Null);
    assert_eq!(value["mostCookedRecipe"], Value::Null);
    assert_eq!(value["friendsTop"], Value::Array(Vec::new()));
    assert_eq!(value["fishTypesCaught"], Value::from(0));
    assert_eq!(value["mostShippedByCategory"]["Animal"], Value::Null);
    assert_eq!(
        value["mostShippedByCategory"]["Forage"]["name"],
        Value::from("Wild Horseradish")
    );
}

#[test]
fn selected_json_uses_canonical_subset_order() {
    let metrics = metrics_from_fixture("full_save.xml");
    let fields = FieldSelection {
        categories: true,
        farmer: true,
        top_grossing: true,
        totals: true,
        ..FieldSelection::default()
    };
    let value = render_json_selected(&metrics, &fields);
    let keys: Vec<&str> = value
        .as_object()
        .expect("json should be an object")
        .keys()
        .map(String::as_str)
        .collect();

    assert_eq!(
        keys,
        vec![
            "farmerName",
            "seedsSown",
            "itemsCookedCount",
            "timesFished",
            "uniqueItemsShipped",
            "uniqueRecipesCooked",
            "fishTypesCaught",
            "topGrossingItem",
            "mostShippedByCategory",
        ]
    );
    assert_eq!(value["topGrossingItem"]["gross"], Value::from(5250));
}

#[test]
fn selection_tracks_any_flag() {
    assert!(!FieldSelection::default().is_any_selected());
    let fields = FieldSelection {
        friends: true,
        ..FieldSelection::default()
    };
    assert!(fields.is_any_selected());
}

#[test]
fn text_sheet_shows_header_cards_and_besties() {
    let metrics = metrics_from_fixture("full_save.xml");
    let text = render_text(&metrics);
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "Ada @ Moonlight");
    assert_eq!(lines[1], "Summer 14, Year 3");
    assert!(text.contains("  Money earned:     123,456g\n"));
    assert!(text.contains("  Most shipped:     Wood x500\n"));
    assert!(text.contains("  Top grossing:     Cauliflower 5,250g\n"));
    assert!(text.contains("  Most cooked:      Fried Egg x6\n"));
    assert!(text.contains("  Most caught fish: Sunfish x11\n"));
    assert!(text.contains("  Top monster:      Green Slime x45\n"));
    assert!(text.contains("  Crop:     Parsnip x120\n"));
    assert!(text.contains("  Animal:   —\n"));
    assert!(text.contains("  Sebastian     14.0 hearts\n"));
    assert!(!text.contains("Shane"));
}

#[test]
fn text_sheet_marks_missing_values() {
    let metrics = metrics_from_fixture("minimal_save.xml");
    let text = render_text(&metrics);

    assert!(text.contains("  Money earned:     —\n"));
    assert!(text.contains("  Most caught fish: —\n"));
    assert!(text.contains("  Fish types:       0\n"));
    assert!(text.ends_with("Besties\n  No friendships found.\n"));
}
