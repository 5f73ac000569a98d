use std::path::PathBuf;
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

use serde_json::Value;

fn workspace_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../..")
}

fn fixture(name: &str) -> String {
    workspace_root()
        .join("tests/fixtures")
        .join(name)
        .to_string_lossy()
        .to_string()
}

fn cli() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_stardew-wrapped"));
    command.env_remove("STARDEW_WRAPPED_DATASET");
    command
}

fn run_cli(args: &[&str]) -> std::process::Output {
    cli()
        .args(args)
        .output()
        .expect("failed to run stardew-wrapped CLI")
}

fn temp_output_path(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time before unix epoch")
        .as_nanos();
    std::env::temp_dir().join(format!("{prefix}_{}_{}.json", std::process::id(), nanos))
}

#[test]
fn cli_prints_requested_fields_in_fixed_order() {
    let save = fixture("full_save.xml");
    let dataset = fixture("object_map.json");
    let output = run_cli(&[
        "summary", "--money", "--date", "--farmer", "--dataset", &dataset, &save,
    ]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            "farmer=Ada",
            "date=Summer 14, Year 3",
            "money_earned=123456",
        ]
    );
}

#[test]
fn cli_prints_totals_and_top_cards() {
    let save = fixture("full_save.xml");
    let dataset = fixture("object_map.json");
    let output = run_cli(&[
        "summary",
        "--dataset",
        &dataset,
        "--totals",
        "--top-monster",
        "--most-cooked",
        "--most-caught-fish",
        "--top-grossing",
        &save,
    ]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            "seeds_sown=310",
            "items_cooked=27",
            "times_fished=88",
            "unique_items_shipped=6",
            "unique_recipes_cooked=3",
            "fish_types_caught=3",
            "top_monster=Green Slime x45",
            "most_cooked=Fried Egg (#194) x6",
            "most_caught_fish=Sunfish (#145) x11",
            "top_grossing=Cauliflower (#190) gross=5250",
        ]
    );
}

#[test]
fn cli_uses_builtin_table_without_dataset() {
    let save = fixture("minimal_save.xml");
    let output = run_cli(&["summary", "--most-shipped", "--top-grossing", &save]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            "most_shipped=Wild Horseradish (#16) x5",
            "top_grossing=Wild Horseradish (#16) gross=250",
        ]
    );
}

#[test]
fn cli_reads_dataset_path_from_environment() {
    let save = fixture("full_save.xml");
    let output = cli()
        .env("STARDEW_WRAPPED_DATASET", fixture("object_map.json"))
        .args(["summary", "--most-shipped", &save])
        .output()
        .expect("failed to run stardew-wrapped CLI");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), "most_shipped=Wood (#388) x500");
}

#[test]
fn cli_prints_category_and_friend_lines() {
    let save = fixture("full_save.xml");
    let dataset = fixture("object_map.json");
    let output = run_cli(&[
        "summary",
        "--categories",
        "--friends",
        "--dataset",
        &dataset,
        &save,
    ]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let friends: Vec<&str> = stdout
        .lines()
        .filter(|line| line.starts_with("friend="))
        .collect();
    assert_eq!(friends.len(), 10);
    assert_eq!(friends[0], "friend=Sebastian=14.0");
    assert_eq!(friends[3], "friend=Lewis=5.2");

    let categories: Vec<&str> = stdout
        .lines()
        .filter(|line| line.starts_with("category="))
        .collect();
    assert_eq!(
        categories,
        vec![
            "category=Crop=Parsnip (#24) x120",
            "category=Artisan=Honey (#340) x15",
            "category=Fish=Pufferfish (#128) x0",
            "category=Forage=Wild Horseradish (#16) x40",
            "category=Animal=unknown",
            "category=Cooking=unknown",
            "category=Fruit=Apple (#613) x8",
        ]
    );
}

#[test]
fn cli_json_subset_only_contains_selected_keys() {
    let save = fixture("full_save.xml");
    let dataset = fixture("object_map.json");
    let output = run_cli(&[
        "summary", "--json", "--friends", "--farm", "--dataset", &dataset, &save,
    ]);
    assert!(output.status.success());

    let value: Value = serde_json::from_slice(&output.stdout).expect("stdout should be json");
    let object = value.as_object().expect("json should be an object");
    let keys: Vec<&str> = object.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["farmName", "friendsTop"]);
    assert_eq!(value["farmName"], Value::from("Moonlight"));
    assert_eq!(
        value["friendsTop"].as_array().map(Vec::len),
        Some(10)
    );
}

#[test]
fn cli_full_json_reports_unknowns_as_null() {
    let save = fixture("minimal_save.xml");
    let output = run_cli(&["summary", "--json", &save]);
    assert!(output.status.success());

    let value: Value = serde_json::from_slice(&output.stdout).expect("stdout should be json");
    assert_eq!(value["farmerName"], Value::from("Ada"));
    assert_eq!(value["moneyEarned"], Value::Null);
    assert_eq!(value["mostCaughtFish"], Value::Null);
    assert_eq!(value["fishTypesCaught"], Value::from(0));
    assert_eq!(value["mostShipped"]["count"], Value::from(5));
}

#[test]
fn cli_default_output_is_text_sheet() {
    let save = fixture("v16_save.xml");
    let output = run_cli(&["summary", &save]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Bo @ Hilltop\nFall 1, Year 1\n"));
    assert!(stdout.contains("  Seeds sown:       12\n"));
    assert!(stdout.contains("  Items cooked:     —\n"));
    assert!(stdout.contains("  Most shipped:     Parsnip x9\n"));
    assert!(stdout.contains("  Most caught fish: Sunfish x2\n"));
}

#[test]
fn cli_fails_without_player_section() {
    let path = temp_output_path("stardew_wrapped_no_player");
    std::fs::write(&path, "<SaveGame><currentSeason>spring</currentSeason></SaveGame>")
        .expect("temp save should be writable");
    let path_arg = path.to_string_lossy().to_string();

    let output = run_cli(&["summary", &path_arg]);
    std::fs::remove_file(&path).ok();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error parsing save file"));
    assert!(stderr.contains("MissingPlayer"));
}

#[test]
fn cli_fails_for_missing_save_file() {
    let output = run_cli(&["summary", "/definitely/not/a/save.xml"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error reading"));
}

#[test]
fn cli_rejects_missing_subcommand() {
    let output = run_cli(&[]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn make_dataset_normalizes_structured_objects() {
    let input = fixture("objects_v16.json");
    let output = run_cli(&["make-dataset", &input]);
    assert!(output.status.success());

    let value: Value = serde_json::from_slice(&output.stdout).expect("stdout should be json");
    assert_eq!(
        value["24"],
        serde_json::json!({ "name": "Parsnip", "category": "Crop", "basePrice": 35 })
    );
    assert_eq!(value["340"]["category"], Value::from("Artisan"));
    assert_eq!(
        value["388"],
        serde_json::json!({ "name": "Wood", "basePrice": 2 })
    );
}

#[test]
fn make_dataset_writes_legacy_table_to_output() {
    let input = fixture("object_information_legacy.json");
    let out_path = temp_output_path("stardew_wrapped_dataset");
    let out_arg = out_path.to_string_lossy().to_string();

    let output = run_cli(&["make-dataset", &input, "--output", &out_arg]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Wrote 4 items to "));

    let written = std::fs::read_to_string(&out_path).expect("dataset should be written");
    std::fs::remove_file(&out_path).ok();
    let value: Value = serde_json::from_str(&written).expect("dataset should be json");

    assert_eq!(value["128"]["category"], Value::from("Fish"));
    assert_eq!(value["194"]["category"], Value::from("Cooking"));
    assert_eq!(value["348"]["category"], Value::from("Artisan"));
    assert_eq!(value["16"].get("category"), None);
    assert_eq!(value["348"]["basePrice"], Value::from(400));
}

#[test]
fn make_dataset_output_is_loadable_by_summary() {
    let out_path = temp_output_path("stardew_wrapped_roundtrip");
    let out_arg = out_path.to_string_lossy().to_string();
    let input = fixture("objects_v16.json");
    let made = run_cli(&["make-dataset", &input, "--output", &out_arg]);
    assert!(made.status.success());

    let save = fixture("minimal_save.xml");
    let output = run_cli(&["summary", "--dataset", &out_arg, "--categories", &save]);
    std::fs::remove_file(&out_path).ok();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("category=Crop=Parsnip (#24) x2\n"));
    assert!(stdout.contains("category=Forage=Wild Horseradish (#16) x5\n"));
}

#[test]
fn make_dataset_rejects_non_object_input() {
    let path = temp_output_path("stardew_wrapped_bad_input");
    std::fs::write(&path, "[1, 2, 3]").expect("temp input should be writable");
    let path_arg = path.to_string_lossy().to_string();

    let output = run_cli(&["make-dataset", &path_arg]);
    std::fs::remove_file(&path).ok();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("InvalidDataset"));
}
