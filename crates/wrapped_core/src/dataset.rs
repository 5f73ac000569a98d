//! Builders that turn raw game data dumps into an [`ItemCatalog`].
//!
//! Two producer dialects are understood:
//! - the structured `Data/Objects` export, one object per item with
//!   `SpriteIndex`, `DisplayName`/`Name`, `Category` and `Price`;
//! - the legacy unpacked `objectInformation` table, where each item is a
//!   slash-delimited string `Name/Price/Edibility/Type Category/...`.
//!
//! The dialect is detected once per input; the result is always the same
//! canonical catalog.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value as JsonValue;

use crate::core_api::{
    CoreError, CoreErrorCode, ItemCatalog, ItemInfo, json_to_price, parse_item_id,
};

const LEGACY_TABLE_KEY: &str = "objectInformation";

static LEGACY_TYPE_RULES: LazyLock<[(Regex, &'static str); 5]> = LazyLock::new(|| {
    [
        (case_insensitive("Fish"), "Fish"),
        (case_insensitive("Cooking"), "Cooking"),
        (case_insensitive("Seeds"), "Seeds"),
        (case_insensitive("Minerals"), "Minerals"),
        (case_insensitive("Arch"), "Artifact"),
    ]
});
static LEGACY_BASIC_TYPE: LazyLock<Regex> = LazyLock::new(|| case_insensitive("Basic"));
static ARTISAN_NAME: LazyLock<Regex> = LazyLock::new(|| {
    case_insensitive("Honey|Wine|Juice|Mayonnaise|Cheese|Oil|Tea|Coffee|Pickles|Jelly|Syrup")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetDialect {
    Objects,
    LegacyObjectInformation,
}

impl DatasetDialect {
    pub fn detect(raw: &JsonValue) -> Self {
        if raw.get(LEGACY_TABLE_KEY).is_some_and(|table| !table.is_null()) {
            Self::LegacyObjectInformation
        } else {
            Self::Objects
        }
    }
}

pub fn build_catalog(raw: &JsonValue) -> Result<ItemCatalog, CoreError> {
    match DatasetDialect::detect(raw) {
        DatasetDialect::LegacyObjectInformation => {
            from_legacy_object_information(&raw[LEGACY_TABLE_KEY])
        }
        DatasetDialect::Objects => from_objects(raw),
    }
}

pub fn build_catalog_from_str(text: &str) -> Result<ItemCatalog, CoreError> {
    let raw: JsonValue = serde_json::from_str(text).map_err(|e| {
        CoreError::new(
            CoreErrorCode::InvalidDataset,
            format!("game data is not valid JSON: {e}"),
        )
    })?;
    build_catalog(&raw)
}

pub fn from_objects(raw: &JsonValue) -> Result<ItemCatalog, CoreError> {
    let entries = expect_object(raw, "Objects data")?;

    let mut catalog = ItemCatalog::new();
    for (key, value) in entries {
        let JsonValue::Object(fields) = value else {
            continue;
        };
        let Some(id) = fields.get("SpriteIndex").and_then(json_to_id) else {
            log::debug!("skipping object {key:?}: no usable SpriteIndex");
            continue;
        };
        let name = ["DisplayName", "Name"]
            .iter()
            .filter_map(|field| fields.get(*field).and_then(JsonValue::as_str))
            .find(|name| !name.is_empty())
            .unwrap_or(key.as_str())
            .to_string();
        let category = fields.get("Category").and_then(category_name);
        let base_price = fields.get("Price").and_then(json_to_price).unwrap_or(0);

        catalog.insert(
            id,
            ItemInfo {
                name,
                category,
                base_price: Some(base_price),
            },
        );
    }
    Ok(catalog)
}

pub fn from_legacy_object_information(raw: &JsonValue) -> Result<ItemCatalog, CoreError> {
    let entries = expect_object(raw, "objectInformation")?;

    let mut catalog = ItemCatalog::new();
    for (key, value) in entries {
        let Some(line) = value.as_str() else {
            continue;
        };
        let Some(id) = parse_item_id(key) else {
            continue;
        };
        let parts: Vec<&str> = line.split('/').collect();
        let name = match parts.first() {
            Some(name) if !name.is_empty() => (*name).to_string(),
            _ => format!("Unknown (#{id})"),
        };
        let base_price = parts
            .get(1)
            .and_then(|price| price.trim().parse::<i64>().ok())
            .unwrap_or(0);
        let type_field = parts.get(3).copied().unwrap_or("");

        catalog.insert(
            id,
            ItemInfo {
                category: legacy_category(type_field, &name).map(ToOwned::to_owned),
                name,
                base_price: Some(base_price),
            },
        );
    }
    Ok(catalog)
}

/// Category for a legacy `Type Category` field such as `Fish -4` or `Basic -26`.
/// Basic items only count as artisan goods when the name says so.
pub fn legacy_category(type_field: &str, name: &str) -> Option<&'static str> {
    if let Some((_, category)) = LEGACY_TYPE_RULES
        .iter()
        .find(|(pattern, _)| pattern.is_match(type_field))
    {
        return Some(*category);
    }
    if LEGACY_BASIC_TYPE.is_match(type_field) && ARTISAN_NAME.is_match(name) {
        return Some("Artisan");
    }
    None
}

/// Names for the game's numeric object category codes.
pub fn category_from_code(code: i64) -> Option<&'static str> {
    match code {
        -75 | -80 => Some("Crop"),
        -79 => Some("Fruit"),
        -4 => Some("Fish"),
        -81 => Some("Forage"),
        -26 | -27 => Some("Artisan"),
        -5 | -6 | -18 => Some("Animal"),
        -7 => Some("Cooking"),
        -74 => Some("Seeds"),
        -2 | -12 => Some("Minerals"),
        _ => None,
    }
}

fn category_name(value: &JsonValue) -> Option<String> {
    match value {
        JsonValue::String(name) if !name.is_empty() => Some(name.clone()),
        JsonValue::Number(code) => code
            .as_i64()
            .and_then(category_from_code)
            .map(ToOwned::to_owned),
        _ => None,
    }
}

fn json_to_id(value: &JsonValue) -> Option<i32> {
    match value {
        JsonValue::Number(n) => n.as_i64().and_then(|id| i32::try_from(id).ok()),
        JsonValue::String(s) => parse_item_id(s),
        _ => None,
    }
}

fn expect_object<'a>(
    raw: &'a JsonValue,
    what: &str,
) -> Result<&'a serde_json::Map<String, JsonValue>, CoreError> {
    raw.as_object().ok_or_else(|| {
        CoreError::new(
            CoreErrorCode::InvalidDataset,
            format!("{what} must be a JSON object"),
        )
    })
}

fn case_insensitive(pattern: &str) -> Regex {
    Regex::new(&format!("(?i){pattern}")).expect("invalid regex")
}
