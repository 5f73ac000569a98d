use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map as JsonMap, Value as JsonValue};

use super::error::{CoreError, CoreErrorCode};
use super::well_known_items;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemInfo {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_price: Option<i64>,
}

impl ItemInfo {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: None,
            base_price: None,
        }
    }

    pub fn price_or_zero(&self) -> i64 {
        self.base_price.unwrap_or(0)
    }
}

/// Item metadata keyed by numeric item id.
///
/// Built once from a dataset file (or [`ItemCatalog::builtin`]) and only read
/// while saves are summarized.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemCatalog {
    entries: BTreeMap<i32, ItemInfo>,
}

impl ItemCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The small table of well-known items used when no dataset is supplied.
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        for item in well_known_items::all() {
            catalog.insert(
                item.id,
                ItemInfo {
                    name: item.name.to_string(),
                    category: Some(item.category.to_string()),
                    base_price: Some(item.price),
                },
            );
        }
        catalog
    }

    pub fn load_from_path(path: &Path) -> Result<Self, CoreError> {
        let text = fs::read_to_string(path).map_err(|e| {
            CoreError::new(
                CoreErrorCode::Io,
                format!("failed to read {}: {e}", path.display()),
            )
        })?;
        let catalog = Self::from_json_str(&text)?;
        log::info!(
            "loaded {} dataset entries from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    pub fn from_json_str(text: &str) -> Result<Self, CoreError> {
        let raw: JsonValue = serde_json::from_str(text).map_err(|e| {
            CoreError::new(
                CoreErrorCode::InvalidDataset,
                format!("dataset is not valid JSON: {e}"),
            )
        })?;
        Self::from_json_value(&raw)
    }

    /// Normalizes a dataset object whose values are either a bare display name
    /// or an object with `name`, `category` and `basePrice`.
    pub fn from_json_value(raw: &JsonValue) -> Result<Self, CoreError> {
        let JsonValue::Object(map) = raw else {
            return Err(CoreError::new(
                CoreErrorCode::InvalidDataset,
                "dataset must be a JSON object keyed by item id",
            ));
        };

        let mut catalog = Self::new();
        for (key, value) in map {
            let Some(id) = parse_item_id(key) else {
                log::debug!("skipping dataset key {key:?}: not an item id");
                continue;
            };
            let info = match value {
                JsonValue::String(name) => ItemInfo::named(name.clone()),
                JsonValue::Object(fields) => ItemInfo {
                    name: fields
                        .get("name")
                        .and_then(json_to_name)
                        .unwrap_or_else(|| format!("Unknown (#{id})")),
                    category: fields
                        .get("category")
                        .and_then(JsonValue::as_str)
                        .map(ToOwned::to_owned),
                    base_price: fields.get("basePrice").and_then(json_to_price),
                },
                _ => continue,
            };
            catalog.insert(id, info);
        }
        Ok(catalog)
    }

    pub fn to_json_value(&self) -> JsonValue {
        let mut out = JsonMap::new();
        for (id, info) in &self.entries {
            let value = serde_json::to_value(info).unwrap_or(JsonValue::Null);
            out.insert(id.to_string(), value);
        }
        JsonValue::Object(out)
    }

    pub fn insert(&mut self, id: i32, info: ItemInfo) {
        self.entries.insert(id, info);
    }

    pub fn get(&self, id: i32) -> Option<&ItemInfo> {
        self.entries.get(&id)
    }

    pub fn category(&self, id: i32) -> Option<&str> {
        self.get(id).and_then(|info| info.category.as_deref())
    }

    pub fn base_price(&self, id: i32) -> i64 {
        self.get(id).map(ItemInfo::price_or_zero).unwrap_or(0)
    }

    /// Display name for `id`, or `"{fallback_word} (#{id})"` when unknown.
    pub fn item_name(&self, id: i32, fallback_word: &str) -> String {
        match self.get(id) {
            Some(info) => info.name.clone(),
            None => format!("{fallback_word} (#{id})"),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (i32, &ItemInfo)> {
        self.entries.iter().map(|(id, info)| (*id, info))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub(crate) fn parse_item_id(raw: &str) -> Option<i32> {
    let trimmed = raw.trim();
    if let Ok(id) = trimmed.parse::<i32>() {
        return Some(id);
    }
    let float = trimmed.parse::<f64>().ok()?;
    if float.is_finite() && float.fract() == 0.0 && float.abs() <= f64::from(i32::MAX) {
        Some(float as i32)
    } else {
        None
    }
}

pub(crate) fn json_to_price(value: &JsonValue) -> Option<i64> {
    match value {
        JsonValue::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f as i64)),
        JsonValue::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

fn json_to_name(value: &JsonValue) -> Option<String> {
    match value {
        JsonValue::String(s) => Some(s.clone()),
        JsonValue::Number(n) => Some(n.to_string()),
        JsonValue::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
