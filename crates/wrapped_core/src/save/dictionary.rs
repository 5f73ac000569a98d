//! Decoders for the save format's serialized dictionaries.
//!
//! Every dictionary is written as a sequence of
//! `<item><key>LEAF</key><value>LEAF</value></item>` pairs. The decoders keep
//! document order so that ties in later top-entry selection resolve to the
//! first pair seen.
//!
//! A pair with a missing leaf (or a leaf that does not hold the expected type)
//! is dropped. A pair without its `key` or `value` wrapper means the document
//! is not a dictionary at all and fails the whole parse.

use indexmap::IndexMap;
use roxmltree::Node;

use super::{find_all, find_first, int_of, parse_number, text_of};
use crate::core_api::{CoreError, CoreErrorCode};

const NUMERIC_LEAF_TAGS: [&str; 3] = ["int", "unsignedInt", "long"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FishRecord {
    pub count: i64,
    /// Largest catch, or -1 when the save does not record one.
    pub max_size: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FriendshipPoints {
    pub npc_name: String,
    pub points: i64,
}

/// Item id → integer, e.g. `basicShipped`.
pub fn decode_int_int(dict: Option<Node<'_, '_>>) -> Result<IndexMap<i32, i64>, CoreError> {
    let mut out = IndexMap::new();
    for (key, value) in pairs(dict)? {
        if let (Some(id), Some(count)) = (item_id_leaf(key), numeric_leaf(value)) {
            out.insert(id, count);
        }
    }
    Ok(out)
}

/// Item id → string label.
pub fn decode_int_string(dict: Option<Node<'_, '_>>) -> Result<IndexMap<i32, String>, CoreError> {
    let mut out = IndexMap::new();
    for (key, value) in pairs(dict)? {
        let label = find_first(value, "string").map(|leaf| text_of(Some(leaf)));
        if let (Some(id), Some(label)) = (item_id_leaf(key), label) {
            out.insert(id, label);
        }
    }
    Ok(out)
}

/// String label → integer, e.g. `recipesCooked` and `specificMonstersKilled`.
pub fn decode_string_int(dict: Option<Node<'_, '_>>) -> Result<IndexMap<String, i64>, CoreError> {
    let mut out = IndexMap::new();
    for (key, value) in pairs(dict)? {
        let label = text_of(find_first(key, "string"));
        if label.is_empty() {
            continue;
        }
        if let Some(count) = numeric_leaf(value) {
            out.insert(label, count);
        }
    }
    Ok(out)
}

/// Fish id → `[count, maxSize, ...]` stored as an `ArrayOfInt`.
pub fn decode_fish_caught(
    dict: Option<Node<'_, '_>>,
) -> Result<IndexMap<i32, FishRecord>, CoreError> {
    let mut out = IndexMap::new();
    for (key, value) in pairs(dict)? {
        let Some(id) = item_id_leaf(key) else {
            continue;
        };
        let values: Vec<Option<i64>> = match find_first(value, "ArrayOfInt") {
            Some(array) => find_all(array, "int").map(|leaf| int_of(Some(leaf))).collect(),
            None => Vec::new(),
        };
        let count = values.first().copied().flatten().unwrap_or(0);
        let max_size = values.get(1).copied().flatten().unwrap_or(-1);
        out.insert(id, FishRecord { count, max_size });
    }
    Ok(out)
}

/// NPC name → `<Friendship><Points>` record. Entries without a name are
/// dropped; a missing points record counts as zero points.
pub fn decode_friendships(
    dict: Option<Node<'_, '_>>,
) -> Result<Vec<FriendshipPoints>, CoreError> {
    let mut out = Vec::new();
    for (key, value) in pairs(dict)? {
        let npc_name = text_of(find_first(key, "string"));
        if npc_name.is_empty() {
            continue;
        }
        let points = find_first(value, "Friendship")
            .and_then(|friendship| int_of(find_first(friendship, "Points")))
            .unwrap_or(0);
        out.push(FriendshipPoints { npc_name, points });
    }
    Ok(out)
}

fn pairs<'a, 'input>(
    dict: Option<Node<'a, 'input>>,
) -> Result<Vec<(Node<'a, 'input>, Node<'a, 'input>)>, CoreError> {
    let Some(dict) = dict else {
        return Ok(Vec::new());
    };
    let section = dict.tag_name().name();

    let mut out = Vec::new();
    for (index, item) in find_all(dict, "item").enumerate() {
        let key = find_first(item, "key");
        let value = find_first(item, "value");
        match (key, value) {
            (Some(key), Some(value)) => out.push((key, value)),
            (None, _) => return Err(malformed(section, index, "key")),
            (_, None) => return Err(malformed(section, index, "value")),
        }
    }
    log::debug!("{section}: {} dictionary pairs", out.len());
    Ok(out)
}

fn malformed(section: &str, index: usize, wrapper: &str) -> CoreError {
    CoreError::new(
        CoreErrorCode::MalformedDictionary,
        format!("malformed <item> #{index} in <{section}>: missing <{wrapper}>"),
    )
}

fn numeric_leaf(node: Node<'_, '_>) -> Option<i64> {
    NUMERIC_LEAF_TAGS
        .iter()
        .find_map(|tag| find_first(node, tag))
        .and_then(|leaf| int_of(Some(leaf)))
}

/// Item ids are `<int>` leaves in older saves and `<string>` leaves holding a
/// plain or qualified id (`(O)128`) in newer ones.
fn item_id_leaf(node: Node<'_, '_>) -> Option<i32> {
    if let Some(leaf) = find_first(node, "int") {
        return int_of(Some(leaf)).and_then(|id| i32::try_from(id).ok());
    }
    let text = text_of(find_first(node, "string"));
    let unqualified = match text.strip_prefix('(') {
        Some(rest) => rest.split_once(')').map(|(_, id)| id).unwrap_or(rest),
        None => text.as_str(),
    };
    parse_number(unqualified.trim()).and_then(|id| i32::try_from(id).ok())
}
