//! Read access to the save XML tree.
//!
//! Save files drift in tag casing between game versions, so every lookup by
//! tag name goes through [`find_first`], which tries the exact name, the
//! all-lowercase name and the first-letter-capitalized name in that order.

pub mod dictionary;

use roxmltree::{Document, Node};

use crate::core_api::{CoreError, CoreErrorCode};

const BYTE_ORDER_MARK: char = '\u{feff}';

#[derive(Debug)]
pub struct SaveDocument<'input> {
    doc: Document<'input>,
}

impl<'input> SaveDocument<'input> {
    pub fn parse(text: &'input str) -> Result<Self, CoreError> {
        let text = text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(text);
        let doc = Document::parse(text).map_err(|e| {
            CoreError::new(
                CoreErrorCode::Parse,
                format!("save is not well-formed XML: {e}"),
            )
        })?;
        Ok(Self { doc })
    }

    pub fn root(&self) -> Node<'_, 'input> {
        self.doc.root_element()
    }
}

/// Candidate spellings for `tag`: exact, lowercase, first letter capitalized.
pub fn tag_variants(tag: &str) -> [String; 3] {
    let mut chars = tag.chars();
    let capitalized = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    };
    [tag.to_string(), tag.to_lowercase(), capitalized]
}

/// First descendant element of `node` (not `node` itself) named `tag`,
/// tolerating the known casing variants.
pub fn find_first<'a, 'input>(node: Node<'a, 'input>, tag: &str) -> Option<Node<'a, 'input>> {
    tag_variants(tag)
        .iter()
        .find_map(|candidate| find_all(node, candidate).next())
}

/// All descendant elements of `node` named exactly `tag`, in document order.
pub fn find_all<'a, 'input>(
    node: Node<'a, 'input>,
    tag: &str,
) -> impl Iterator<Item = Node<'a, 'input>> + use<'a, 'input> {
    let tag = tag.to_string();
    node.descendants()
        .skip(1)
        .filter(move |n| n.is_element() && n.tag_name().name() == tag)
}

/// Concatenated text of `node` and its descendants, trimmed. Absent nodes
/// yield an empty string.
pub fn text_of(node: Option<Node<'_, '_>>) -> String {
    let Some(node) = node else {
        return String::new();
    };
    let text: String = node
        .descendants()
        .filter(Node::is_text)
        .filter_map(|n| n.text())
        .collect();
    text.trim().to_string()
}

/// Text content coerced to an integer. Empty or non-numeric text is unknown.
pub fn int_of(node: Option<Node<'_, '_>>) -> Option<i64> {
    parse_number(&text_of(node))
}

pub(crate) fn parse_number(text: &str) -> Option<i64> {
    if text.is_empty() {
        return None;
    }
    if let Ok(value) = text.parse::<i64>() {
        return Some(value);
    }
    let float = text.parse::<f64>().ok()?;
    if float.is_finite() && float.fract() == 0.0 {
        Some(float as i64)
    } else {
        None
    }
}
