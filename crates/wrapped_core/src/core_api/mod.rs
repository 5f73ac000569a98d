mod engine;
mod error;
mod item_catalog;
mod types;
pub mod well_known_items;

pub use engine::{Engine, summarize_save};
pub use error::{CoreError, CoreErrorCode};
pub use item_catalog::{ItemCatalog, ItemInfo};
pub(crate) use item_catalog::{json_to_price, parse_item_id};
pub use types::{
    CATEGORY_NAMES, CategoryTops, CookedEntry, FriendEntry, GrossEntry, MonsterEntry, TopEntry,
    WrappedMetrics,
};
