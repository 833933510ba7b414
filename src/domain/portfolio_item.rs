use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::ItemType;

/// One portfolio entry as stored in the collection.
///
/// `order` is a dense 0-based rank after any reorder; deleting an item leaves
/// a gap that is only closed by the next explicit reorder.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PortfolioItem {
    pub id: i32,
    /// Application key, equal to the document id for all correctly created
    /// items (historical join key for the public site).
    pub idx: String,
    pub title: String,
    pub brand: String,
    pub date: String,
    pub item_type: ItemType,
    pub subject: Option<String>,
    /// Embedded image data URLs, absent until uploaded.
    pub thumbnail: Option<String>,
    pub detail_image_1: Option<String>,
    pub detail_image_2: Option<String>,
    pub order: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Payload for creating a new item. The repository assigns `order` and both
/// timestamps at insert time.
#[derive(Clone, Debug, Deserialize)]
pub struct NewPortfolioItem {
    pub idx: String,
    pub title: String,
    pub brand: String,
    pub date: String,
    pub item_type: ItemType,
    pub subject: Option<String>,
    pub thumbnail: Option<String>,
    pub detail_image_1: Option<String>,
    pub detail_image_2: Option<String>,
}

impl NewPortfolioItem {
    #[must_use]
    pub fn new(
        idx: String,
        title: String,
        brand: String,
        date: String,
        item_type: ItemType,
        subject: Option<String>,
    ) -> Self {
        Self {
            idx,
            title: title.trim().to_string(),
            brand: brand.trim().to_string(),
            date: date.trim().to_string(),
            item_type,
            subject: subject
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            thumbnail: None,
            detail_image_1: None,
            detail_image_2: None,
        }
    }
}

/// Partial update merged into an existing item. `None` image fields are left
/// untouched; `idx` and `order` are never rewritten by an update.
#[derive(Clone, Debug, Deserialize)]
pub struct UpdatePortfolioItem {
    pub title: String,
    pub brand: String,
    pub date: String,
    pub item_type: ItemType,
    pub subject: Option<String>,
    pub thumbnail: Option<String>,
    pub detail_image_1: Option<String>,
    pub detail_image_2: Option<String>,
}

/// Transient, unsaved form state for create/edit.
///
/// Never persisted as-is: `save` validates it, the pending image uploads are
/// ingested separately, and only then is it turned into a `New*`/`Update*`
/// payload. Discarded without confirmation on cancel or navigation.
#[derive(Clone, Debug, Default)]
pub struct ItemDraft {
    /// Present when editing an existing item.
    pub idx: Option<String>,
    pub title: String,
    pub brand: String,
    pub date: String,
    /// `None` until the user picks a category.
    pub item_type: Option<ItemType>,
    pub subject: String,
    /// Already-ingested image data URLs (existing images in edit mode, or
    /// fresh ingestion results during save).
    pub thumbnail: Option<String>,
    pub detail_image_1: Option<String>,
    pub detail_image_2: Option<String>,
}

impl From<&PortfolioItem> for ItemDraft {
    /// Seeds the form draft from a stored item when entering edit mode.
    fn from(item: &PortfolioItem) -> Self {
        Self {
            idx: Some(item.idx.clone()),
            title: item.title.clone(),
            brand: item.brand.clone(),
            date: item.date.clone(),
            item_type: Some(item.item_type),
            subject: item.subject.clone().unwrap_or_default(),
            thumbnail: item.thumbnail.clone(),
            detail_image_1: item.detail_image_1.clone(),
            detail_image_2: item.detail_image_2.clone(),
        }
    }
}

impl UpdatePortfolioItem {
    #[must_use]
    pub fn new(
        title: String,
        brand: String,
        date: String,
        item_type: ItemType,
        subject: Option<String>,
    ) -> Self {
        Self {
            title: title.trim().to_string(),
            brand: brand.trim().to_string(),
            date: date.trim().to_string(),
            item_type,
            subject: subject
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            thumbnail: None,
            detail_image_1: None,
            detail_image_2: None,
        }
    }
}
