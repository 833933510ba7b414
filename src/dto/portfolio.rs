use serde::Serialize;

use crate::domain::portfolio_item::{ItemDraft, PortfolioItem};
use crate::dto::preview::{CardPreview, ModalPreview, PLACEHOLDER_THUMB};

/// One row of the admin list, ready for the template.
#[derive(Clone, Debug, Serialize)]
pub struct ItemRow {
    pub idx: String,
    pub title: String,
    pub brand: String,
    pub date: String,
    /// Legacy "1".."4" value, used for badge classes.
    pub type_value: String,
    pub type_label: String,
    pub thumbnail: String,
}

impl From<&PortfolioItem> for ItemRow {
    fn from(item: &PortfolioItem) -> Self {
        Self {
            idx: item.idx.clone(),
            title: item.title.clone(),
            brand: item.brand.clone(),
            date: item.date.clone(),
            type_value: item.item_type.as_str().to_string(),
            type_label: item.item_type.label().to_string(),
            thumbnail: item
                .thumbnail
                .clone()
                .unwrap_or_else(|| PLACEHOLDER_THUMB.to_string()),
        }
    }
}

/// Data required to render the list view.
#[derive(Serialize)]
pub struct ListPageData {
    pub items: Vec<ItemRow>,
    /// Active filter tab: "all" or a type value.
    pub filter: String,
    /// Search term echoed back to the input when present.
    pub search_query: Option<String>,
}

/// Data required to render the create/edit form view, including the
/// server-side pass of both live previews.
#[derive(Serialize)]
pub struct FormPageData {
    pub editing: bool,
    pub idx: Option<String>,
    pub title: String,
    pub brand: String,
    pub date: String,
    pub type_value: Option<String>,
    pub subject: String,
    pub thumbnail: Option<String>,
    pub detail_image_1: Option<String>,
    pub detail_image_2: Option<String>,
    pub card_preview: CardPreview,
    pub modal_preview: ModalPreview,
}

impl From<&ItemDraft> for FormPageData {
    fn from(draft: &ItemDraft) -> Self {
        Self {
            editing: draft.idx.is_some(),
            idx: draft.idx.clone(),
            title: draft.title.clone(),
            brand: draft.brand.clone(),
            date: draft.date.clone(),
            type_value: draft.item_type.map(|t| t.as_str().to_string()),
            subject: draft.subject.clone(),
            thumbnail: draft.thumbnail.clone(),
            detail_image_1: draft.detail_image_1.clone(),
            detail_image_2: draft.detail_image_2.clone(),
            card_preview: CardPreview::from(draft),
            modal_preview: ModalPreview::from(draft),
        }
    }
}
