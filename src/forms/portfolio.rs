use actix_multipart::form::MultipartForm;
use actix_multipart::form::tempfile::TempFile;
use actix_multipart::form::text::Text;
use serde::Deserialize;

use crate::domain::portfolio_item::ItemDraft;
use crate::domain::types::ItemType;

#[derive(MultipartForm)]
/// Multipart payload posted by the portfolio create/edit form: the text
/// fields plus up to three pending image selections.
pub struct SavePortfolioForm {
    /// Present (and non-empty) when editing an existing item.
    pub idx: Option<Text<String>>,
    pub title: Text<String>,
    pub brand: Text<String>,
    pub date: Text<String>,
    #[multipart(rename = "type")]
    pub item_type: Text<String>,
    pub subject: Option<Text<String>>,
    #[multipart(limit = "10MB")]
    pub thumbnail: Option<TempFile>,
    #[multipart(limit = "10MB")]
    pub detail_image_1: Option<TempFile>,
    #[multipart(limit = "10MB")]
    pub detail_image_2: Option<TempFile>,
}

impl SavePortfolioForm {
    /// The idx of the item being edited, or `None` for the create path.
    /// Browsers submit the hidden field as an empty string on create.
    pub fn editing_idx(&self) -> Option<&str> {
        self.idx
            .as_ref()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
    }

    /// Builds the in-memory draft from the posted text fields. An
    /// unparseable type selection is carried as `None` so validation can
    /// report it as a missing required field.
    pub fn to_draft(&self) -> ItemDraft {
        ItemDraft {
            idx: self.editing_idx().map(str::to_string),
            title: self.title.trim().to_string(),
            brand: self.brand.trim().to_string(),
            date: self.date.trim().to_string(),
            item_type: self.item_type.parse::<ItemType>().ok(),
            subject: self
                .subject
                .as_ref()
                .map(|s| s.trim())
                .unwrap_or_default()
                .to_string(),
            thumbnail: None,
            detail_image_1: None,
            detail_image_2: None,
        }
    }
}

#[derive(Debug, Deserialize)]
/// Ordered idx sequence read off the list after a drop. Parsed with
/// `serde_html_form` because the `idx` field repeats once per row.
pub struct ReorderForm {
    #[serde(default)]
    pub idx: Vec<String>,
}
