//! Live preview projections of the form draft.
//!
//! Pure functions of [`ItemDraft`]: no network or storage access, and every
//! rendering pass reflects the current field values, type selection and any
//! ingested images, falling back to placeholders where nothing is set. The
//! browser shim mirrors the same fallbacks between submits.

use serde::Serialize;

use crate::domain::portfolio_item::ItemDraft;

/// Asset shown wherever no thumbnail has been uploaded yet.
pub const PLACEHOLDER_THUMB: &str = "/assets/img/placeholder.svg";

/// Longest subject excerpt shown on the compact card.
const CARD_EXCERPT_CHARS: usize = 60;

#[derive(Clone, Debug, PartialEq, Serialize)]
/// Compact card rendering of the draft, as it would appear in the public
/// portfolio grid.
pub struct CardPreview {
    pub title: String,
    pub date: String,
    pub excerpt: String,
    pub thumbnail: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
/// Expanded modal rendering of the draft.
pub struct ModalPreview {
    pub brand: String,
    pub date: String,
    pub title: String,
    pub subject: Option<String>,
    /// Only the detail images that are actually set.
    pub detail_images: Vec<String>,
}

fn fallback(value: &str, placeholder: &str) -> String {
    if value.is_empty() {
        placeholder.to_string()
    } else {
        value.to_string()
    }
}

impl From<&ItemDraft> for CardPreview {
    fn from(draft: &ItemDraft) -> Self {
        Self {
            title: fallback(&draft.title, "Project Title"),
            date: fallback(&draft.date, "Date"),
            excerpt: draft.subject.chars().take(CARD_EXCERPT_CHARS).collect(),
            thumbnail: draft
                .thumbnail
                .clone()
                .unwrap_or_else(|| PLACEHOLDER_THUMB.to_string()),
        }
    }
}

impl From<&ItemDraft> for ModalPreview {
    fn from(draft: &ItemDraft) -> Self {
        Self {
            brand: fallback(&draft.brand, "Brand"),
            date: fallback(&draft.date, "Date"),
            title: fallback(&draft.title, "Project Title"),
            subject: Some(draft.subject.clone()).filter(|s| !s.is_empty()),
            detail_images: [&draft.detail_image_1, &draft.detail_image_2]
                .into_iter()
                .flatten()
                .cloned()
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_draft_renders_placeholders() {
        let draft = ItemDraft::default();
        let card = CardPreview::from(&draft);

        assert_eq!(card.title, "Project Title");
        assert_eq!(card.date, "Date");
        assert_eq!(card.excerpt, "");
        assert_eq!(card.thumbnail, PLACEHOLDER_THUMB);

        let modal = ModalPreview::from(&draft);
        assert_eq!(modal.brand, "Brand");
        assert_eq!(modal.subject, None);
        assert!(modal.detail_images.is_empty());
    }

    #[test]
    fn card_excerpt_is_capped_at_sixty_chars() {
        let draft = ItemDraft {
            subject: "x".repeat(80),
            ..Default::default()
        };
        assert_eq!(CardPreview::from(&draft).excerpt.chars().count(), 60);
    }

    #[test]
    fn preview_is_a_pure_projection() {
        let draft = ItemDraft {
            title: "Spring Promo".into(),
            brand: "Acme".into(),
            date: "2024".into(),
            subject: "Campaign".into(),
            thumbnail: Some("data:image/png;base64,AAA".into()),
            detail_image_1: Some("data:image/png;base64,BBB".into()),
            ..Default::default()
        };

        let first = (CardPreview::from(&draft), ModalPreview::from(&draft));
        let second = (CardPreview::from(&draft), ModalPreview::from(&draft));
        assert_eq!(first, second);

        assert_eq!(first.0.thumbnail, "data:image/png;base64,AAA");
        assert_eq!(first.1.detail_images, vec!["data:image/png;base64,BBB"]);
        assert_eq!(first.1.subject.as_deref(), Some("Campaign"));
    }
}
