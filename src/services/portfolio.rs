//! Portfolio CRUD workflow, list derivation and reorder commit.

use actix_multipart::form::tempfile::TempFile;
use futures_util::try_join;

use crate::domain::portfolio_item::{
    ItemDraft, NewPortfolioItem, PortfolioItem, UpdatePortfolioItem,
};
use crate::domain::types::{ItemIdx, ItemType};
use crate::dto::portfolio::{ItemRow, ListPageData};
use crate::forms::portfolio::SavePortfolioForm;
use crate::repository::errors::RepositoryError;
use crate::repository::{PortfolioReader, PortfolioWriter};
use crate::services::{ServiceError, ServiceResult, images};

/// Active type filter tab. Parsing is forgiving: anything that is not a
/// known type value falls back to "all".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypeFilter {
    All,
    Only(ItemType),
}

impl TypeFilter {
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some(v) => v
                .parse::<ItemType>()
                .map_or(TypeFilter::All, TypeFilter::Only),
            None => TypeFilter::All,
        }
    }

    /// Query-parameter form echoed back into the filter tabs.
    pub fn as_param(&self) -> &'static str {
        match self {
            TypeFilter::All => "all",
            TypeFilter::Only(t) => t.as_str(),
        }
    }
}

/// List filtering predicate: a row passes when the type filter matches and
/// the search term (if any) is a case-insensitive substring of its title or
/// brand.
pub fn matches(item: &PortfolioItem, filter: TypeFilter, search: &str) -> bool {
    let type_ok = match filter {
        TypeFilter::All => true,
        TypeFilter::Only(t) => item.item_type == t,
    };
    if !type_ok {
        return false;
    }
    if search.is_empty() {
        return true;
    }

    let needle = search.to_lowercase();
    item.title.to_lowercase().contains(&needle) || item.brand.to_lowercase().contains(&needle)
}

/// Derives the filtered view of the cached list. Never mutates the input and
/// never touches the remote store.
pub fn filter_items<'a>(
    items: &'a [PortfolioItem],
    filter: TypeFilter,
    search: &str,
) -> Vec<&'a PortfolioItem> {
    items
        .iter()
        .filter(|item| matches(item, filter, search))
        .collect()
}

/// Query parameters accepted by the list view.
#[derive(Debug, Default)]
pub struct ListQuery {
    /// "all" or a type value.
    pub filter: Option<String>,
    /// Free-text search over title and brand.
    pub q: Option<String>,
}

/// Loads the whole collection (sorted by `order`) and derives the filtered
/// rows for the list view.
pub fn load_list_page<R>(repo: &R, query: ListQuery) -> ServiceResult<ListPageData>
where
    R: PortfolioReader + ?Sized,
{
    let items = repo.list_items()?;

    let filter = TypeFilter::parse(query.filter.as_deref());
    let search = query
        .q
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    let rows = filter_items(&items, filter, search.as_deref().unwrap_or(""))
        .into_iter()
        .map(ItemRow::from)
        .collect();

    Ok(ListPageData {
        items: rows,
        filter: filter.as_param().to_string(),
        search_query: search,
    })
}

/// Loads the item being edited and seeds the form draft from it. A blank
/// idx cannot name an item, so it is reported as not found without a read.
pub fn load_edit_form<R>(repo: &R, idx: &str) -> ServiceResult<ItemDraft>
where
    R: PortfolioReader + ?Sized,
{
    let idx = ItemIdx::new(idx).map_err(|_| ServiceError::NotFound)?;
    match repo.get_item(idx.as_str())? {
        Some(item) => Ok(ItemDraft::from(&item)),
        None => Err(ServiceError::NotFound),
    }
}

/// The pending local image selections of one save, borrowed from the posted
/// multipart form. Empty slots are untouched file inputs.
#[derive(Default)]
pub struct PendingImages<'a> {
    pub thumbnail: Option<&'a TempFile>,
    pub detail_image_1: Option<&'a TempFile>,
    pub detail_image_2: Option<&'a TempFile>,
}

impl<'a> From<&'a SavePortfolioForm> for PendingImages<'a> {
    fn from(form: &'a SavePortfolioForm) -> Self {
        let slot = |file: Option<&'a TempFile>| file.filter(|f| images::has_upload(f));
        Self {
            thumbnail: slot(form.thumbnail.as_ref()),
            detail_image_1: slot(form.detail_image_1.as_ref()),
            detail_image_2: slot(form.detail_image_2.as_ref()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SaveOutcome {
    Created(String),
    Updated(String),
}

impl SaveOutcome {
    pub fn idx(&self) -> &str {
        match self {
            SaveOutcome::Created(idx) | SaveOutcome::Updated(idx) => idx,
        }
    }
}

/// Create/edit workflow: validates the draft before any remote call, ingests
/// the pending images all-or-nothing, then writes once. On failure the
/// caller keeps the draft so the user's input survives.
pub async fn save_item<R>(
    repo: &R,
    draft: ItemDraft,
    images: PendingImages<'_>,
) -> ServiceResult<SaveOutcome>
where
    R: PortfolioWriter + ?Sized,
{
    let item_type = validate_draft(&draft)?;

    // All three reads are joined; a single failure aborts the save before
    // any write so a partial image set is never stored.
    let (thumbnail, detail_image_1, detail_image_2) = try_join!(
        images::ingest_slot(images.thumbnail),
        images::ingest_slot(images.detail_image_1),
        images::ingest_slot(images.detail_image_2),
    )?;

    match draft.idx {
        Some(idx) => {
            let idx = ItemIdx::new(idx).map_err(|_| ServiceError::NotFound)?;
            let mut updates = UpdatePortfolioItem::new(
                draft.title,
                draft.brand,
                draft.date,
                item_type,
                Some(draft.subject),
            );
            updates.thumbnail = thumbnail;
            updates.detail_image_1 = detail_image_1;
            updates.detail_image_2 = detail_image_2;

            let updated = repo.update_item(idx.as_str(), &updates)?;
            Ok(SaveOutcome::Updated(updated.idx))
        }
        None => {
            let idx = ItemIdx::generate();
            let mut new_item = NewPortfolioItem::new(
                idx.into_inner(),
                draft.title,
                draft.brand,
                draft.date,
                item_type,
                Some(draft.subject),
            );
            new_item.thumbnail = thumbnail;
            new_item.detail_image_1 = detail_image_1;
            new_item.detail_image_2 = detail_image_2;

            let created = repo.create_item(&new_item)?;
            Ok(SaveOutcome::Created(created.idx))
        }
    }
}

fn validate_draft(draft: &ItemDraft) -> ServiceResult<ItemType> {
    if draft.title.trim().is_empty()
        || draft.brand.trim().is_empty()
        || draft.date.trim().is_empty()
    {
        return Err(ServiceError::Validation(
            "Please fill in all required fields.".to_string(),
        ));
    }
    draft.item_type.ok_or_else(|| {
        ServiceError::Validation("Please fill in all required fields.".to_string())
    })
}

/// Deletes one item. Remaining `order` values keep their gaps until the next
/// explicit reorder; a repeated delete surfaces as [`ServiceError::NotFound`].
pub fn delete_item<R>(repo: &R, idx: &str) -> ServiceResult<()>
where
    R: PortfolioWriter + ?Sized,
{
    let idx = ItemIdx::new(idx).map_err(|_| ServiceError::NotFound)?;
    match repo.delete_item(idx.as_str()) {
        Err(RepositoryError::NotFound) => Err(ServiceError::NotFound),
        other => other.map_err(Into::into),
    }
}

/// Commits the dropped order: positional `order` rewrite for the whole
/// sequence in one atomic batch.
pub fn reorder<R>(repo: &R, ordered_idx: &[String]) -> ServiceResult<usize>
where
    R: PortfolioWriter + ?Sized,
{
    if ordered_idx.is_empty() {
        return Err(ServiceError::Validation("Nothing to reorder.".to_string()));
    }
    for idx in ordered_idx {
        ItemIdx::new(idx.as_str())
            .map_err(|_| ServiceError::Validation("Invalid item in order.".to_string()))?;
    }

    repo.reorder_items(ordered_idx).map_err(Into::into)
}
