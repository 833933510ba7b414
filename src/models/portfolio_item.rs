use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::portfolio_item::PortfolioItem as DomainPortfolioItem;
use crate::domain::types::ItemType;
use crate::repository::errors::{RepositoryError, RepositoryResult};

#[derive(Debug, Clone, Identifiable, Queryable, QueryableByName)]
#[diesel(table_name = crate::schema::portfolio_items)]
/// Diesel model for [`crate::domain::portfolio_item::PortfolioItem`].
pub struct PortfolioItem {
    pub id: i32,
    pub idx: String,
    pub title: String,
    pub brand: String,
    pub date: String,
    pub item_type: String,
    pub subject: Option<String>,
    pub thumbnail: Option<String>,
    pub detail_image_1: Option<String>,
    pub detail_image_2: Option<String>,
    pub order: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::portfolio_items)]
/// Insertable form of [`PortfolioItem`]. `order` and timestamps are filled
/// in by the repository at insert time.
pub struct NewPortfolioItem<'a> {
    pub idx: &'a str,
    pub title: &'a str,
    pub brand: &'a str,
    pub date: &'a str,
    pub item_type: &'a str,
    pub subject: Option<&'a str>,
    pub thumbnail: Option<&'a str>,
    pub detail_image_1: Option<&'a str>,
    pub detail_image_2: Option<&'a str>,
    pub order: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::portfolio_items)]
/// Data used when updating a [`PortfolioItem`] record.
///
/// The text columns are always rewritten; image columns are merged only when
/// a new upload is present (outer `None` skips the column).
pub struct UpdatePortfolioItem<'a> {
    pub title: &'a str,
    pub brand: &'a str,
    pub date: &'a str,
    pub item_type: &'a str,
    pub subject: Option<Option<&'a str>>,
    pub thumbnail: Option<&'a str>,
    pub detail_image_1: Option<&'a str>,
    pub detail_image_2: Option<&'a str>,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<PortfolioItem> for DomainPortfolioItem {
    type Error = RepositoryError;

    fn try_from(item: PortfolioItem) -> Result<Self, Self::Error> {
        let item_type: ItemType = item
            .item_type
            .parse()
            .map_err(|e| RepositoryError::Unexpected(format!("corrupt type column: {e}")))?;

        Ok(Self {
            id: item.id,
            idx: item.idx,
            title: item.title,
            brand: item.brand,
            date: item.date,
            item_type,
            subject: item.subject,
            thumbnail: item.thumbnail,
            detail_image_1: item.detail_image_1,
            detail_image_2: item.detail_image_2,
            order: item.order,
            created_at: item.created_at,
            updated_at: item.updated_at,
        })
    }
}

/// Converts a loaded row set into domain items, failing on the first corrupt
/// row instead of silently dropping it.
pub fn into_domain_items(rows: Vec<PortfolioItem>) -> RepositoryResult<Vec<DomainPortfolioItem>> {
    rows.into_iter().map(TryInto::try_into).collect()
}
