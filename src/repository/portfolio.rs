use chrono::Utc;
use diesel::prelude::*;

use crate::db::DbPool;
use crate::domain::portfolio_item::{NewPortfolioItem, PortfolioItem, UpdatePortfolioItem};
use crate::models::portfolio_item::{
    NewPortfolioItem as DbNewPortfolioItem, PortfolioItem as DbPortfolioItem,
    UpdatePortfolioItem as DbUpdatePortfolioItem, into_domain_items,
};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{PortfolioReader, PortfolioWriter};

/// Diesel implementation of the portfolio repository traits.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl PortfolioReader for DieselRepository {
    fn list_items(&self) -> RepositoryResult<Vec<PortfolioItem>> {
        use crate::schema::portfolio_items;

        let mut conn = self.pool.get()?;
        let rows = portfolio_items::table
            .order(portfolio_items::order.asc())
            .load::<DbPortfolioItem>(&mut conn)?;

        into_domain_items(rows)
    }

    fn get_item(&self, idx: &str) -> RepositoryResult<Option<PortfolioItem>> {
        use crate::schema::portfolio_items;

        let mut conn = self.pool.get()?;
        let row = portfolio_items::table
            .filter(portfolio_items::idx.eq(idx))
            .first::<DbPortfolioItem>(&mut conn)
            .optional()?;

        row.map(TryInto::try_into).transpose()
    }
}

impl PortfolioWriter for DieselRepository {
    fn create_item(&self, new_item: &NewPortfolioItem) -> RepositoryResult<PortfolioItem> {
        use crate::schema::portfolio_items;

        let mut conn = self.pool.get()?;
        let now = Utc::now().naive_utc();

        let created = conn.transaction::<DbPortfolioItem, RepositoryError, _>(|conn| {
            let max_order: Option<i32> = portfolio_items::table
                .select(diesel::dsl::max(portfolio_items::order))
                .get_result(conn)?;

            let insertable = DbNewPortfolioItem {
                idx: &new_item.idx,
                title: &new_item.title,
                brand: &new_item.brand,
                date: &new_item.date,
                item_type: new_item.item_type.as_str(),
                subject: new_item.subject.as_deref(),
                thumbnail: new_item.thumbnail.as_deref(),
                detail_image_1: new_item.detail_image_1.as_deref(),
                detail_image_2: new_item.detail_image_2.as_deref(),
                order: max_order.map_or(0, |m| m + 1),
                created_at: now,
                updated_at: now,
            };

            let row = diesel::insert_into(portfolio_items::table)
                .values(&insertable)
                .get_result::<DbPortfolioItem>(conn)?;

            Ok(row)
        })?;

        created.try_into()
    }

    fn update_item(
        &self,
        idx: &str,
        updates: &UpdatePortfolioItem,
    ) -> RepositoryResult<PortfolioItem> {
        use crate::schema::portfolio_items;

        let mut conn = self.pool.get()?;

        let changes = DbUpdatePortfolioItem {
            title: &updates.title,
            brand: &updates.brand,
            date: &updates.date,
            item_type: updates.item_type.as_str(),
            subject: Some(updates.subject.as_deref()),
            thumbnail: updates.thumbnail.as_deref(),
            detail_image_1: updates.detail_image_1.as_deref(),
            detail_image_2: updates.detail_image_2.as_deref(),
            updated_at: Utc::now().naive_utc(),
        };

        let row = diesel::update(portfolio_items::table.filter(portfolio_items::idx.eq(idx)))
            .set(&changes)
            .get_result::<DbPortfolioItem>(&mut conn)?;

        row.try_into()
    }

    fn delete_item(&self, idx: &str) -> RepositoryResult<()> {
        use crate::schema::portfolio_items;

        let mut conn = self.pool.get()?;
        let affected =
            diesel::delete(portfolio_items::table.filter(portfolio_items::idx.eq(idx)))
                .execute(&mut conn)?;

        if affected == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    fn reorder_items(&self, ordered_idx: &[String]) -> RepositoryResult<usize> {
        use crate::schema::portfolio_items;

        let mut conn = self.pool.get()?;
        let now = Utc::now().naive_utc();

        // One all-or-nothing batch: a single unknown idx rolls back every
        // positional update issued before it.
        conn.transaction::<usize, RepositoryError, _>(|conn| {
            for (position, idx) in ordered_idx.iter().enumerate() {
                let affected =
                    diesel::update(portfolio_items::table.filter(portfolio_items::idx.eq(idx)))
                        .set((
                            portfolio_items::order.eq(position as i32),
                            portfolio_items::updated_at.eq(now),
                        ))
                        .execute(conn)?;

                if affected == 0 {
                    return Err(RepositoryError::NotFound);
                }
            }

            Ok(ordered_idx.len())
        })
    }
}
