//! Persistence traits for the portfolio collection.
//!
//! The admin panel only ever talks to the store through [`PortfolioReader`]
//! and [`PortfolioWriter`]; the Diesel implementation lives in
//! [`portfolio::DieselRepository`] and tests substitute the mockall mock.

use crate::domain::portfolio_item::{NewPortfolioItem, PortfolioItem, UpdatePortfolioItem};
use crate::repository::errors::RepositoryResult;

pub mod errors;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
pub mod portfolio;

pub use portfolio::DieselRepository;

/// Read access to the portfolio collection.
pub trait PortfolioReader {
    /// Returns every item sorted ascending by `order`.
    fn list_items(&self) -> RepositoryResult<Vec<PortfolioItem>>;

    /// Looks up a single item by its `idx` key.
    fn get_item(&self, idx: &str) -> RepositoryResult<Option<PortfolioItem>>;
}

/// Write access to the portfolio collection.
pub trait PortfolioWriter {
    /// Inserts a new item, assigning `order = max + 1` (0 when the
    /// collection is empty) and fresh timestamps.
    fn create_item(&self, new_item: &NewPortfolioItem) -> RepositoryResult<PortfolioItem>;

    /// Merges the update into the item identified by `idx`, refreshing
    /// `updated_at` and leaving `idx`/`order` untouched.
    fn update_item(&self, idx: &str, updates: &UpdatePortfolioItem)
    -> RepositoryResult<PortfolioItem>;

    /// Removes the item. The remaining items keep their `order` values;
    /// gaps are only closed by the next explicit reorder.
    fn delete_item(&self, idx: &str) -> RepositoryResult<()>;

    /// Atomically sets `order` to the positional index for every idx in
    /// the given sequence. Either all rows are renumbered or none are.
    fn reorder_items(&self, ordered_idx: &[String]) -> RepositoryResult<usize>;
}
