//! Mock repository implementation for isolating services in tests.

use mockall::mock;

use crate::domain::portfolio_item::{NewPortfolioItem, PortfolioItem, UpdatePortfolioItem};
use crate::repository::errors::RepositoryResult;
use crate::repository::{PortfolioReader, PortfolioWriter};

mock! {
    pub Repository {}

    impl PortfolioReader for Repository {
        fn list_items(&self) -> RepositoryResult<Vec<PortfolioItem>>;
        fn get_item(&self, idx: &str) -> RepositoryResult<Option<PortfolioItem>>;
    }

    impl PortfolioWriter for Repository {
        fn create_item(&self, new_item: &NewPortfolioItem) -> RepositoryResult<PortfolioItem>;
        fn update_item(
            &self,
            idx: &str,
            updates: &UpdatePortfolioItem,
        ) -> RepositoryResult<PortfolioItem>;
        fn delete_item(&self, idx: &str) -> RepositoryResult<()>;
        fn reorder_items(&self, ordered_idx: &[String]) -> RepositoryResult<usize>;
    }
}
