pub mod portfolio_item;
pub mod types;
