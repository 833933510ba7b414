pub mod auth;
pub mod config;
pub mod portfolio_item;
