use serde::Serialize;

use crate::dto::portfolio::ItemRow;

/// Per-category counts shown on the dashboard.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct DashboardStats {
    pub total: usize,
    pub promotion: usize,
    pub operation: usize,
    pub development: usize,
    pub banner_sns: usize,
}

/// Data required to render the dashboard view.
#[derive(Serialize)]
pub struct DashboardData {
    pub stats: DashboardStats,
    /// The five most recently created items, newest first.
    pub recent: Vec<ItemRow>,
}
