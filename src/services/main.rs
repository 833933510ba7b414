//! Dashboard view data.

use crate::domain::types::ItemType;
use crate::dto::main::{DashboardData, DashboardStats};
use crate::dto::portfolio::ItemRow;
use crate::repository::PortfolioReader;
use crate::services::ServiceResult;

/// How many recently created items the dashboard shows.
const RECENT_ITEMS: usize = 5;

/// Loads the per-type counts and the most recently created items.
pub fn load_dashboard<R>(repo: &R) -> ServiceResult<DashboardData>
where
    R: PortfolioReader + ?Sized,
{
    let mut items = repo.list_items()?;

    let mut stats = DashboardStats {
        total: items.len(),
        ..Default::default()
    };
    for item in &items {
        match item.item_type {
            ItemType::Promotion => stats.promotion += 1,
            ItemType::Operation => stats.operation += 1,
            ItemType::Development => stats.development += 1,
            ItemType::BannerSns => stats.banner_sns += 1,
        }
    }

    items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    let recent = items.iter().take(RECENT_ITEMS).map(ItemRow::from).collect();

    Ok(DashboardData { stats, recent })
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};

    use super::*;
    use crate::domain::portfolio_item::PortfolioItem;
    use crate::repository::mock::MockRepository;

    fn item(idx: &str, item_type: ItemType, age_minutes: i64) -> PortfolioItem {
        let created = Utc::now().naive_utc() - Duration::minutes(age_minutes);
        PortfolioItem {
            id: 0,
            idx: idx.to_string(),
            title: format!("Item {idx}"),
            brand: "Brand".to_string(),
            date: "2024".to_string(),
            item_type,
            subject: None,
            thumbnail: None,
            detail_image_1: None,
            detail_image_2: None,
            order: 0,
            created_at: created,
            updated_at: created,
        }
    }

    #[test]
    fn counts_per_type_and_orders_recent_newest_first() {
        let mut repo = MockRepository::new();
        repo.expect_list_items().returning(|| {
            Ok(vec![
                item("a", ItemType::Promotion, 30),
                item("b", ItemType::Promotion, 10),
                item("c", ItemType::Development, 20),
            ])
        });

        let data = load_dashboard(&repo).unwrap();
        assert_eq!(data.stats.total, 3);
        assert_eq!(data.stats.promotion, 2);
        assert_eq!(data.stats.development, 1);
        assert_eq!(data.stats.operation, 0);

        let recent: Vec<&str> = data.recent.iter().map(|r| r.idx.as_str()).collect();
        assert_eq!(recent, vec!["b", "c", "a"]);
    }
}
