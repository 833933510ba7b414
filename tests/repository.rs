use portfolio_admin::domain::portfolio_item::{NewPortfolioItem, UpdatePortfolioItem};
use portfolio_admin::domain::types::ItemType;
use portfolio_admin::repository::errors::RepositoryError;
use portfolio_admin::repository::{DieselRepository, PortfolioReader, PortfolioWriter};

mod common;

fn new_item(idx: &str, title: &str, item_type: ItemType) -> NewPortfolioItem {
    NewPortfolioItem::new(
        idx.to_string(),
        title.to_string(),
        "Acme".to_string(),
        "2024-05".to_string(),
        item_type,
        None,
    )
}

#[test]
fn test_portfolio_repository_crud() {
    let test_db = common::TestDb::new("test_portfolio_repository_crud.db");
    let repo = DieselRepository::new(test_db.pool());

    let a = repo
        .create_item(&new_item("a", "Spring Promo", ItemType::Promotion))
        .unwrap();
    let b = repo
        .create_item(&new_item("b", "Autumn Ops", ItemType::Operation))
        .unwrap();

    // First item opens the sequence at 0, the second appends at max + 1.
    assert_eq!(a.order, 0);
    assert_eq!(b.order, 1);

    let items = repo.list_items().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].idx, "a");
    assert_eq!(items[1].idx, "b");

    let fetched = repo.get_item("a").unwrap().unwrap();
    assert_eq!(fetched.title, "Spring Promo");
    assert!(repo.get_item("missing").unwrap().is_none());

    let mut updates = UpdatePortfolioItem::new(
        "Spring Promo v2".to_string(),
        "Acme".to_string(),
        "2024-06".to_string(),
        ItemType::Promotion,
        Some("Updated campaign".to_string()),
    );
    updates.thumbnail = Some("data:image/png;base64,AAA".to_string());

    let updated = repo.update_item("a", &updates).unwrap();
    assert_eq!(updated.title, "Spring Promo v2");
    assert_eq!(updated.subject.as_deref(), Some("Updated campaign"));
    assert_eq!(updated.thumbnail.as_deref(), Some("data:image/png;base64,AAA"));
    // Identity and rank survive an update.
    assert_eq!(updated.idx, "a");
    assert_eq!(updated.order, 0);

    assert!(matches!(
        repo.update_item("missing", &updates),
        Err(RepositoryError::NotFound)
    ));

    repo.delete_item("a").unwrap();
    assert!(repo.get_item("a").unwrap().is_none());
    assert!(matches!(
        repo.delete_item("a"),
        Err(RepositoryError::NotFound)
    ));
}

#[test]
fn test_update_clears_subject_but_keeps_images() {
    let test_db = common::TestDb::new("test_update_clears_subject.db");
    let repo = DieselRepository::new(test_db.pool());

    let mut seed = new_item("a", "Spring Promo", ItemType::Promotion);
    seed.subject = Some("Original".to_string());
    seed.thumbnail = Some("data:image/png;base64,AAA".to_string());
    repo.create_item(&seed).unwrap();

    // An update without a subject wipes the stored one; image fields left
    // as None keep their stored values.
    let updates = UpdatePortfolioItem::new(
        "Spring Promo".to_string(),
        "Acme".to_string(),
        "2024-05".to_string(),
        ItemType::Promotion,
        None,
    );
    let updated = repo.update_item("a", &updates).unwrap();

    assert_eq!(updated.subject, None);
    assert_eq!(updated.thumbnail.as_deref(), Some("data:image/png;base64,AAA"));
}

#[test]
fn test_reorder_renumbers_the_whole_sequence() {
    let test_db = common::TestDb::new("test_reorder_renumbers.db");
    let repo = DieselRepository::new(test_db.pool());

    repo.create_item(&new_item("a", "First", ItemType::Promotion))
        .unwrap();
    repo.create_item(&new_item("b", "Second", ItemType::Operation))
        .unwrap();
    repo.create_item(&new_item("c", "Third", ItemType::Development))
        .unwrap();

    let order = vec!["c".to_string(), "a".to_string(), "b".to_string()];
    assert_eq!(repo.reorder_items(&order).unwrap(), 3);

    let items = repo.list_items().unwrap();
    let idxs: Vec<&str> = items.iter().map(|i| i.idx.as_str()).collect();
    assert_eq!(idxs, vec!["c", "a", "b"]);
    let orders: Vec<i32> = items.iter().map(|i| i.order).collect();
    assert_eq!(orders, vec![0, 1, 2]);
}

#[test]
fn test_reorder_with_unknown_idx_changes_nothing() {
    let test_db = common::TestDb::new("test_reorder_unknown_idx.db");
    let repo = DieselRepository::new(test_db.pool());

    repo.create_item(&new_item("a", "First", ItemType::Promotion))
        .unwrap();
    repo.create_item(&new_item("b", "Second", ItemType::Operation))
        .unwrap();

    let order = vec!["b".to_string(), "missing".to_string(), "a".to_string()];
    assert!(matches!(
        repo.reorder_items(&order),
        Err(RepositoryError::NotFound)
    ));

    // The failed batch rolled back; the stored ranks are untouched.
    let items = repo.list_items().unwrap();
    let idxs: Vec<&str> = items.iter().map(|i| i.idx.as_str()).collect();
    assert_eq!(idxs, vec!["a", "b"]);
}

#[test]
fn test_delete_leaves_a_rank_gap() {
    let test_db = common::TestDb::new("test_delete_leaves_gap.db");
    let repo = DieselRepository::new(test_db.pool());

    repo.create_item(&new_item("a", "First", ItemType::Promotion))
        .unwrap();
    repo.create_item(&new_item("b", "Second", ItemType::Operation))
        .unwrap();
    repo.create_item(&new_item("c", "Third", ItemType::Development))
        .unwrap();

    repo.delete_item("b").unwrap();

    let items = repo.list_items().unwrap();
    let orders: Vec<i32> = items.iter().map(|i| i.order).collect();
    assert_eq!(orders, vec![0, 2]);

    // The next create still appends after the gap.
    let d = repo
        .create_item(&new_item("d", "Fourth", ItemType::BannerSns))
        .unwrap();
    assert_eq!(d.order, 3);
}
