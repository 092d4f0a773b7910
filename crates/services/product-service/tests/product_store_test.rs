//! Product store and catalog tests against an in-memory SQLite database.

use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use common::AppError;
use domain::{PageRequest, ProductInput, ProductSearch};
use product_service_lib::repository::entities::product;
use product_service_lib::repository::ProductStore;
use product_service_lib::service::{Catalog, ProductService};
use rust_decimal::Decimal;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Schema};
use uuid::Uuid;

async fn setup() -> DatabaseConnection {
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1).min_connections(1).sqlx_logging(false);
    let db = Database::connect(opts).await.unwrap();

    let backend = db.get_database_backend();
    let schema = Schema::new(backend);
    db.execute(backend.build(&schema.create_table_from_entity(product::Entity)))
        .await
        .unwrap();
    db
}

async fn catalog() -> Catalog {
    Catalog::new(Arc::new(ProductStore::new(setup().await)))
}

fn input(name: &str, price: &str) -> ProductInput {
    ProductInput {
        name: name.to_string(),
        price: Decimal::from_str(price).unwrap(),
        category: "Tools".to_string(),
        description: "A simple widget tool for home use".to_string(),
    }
}

/// Create products one by one so creation timestamps are strictly ordered.
async fn seed(catalog: &Catalog, names: &[&str]) {
    for name in names {
        catalog.create(input(name, "10.00")).await.unwrap();
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
}

fn page(page: u64, limit: u64) -> PageRequest {
    PageRequest::new(page, limit).unwrap()
}

#[tokio::test]
async fn test_widget_scenario() {
    let catalog = catalog().await;

    let created = catalog.create(input("Widget", "9.99")).await.unwrap();
    let fetched = catalog.get(created.id).await.unwrap();
    assert_eq!(fetched, created);
    assert_eq!(fetched.price, Decimal::from_str("9.99").unwrap());

    let result = catalog
        .bulk_update_price(vec![created.id], Decimal::from(10))
        .await
        .unwrap();
    assert_eq!(result.updated[0].price, Decimal::from_str("8.99").unwrap());
    assert_eq!(
        catalog.get(created.id).await.unwrap().price,
        Decimal::from_str("8.99").unwrap()
    );
}

#[tokio::test]
async fn test_listing_is_newest_first_and_paginated() {
    let catalog = catalog().await;
    seed(&catalog, &["Alpha", "Bravo", "Charlie", "Delta", "Echo"]).await;

    let first = catalog.list(ProductSearch::default(), page(1, 2)).await.unwrap();
    let names: Vec<_> = first.items.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Echo", "Delta"]);
    assert_eq!(first.total_items, 5);
    assert_eq!(first.total_pages, 3);
    assert!(first.has_next);
    assert!(!first.has_prev);

    let last = catalog.list(ProductSearch::default(), page(3, 2)).await.unwrap();
    assert_eq!(last.items.len(), 1);
    assert_eq!(last.items[0].name, "Alpha");
    assert!(!last.has_next);
    assert!(last.has_prev);
}

#[tokio::test]
async fn test_pages_partition_the_result_set() {
    let catalog = catalog().await;
    seed(&catalog, &["One", "Two", "Three", "Four", "Five", "Six", "Seven"]).await;

    let mut seen = Vec::new();
    for n in 1..=3 {
        let p = catalog.list(ProductSearch::default(), page(n, 3)).await.unwrap();
        seen.extend(p.items.into_iter().map(|p| p.id));
    }

    let mut unique = seen.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(seen.len(), 7);
    assert_eq!(unique.len(), 7);
}

#[tokio::test]
async fn test_page_past_the_end_is_empty() {
    let catalog = catalog().await;
    seed(&catalog, &["Alpha", "Bravo"]).await;

    let p = catalog.list(ProductSearch::default(), page(5, 10)).await.unwrap();
    assert!(p.items.is_empty());
    assert_eq!(p.total_items, 2);
    assert_eq!(p.total_pages, 1);
}

#[tokio::test]
async fn test_huge_page_number_is_empty() {
    let catalog = catalog().await;
    seed(&catalog, &["Alpha", "Bravo", "Charlie"]).await;

    let p = catalog
        .list(ProductSearch::default(), page((1 << 63) + 1, 2))
        .await
        .unwrap();
    assert!(p.items.is_empty());
    assert_eq!(p.total_items, 3);
    assert_eq!(p.total_pages, 2);
    assert!(!p.has_next);

    let max = catalog
        .list(ProductSearch::default(), page(u64::MAX, 100))
        .await
        .unwrap();
    assert!(max.items.is_empty());
}

#[tokio::test]
async fn test_search_is_case_insensitive_substring() {
    let catalog = catalog().await;
    seed(&catalog, &["Desk Lamp", "Office Chair", "Notebook"]).await;

    let search = ProductSearch::new(Some("LAMP")).unwrap();
    let p = catalog.list(search, page(1, 10)).await.unwrap();
    assert_eq!(p.total_items, 1);
    assert_eq!(p.items[0].name, "Desk Lamp");

    let search = ProductSearch::new(Some("o")).unwrap();
    let p = catalog.list(search, page(1, 10)).await.unwrap();
    assert_eq!(p.total_items, 2);
}

#[tokio::test]
async fn test_search_wildcards_are_literal() {
    let catalog = catalog().await;
    seed(&catalog, &["Widget", "100% Cotton Shirt"]).await;

    let search = ProductSearch::new(Some("%")).unwrap();
    let p = catalog.list(search, page(1, 10)).await.unwrap();
    assert_eq!(p.total_items, 1);
    assert_eq!(p.items[0].name, "100% Cotton Shirt");
}

#[tokio::test]
async fn test_update_replaces_fields() {
    let catalog = catalog().await;
    let created = catalog.create(input("Widget", "9.99")).await.unwrap();

    let mut replacement = input("Gadget", "19.50");
    replacement.category = "Gizmos".to_string();
    let updated = catalog.update(created.id, replacement).await.unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "Gadget");
    assert_eq!(updated.category, "Gizmos");
    assert_eq!(updated.price, Decimal::from_str("19.5").unwrap());
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at >= created.updated_at);
}

#[tokio::test]
async fn test_missing_ids_are_not_found() {
    let catalog = catalog().await;
    let id = Uuid::new_v4();

    assert!(matches!(catalog.get(id).await, Err(AppError::NotFound(_))));
    assert!(matches!(
        catalog.update(id, input("Widget", "9.99")).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(catalog.delete(id).await, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn test_delete_is_permanent() {
    let catalog = catalog().await;
    let created = catalog.create(input("Widget", "9.99")).await.unwrap();

    catalog.delete(created.id).await.unwrap();

    assert!(matches!(catalog.get(created.id).await, Err(AppError::NotFound(_))));
    assert!(matches!(catalog.delete(created.id).await, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn test_bulk_update_skips_missing_ids() {
    let catalog = catalog().await;
    let a = catalog.create(input("Alpha", "100.00")).await.unwrap();
    let b = catalog.create(input("Bravo", "20.00")).await.unwrap();

    let result = catalog
        .bulk_update_price(vec![a.id, Uuid::new_v4(), b.id], Decimal::from(50))
        .await
        .unwrap();

    assert_eq!(result.updated.len(), 2);
    assert_eq!(result.message(), "Updated 2 product(s)");
    assert_eq!(catalog.get(a.id).await.unwrap().price, Decimal::from(50));
    assert_eq!(catalog.get(b.id).await.unwrap().price, Decimal::from(10));
}

#[tokio::test]
async fn test_zero_discount_is_a_no_op() {
    let catalog = catalog().await;
    let created = catalog.create(input("Widget", "9.99")).await.unwrap();

    let result = catalog
        .bulk_update_price(vec![created.id], Decimal::ZERO)
        .await
        .unwrap();

    assert_eq!(result.updated[0].price, created.price);
}
