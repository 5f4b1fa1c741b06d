//! Shared test utilities for the bookshelf store.
//!
//! This module provides common helper functions for setting up test databases
//! and creating test entities with sensible defaults.

use crate::{
    core::{
        catalog::{self, NewBook},
        order, stationery,
        user::{self, UserFields},
    },
    entities,
    errors::Result,
};
use sea_orm::{DatabaseConnection, prelude::Decimal};

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Profile fields for a regular customer with the given phone number.
///
/// Phones are unique, so every user in a test needs its own.
pub fn test_user_fields(phone: &str) -> UserFields {
    UserFields {
        name: "Test".to_string(),
        last_name: "User".to_string(),
        phone: phone.to_string(),
        ..Default::default()
    }
}

/// Creates a regular user without a usable password.
pub async fn create_test_user(
    db: &DatabaseConnection,
    email: &str,
    phone: &str,
) -> Result<entities::user::Model> {
    user::create_user(db, email, None, test_user_fields(phone)).await
}

/// IDs of the reference rows every book points at.
#[derive(Debug, Clone, Default)]
pub struct CatalogRefs {
    pub author_id: i32,
    pub binding_type_id: i32,
    pub publisher_id: i32,
    pub language_code: i32,
}

/// Creates one author, binding type, publisher and language.
pub async fn create_catalog_refs(db: &DatabaseConnection) -> Result<CatalogRefs> {
    create_catalog_refs_named(db, "Test").await
}

/// Like [`create_catalog_refs`], with names prefixed by `prefix` so several
/// sets can live in the same database.
pub async fn create_catalog_refs_named(
    db: &DatabaseConnection,
    prefix: &str,
) -> Result<CatalogRefs> {
    let author = catalog::create_author(db, &format!("{prefix} Author")).await?;
    let binding = catalog::create_binding_type(db, &format!("{prefix} Hardcover")).await?;
    let publisher = catalog::create_publisher(db, &format!("{prefix} Press")).await?;
    let language = catalog::create_language(db, &format!("{prefix} English")).await?;

    Ok(CatalogRefs {
        author_id: author.author_id,
        binding_type_id: binding.binding_type_id,
        publisher_id: publisher.publisher_id,
        language_code: language.code,
    })
}

/// Builds a [`NewBook`] with sensible defaults.
///
/// # Defaults
/// * `stock`: 10
/// * `pages`: 320
/// * `year_of_publication`: 2020
/// * no series, no age limit
pub fn new_book_fixture(refs: &CatalogRefs, title: &str, isbn: &str, price: Decimal) -> NewBook {
    NewBook {
        author_id: refs.author_id,
        binding_type_id: refs.binding_type_id,
        series_id: None,
        publisher_id: refs.publisher_id,
        language_code: refs.language_code,
        title: title.to_string(),
        price_book: price,
        stock: Some(10),
        image_path: "covers/test.jpg".to_string(),
        age_limit: None,
        description: "A book used in tests".to_string(),
        circulation: 5000,
        weight: 450,
        size: "20x13 cm".to_string(),
        isbn: isbn.to_string(),
        pages: 320,
        year_of_publication: 2020,
        year_of_release: None,
    }
}

/// Creates a book with custom title, ISBN and price.
pub async fn create_custom_book(
    db: &DatabaseConnection,
    refs: &CatalogRefs,
    title: &str,
    isbn: &str,
    price: Decimal,
) -> Result<entities::book::Model> {
    catalog::create_book(db, new_book_fixture(refs, title, isbn, price)).await
}

/// Sets up a database holding one book at the given price.
/// Returns (db, book) for catalog and review tests.
pub async fn setup_with_book(
    price: Decimal,
) -> Result<(DatabaseConnection, entities::book::Model)> {
    let db = setup_test_db().await?;
    let refs = create_catalog_refs(&db).await?;
    let book = create_custom_book(&db, &refs, "Test Book", "978-0-00-000000-0", price).await?;
    Ok((db, book))
}

/// Sets up a customer, a book at the given price and an empty order.
/// Returns (db, user, book, order) for line item and payment tests.
pub async fn setup_with_order(
    price: Decimal,
) -> Result<(
    DatabaseConnection,
    entities::user::Model,
    entities::book::Model,
    entities::order::Model,
)> {
    let (db, book) = setup_with_book(price).await?;
    let user = create_test_user(&db, "customer@shop.test", "+10000000000").await?;
    let order = order::create_order(&db, Some(user.user_id)).await?;
    Ok((db, user, book, order))
}

/// Creates a stationery item with sensible defaults.
///
/// # Defaults
/// * `stock`: 25
/// * `date_of_receipt`: now
/// * no size, weight, age limit or color
pub async fn create_test_stationery(
    db: &DatabaseConnection,
    name: &str,
    price: Decimal,
) -> Result<entities::stationery::Model> {
    stationery::create_stationery(
        db,
        stationery::NewStationery {
            name: name.to_string(),
            description: "Stationery used in tests".to_string(),
            price,
            stock: Some(25),
            date_of_receipt: chrono::Utc::now(),
            size: None,
            weight: None,
            age_limit: None,
            material_color: None,
        },
    )
    .await
}
