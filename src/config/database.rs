//! Database configuration module for the bookstore.
//!
//! This module handles the database connection and table creation using `SeaORM`.
//! Tables are generated from the entity definitions with
//! `Schema::create_table_from_entity`, so the schema always matches the Rust structs.
//! Constraints that cannot be expressed on a single column (the one-row-per-(user, book)
//! indexes on reviews, baskets and wishlists, and the rating range check) are added
//! here on top of the generated statements.

use crate::entities::{
    Address, Author, Basket, BindingType, Book, BookSeries, Category, CategoryBook,
    GeneralProduct, Language, Order, OrderDetail, PaperProduct, Payment, Publisher, Review,
    Stationery, StorageType, Subcategory, SubcategoryStationery, Subscription, User, Wishlist,
    WritingMaterial, basket, review, wishlist,
};
use crate::errors::Result;
use sea_orm::sea_query::{Expr, Index, IndexCreateStatement, TableCreateStatement};
use sea_orm::{ColumnTrait, ConnectionTrait, Database, DatabaseConnection, EntityTrait, Schema};
use std::path::Path;
use tracing::{debug, info};

const DEFAULT_DATABASE_URL: &str = "sqlite://data/bookshelf.sqlite?mode=rwc";

/// Name of the unique index allowing one review per (user, book).
pub const UNIQUE_USER_BOOK_REVIEW: &str = "unique_user_book_review";

/// Name of the unique index keeping one basket row per (user, book).
pub const UNIQUE_USER_BOOK_BASKET: &str = "unique_user_book_basket";

/// Name of the unique index keeping one wishlist row per (user, book).
pub const UNIQUE_USER_BOOK_WISHLIST: &str = "unique_user_book_wishlist";

/// Gets the database URL from the `DATABASE_URL` environment variable, falling
/// back to a local `SQLite` file.
#[must_use]
pub fn get_database_url() -> String {
    std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string())
}

/// Directory holding the `SQLite` file named by `database_url`, if the URL
/// names a file inside a directory.
///
/// Returns `None` for in-memory databases, for files in the working directory
/// and for non-`SQLite` URLs.
#[must_use]
pub fn sqlite_parent_dir(database_url: &str) -> Option<&Path> {
    let rest = database_url
        .strip_prefix("sqlite://")
        .or_else(|| database_url.strip_prefix("sqlite:"))?;
    let file = rest.split('?').next().unwrap_or_default();
    if file.is_empty() || file.contains(":memory:") {
        return None;
    }
    Path::new(file)
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
}

/// Establishes a connection to the database named by [`get_database_url`].
pub async fn create_connection() -> Result<DatabaseConnection> {
    let database_url = get_database_url();
    info!("Connecting to database at {database_url}");
    Database::connect(&database_url).await.map_err(Into::into)
}

fn table_for<E: EntityTrait>(schema: &Schema, entity: E) -> TableCreateStatement {
    let mut statement = schema.create_table_from_entity(entity);
    statement.if_not_exists();
    statement
}

/// Creates all tables, parents before children, plus the review constraints.
///
/// Every statement is `IF NOT EXISTS`, so calling this on an initialised
/// database is a no-op.
pub async fn create_tables<C: ConnectionTrait>(db: &C) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let mut reviews = table_for(&schema, Review);
    reviews.check(Expr::col(review::Column::Rating).between(1, 5));

    let tables = [
        table_for(&schema, Author),
        table_for(&schema, BindingType),
        table_for(&schema, BookSeries),
        table_for(&schema, Publisher),
        table_for(&schema, Language),
        table_for(&schema, Category),
        table_for(&schema, Subcategory),
        table_for(&schema, Book),
        table_for(&schema, CategoryBook),
        table_for(&schema, User),
        table_for(&schema, Address),
        table_for(&schema, Basket),
        table_for(&schema, Wishlist),
        table_for(&schema, Subscription),
        reviews,
        table_for(&schema, Order),
        table_for(&schema, OrderDetail),
        table_for(&schema, Payment),
        table_for(&schema, Stationery),
        table_for(&schema, SubcategoryStationery),
        table_for(&schema, PaperProduct),
        table_for(&schema, WritingMaterial),
        table_for(&schema, StorageType),
        table_for(&schema, GeneralProduct),
    ];

    for table in &tables {
        db.execute(builder.build(table)).await?;
    }

    let indexes = [
        user_book_index(UNIQUE_USER_BOOK_REVIEW, Review, review::Column::UserId, review::Column::BookId),
        user_book_index(UNIQUE_USER_BOOK_BASKET, Basket, basket::Column::UserId, basket::Column::BookId),
        user_book_index(
            UNIQUE_USER_BOOK_WISHLIST,
            Wishlist,
            wishlist::Column::UserId,
            wishlist::Column::BookId,
        ),
    ];
    for index in &indexes {
        db.execute(builder.build(index)).await?;
    }

    debug!("Created {} tables", tables.len());
    Ok(())
}

fn user_book_index<E, C>(name: &str, table: E, user: C, book: C) -> IndexCreateStatement
where
    E: EntityTrait + 'static,
    C: ColumnTrait + 'static,
{
    Index::create()
        .name(name)
        .table(table)
        .col(user)
        .col(book)
        .unique()
        .if_not_exists()
        .to_owned()
}
