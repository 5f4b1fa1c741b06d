//! Book entity - The primary catalog item.
//!
//! A book references its author, binding type, optional series, publisher and
//! language. `price_book` is the unit price read by line-item pricing at save
//! time; `isbn` is unique across the catalog.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Book database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "books")]
pub struct Model {
    /// Unique identifier for the book
    #[sea_orm(primary_key, auto_increment = false)]
    pub book_id: Uuid,
    /// Author of the book
    pub author_id: i32,
    /// Binding type (hardcover, paperback, ...)
    pub binding_type_id: i32,
    /// Series the book belongs to, if any
    pub series_id: Option<i32>,
    /// Publishing house
    pub publisher_id: i32,
    /// Title as printed on the cover
    pub title: String,
    /// Current unit price
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub price_book: Decimal,
    /// Units in stock, None when not tracked
    pub stock: Option<i32>,
    /// Path to the cover image
    #[sea_orm(column_type = "Text")]
    pub image_path: String,
    /// Age rating label such as "16+"
    pub age_limit: Option<String>,
    /// Language the book is printed in
    pub language_code: i32,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub circulation: i32,
    /// Weight in grams
    pub weight: i16,
    /// Physical dimensions label
    pub size: String,
    /// ISBN, unique across the catalog
    #[sea_orm(unique)]
    pub isbn: String,
    pub pages: i16,
    pub year_of_publication: i32,
    pub year_of_release: Option<i32>,
}

/// Defines relationships between Book and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::author::Entity",
        from = "Column::AuthorId",
        to = "super::author::Column::AuthorId"
    )]
    Author,
    #[sea_orm(
        belongs_to = "super::binding_type::Entity",
        from = "Column::BindingTypeId",
        to = "super::binding_type::Column::BindingTypeId"
    )]
    BindingType,
    #[sea_orm(
        belongs_to = "super::book_series::Entity",
        from = "Column::SeriesId",
        to = "super::book_series::Column::BookSeriesId"
    )]
    BookSeries,
    #[sea_orm(
        belongs_to = "super::publisher::Entity",
        from = "Column::PublisherId",
        to = "super::publisher::Column::PublisherId"
    )]
    Publisher,
    #[sea_orm(
        belongs_to = "super::language::Entity",
        from = "Column::LanguageCode",
        to = "super::language::Column::Code"
    )]
    Language,
    /// Line items that ordered this book
    #[sea_orm(has_many = "super::order_detail::Entity")]
    OrderDetails,
    /// Customer reviews of this book
    #[sea_orm(has_many = "super::review::Entity")]
    Reviews,
    /// Category placements
    #[sea_orm(has_many = "super::category_book::Entity")]
    CategoryBooks,
}

impl Related<super::author::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Author.def()
    }
}

impl Related<super::binding_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BindingType.def()
    }
}

impl Related<super::book_series::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BookSeries.def()
    }
}

impl Related<super::publisher::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Publisher.def()
    }
}

impl Related<super::language::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Language.def()
    }
}

impl Related<super::order_detail::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderDetails.def()
    }
}

impl Related<super::review::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reviews.def()
    }
}

impl Related<super::category_book::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CategoryBooks.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
