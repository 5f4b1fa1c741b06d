//! Category placement entity - Links a book to a category and/or subcategory.
//!
//! Both the category and the subcategory are optional so a book can be filed
//! at either level of the tree.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Book placement database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "category_books")]
pub struct Model {
    /// Unique identifier for the placement
    #[sea_orm(primary_key)]
    pub id: i32,
    /// The placed book
    pub book_id: Uuid,
    /// Category the book is filed under, if any
    pub category_id: Option<i32>,
    /// Subcategory the book is filed under, if any
    pub subcategory: Option<i32>,
}

/// Defines relationships between placements and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each placement belongs to one book
    #[sea_orm(
        belongs_to = "super::book::Entity",
        from = "Column::BookId",
        to = "super::book::Column::BookId",
        on_delete = "Cascade"
    )]
    Book,
    /// Optional category
    #[sea_orm(
        belongs_to = "super::category::Entity",
        from = "Column::CategoryId",
        to = "super::category::Column::CategoryId",
        on_delete = "Cascade"
    )]
    Category,
    /// Optional subcategory
    #[sea_orm(
        belongs_to = "super::subcategory::Entity",
        from = "Column::Subcategory",
        to = "super::subcategory::Column::SubcategoryId",
        on_delete = "Cascade"
    )]
    Subcategory,
}

impl Related<super::book::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Book.def()
    }
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl Related<super::subcategory::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Subcategory.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
