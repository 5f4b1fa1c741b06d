//! Category entity - Top-level book categories.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Category database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "category")]
pub struct Model {
    /// Unique identifier for the category
    #[sea_orm(primary_key)]
    pub category_id: i32,
    /// Category name (e.g., "Fiction"), unique
    #[sea_orm(unique)]
    pub name_category: String,
}

/// Defines relationships between Category and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One category has many subcategories
    #[sea_orm(has_many = "super::subcategory::Entity")]
    Subcategories,
    /// Book placements within this category
    #[sea_orm(has_many = "super::category_book::Entity")]
    CategoryBooks,
}

impl Related<super::subcategory::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Subcategories.def()
    }
}

impl Related<super::category_book::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CategoryBooks.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
