//! Subcategory entity - Second level of the book category tree.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Subcategory database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "subcategory")]
pub struct Model {
    /// Unique identifier for the subcategory
    #[sea_orm(primary_key)]
    pub subcategory_id: i32,
    /// Parent category; deleting the category removes its subcategories
    pub category_id: i32,
    /// Subcategory name, unique across all categories
    #[sea_orm(unique)]
    pub name_subcategory: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::category::Entity",
        from = "Column::CategoryId",
        to = "super::category::Column::CategoryId",
        on_delete = "Cascade"
    )]
    Category,
    #[sea_orm(has_many = "super::category_book::Entity")]
    CategoryBooks,
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl Related<super::category_book::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CategoryBooks.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
