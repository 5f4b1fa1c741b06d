//! Language entity - Languages a book can be published in.
//!
//! Books reference a language through its integer `code`.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Language database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "languages")]
pub struct Model {
    /// Language code, referenced by `books.language_code`
    #[sea_orm(primary_key)]
    pub code: i32,
    /// Human-readable language name (e.g., "English")
    #[sea_orm(unique)]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::book::Entity")]
    Books,
}

impl Related<super::book::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Books.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
