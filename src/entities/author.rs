//! Author entity - Book authors, unique by name.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Author database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "authors")]
pub struct Model {
    /// Unique identifier for the author
    #[sea_orm(primary_key)]
    pub author_id: i32,
    /// Full display name, unique across the catalog
    #[sea_orm(unique)]
    pub name: String,
}

/// Defines relationships between Author and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One author has written many books
    #[sea_orm(has_many = "super::book::Entity")]
    Books,
    /// Users may subscribe to an author
    #[sea_orm(has_many = "super::subscription::Entity")]
    Subscriptions,
}

impl Related<super::book::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Books.def()
    }
}

impl Related<super::subscription::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Subscriptions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
