//! Publisher entity - Publishing houses, unique by name.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Publisher database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "publisher")]
pub struct Model {
    /// Unique identifier for the publisher
    #[sea_orm(primary_key)]
    pub publisher_id: i32,
    /// Publisher name, unique across the catalog
    #[sea_orm(unique)]
    pub name_publisher: String,
}

/// Defines relationships between Publisher and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One publisher releases many books
    #[sea_orm(has_many = "super::book::Entity")]
    Books,
    /// Users may subscribe to a publisher
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
