//! Stationery entity - Non-book catalog items.
//!
//! Each stationery item can carry kind-specific details in one of the
//! `paper_product`, `writing_material`, `storage_type` or `general_product`
//! tables.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Stationery database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "stationery")]
pub struct Model {
    /// Unique identifier for the item
    #[sea_orm(primary_key, auto_increment = false)]
    pub stationery_id: Uuid,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    /// Unit price
    #[sea_orm(column_type = "Decimal(Some((15, 2)))")]
    pub price_stationery: Decimal,
    pub stock: Option<i32>,
    /// When the batch arrived at the warehouse
    pub date_of_receipt: DateTimeUtc,
    pub size: Option<String>,
    pub weight: Option<i16>,
    pub age_limit: Option<String>,
    pub material_color: Option<String>,
}

/// Defines relationships between Stationery and its detail tables
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::paper_product::Entity")]
    PaperProducts,
    #[sea_orm(has_many = "super::writing_material::Entity")]
    WritingMaterials,
    #[sea_orm(has_many = "super::storage_type::Entity")]
    StorageTypes,
    #[sea_orm(has_many = "super::general_product::Entity")]
    GeneralProducts,
}

impl Related<super::paper_product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PaperProducts.def()
    }
}

impl Related<super::writing_material::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WritingMaterials.def()
    }
}

impl Related<super::storage_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StorageTypes.def()
    }
}

impl Related<super::general_product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GeneralProducts.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
