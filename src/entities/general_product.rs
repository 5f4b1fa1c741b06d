//! General product details - Staplers, hole punches, calculators.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "generals_products")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub general_products_id: Uuid,
    pub stationery_id: Uuid,
    pub subcategory_id: Uuid,
    pub material: Option<String>,
    pub number_of_punched_sheets: Option<i16>,
    pub calculator_bit_size: Option<i16>,
    pub number_stapler: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub peculiarity: Option<String>,
    pub number_staples: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::stationery::Entity",
        from = "Column::StationeryId",
        to = "super::stationery::Column::StationeryId"
    )]
    Stationery,
    #[sea_orm(
        belongs_to = "super::subcategory_stationery::Entity",
        from = "Column::SubcategoryId",
        to = "super::subcategory_stationery::Column::SubcategoryId"
    )]
    Subcategory,
}

impl Related<super::stationery::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Stationery.def()
    }
}

impl Related<super::subcategory_stationery::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Subcategory.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
