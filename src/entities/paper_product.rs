//! Paper product details - Notebooks, planners, calendars.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "paper_products")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub paper_products_id: Uuid,
    pub stationery_id: Uuid,
    pub subcategory_id: Uuid,
    pub number_of_sheets: Option<i16>,
    /// Paper format such as "A5"
    pub format: Option<String>,
    pub type_of_ruler: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub peculiarity: Option<String>,
    pub mounting_type: Option<String>,
    pub calendar_year: Option<i16>,
    pub quantity_colors: Option<i16>,
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
