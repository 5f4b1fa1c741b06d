//! Writing material details - Pens, pencils, markers.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "writing_materials")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub writing_materials_id: Uuid,
    pub stationery_id: Uuid,
    pub subcategory_id: Uuid,
    pub inc_color: Option<String>,
    pub inc_base: Option<String>,
    pub pen_thickness: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub peculiarity: Option<String>,
    /// Number of colors in the set, always known for writing materials
    pub quantity_colors: i16,
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
