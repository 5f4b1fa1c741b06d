//! Stationery subcategory entity - Groups stationery detail rows.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "subcategory_stationery")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub subcategory_id: Uuid,
    pub name_subcategory: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
