//! Order detail entity - One line item of an order.
//!
//! `price` is always `book.price_book * quantity` as of the last save; it is
//! computed by `core::pricing::compute_line_price` and never taken from callers.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Line item database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "order_details")]
pub struct Model {
    /// Unique identifier for the line item
    #[sea_orm(primary_key, auto_increment = false)]
    pub order_detail_id: Uuid,
    /// Order this line belongs to
    pub order_id: Uuid,
    /// Ordered book
    pub book_id: Uuid,
    /// Number of copies; None means not yet specified
    pub quantity: Option<i16>,
    /// Line total at the time of the last save
    #[sea_orm(column_type = "Decimal(Some((15, 2)))")]
    pub price: Decimal,
}

/// Defines relationships between line items and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::order::Entity",
        from = "Column::OrderId",
        to = "super::order::Column::OrderId"
    )]
    Order,
    #[sea_orm(
        belongs_to = "super::book::Entity",
        from = "Column::BookId",
        to = "super::book::Column::BookId"
    )]
    Book,
}

impl Related<super::order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Order.def()
    }
}

impl Related<super::book::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Book.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
