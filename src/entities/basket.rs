//! Basket entity - Books a user intends to buy.
//!
//! One row per (user, book); quantities are merged when the same book is
//! added again. Rows disappear with their user or book.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Basket row database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "basket")]
pub struct Model {
    /// Unique identifier for the basket row
    #[sea_orm(primary_key)]
    pub basket_id: i32,
    /// Owner of the basket, None for anonymous baskets
    pub user_id: Option<Uuid>,
    /// The book in the basket
    pub book_id: Uuid,
    /// Number of copies
    pub quantity: i16,
}

/// Defines relationships between basket rows and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::UserId",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::book::Entity",
        from = "Column::BookId",
        to = "super::book::Column::BookId",
        on_delete = "Cascade"
    )]
    Book,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::book::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Book.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
