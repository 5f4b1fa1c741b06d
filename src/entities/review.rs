//! Review entity - A user's rating and comment on a book.
//!
//! The schema adds two constraints on top of the generated table (see
//! `config::database::create_tables`): a unique index on (`user_id`, `book_id`)
//! and a CHECK keeping `rating` within 1..=5.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Review database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "reviews")]
pub struct Model {
    /// Unique identifier for the review
    #[sea_orm(primary_key)]
    pub reviews_id: i64,
    /// Author of the review; cleared when the user is deleted
    pub user_id: Option<Uuid>,
    /// Reviewed book
    pub book_id: Uuid,
    /// Star rating between 1 and 5, optional
    pub rating: Option<i16>,
    pub comment: String,
    /// Day the review was posted
    pub review_date: Date,
}

/// Defines relationships between Review and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::UserId",
        on_delete = "SetNull"
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
