//! User entity - Customer and staff accounts.
//!
//! The email is the natural key used for login. Passwords are stored only as
//! bcrypt hashes. Access is described by three plain flags (`is_active`,
//! `is_staff`, `is_superuser`); see `core::user::Capabilities`.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// User database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    /// Unique identifier for the user
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: Uuid,
    /// Normalized email, unique
    #[sea_orm(unique)]
    pub email: String,
    /// bcrypt hash, or an unusable marker starting with `!`
    #[serde(skip_serializing)]
    pub password: String,
    pub name: String,
    pub last_name: String,
    /// Contact phone, unique
    #[sea_orm(unique)]
    pub phone: String,
    /// Set once when the account is created
    pub date_registered: DateTimeUtc,
    /// Updated on every successful authentication
    pub last_login: Option<DateTimeUtc>,
    pub is_active: bool,
    pub is_staff: bool,
    pub is_superuser: bool,
}

/// Defines relationships between User and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::order::Entity")]
    Orders,
    #[sea_orm(has_many = "super::address::Entity")]
    Addresses,
    #[sea_orm(has_many = "super::basket::Entity")]
    Basket,
    #[sea_orm(has_many = "super::wishlist::Entity")]
    Wishlists,
    #[sea_orm(has_many = "super::review::Entity")]
    Reviews,
    #[sea_orm(has_many = "super::subscription::Entity")]
    Subscriptions,
}

impl Related<super::order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Orders.def()
    }
}

impl Related<super::address::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Addresses.def()
    }
}

impl Related<super::basket::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Basket.def()
    }
}

impl Related<super::wishlist::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Wishlists.def()
    }
}

impl Related<super::review::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reviews.def()
    }
}

impl Related<super::subscription::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Subscriptions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
