//! Address business logic - Delivery addresses saved by users.

use crate::{
    core::catalog::clean_name,
    entities::{Address, address},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, prelude::*};

/// A delivery address as entered by the user.
#[derive(Debug, Clone, Default)]
pub struct NewAddress {
    pub city: String,
    pub street: String,
    pub apartment: String,
    pub entrance: Option<i16>,
    pub floor: Option<i16>,
    pub intercom: Option<i16>,
    pub clarification: Option<String>,
}

/// Saves a delivery address for a user.
///
/// # Errors
/// Returns [`Error::Validation`] if the city or street is blank.
pub async fn add_address(
    db: &DatabaseConnection,
    user_id: Uuid,
    new_address: NewAddress,
) -> Result<address::Model> {
    let city = clean_name(&new_address.city, "City")?;
    let street = clean_name(&new_address.street, "Street")?;

    address::ActiveModel {
        city: Set(city),
        street: Set(street),
        apartment: Set(new_address.apartment.trim().to_string()),
        entrance: Set(new_address.entrance),
        floor: Set(new_address.floor),
        intercom: Set(new_address.intercom),
        clarification_to_the_address: Set(new_address.clarification),
        user_id: Set(Some(user_id)),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(Into::into)
}

/// Lists a user's saved addresses, oldest first.
pub async fn get_addresses_for_user(
    db: &DatabaseConnection,
    user_id: Uuid,
) -> Result<Vec<address::Model>> {
    Address::find()
        .filter(address::Column::UserId.eq(user_id))
        .order_by_asc(address::Column::AddressId)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Deletes a saved address.
pub async fn delete_address(db: &DatabaseConnection, address_id: i32) -> Result<()> {
    let result = Address::delete_by_id(address_id).exec(db).await?;
    if result.rows_affected == 0 {
        return Err(Error::not_found("Address", address_id));
    }
    Ok(())
}
