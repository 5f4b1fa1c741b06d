//! Wishlist business logic - Books a user wants to remember.

use crate::{
    entities::{Wishlist, wishlist},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, TransactionTrait, prelude::*, sea_query::OnConflict};

/// Adds a book to a user's wishlist.
///
/// Adding a book that is already there returns the existing row.
pub async fn add_to_wishlist(
    db: &DatabaseConnection,
    user_id: Uuid,
    book_id: Uuid,
) -> Result<wishlist::Model> {
    let txn = db.begin().await?;

    let row = wishlist::ActiveModel {
        user_id: Set(user_id),
        book_id: Set(book_id),
        ..Default::default()
    };
    Wishlist::insert(row)
        .on_conflict(
            OnConflict::columns([wishlist::Column::UserId, wishlist::Column::BookId])
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(&txn)
        .await?;

    let row = Wishlist::find()
        .filter(wishlist::Column::UserId.eq(user_id))
        .filter(wishlist::Column::BookId.eq(book_id))
        .one(&txn)
        .await?
        .ok_or_else(|| Error::not_found("Wishlist entry", book_id))?;
    txn.commit().await?;
    Ok(row)
}

/// Removes a book from a user's wishlist.
pub async fn remove_from_wishlist(
    db: &DatabaseConnection,
    user_id: Uuid,
    book_id: Uuid,
) -> Result<()> {
    let result = Wishlist::delete_many()
        .filter(wishlist::Column::UserId.eq(user_id))
        .filter(wishlist::Column::BookId.eq(book_id))
        .exec(db)
        .await?;
    if result.rows_affected == 0 {
        return Err(Error::not_found("Wishlist entry", book_id));
    }
    Ok(())
}

/// Lists a user's wishlist in the order books were added.
pub async fn get_wishlist(db: &DatabaseConnection, user_id: Uuid) -> Result<Vec<wishlist::Model>> {
    Wishlist::find()
        .filter(wishlist::Column::UserId.eq(user_id))
        .order_by_asc(wishlist::Column::WishlistId)
        .all(db)
        .await
        .map_err(Into::into)
}
