//! Basket business logic - Collecting books before checkout.
//!
//! Adding a book that is already in the basket increases its quantity.
//! Checkout turns the basket into an order with one priced line per row and
//! empties the basket, all in one transaction.

use crate::{
    core::{order::insert_order, order_detail::insert_line_item},
    entities::{Basket, Book, basket, order, order_detail},
    errors::{Error, Result},
};
use sea_orm::{
    QueryOrder, Set, TransactionTrait,
    prelude::*,
    sea_query::{Expr, OnConflict},
};
use tracing::{info, instrument};

fn ensure_positive(quantity: i16) -> Result<()> {
    if quantity <= 0 {
        return Err(Error::InvalidQuantity {
            quantity: i32::from(quantity),
        });
    }
    Ok(())
}

/// Puts a book in a user's basket, merging with an existing row for the same book.
///
/// The read and the write share a transaction, and the insert falls back to
/// adding the quantity if a concurrent call created the row first.
#[instrument(skip(db))]
pub async fn add_to_basket(
    db: &DatabaseConnection,
    user_id: Uuid,
    book_id: Uuid,
    quantity: i16,
) -> Result<basket::Model> {
    ensure_positive(quantity)?;

    let txn = db.begin().await?;

    let existing = find_basket_row(&txn, user_id, book_id).await?;
    if let Some(row) = &existing {
        row.quantity.checked_add(quantity).ok_or(Error::InvalidQuantity {
            quantity: i32::from(row.quantity) + i32::from(quantity),
        })?;
    }

    let row = basket::ActiveModel {
        user_id: Set(Some(user_id)),
        book_id: Set(book_id),
        quantity: Set(quantity),
        ..Default::default()
    };
    Basket::insert(row)
        .on_conflict(
            OnConflict::columns([basket::Column::UserId, basket::Column::BookId])
                .value(
                    basket::Column::Quantity,
                    Expr::col(basket::Column::Quantity).add(quantity),
                )
                .to_owned(),
        )
        .exec_without_returning(&txn)
        .await?;

    let row = find_basket_row(&txn, user_id, book_id)
        .await?
        .ok_or_else(|| Error::not_found("Basket row", book_id))?;
    txn.commit().await?;
    Ok(row)
}

async fn find_basket_row<C>(db: &C, user_id: Uuid, book_id: Uuid) -> Result<Option<basket::Model>>
where
    C: ConnectionTrait,
{
    Basket::find()
        .filter(basket::Column::UserId.eq(user_id))
        .filter(basket::Column::BookId.eq(book_id))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Sets the quantity of a basket row.
pub async fn set_basket_quantity(
    db: &DatabaseConnection,
    basket_id: i32,
    quantity: i16,
) -> Result<basket::Model> {
    ensure_positive(quantity)?;

    let mut row: basket::ActiveModel = Basket::find_by_id(basket_id)
        .one(db)
        .await?
        .ok_or_else(|| Error::not_found("Basket row", basket_id))?
        .into();
    row.quantity = Set(quantity);
    row.update(db).await.map_err(Into::into)
}

/// Removes a row from the basket.
pub async fn remove_from_basket(db: &DatabaseConnection, basket_id: i32) -> Result<()> {
    let result = Basket::delete_by_id(basket_id).exec(db).await?;
    if result.rows_affected == 0 {
        return Err(Error::not_found("Basket row", basket_id));
    }
    Ok(())
}

/// Lists a user's basket in the order the rows were added.
pub async fn get_basket(db: &DatabaseConnection, user_id: Uuid) -> Result<Vec<basket::Model>> {
    Basket::find()
        .filter(basket::Column::UserId.eq(user_id))
        .order_by_asc(basket::Column::BasketId)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Converts a user's basket into a new order.
///
/// Each basket row becomes a line item priced at the book's current price.
///
/// # Errors
/// Returns [`Error::EmptyBasket`] when there is nothing to check out.
#[instrument(skip(db))]
pub async fn checkout_basket(
    db: &DatabaseConnection,
    user_id: Uuid,
) -> Result<(order::Model, Vec<order_detail::Model>)> {
    let txn = db.begin().await?;

    let rows = Basket::find()
        .filter(basket::Column::UserId.eq(user_id))
        .order_by_asc(basket::Column::BasketId)
        .all(&txn)
        .await?;
    if rows.is_empty() {
        return Err(Error::EmptyBasket);
    }

    let order = insert_order(&txn, Some(user_id)).await?;
    let mut line_items = Vec::with_capacity(rows.len());
    for row in &rows {
        let book = Book::find_by_id(row.book_id)
            .one(&txn)
            .await?
            .ok_or_else(|| Error::not_found("Book", row.book_id))?;
        line_items.push(insert_line_item(&txn, order.order_id, &book, Some(row.quantity)).await?);
    }

    Basket::delete_many()
        .filter(basket::Column::UserId.eq(user_id))
        .exec(&txn)
        .await?;

    txn.commit().await?;

    info!(order_id = %order.order_id, lines = line_items.len(), "Checked out basket");
    Ok((order, line_items))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::core::pricing::compute_payment_amount;
    use crate::test_utils::*;

    #[tokio::test]
    async fn test_add_to_basket_merges_quantities() -> Result<()> {
        let (db, book) = setup_with_book(Decimal::ONE).await?;
        let user = create_test_user(&db, "cart@shop.test", "+50000000001").await?;

        let first = add_to_basket(&db, user.user_id, book.book_id, 1).await?;
        let merged = add_to_basket(&db, user.user_id, book.book_id, 2).await?;
        assert_eq!(merged.basket_id, first.basket_id);
        assert_eq!(merged.quantity, 3);
        assert_eq!(get_basket(&db, user.user_id).await?.len(), 1);

        let result = add_to_basket(&db, user.user_id, book.book_id, 0).await;
        assert!(matches!(result, Err(Error::InvalidQuantity { quantity: 0 })));

        Ok(())
    }

    #[tokio::test]
    async fn test_concurrent_adds_share_one_row() -> Result<()> {
        let (db, book) = setup_with_book(Decimal::ONE).await?;
        let user = create_test_user(&db, "race@shop.test", "+50000000004").await?;

        let (a, b) = tokio::join!(
            add_to_basket(&db, user.user_id, book.book_id, 2),
            add_to_basket(&db, user.user_id, book.book_id, 3),
        );
        assert_eq!(a?.basket_id, b?.basket_id);

        let rows = get_basket(&db, user.user_id).await?;
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].quantity, 5);

        // The unique (user, book) index holds for direct inserts too
        let duplicate = basket::ActiveModel {
            user_id: Set(Some(user.user_id)),
            book_id: Set(book.book_id),
            quantity: Set(1),
            ..Default::default()
        };
        assert!(duplicate.insert(&db).await.is_err());

        Ok(())
    }

    #[tokio::test]
    async fn test_set_and_remove_basket_row() -> Result<()> {
        let (db, book) = setup_with_book(Decimal::ONE).await?;
        let user = create_test_user(&db, "edit@shop.test", "+50000000002").await?;
        let row = add_to_basket(&db, user.user_id, book.book_id, 1).await?;

        let row = set_basket_quantity(&db, row.basket_id, 7).await?;
        assert_eq!(row.quantity, 7);

        remove_from_basket(&db, row.basket_id).await?;
        assert!(get_basket(&db, user.user_id).await?.is_empty());

        let missing = remove_from_basket(&db, row.basket_id).await;
        assert!(matches!(missing, Err(Error::NotFound { .. })));

        Ok(())
    }

    #[tokio::test]
    async fn test_checkout_basket() -> Result<()> {
        let (db, book) = setup_with_book(Decimal::new(1250, 2)).await?;
        let refs = create_catalog_refs_named(&db, "checkout").await?;
        let other = create_custom_book(&db, &refs, "Other", "ISBN-CHK", Decimal::new(300, 2)).await?;
        let user = create_test_user(&db, "checkout@shop.test", "+50000000003").await?;

        add_to_basket(&db, user.user_id, book.book_id, 2).await?;
        add_to_basket(&db, user.user_id, other.book_id, 1).await?;

        let (order, lines) = checkout_basket(&db, user.user_id).await?;
        assert_eq!(order.user_id, Some(user.user_id));
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].price, Decimal::new(2500, 2));
        assert_eq!(lines[1].price, Decimal::new(300, 2));
        assert_eq!(compute_payment_amount(&lines)?, Decimal::new(2800, 2));

        assert!(get_basket(&db, user.user_id).await?.is_empty());

        let again = checkout_basket(&db, user.user_id).await;
        assert!(matches!(again, Err(Error::EmptyBasket)));

        Ok(())
    }
}
