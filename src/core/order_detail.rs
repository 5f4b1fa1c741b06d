//! Line item business logic - Adding, changing and removing order lines.
//!
//! Every write recomputes the line price from the book's current unit price
//! (see [`compute_line_price`]) and, in the same database transaction,
//! reconciles the order's payment amount if the payment is still open.
//! Orders whose payment has succeeded or been refunded reject line-item writes.

use crate::{
    core::{
        payment::{ensure_order_open, reconcile_order_payment},
        pricing::compute_line_price,
    },
    entities::{Book, Order, OrderDetail, book, order_detail},
    errors::{Error, Result},
};
use sea_orm::{Set, TransactionTrait, prelude::*};
use tracing::{debug, instrument};

pub(crate) async fn insert_line_item<C>(
    db: &C,
    order_id: Uuid,
    book: &book::Model,
    quantity: Option<i16>,
) -> Result<order_detail::Model>
where
    C: ConnectionTrait,
{
    let price = compute_line_price(book.price_book, quantity)?;

    let line_item = order_detail::ActiveModel {
        order_detail_id: Set(Uuid::new_v4()),
        order_id: Set(order_id),
        book_id: Set(book.book_id),
        quantity: Set(quantity),
        price: Set(price),
    };
    line_item.insert(db).await.map_err(Into::into)
}

async fn find_book<C>(db: &C, book_id: Uuid) -> Result<book::Model>
where
    C: ConnectionTrait,
{
    Book::find_by_id(book_id)
        .one(db)
        .await?
        .ok_or_else(|| Error::not_found("Book", book_id))
}

async fn find_line_item<C>(db: &C, order_detail_id: Uuid) -> Result<order_detail::Model>
where
    C: ConnectionTrait,
{
    OrderDetail::find_by_id(order_detail_id)
        .one(db)
        .await?
        .ok_or_else(|| Error::not_found("Order detail", order_detail_id))
}

/// Re-saves a line item with the given quantity, priced from the book's
/// current unit price, then reconciles the open payment.
async fn save_line_item<C>(
    db: &C,
    line_item: order_detail::Model,
    quantity: Option<i16>,
) -> Result<order_detail::Model>
where
    C: ConnectionTrait,
{
    let payment = ensure_order_open(db, line_item.order_id).await?;
    let book = find_book(db, line_item.book_id).await?;
    let price = compute_line_price(book.price_book, quantity)?;

    let mut active: order_detail::ActiveModel = line_item.into();
    active.quantity = Set(quantity);
    active.price = Set(price);
    let line_item = active.update(db).await?;

    if let Some(payment) = payment {
        reconcile_order_payment(db, payment).await?;
    }
    Ok(line_item)
}

/// Adds a book to an order.
///
/// # Errors
/// Returns an error if:
/// - The order or the book does not exist
/// - The quantity is missing or not positive
/// - The order's payment is settled ([`Error::OrderFinalized`])
#[instrument(skip(db))]
pub async fn add_line_item(
    db: &DatabaseConnection,
    order_id: Uuid,
    book_id: Uuid,
    quantity: Option<i16>,
) -> Result<order_detail::Model> {
    let txn = db.begin().await?;

    Order::find_by_id(order_id)
        .one(&txn)
        .await?
        .ok_or_else(|| Error::not_found("Order", order_id))?;
    let payment = ensure_order_open(&txn, order_id).await?;
    let book = find_book(&txn, book_id).await?;

    let line_item = insert_line_item(&txn, order_id, &book, quantity).await?;
    if let Some(payment) = payment {
        reconcile_order_payment(&txn, payment).await?;
    }

    txn.commit().await?;

    debug!(price = %line_item.price, "Added line item");
    Ok(line_item)
}

/// Changes the quantity of a line item and recomputes its price.
pub async fn update_line_item_quantity(
    db: &DatabaseConnection,
    order_detail_id: Uuid,
    quantity: Option<i16>,
) -> Result<order_detail::Model> {
    let txn = db.begin().await?;
    let line_item = find_line_item(&txn, order_detail_id).await?;
    let line_item = save_line_item(&txn, line_item, quantity).await?;
    txn.commit().await?;
    Ok(line_item)
}

/// Re-saves a line item unchanged, picking up the book's current unit price.
pub async fn reprice_line_item(
    db: &DatabaseConnection,
    order_detail_id: Uuid,
) -> Result<order_detail::Model> {
    let txn = db.begin().await?;
    let line_item = find_line_item(&txn, order_detail_id).await?;
    let quantity = line_item.quantity;
    let line_item = save_line_item(&txn, line_item, quantity).await?;
    txn.commit().await?;
    Ok(line_item)
}

/// Removes a line item from its order.
pub async fn delete_line_item(db: &DatabaseConnection, order_detail_id: Uuid) -> Result<()> {
    let txn = db.begin().await?;

    let line_item = find_line_item(&txn, order_detail_id).await?;
    let payment = ensure_order_open(&txn, line_item.order_id).await?;
    line_item.delete(&txn).await?;

    if let Some(payment) = payment {
        reconcile_order_payment(&txn, payment).await?;
    }

    txn.commit().await?;
    Ok(())
}

/// Lists the line items of an order.
pub async fn get_line_items_for_order(
    db: &DatabaseConnection,
    order_id: Uuid,
) -> Result<Vec<order_detail::Model>> {
    OrderDetail::find()
        .filter(order_detail::Column::OrderId.eq(order_id))
        .all(db)
        .await
        .map_err(Into::into)
}
