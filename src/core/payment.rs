//! Payment business logic - Creating payments and reconciling their amount.
//!
//! Every payment save (create, status change, explicit recalculation) sums the
//! order's current line prices and stores that as the amount, inside the same
//! database transaction as the read. Line-item writes call
//! [`reconcile_order_payment`] so a pending payment never goes stale; once a
//! payment has succeeded or been refunded the order is frozen.

use crate::{
    core::pricing::compute_payment_amount,
    entities::{OrderDetail, Payment, PaymentStatus, order_detail, payment},
    errors::{Error, Result},
};
use sea_orm::{Set, TransactionTrait, prelude::*};
use tracing::{debug, info, instrument};

pub(crate) async fn find_payment_for_order<C>(db: &C, order_id: Uuid) -> Result<Option<payment::Model>>
where
    C: ConnectionTrait,
{
    Payment::find()
        .filter(payment::Column::OrderId.eq(order_id))
        .one(db)
        .await
        .map_err(Into::into)
}

pub(crate) async fn order_total<C>(db: &C, order_id: Uuid) -> Result<Decimal>
where
    C: ConnectionTrait,
{
    let line_items = OrderDetail::find()
        .filter(order_detail::Column::OrderId.eq(order_id))
        .all(db)
        .await?;
    compute_payment_amount(&line_items)
}

/// Fails with [`Error::OrderFinalized`] if the order's payment is settled.
///
/// Returns the payment, if any, so the caller can reconcile it after writing.
pub(crate) async fn ensure_order_open<C>(db: &C, order_id: Uuid) -> Result<Option<payment::Model>>
where
    C: ConnectionTrait,
{
    let payment = find_payment_for_order(db, order_id).await?;
    if payment.as_ref().is_some_and(|p| p.status.is_settled()) {
        return Err(Error::OrderFinalized {
            order_id: order_id.to_string(),
        });
    }
    Ok(payment)
}

/// Re-saves a payment with its amount recomputed from the order's line items.
pub(crate) async fn reconcile_order_payment<C>(
    db: &C,
    payment: payment::Model,
) -> Result<payment::Model>
where
    C: ConnectionTrait,
{
    let amount = order_total(db, payment.order_id).await?;
    debug!(payment_id = %payment.payment_id, %amount, "Reconciling payment amount");

    let mut payment: payment::ActiveModel = payment.into();
    payment.amount = Set(amount);
    payment.update(db).await.map_err(Into::into)
}

/// Records the payment for an order.
///
/// The amount is the sum of the order's line prices at this moment (zero for
/// an order without lines). A transaction reference is generated and the
/// status starts as pending.
///
/// # Errors
/// Returns an error if:
/// - The order does not exist
/// - The order already has a payment ([`Error::Conflict`])
/// - The database operation fails
#[instrument(skip(db, payment_method))]
pub async fn create_payment(
    db: &DatabaseConnection,
    order_id: Uuid,
    user_id: Uuid,
    payment_method: &str,
) -> Result<payment::Model> {
    let txn = db.begin().await?;

    crate::entities::Order::find_by_id(order_id)
        .one(&txn)
        .await?
        .ok_or_else(|| Error::not_found("Order", order_id))?;

    if find_payment_for_order(&txn, order_id).await?.is_some() {
        return Err(Error::Conflict {
            message: format!("Order {order_id} already has a payment"),
        });
    }

    let amount = order_total(&txn, order_id).await?;
    let payment = payment::ActiveModel {
        payment_id: Set(Uuid::new_v4()),
        user_id: Set(user_id),
        order_id: Set(order_id),
        payment_date: Set(chrono::Utc::now()),
        amount: Set(amount),
        payment_method: Set(payment_method.to_string()),
        transaction_id: Set(Uuid::new_v4()),
        status: Set(PaymentStatus::Pending),
    };
    let payment = payment
        .insert(&txn)
        .await
        .map_err(|e| Error::from_unique_violation(e, "Payment"))?;

    txn.commit().await?;

    info!(payment_id = %payment.payment_id, amount = %payment.amount, "Created payment");
    Ok(payment)
}

/// Retrieves a payment by its unique ID.
pub async fn get_payment_by_id(
    db: &DatabaseConnection,
    payment_id: Uuid,
) -> Result<Option<payment::Model>> {
    Payment::find_by_id(payment_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Retrieves the payment of an order, if one was recorded.
pub async fn get_payment_for_order(
    db: &DatabaseConnection,
    order_id: Uuid,
) -> Result<Option<payment::Model>> {
    find_payment_for_order(db, order_id).await
}

/// Re-saves a payment, recomputing its amount from the current line items.
pub async fn recalculate_payment(
    db: &DatabaseConnection,
    payment_id: Uuid,
) -> Result<payment::Model> {
    let txn = db.begin().await?;

    let payment = Payment::find_by_id(payment_id)
        .one(&txn)
        .await?
        .ok_or_else(|| Error::not_found("Payment", payment_id))?;
    let payment = reconcile_order_payment(&txn, payment).await?;

    txn.commit().await?;
    Ok(payment)
}

/// Changes a payment's status, recomputing the amount in the same save.
///
/// Moving to `Succeeded` or `Refunded` freezes the order's line items.
#[instrument(skip(db))]
pub async fn update_payment_status(
    db: &DatabaseConnection,
    payment_id: Uuid,
    status: PaymentStatus,
) -> Result<payment::Model> {
    let txn = db.begin().await?;

    let payment = Payment::find_by_id(payment_id)
        .one(&txn)
        .await?
        .ok_or_else(|| Error::not_found("Payment", payment_id))?;
    let amount = order_total(&txn, payment.order_id).await?;

    let mut payment: payment::ActiveModel = payment.into();
    payment.amount = Set(amount);
    payment.status = Set(status);
    let payment = payment.update(&txn).await?;

    txn.commit().await?;

    info!(status = %payment.status, "Payment status changed");
    Ok(payment)
}
