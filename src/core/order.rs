//! Order business logic - Creating orders and moving them through their lifecycle.
//!
//! Orders are created empty in `PaymentPending`. Line items are managed by
//! `core::order_detail` and the payment by `core::payment`. Status changes are
//! not validated against a transition graph; any status may follow any other.

use crate::{
    entities::{
        Order, OrderDetail, OrderStatus, Payment, order, order_detail, payment,
    },
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, prelude::*};
use tracing::{info, instrument};

/// An order together with its line items and payment, if any.
#[derive(Debug, Clone)]
pub struct OrderSummary {
    pub order: order::Model,
    pub line_items: Vec<order_detail::Model>,
    pub payment: Option<payment::Model>,
}

pub(crate) async fn insert_order<C>(db: &C, user_id: Option<Uuid>) -> Result<order::Model>
where
    C: ConnectionTrait,
{
    let order = order::ActiveModel {
        order_id: Set(Uuid::new_v4()),
        user_id: Set(user_id),
        order_date: Set(chrono::Utc::now()),
        status: Set(OrderStatus::PaymentPending),
    };
    order.insert(db).await.map_err(Into::into)
}

/// Creates an empty order for a user, or an anonymous one when `user_id` is None.
#[instrument(skip(db))]
pub async fn create_order(db: &DatabaseConnection, user_id: Option<Uuid>) -> Result<order::Model> {
    let order = insert_order(db, user_id).await?;
    info!(order_id = %order.order_id, "Created order");
    Ok(order)
}

/// Retrieves an order by its unique ID.
pub async fn get_order_by_id(
    db: &DatabaseConnection,
    order_id: Uuid,
) -> Result<Option<order::Model>> {
    Order::find_by_id(order_id).one(db).await.map_err(Into::into)
}

/// Lists a user's orders, newest first.
pub async fn get_orders_for_user(
    db: &DatabaseConnection,
    user_id: Uuid,
) -> Result<Vec<order::Model>> {
    Order::find()
        .filter(order::Column::UserId.eq(user_id))
        .order_by_desc(order::Column::OrderDate)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Sets an order's status. The order date is never touched.
#[instrument(skip(db))]
pub async fn update_order_status(
    db: &DatabaseConnection,
    order_id: Uuid,
    status: OrderStatus,
) -> Result<order::Model> {
    let mut order: order::ActiveModel = Order::find_by_id(order_id)
        .one(db)
        .await?
        .ok_or_else(|| Error::not_found("Order", order_id))?
        .into();

    order.status = Set(status);
    let order = order.update(db).await?;
    info!(status = %order.status, "Order status changed");
    Ok(order)
}

/// Loads an order with its line items and payment.
pub async fn get_order_summary(db: &DatabaseConnection, order_id: Uuid) -> Result<OrderSummary> {
    let order = Order::find_by_id(order_id)
        .one(db)
        .await?
        .ok_or_else(|| Error::not_found("Order", order_id))?;

    let line_items = OrderDetail::find()
        .filter(order_detail::Column::OrderId.eq(order_id))
        .all(db)
        .await?;

    let payment = Payment::find()
        .filter(payment::Column::OrderId.eq(order_id))
        .one(db)
        .await?;

    Ok(OrderSummary {
        order,
        line_items,
        payment,
    })
}
