//! Subscription business logic - Users following authors and publishers.
//!
//! Each subscription row targets exactly one author or one publisher.
//! Subscribing twice to the same target returns the existing row.

use crate::{
    entities::{Author, Publisher, Subscription, subscription},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, prelude::*};
use tracing::debug;

/// Subscribes a user to an author's new releases.
pub async fn subscribe_to_author(
    db: &DatabaseConnection,
    user_id: Uuid,
    author_id: i32,
) -> Result<subscription::Model> {
    Author::find_by_id(author_id)
        .one(db)
        .await?
        .ok_or_else(|| Error::not_found("Author", author_id))?;

    let existing = Subscription::find()
        .filter(subscription::Column::UserId.eq(user_id))
        .filter(subscription::Column::AuthorId.eq(author_id))
        .one(db)
        .await?;
    if let Some(row) = existing {
        return Ok(row);
    }

    let row = subscription::ActiveModel {
        user_id: Set(Some(user_id)),
        author_id: Set(Some(author_id)),
        publisher_id: Set(None),
        ..Default::default()
    }
    .insert(db)
    .await?;
    debug!(%user_id, author_id, "Subscribed to author");
    Ok(row)
}

/// Subscribes a user to a publisher's new releases.
pub async fn subscribe_to_publisher(
    db: &DatabaseConnection,
    user_id: Uuid,
    publisher_id: i32,
) -> Result<subscription::Model> {
    Publisher::find_by_id(publisher_id)
        .one(db)
        .await?
        .ok_or_else(|| Error::not_found("Publisher", publisher_id))?;

    let existing = Subscription::find()
        .filter(subscription::Column::UserId.eq(user_id))
        .filter(subscription::Column::PublisherId.eq(publisher_id))
        .one(db)
        .await?;
    if let Some(row) = existing {
        return Ok(row);
    }

    let row = subscription::ActiveModel {
        user_id: Set(Some(user_id)),
        author_id: Set(None),
        publisher_id: Set(Some(publisher_id)),
        ..Default::default()
    }
    .insert(db)
    .await?;
    debug!(%user_id, publisher_id, "Subscribed to publisher");
    Ok(row)
}

/// Removes a subscription.
pub async fn unsubscribe(db: &DatabaseConnection, subscriptions_id: i32) -> Result<()> {
    let result = Subscription::delete_by_id(subscriptions_id).exec(db).await?;
    if result.rows_affected == 0 {
        return Err(Error::not_found("Subscription", subscriptions_id));
    }
    Ok(())
}

/// Lists everything a user follows.
pub async fn get_subscriptions_for_user(
    db: &DatabaseConnection,
    user_id: Uuid,
) -> Result<Vec<subscription::Model>> {
    Subscription::find()
        .filter(subscription::Column::UserId.eq(user_id))
        .order_by_asc(subscription::Column::SubscriptionsId)
        .all(db)
        .await
        .map_err(Into::into)
}

/// IDs of the users following an author, e.g. to announce a new book.
pub async fn get_author_subscribers(db: &DatabaseConnection, author_id: i32) -> Result<Vec<Uuid>> {
    let rows = Subscription::find()
        .filter(subscription::Column::AuthorId.eq(author_id))
        .all(db)
        .await?;
    Ok(rows.into_iter().filter_map(|row| row.user_id).collect())
}
