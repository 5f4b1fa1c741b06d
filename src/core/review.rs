//! Review business logic - Ratings and comments on books.
//!
//! A user may review a book once; ratings are optional but must lie in 1..=5.
//! Both rules are checked here and backed by database constraints.

use crate::{
    entities::{Review, review},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, prelude::*};
use tracing::instrument;

const MAX_COMMENT_LEN: usize = 255;

/// Inclusive rating bounds.
pub const RATING_RANGE: std::ops::RangeInclusive<i16> = 1..=5;

/// Posts a review.
///
/// # Errors
/// Returns an error if:
/// - The rating is outside 1..=5 ([`Error::InvalidRating`])
/// - The comment is longer than 255 characters
/// - The user already reviewed this book ([`Error::DuplicateReview`])
/// - The book does not exist
#[instrument(skip(db, comment))]
pub async fn create_review(
    db: &DatabaseConnection,
    user_id: Option<Uuid>,
    book_id: Uuid,
    rating: Option<i16>,
    comment: &str,
) -> Result<review::Model> {
    if let Some(rating) = rating.filter(|r| !RATING_RANGE.contains(r)) {
        return Err(Error::InvalidRating { rating });
    }
    if comment.chars().count() > MAX_COMMENT_LEN {
        return Err(Error::Validation {
            message: format!("Comment cannot exceed {MAX_COMMENT_LEN} characters"),
        });
    }

    if let Some(user_id) = user_id {
        let existing = Review::find()
            .filter(review::Column::UserId.eq(user_id))
            .filter(review::Column::BookId.eq(book_id))
            .one(db)
            .await?;
        if existing.is_some() {
            return Err(Error::DuplicateReview {
                user_id: user_id.to_string(),
                book_id: book_id.to_string(),
            });
        }
    }

    let review = review::ActiveModel {
        user_id: Set(user_id),
        book_id: Set(book_id),
        rating: Set(rating),
        comment: Set(comment.to_string()),
        review_date: Set(chrono::Utc::now().date_naive()),
        ..Default::default()
    };
    review
        .insert(db)
        .await
        .map_err(|e| Error::from_unique_violation(e, "Review"))
}

/// Lists the reviews of a book, newest first.
pub async fn get_reviews_for_book(
    db: &DatabaseConnection,
    book_id: Uuid,
) -> Result<Vec<review::Model>> {
    Review::find()
        .filter(review::Column::BookId.eq(book_id))
        .order_by_desc(review::Column::ReviewDate)
        .order_by_desc(review::Column::ReviewsId)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Mean of the ratings given to a book, ignoring reviews without a rating.
///
/// Returns `None` when the book has no rated reviews.
pub async fn average_rating_for_book(db: &DatabaseConnection, book_id: Uuid) -> Result<Option<f64>> {
    let ratings: Vec<i16> = get_reviews_for_book(db, book_id)
        .await?
        .into_iter()
        .filter_map(|review| review.rating)
        .collect();

    if ratings.is_empty() {
        return Ok(None);
    }

    let total: i32 = ratings.iter().map(|&r| i32::from(r)).sum();
    #[allow(clippy::cast_precision_loss)]
    Ok(Some(f64::from(total) / ratings.len() as f64))
}

/// Deletes a review.
pub async fn delete_review(db: &DatabaseConnection, reviews_id: i64) -> Result<()> {
    let result = Review::delete_by_id(reviews_id).exec(db).await?;
    if result.rows_affected == 0 {
        return Err(Error::not_found("Review", reviews_id));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    #[tokio::test]
    async fn test_rating_range_validation() -> Result<()> {
        let db = MockDatabase::new(DatabaseBackend::Sqlite).into_connection();

        let result = create_review(&db, None, Uuid::new_v4(), Some(0), "meh").await;
        assert!(matches!(result, Err(Error::InvalidRating { rating: 0 })));

        let result = create_review(&db, None, Uuid::new_v4(), Some(6), "wow").await;
        assert!(matches!(result, Err(Error::InvalidRating { rating: 6 })));

        let long_comment = "x".repeat(256);
        let result = create_review(&db, None, Uuid::new_v4(), Some(3), &long_comment).await;
        assert!(matches!(result, Err(Error::Validation { message: _ })));

        Ok(())
    }

    #[tokio::test]
    async fn test_rating_bounds_are_inclusive() -> Result<()> {
        let (db, book) = setup_with_book(Decimal::ONE).await?;
        let low = create_test_user(&db, "low@shop.test", "+40000000001").await?;
        let high = create_test_user(&db, "high@shop.test", "+40000000002").await?;

        let one = create_review(&db, Some(low.user_id), book.book_id, Some(1), "poor").await?;
        let five = create_review(&db, Some(high.user_id), book.book_id, Some(5), "great").await?;
        assert_eq!(one.rating, Some(1));
        assert_eq!(five.rating, Some(5));

        Ok(())
    }

    #[tokio::test]
    async fn test_one_review_per_user_and_book() -> Result<()> {
        let (db, book) = setup_with_book(Decimal::ONE).await?;
        let user = create_test_user(&db, "critic@shop.test", "+40000000003").await?;

        create_review(&db, Some(user.user_id), book.book_id, Some(4), "good").await?;
        let second = create_review(&db, Some(user.user_id), book.book_id, Some(2), "changed my mind").await;
        assert!(matches!(second, Err(Error::DuplicateReview { .. })));

        Ok(())
    }

    #[tokio::test]
    async fn test_database_enforces_review_constraints() -> Result<()> {
        let (db, book) = setup_with_book(Decimal::ONE).await?;
        let user = create_test_user(&db, "direct@shop.test", "+40000000004").await?;

        let row = |rating: Option<i16>| review::ActiveModel {
            user_id: Set(Some(user.user_id)),
            book_id: Set(book.book_id),
            rating: Set(rating),
            comment: Set("direct insert".to_string()),
            review_date: Set(chrono::Utc::now().date_naive()),
            ..Default::default()
        };

        // Range check holds even when the core validation is bypassed
        assert!(row(Some(0)).insert(&db).await.is_err());
        assert!(row(Some(6)).insert(&db).await.is_err());

        // Unique (user, book) index holds as well
        row(Some(3)).insert(&db).await?;
        assert!(row(Some(4)).insert(&db).await.is_err());

        Ok(())
    }

    #[tokio::test]
    async fn test_average_rating() -> Result<()> {
        let (db, book) = setup_with_book(Decimal::ONE).await?;
        assert_eq!(average_rating_for_book(&db, book.book_id).await?, None);

        let a = create_test_user(&db, "a@shop.test", "+40000000005").await?;
        let b = create_test_user(&db, "b@shop.test", "+40000000006").await?;
        let c = create_test_user(&db, "c@shop.test", "+40000000007").await?;

        create_review(&db, Some(a.user_id), book.book_id, Some(4), "").await?;
        create_review(&db, Some(b.user_id), book.book_id, Some(5), "").await?;
        create_review(&db, Some(c.user_id), book.book_id, None, "no stars").await?;

        assert_eq!(average_rating_for_book(&db, book.book_id).await?, Some(4.5));
        assert_eq!(get_reviews_for_book(&db, book.book_id).await?.len(), 3);

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_review() -> Result<()> {
        let (db, book) = setup_with_book(Decimal::ONE).await?;
        let user = create_test_user(&db, "del@shop.test", "+40000000008").await?;
        let review = create_review(&db, Some(user.user_id), book.book_id, Some(2), "").await?;

        delete_review(&db, review.reviews_id).await?;
        assert!(get_reviews_for_book(&db, book.book_id).await?.is_empty());

        let again = delete_review(&db, review.reviews_id).await;
        assert!(matches!(again, Err(Error::NotFound { .. })));

        // The user can review again after deleting
        create_review(&db, Some(user.user_id), book.book_id, Some(3), "").await?;

        Ok(())
    }
}
