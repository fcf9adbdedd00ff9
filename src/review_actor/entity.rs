use chrono::Utc;

use crate::actor_framework::Entity;
use crate::domain::{is_blank, Review, ReviewCreate, ReviewPatch};
use super::ReviewError;

fn check_rating(rating: u8) -> Result<(), ReviewError> {
    if !(1..=5).contains(&rating) {
        return Err(ReviewError::ValidationError(format!(
            "rating must be between 1 and 5, got {rating}"
        )));
    }
    Ok(())
}

fn check_comment(comment: &str) -> Result<(), ReviewError> {
    if is_blank(comment) {
        return Err(ReviewError::ValidationError("comment is required".into()));
    }
    Ok(())
}

impl Review {
    pub fn ensure_author(&self, buyer_id: &str) -> Result<(), ReviewError> {
        if self.buyer_id != buyer_id {
            return Err(ReviewError::NotAuthor {
                review_id: self.id.clone(),
                buyer_id: buyer_id.to_string(),
            });
        }
        Ok(())
    }
}

impl Entity for Review {
    type Id = String;
    type CreatePayload = ReviewCreate;
    type Patch = ReviewPatch;
    type Action = ();
    type ActionResult = ();
    type Error = ReviewError;

    fn id(&self) -> &String {
        &self.id
    }

    fn from_create(id: String, payload: ReviewCreate) -> Result<Self, ReviewError> {
        check_rating(payload.rating)?;
        check_comment(&payload.comment)?;
        let now = Utc::now();
        Ok(Self {
            id,
            buyer_id: payload.buyer_id,
            product_id: payload.product_id,
            order_id: payload.order_id,
            rating: payload.rating,
            comment: payload.comment.trim().to_string(),
            image: payload.image,
            created_at: now,
            updated_at: now,
        })
    }

    /// One review per product per order.
    fn conflict_key(&self) -> Option<String> {
        Some(format!("{}/{}", self.order_id, self.product_id))
    }

    fn on_update(&mut self, patch: ReviewPatch) -> Result<(), ReviewError> {
        self.ensure_author(&patch.buyer_id)?;
        if let Some(rating) = patch.rating {
            check_rating(rating)?;
        }
        if let Some(comment) = &patch.comment {
            check_comment(comment)?;
        }

        if let Some(rating) = patch.rating {
            self.rating = rating;
        }
        if let Some(comment) = patch.comment {
            self.comment = comment.trim().to_string();
        }
        if patch.image.is_some() {
            self.image = patch.image;
        }
        self.updated_at = Utc::now();
        Ok(())
    }

    fn handle_action(&mut self, _action: ()) -> Result<(), ReviewError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create(rating: u8, comment: &str) -> ReviewCreate {
        ReviewCreate {
            buyer_id: "user_1".into(),
            product_id: "product_1".into(),
            order_id: "order_1".into(),
            rating,
            comment: comment.into(),
            image: None,
        }
    }

    #[test]
    fn test_rating_bounds() {
        assert!(Review::from_create("review_1".into(), create(1, "ok")).is_ok());
        assert!(Review::from_create("review_1".into(), create(5, "great")).is_ok());
        assert!(Review::from_create("review_1".into(), create(0, "bad")).is_err());
        assert!(Review::from_create("review_1".into(), create(6, "too good")).is_err());
    }

    #[test]
    fn test_comment_required() {
        assert_eq!(
            Review::from_create("review_1".into(), create(4, "   ")),
            Err(ReviewError::ValidationError("comment is required".into()))
        );
    }

    #[test]
    fn test_edit_rating_and_comment() {
        let mut review = Review::from_create("review_1".into(), create(3, "fine")).unwrap();
        review
            .on_update(ReviewPatch {
                buyer_id: "user_1".into(),
                rating: Some(5),
                comment: Some("Sweet and fresh".into()),
                image: None,
            })
            .unwrap();
        assert_eq!(review.rating, 5);
        assert_eq!(review.comment, "Sweet and fresh");
    }

    #[test]
    fn test_only_the_author_edits() {
        let mut review = Review::from_create("review_1".into(), create(3, "fine")).unwrap();
        let patch = ReviewPatch {
            buyer_id: "user_9".into(),
            rating: Some(1),
            ..ReviewPatch::default()
        };
        assert_eq!(
            review.on_update(patch),
            Err(ReviewError::NotAuthor {
                review_id: "review_1".into(),
                buyer_id: "user_9".into(),
            })
        );
        assert_eq!(review.rating, 3);
    }

    #[tokio::test]
    async fn test_store_holds_one_review_per_order_line() {
        use crate::actor_framework::ResourceActor;
        use std::sync::atomic::{AtomicU64, Ordering};

        let seq = AtomicU64::new(1);
        let next_id = move || format!("review_{}", seq.fetch_add(1, Ordering::SeqCst));
        let (actor, reviews) = ResourceActor::<Review>::new("reviews", 10, next_id);
        tokio::spawn(actor.run());

        let submissions = (0..8).map(|_| {
            let reviews = reviews.clone();
            tokio::spawn(async move { reviews.create(create(5, "great")).await })
        });
        let mut stored = 0;
        for submission in submissions.collect::<Vec<_>>() {
            match submission.await.unwrap() {
                Ok(_) => stored += 1,
                Err(e) => assert_eq!(e, ReviewError::AlreadyExists("order_1/product_1".into())),
            }
        }
        assert_eq!(stored, 1);
    }
}
