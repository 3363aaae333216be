// storefront-site/src/models/review.rs

use super::validation::{is_email, parse_or_default, FieldErrors};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;
pub const MAX_COMMENT_CHARS: usize = 2000;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
  pub id: Uuid,
  pub product_id: Uuid,
  pub author: String,
  pub rating: u8,
  pub title: String,
  pub comment: String,
  pub helpful_count: u32,
  /// Reviewer bought the product (matched by billing email).
  pub verified: bool,
  pub created_at: DateTime<Utc>,
}

/// Review form payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewReview {
  pub author: String,
  pub email: String,
  // Unselected star inputs are absent from the form body; anything that is
  // not a number reads as 0 and fails validation.
  #[serde(default, deserialize_with = "parse_or_default")]
  pub rating: u8,
  #[serde(default)]
  pub title: String,
  pub comment: String,
}

impl NewReview {
  pub fn validate(&self) -> FieldErrors {
    let mut errors = FieldErrors::default();
    errors.require("author", &self.author, "Please tell us your name.");
    if !is_email(&self.email) {
      errors.add("email", "Please enter a valid email address.");
    }
    if !(MIN_RATING..=MAX_RATING).contains(&self.rating) {
      errors.add("rating", "Rating must be between 1 and 5 stars.");
    }
    errors.require("comment", &self.comment, "Please write a short review.");
    if self.comment.chars().count() > MAX_COMMENT_CHARS {
      errors.add("comment", "Reviews are limited to 2000 characters.");
    }
    errors
  }
}

/// Mean rating rounded to one decimal; 0.0 without reviews.
pub fn average_rating(reviews: &[Review]) -> f32 {
  if reviews.is_empty() {
    return 0.0;
  }
  let sum: u32 = reviews.iter().map(|r| u32::from(r.rating)).sum();
  let mean = sum as f32 / reviews.len() as f32;
  (mean * 10.0).round() / 10.0
}
