// SPDX-License-Identifier: MPL-2.0
//! Review submission schema.
//!
//! [`ReviewInput`] declares the accepted shape of a review; [`validate_review`]
//! checks every field rule and either hands the input back untouched or
//! reports all failures at once.
//!
//! # Example
//!
//! ```
//! use campus_reviews::review::{validate_review, ReviewField, ReviewInput};
//!
//! let ok = ReviewInput::new(5.0, "Great dorm", "This place is wonderful and spacious.");
//! assert_eq!(validate_review(ok.clone()), Ok(ok));
//!
//! let bad = ReviewInput::new(0.0, "a", "short");
//! let violations = validate_review(bad).unwrap_err();
//! assert_eq!(violations.len(), 3);
//! assert!(violations.has(ReviewField::Rating));
//! ```

mod violation;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::review::{char_len, content_bounds, rating_bounds, title_bounds};
use crate::error::Result;

pub use violation::{ReviewField, ReviewViolations, Violation, ViolationCode};

/// A review submission.
///
/// Range and length limits mirror [`crate::domain::review`] and must stay in
/// step with it; lengths count characters, not bytes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ReviewInput {
    #[validate(range(min = 1.0, max = 5.0))]
    pub rating: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1.0, max = 5.0))]
    pub academic_rating: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1.0, max = 5.0))]
    pub campus_rating: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1.0, max = 5.0))]
    pub social_rating: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1.0, max = 5.0))]
    pub career_rating: Option<f64>,

    #[validate(length(min = 2, max = 100))]
    pub title: String,

    #[validate(length(min = 10, max = 2000))]
    pub content: String,
}

impl ReviewInput {
    /// Creates a submission with no sub-ratings.
    pub fn new(rating: f64, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            rating,
            academic_rating: None,
            campus_rating: None,
            social_rating: None,
            career_rating: None,
            title: title.into(),
            content: content.into(),
        }
    }

    #[must_use]
    pub fn academic_rating(mut self, rating: f64) -> Self {
        self.academic_rating = Some(rating);
        self
    }

    #[must_use]
    pub fn campus_rating(mut self, rating: f64) -> Self {
        self.campus_rating = Some(rating);
        self
    }

    #[must_use]
    pub fn social_rating(mut self, rating: f64) -> Self {
        self.social_rating = Some(rating);
        self
    }

    #[must_use]
    pub fn career_rating(mut self, rating: f64) -> Self {
        self.career_rating = Some(rating);
        self
    }

    /// Value of a rating field, `None` for text fields and unset sub-ratings.
    #[must_use]
    pub fn rating_of(&self, field: ReviewField) -> Option<f64> {
        match field {
            ReviewField::Rating => Some(self.rating),
            ReviewField::AcademicRating => self.academic_rating,
            ReviewField::CampusRating => self.campus_rating,
            ReviewField::SocialRating => self.social_rating,
            ReviewField::CareerRating => self.career_rating,
            ReviewField::Title | ReviewField::Content => None,
        }
    }

    /// Which side of its bounds a failing field is on.
    fn violation_code(&self, field: ReviewField) -> ViolationCode {
        let too_small = match field {
            ReviewField::Title => char_len(&self.title) < title_bounds::MIN_CHARS,
            ReviewField::Content => char_len(&self.content) < content_bounds::MIN_CHARS,
            _ => self
                .rating_of(field)
                .is_some_and(|value| value < rating_bounds::MIN),
        };
        if too_small {
            ViolationCode::TooSmall
        } else {
            ViolationCode::TooBig
        }
    }
}

/// Checks every field rule of `input`.
///
/// Returns the input unchanged when all rules pass, otherwise every
/// violation in field order. Pure; no rule short-circuits another.
///
/// # Errors
///
/// Returns [`ReviewViolations`] when at least one field is out of bounds.
pub fn validate_review(input: ReviewInput) -> std::result::Result<ReviewInput, ReviewViolations> {
    let mut violations = Vec::new();

    if let Err(errors) = input.validate() {
        for (name, field_errors) in errors.field_errors() {
            let name: &str = name.as_ref();
            let Some(field) = ReviewField::from_name(name) else {
                continue;
            };
            if input.rating_of(field).is_some_and(f64::is_nan) {
                continue;
            }
            if !field_errors.is_empty() {
                violations.push(Violation::new(field, input.violation_code(field)));
            }
        }
    }

    // NaN compares false against both bounds, so range checks let it through.
    for field in ReviewField::ALL.into_iter().filter(|f| f.is_rating()) {
        if input.rating_of(field).is_some_and(f64::is_nan) {
            violations.push(Violation::new(field, ViolationCode::NotANumber));
        }
    }

    if violations.is_empty() {
        Ok(input)
    } else {
        Err(ReviewViolations::new(violations))
    }
}

/// Parses a JSON review payload and validates it.
///
/// # Errors
///
/// Returns [`Error::Json`](crate::error::Error::Json) when the payload is not
/// a review-shaped JSON object, or
/// [`Error::InvalidReview`](crate::error::Error::InvalidReview) when a field
/// rule fails.
pub fn parse_review(json: &str) -> Result<ReviewInput> {
    let input: ReviewInput = serde_json::from_str(json)?;
    Ok(validate_review(input)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn valid() -> ReviewInput {
        ReviewInput::new(5.0, "Great dorm", "This place is wonderful and spacious.")
    }

    fn codes(violations: &ReviewViolations) -> Vec<(ReviewField, ViolationCode)> {
        violations.iter().map(|v| (v.field, v.code)).collect()
    }

    #[test]
    fn valid_review_is_returned_unchanged() {
        let input = valid().academic_rating(4.0).career_rating(1.0);
        assert_eq!(validate_review(input.clone()), Ok(input));
    }

    #[test]
    fn every_failing_field_is_reported() {
        let violations = validate_review(ReviewInput::new(0.0, "a", "short"))
            .expect_err("three fields are out of bounds");

        assert_eq!(
            codes(&violations),
            vec![
                (ReviewField::Rating, ViolationCode::TooSmall),
                (ReviewField::Title, ViolationCode::TooSmall),
                (ReviewField::Content, ViolationCode::TooSmall),
            ]
        );
        let messages: Vec<_> = violations.iter().map(|v| v.message.as_str()).collect();
        assert_eq!(
            messages,
            vec![
                "Rating is required",
                "Title is too short",
                "Review must be at least 10 characters"
            ]
        );
    }

    #[test]
    fn rating_above_maximum_is_the_only_violation() {
        let violations = validate_review(ReviewInput::new(6.0, "ok", "1234567890"))
            .expect_err("rating is above maximum");

        assert_eq!(
            codes(&violations),
            vec![(ReviewField::Rating, ViolationCode::TooBig)]
        );
    }

    #[test]
    fn bounds_are_inclusive() {
        let low = ReviewInput::new(1.0, "ok", "1234567890");
        let high = ReviewInput::new(5.0, "t".repeat(100), "c".repeat(2000));
        assert!(validate_review(low).is_ok());
        assert!(validate_review(high).is_ok());
    }

    #[test]
    fn derive_limits_agree_with_domain_bounds() {
        let text = |n: u64| "x".repeat(n as usize);
        let title_ok = text(title_bounds::MIN_CHARS);
        let content_ok = text(content_bounds::MIN_CHARS);
        let review = |rating: f64, title: &str, content: &str| {
            ReviewInput::new(rating, title, content)
                .academic_rating(rating)
                .campus_rating(rating)
                .social_rating(rating)
                .career_rating(rating)
        };

        for rating in [rating_bounds::MIN, rating_bounds::MAX] {
            assert!(validate_review(review(rating, &title_ok, &content_ok)).is_ok());
        }
        assert!(validate_review(review(
            3.0,
            &text(title_bounds::MAX_CHARS),
            &text(content_bounds::MAX_CHARS)
        ))
        .is_ok());

        let below = validate_review(review(
            rating_bounds::MIN - 0.01,
            &text(title_bounds::MIN_CHARS - 1),
            &text(content_bounds::MIN_CHARS - 1),
        ))
        .expect_err("every field is one step below its minimum");
        assert_eq!(below.len(), ReviewField::ALL.len());
        assert!(below.iter().all(|v| v.code == ViolationCode::TooSmall));

        let above = validate_review(review(
            rating_bounds::MAX + 0.01,
            &text(title_bounds::MAX_CHARS + 1),
            &text(content_bounds::MAX_CHARS + 1),
        ))
        .expect_err("every field is one step above its maximum");
        assert_eq!(above.len(), ReviewField::ALL.len());
        assert!(above.iter().all(|v| v.code == ViolationCode::TooBig));
    }

    #[test]
    fn text_above_maximum_is_too_big() {
        let input = ReviewInput::new(3.0, "t".repeat(101), "c".repeat(2001));
        let violations = validate_review(input).expect_err("both texts are too long");

        assert_eq!(
            codes(&violations),
            vec![
                (ReviewField::Title, ViolationCode::TooBig),
                (ReviewField::Content, ViolationCode::TooBig),
            ]
        );
        assert!(violations.iter().any(|v| v.message == "Title is too long"));
        assert!(violations.iter().any(|v| v.message == "Review is too long"));
    }

    #[test]
    fn lengths_count_characters() {
        // Two characters, four bytes.
        let input = ReviewInput::new(3.0, "éé", "ééééééééé");
        let violations = validate_review(input).expect_err("content has nine characters");
        assert_eq!(
            codes(&violations),
            vec![(ReviewField::Content, ViolationCode::TooSmall)]
        );
    }

    #[test]
    fn sub_ratings_are_checked_only_when_present() {
        let input = valid().academic_rating(0.5).social_rating(5.5);
        let violations = validate_review(input).expect_err("two sub-ratings are out of bounds");

        assert_eq!(
            codes(&violations),
            vec![
                (ReviewField::AcademicRating, ViolationCode::TooSmall),
                (ReviewField::SocialRating, ViolationCode::TooBig),
            ]
        );
        assert!(!violations.has(ReviewField::CampusRating));
    }

    #[test]
    fn nan_ratings_are_rejected() {
        let input = ReviewInput::new(f64::NAN, "ok", "1234567890").campus_rating(f64::NAN);
        let violations = validate_review(input).expect_err("NaN is not a rating");

        assert_eq!(
            codes(&violations),
            vec![
                (ReviewField::Rating, ViolationCode::NotANumber),
                (ReviewField::CampusRating, ViolationCode::NotANumber),
            ]
        );
    }

    #[test]
    fn parse_review_reads_camel_case_json() {
        let json = r#"{
            "rating": 4,
            "academicRating": 3.5,
            "title": "Quiet floor",
            "content": "Thin walls but friendly neighbours."
        }"#;

        let review = parse_review(json).expect("payload is valid");
        assert_eq!(review.academic_rating, Some(3.5));
        assert_eq!(review.campus_rating, None);
        assert_eq!(review.title, "Quiet floor");
    }

    #[test]
    fn parse_review_reports_violations() {
        let json = r#"{"rating": 0, "title": "a", "content": "short"}"#;
        match parse_review(json) {
            Err(Error::InvalidReview(violations)) => assert_eq!(violations.len(), 3),
            other => panic!("expected InvalidReview, got {other:?}"),
        }
    }

    #[test]
    fn parse_review_rejects_malformed_payloads() {
        assert!(matches!(parse_review("{"), Err(Error::Json(_))));
        assert!(matches!(
            parse_review(r#"{"title": "no rating", "content": "1234567890"}"#),
            Err(Error::Json(_))
        ));
        assert!(matches!(
            parse_review(r#"{"rating": "five", "title": "ok", "content": "1234567890"}"#),
            Err(Error::Json(_))
        ));
    }

    #[test]
    fn serialization_omits_unset_sub_ratings() {
        let json = serde_json::to_value(valid()).expect("review should serialize");
        assert!(json.get("academicRating").is_none());
        assert_eq!(json["rating"], 5.0);
    }
}
