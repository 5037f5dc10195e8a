// SPDX-License-Identifier: MPL-2.0
use campus_reviews::review::{validate_review, ReviewField, ReviewInput, ViolationCode};
use proptest::prelude::*;

fn in_bounds_rating() -> impl Strategy<Value = f64> {
    1.0f64..=5.0
}

fn valid_review() -> impl Strategy<Value = ReviewInput> {
    (
        in_bounds_rating(),
        proptest::option::of(in_bounds_rating()),
        proptest::option::of(in_bounds_rating()),
        "[a-zA-Z ]{2,100}",
        "[a-zA-Z .]{10,300}",
    )
        .prop_map(|(rating, academic, career, title, content)| {
            let mut review = ReviewInput::new(rating, title, content);
            review.academic_rating = academic;
            review.career_rating = career;
            review
        })
}

proptest! {
    #[test]
    fn valid_reviews_come_back_unchanged(review in valid_review()) {
        prop_assert_eq!(validate_review(review.clone()), Ok(review));
    }

    #[test]
    fn low_ratings_report_rating_is_required(review in valid_review(), rating in -100.0f64..0.999) {
        let review = ReviewInput { rating, ..review };
        let violations = validate_review(review).expect_err("rating is below minimum");

        prop_assert_eq!(violations.len(), 1);
        let violation = violations.iter().next().expect("one violation");
        prop_assert_eq!(violation.field, ReviewField::Rating);
        prop_assert_eq!(violation.code, ViolationCode::TooSmall);
        prop_assert_eq!(violation.message.as_str(), "Rating is required");
    }

    #[test]
    fn high_sub_ratings_are_too_big(review in valid_review(), rating in 5.001f64..100.0) {
        let review = review.social_rating(rating);
        let violations = validate_review(review).expect_err("sub-rating is above maximum");

        let fields: Vec<_> = violations.iter().map(|v| (v.field, v.code)).collect();
        prop_assert_eq!(fields, vec![(ReviewField::SocialRating, ViolationCode::TooBig)]);
    }

    #[test]
    fn short_titles_are_too_short(review in valid_review(), title in "[a-z]{0,1}") {
        let review = ReviewInput { title, ..review };
        let violations = validate_review(review).expect_err("title is too short");

        prop_assert!(violations.has(ReviewField::Title));
        prop_assert_eq!(violations.len(), 1);
    }
}
