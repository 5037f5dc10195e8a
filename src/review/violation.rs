// SPDX-License-Identifier: MPL-2.0
//! Field-level validation failures for review submissions.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::domain::review::{content_bounds, rating_bounds, title_bounds};

/// A field of a review submission.
///
/// Ordered by declaration, which is also the order violations are reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ReviewField {
    Rating,
    AcademicRating,
    CampusRating,
    SocialRating,
    CareerRating,
    Title,
    Content,
}

impl ReviewField {
    pub const ALL: [ReviewField; 7] = [
        ReviewField::Rating,
        ReviewField::AcademicRating,
        ReviewField::CampusRating,
        ReviewField::SocialRating,
        ReviewField::CareerRating,
        ReviewField::Title,
        ReviewField::Content,
    ];

    /// Name used in JSON payloads.
    #[must_use]
    pub fn wire_name(self) -> &'static str {
        match self {
            ReviewField::Rating => "rating",
            ReviewField::AcademicRating => "academicRating",
            ReviewField::CampusRating => "campusRating",
            ReviewField::SocialRating => "socialRating",
            ReviewField::CareerRating => "careerRating",
            ReviewField::Title => "title",
            ReviewField::Content => "content",
        }
    }

    /// Name of the Rust struct field.
    #[must_use]
    pub fn field_name(self) -> &'static str {
        match self {
            ReviewField::Rating => "rating",
            ReviewField::AcademicRating => "academic_rating",
            ReviewField::CampusRating => "campus_rating",
            ReviewField::SocialRating => "social_rating",
            ReviewField::CareerRating => "career_rating",
            ReviewField::Title => "title",
            ReviewField::Content => "content",
        }
    }

    /// Looks a field up by either its wire name or its struct field name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|field| field.wire_name() == name || field.field_name() == name)
    }

    /// Returns whether this field holds a star rating.
    #[must_use]
    pub fn is_rating(self) -> bool {
        !matches!(self, ReviewField::Title | ReviewField::Content)
    }

    /// User-facing text for a violation of `code` on this field.
    ///
    /// Only `rating`, `title` and `content` carry custom wording; the
    /// sub-ratings use the generic numeric messages.
    #[must_use]
    pub fn message(self, code: ViolationCode) -> String {
        match (self, code) {
            (_, ViolationCode::NotANumber) => "Expected number, received nan".to_string(),
            (ReviewField::Rating, ViolationCode::TooSmall) => "Rating is required".to_string(),
            (ReviewField::Title, ViolationCode::TooSmall) => "Title is too short".to_string(),
            (ReviewField::Title, ViolationCode::TooBig) => "Title is too long".to_string(),
            (ReviewField::Content, ViolationCode::TooSmall) => {
                format!(
                    "Review must be at least {} characters",
                    content_bounds::MIN_CHARS
                )
            }
            (ReviewField::Content, ViolationCode::TooBig) => "Review is too long".to_string(),
            (_, ViolationCode::TooSmall) => format!(
                "Number must be greater than or equal to {}",
                rating_bounds::MIN
            ),
            (_, ViolationCode::TooBig) => format!(
                "Number must be less than or equal to {}",
                rating_bounds::MAX
            ),
        }
    }

    /// Inclusive bounds as display text, e.g. for form hints.
    #[must_use]
    pub fn bounds_hint(self) -> String {
        match self {
            ReviewField::Title => format!(
                "{}-{} characters",
                title_bounds::MIN_CHARS,
                title_bounds::MAX_CHARS
            ),
            ReviewField::Content => format!(
                "{}-{} characters",
                content_bounds::MIN_CHARS,
                content_bounds::MAX_CHARS
            ),
            _ => format!("{}-{}", rating_bounds::MIN, rating_bounds::MAX),
        }
    }
}

impl fmt::Display for ReviewField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

/// Why a field failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationCode {
    /// Below the minimum value or length.
    TooSmall,
    /// Above the maximum value or length.
    TooBig,
    /// A rating that is not a number at all.
    NotANumber,
}

/// One failed field rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub field: ReviewField,
    pub code: ViolationCode,
    pub message: String,
}

impl Violation {
    #[must_use]
    pub fn new(field: ReviewField, code: ViolationCode) -> Self {
        Self {
            field,
            code,
            message: field.message(code),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Every violation found in one submission, in field order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ReviewViolations(Vec<Violation>);

impl ReviewViolations {
    /// Sorts `violations` into field order.
    #[must_use]
    pub fn new(mut violations: Vec<Violation>) -> Self {
        violations.sort_by_key(|violation| violation.field);
        Self(violations)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Violation> {
        self.0.iter()
    }

    /// Violations reported for `field`.
    pub fn for_field(&self, field: ReviewField) -> impl Iterator<Item = &Violation> {
        self.0.iter().filter(move |violation| violation.field == field)
    }

    /// Returns whether `field` has at least one violation.
    #[must_use]
    pub fn has(&self, field: ReviewField) -> bool {
        self.for_field(field).next().is_some()
    }

    /// Messages grouped by wire field name, the shape form UIs consume.
    #[must_use]
    pub fn field_messages(&self) -> BTreeMap<&'static str, Vec<String>> {
        let mut grouped: BTreeMap<&'static str, Vec<String>> = BTreeMap::new();
        for violation in &self.0 {
            grouped
                .entry(violation.field.wire_name())
                .or_default()
                .push(violation.message.clone());
        }
        grouped
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<Violation> {
        self.0
    }
}

impl fmt::Display for ReviewViolations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, violation) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{violation}")?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a ReviewViolations {
    type Item = &'a Violation;
    type IntoIter = std::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_name_accepts_wire_and_field_names() {
        assert_eq!(
            ReviewField::from_name("academicRating"),
            Some(ReviewField::AcademicRating)
        );
        assert_eq!(
            ReviewField::from_name("academic_rating"),
            Some(ReviewField::AcademicRating)
        );
        assert_eq!(ReviewField::from_name("stars"), None);
    }

    #[test]
    fn custom_messages_match_form_copy() {
        assert_eq!(
            ReviewField::Rating.message(ViolationCode::TooSmall),
            "Rating is required"
        );
        assert_eq!(
            ReviewField::Title.message(ViolationCode::TooSmall),
            "Title is too short"
        );
        assert_eq!(
            ReviewField::Title.message(ViolationCode::TooBig),
            "Title is too long"
        );
        assert_eq!(
            ReviewField::Content.message(ViolationCode::TooSmall),
            "Review must be at least 10 characters"
        );
        assert_eq!(
            ReviewField::Content.message(ViolationCode::TooBig),
            "Review is too long"
        );
    }

    #[test]
    fn sub_ratings_use_generic_numeric_messages() {
        assert_eq!(
            ReviewField::CareerRating.message(ViolationCode::TooSmall),
            "Number must be greater than or equal to 1"
        );
        assert_eq!(
            ReviewField::CareerRating.message(ViolationCode::TooBig),
            "Number must be less than or equal to 5"
        );
        assert_eq!(
            ReviewField::Rating.message(ViolationCode::TooBig),
            "Number must be less than or equal to 5"
        );
    }

    #[test]
    fn violations_are_sorted_by_field() {
        let violations = ReviewViolations::new(vec![
            Violation::new(ReviewField::Content, ViolationCode::TooSmall),
            Violation::new(ReviewField::Rating, ViolationCode::TooSmall),
            Violation::new(ReviewField::Title, ViolationCode::TooBig),
        ]);

        let fields: Vec<_> = violations.iter().map(|v| v.field).collect();
        assert_eq!(
            fields,
            vec![ReviewField::Rating, ReviewField::Title, ReviewField::Content]
        );
    }

    #[test]
    fn display_joins_violations() {
        let violations = ReviewViolations::new(vec![
            Violation::new(ReviewField::Title, ViolationCode::TooSmall),
            Violation::new(ReviewField::Rating, ViolationCode::TooBig),
        ]);
        assert_eq!(
            violations.to_string(),
            "rating: Number must be less than or equal to 5; title: Title is too short"
        );
    }

    #[test]
    fn field_messages_groups_by_wire_name() {
        let violations = ReviewViolations::new(vec![
            Violation::new(ReviewField::SocialRating, ViolationCode::TooSmall),
            Violation::new(ReviewField::Content, ViolationCode::TooBig),
        ]);
        let grouped = violations.field_messages();

        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped["content"], vec!["Review is too long".to_string()]);
        assert!(grouped.contains_key("socialRating"));
    }

    #[test]
    fn violations_serialize_as_a_list() {
        let violations = ReviewViolations::new(vec![Violation::new(
            ReviewField::AcademicRating,
            ViolationCode::TooBig,
        )]);
        let json = serde_json::to_value(&violations).expect("violations should serialize");

        assert_eq!(json[0]["field"], "academicRating");
        assert_eq!(json[0]["code"], "too_big");
    }

    #[test]
    fn bounds_hint_describes_limits() {
        assert_eq!(ReviewField::Title.bounds_hint(), "2-100 characters");
        assert_eq!(ReviewField::Rating.bounds_hint(), "1-5");
    }
}
