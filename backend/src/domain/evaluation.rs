//! Lecturer evaluation data model.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Validation errors returned by the evaluation constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvaluationValidationError {
    RatingOutOfRange,
}

impl fmt::Display for EvaluationValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RatingOutOfRange => write!(f, "Rating must be between 1 and 5"),
        }
    }
}

impl std::error::Error for EvaluationValidationError {}

/// Evaluation rating, an integer in `[1, 5]` inclusive.
///
/// Wire input arrives as a bare integer; range checking happens here so
/// out-of-range values surface as a domain failure rather than a
/// deserialization error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Rating(u8);

/// Lowest accepted rating.
pub const RATING_MIN: i64 = 1;
/// Highest accepted rating.
pub const RATING_MAX: i64 = 5;

impl Rating {
    /// Validate and construct a [`Rating`] from a raw integer.
    pub fn new(value: i64) -> Result<Self, EvaluationValidationError> {
        if !(RATING_MIN..=RATING_MAX).contains(&value) {
            return Err(EvaluationValidationError::RatingOutOfRange);
        }
        let raw = u8::try_from(value).map_err(|_| EvaluationValidationError::RatingOutOfRange)?;
        Ok(Self(raw))
    }

    /// The raw rating value.
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Rating> for i64 {
    fn from(value: Rating) -> Self {
        Self::from(value.0)
    }
}

impl TryFrom<i64> for Rating {
    type Error = EvaluationValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Lecturer evaluation submitted by a registered user.
///
/// ## Invariants
/// - `user_index` resolved to an existing user at submission time.
/// - `lecturer_id` resolved to an existing lecturer at submission time.
/// - `rating` lies in `[1, 5]`.
///
/// References are stored as the strings submitted; matching is exact, so a
/// malformed reference is indistinguishable from an unknown one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct Evaluation {
    /// Index of the submitting user.
    #[schema(example = "0001")]
    pub user_index: String,
    /// Identifier of the evaluated lecturer.
    #[schema(example = "L0001")]
    pub lecturer_id: String,
    /// Rating in `[1, 5]`.
    #[schema(value_type = i64, example = 5)]
    pub rating: Rating,
    /// Free-form remarks; serialized as `null` when absent.
    #[serde(default)]
    pub comments: Option<String>,
}
