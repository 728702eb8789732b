//! Lecturer data model.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Validation errors returned by the lecturer constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LecturerValidationError {
    InvalidId,
}

impl fmt::Display for LecturerValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidId => write!(
                f,
                "lecturer id must be an 'L' followed by a zero-padded decimal string"
            ),
        }
    }
}

impl std::error::Error for LecturerValidationError {}

/// Sequential lecturer identifier: `L` followed by a zero-padded decimal.
///
/// Assigned from the collection length at creation time (`L0001`,
/// `L0002`, ...); positions past `9999` widen naturally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LecturerId(String);

impl LecturerId {
    /// Format the identifier for the given 1-based collection position.
    pub fn for_position(position: usize) -> Self {
        Self(format!("L{position:04}"))
    }

    fn from_owned(value: String) -> Result<Self, LecturerValidationError> {
        let Some(digits) = value.strip_prefix('L') else {
            return Err(LecturerValidationError::InvalidId);
        };
        if digits.len() < 4 || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(LecturerValidationError::InvalidId);
        }
        Ok(Self(value))
    }
}

impl AsRef<str> for LecturerId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for LecturerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<LecturerId> for String {
    fn from(value: LecturerId) -> Self {
        value.0
    }
}

impl TryFrom<String> for LecturerId {
    type Error = LecturerValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

/// Lecturer record.
///
/// Name and department carry no uniqueness constraint; any strings are
/// accepted. Records are append-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct Lecturer {
    /// Sequential identifier assigned at creation.
    #[schema(value_type = String, example = "L0001")]
    pub id: LecturerId,
    /// Lecturer name as supplied.
    #[schema(example = "Dr. Grace Hopper")]
    pub name: String,
    /// Department as supplied.
    #[schema(example = "Computer Science")]
    pub department: String,
}
