//! User data model.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Validation errors returned by the user constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    EmptyEmail,
    InvalidEmail,
    InvalidIndex,
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyEmail => write!(f, "email must not be empty"),
            Self::InvalidEmail => write!(f, "email must be a valid address"),
            Self::InvalidIndex => {
                write!(f, "user index must be a zero-padded decimal string")
            }
        }
    }
}

impl std::error::Error for UserValidationError {}

/// Sequential user identifier stored as a zero-padded decimal string.
///
/// Values are derived from the collection length at registration time
/// (`0001`, `0002`, ...); positions past `9999` widen naturally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserIndex(String);

impl UserIndex {
    /// Format the identifier for the given 1-based collection position.
    pub fn for_position(position: usize) -> Self {
        Self(format!("{position:04}"))
    }

    fn from_owned(value: String) -> Result<Self, UserValidationError> {
        if value.len() < 4 || !value.bytes().all(|b| b.is_ascii_digit()) {
            return Err(UserValidationError::InvalidIndex);
        }
        Ok(Self(value))
    }
}

impl AsRef<str> for UserIndex {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for UserIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<UserIndex> for String {
    fn from(value: UserIndex) -> Self {
        value.0
    }
}

impl TryFrom<String> for UserIndex {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        // Structural check only; full RFC 5322 is not a regex's job.
        let pattern = r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$";
        Regex::new(pattern)
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// Syntactically validated email address.
///
/// Comparison is case-sensitive on the stored string; duplicate detection
/// during registration relies on exact equality.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Validate and construct an [`EmailAddress`] from owned input.
    pub fn new(email: impl Into<String>) -> Result<Self, UserValidationError> {
        Self::from_owned(email.into())
    }

    fn from_owned(email: String) -> Result<Self, UserValidationError> {
        if email.trim().is_empty() {
            return Err(UserValidationError::EmptyEmail);
        }
        if !email_regex().is_match(&email) {
            return Err(UserValidationError::InvalidEmail);
        }
        Ok(Self(email))
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<EmailAddress> for String {
    fn from(value: EmailAddress) -> Self {
        value.0
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

/// Registered user.
///
/// ## Invariants
/// - `index` is a zero-padded decimal string unique within the collection.
/// - `email` is syntactically valid and unique within the collection.
///
/// Records are append-only; neither field changes after registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct User {
    /// Sequential identifier assigned at registration.
    #[schema(value_type = String, example = "0001")]
    pub index: UserIndex,
    /// Name supplied at registration.
    #[schema(example = "Ada Lovelace")]
    pub name: String,
    /// Unique contact address.
    #[schema(value_type = String, example = "ada@example.com")]
    pub email: EmailAddress,
}
